//! Input validation helpers
//!
//! Text limits and the checks request types run before reaching the engine.

use crate::utils::AppError;
use shared::error::ErrorCode;

// ── Text length limits ──────────────────────────────────────────────

/// Student names as printed on the pickup slip
pub const MAX_NAME_LEN: usize = 100;

/// Client-supplied order ids (canonical ids are 10 chars)
pub const MAX_ORDER_ID_LEN: usize = 32;

/// Time slot identifiers
pub const MAX_SLOT_LEN: usize = 32;

// ── Quantity limits ─────────────────────────────────────────────────

/// Distinct lines per order
pub const MAX_CART_LINES: usize = 50;

/// Units per line
pub const MAX_LINE_QUANTITY: u32 = 99;

// ── Validation helpers ──────────────────────────────────────────────

/// Required string: non-empty after trimming and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::required_field(field));
    }
    validate_text_len(value, field, max_len)
}

/// Optional string, if present, within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    if let Some(v) = value {
        validate_text_len(v, field, max_len)?;
    }
    Ok(())
}

fn validate_text_len(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    let len = value.chars().count();
    if len > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({len} chars, max {max_len})"
        ))
        .with_detail("field", field));
    }
    Ok(())
}

/// Integer in `min..=max`
pub fn validate_range(value: u32, field: &str, min: u32, max: u32) -> Result<(), AppError> {
    if value < min || value > max {
        return Err(AppError::with_message(
            ErrorCode::ValueOutOfRange,
            format!("{field} must be between {min} and {max}, got {value}"),
        )
        .with_detail("field", field));
    }
    Ok(())
}
