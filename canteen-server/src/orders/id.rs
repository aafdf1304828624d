//! Order identifiers
//!
//! `SRM-` followed by six characters from `[A-Z0-9]` (36^6 ids).

use rand::Rng;
use shared::order::{ORDER_ID_PREFIX, ORDER_ID_SUFFIX_LEN};

const ID_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Generate a random order id; uniqueness is checked by the caller
pub fn generate_order_id() -> String {
    generate_order_id_with(&mut rand::thread_rng())
}

pub fn generate_order_id_with<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut id = String::with_capacity(ORDER_ID_PREFIX.len() + ORDER_ID_SUFFIX_LEN);
    id.push_str(ORDER_ID_PREFIX);
    for _ in 0..ORDER_ID_SUFFIX_LEN {
        let idx = rng.gen_range(0..ID_ALPHABET.len());
        id.push(ID_ALPHABET[idx] as char);
    }
    id
}

/// Lookup key for a client-supplied id (ids are case-insensitive)
pub fn normalize_order_id(raw: &str) -> String {
    raw.trim().to_uppercase()
}
