//! Instant queue admission
//!
//! Capacity gate plus the one-shot queue position / ETA calculation. The ETA
//! is fixed at admission and is not refreshed as earlier orders are handed
//! over, so it drifts as the real queue moves.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use shared::order::{MAX_ACTIVE_INSTANT_ORDERS, MINUTES_PER_QUEUE_POSITION};
use thiserror::Error;

const MILLIS_PER_MINUTE: i64 = 60_000;

/// 12-hour clock with lowercase meridiem, e.g. `01:45 pm`
const READY_TIME_FORMAT: &str = "%I:%M %P";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Instant queue is full ({capacity} active orders)")]
pub struct QueueFull {
    pub capacity: usize,
}

/// Outcome of a successful admission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Admission {
    /// 1-based
    pub queue_position: u32,
    /// Unix millis
    pub ready_at: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueuePolicy {
    pub capacity: usize,
    pub minutes_per_position: i64,
}

impl Default for QueuePolicy {
    fn default() -> Self {
        Self {
            capacity: MAX_ACTIVE_INSTANT_ORDERS,
            minutes_per_position: MINUTES_PER_QUEUE_POSITION,
        }
    }
}

impl QueuePolicy {
    /// Decide admission given the number of undelivered instant orders
    ///
    /// Must be called with the same lock held that guards the insert.
    pub fn admit(&self, active_count: usize, now: i64) -> Result<Admission, QueueFull> {
        if active_count >= self.capacity {
            return Err(QueueFull {
                capacity: self.capacity,
            });
        }
        let queue_position = u32::try_from(active_count + 1).map_err(|_| QueueFull {
            capacity: self.capacity,
        })?;
        let ready_at =
            now + i64::from(queue_position) * self.minutes_per_position * MILLIS_PER_MINUTE;
        Ok(Admission {
            queue_position,
            ready_at,
        })
    }
}

/// Render a Unix-millis instant as a wall-clock time in `tz`
///
/// Returns `None` only for timestamps outside chrono's range.
pub fn format_ready_time(ts: i64, tz: Tz) -> Option<String> {
    DateTime::<Utc>::from_timestamp_millis(ts)
        .map(|dt| dt.with_timezone(&tz).format(READY_TIME_FORMAT).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_admit_positions_and_eta() {
        let policy = QueuePolicy::default();
        let now = 1_000_000;

        let first = policy.admit(0, now).unwrap();
        assert_eq!(first.queue_position, 1);
        assert_eq!(first.ready_at, now + 3 * 60_000);

        let last = policy.admit(14, now).unwrap();
        assert_eq!(last.queue_position, 15);
        assert_eq!(last.ready_at, now + 45 * 60_000);
    }

    #[test]
    fn test_admit_rejects_at_capacity() {
        let policy = QueuePolicy::default();
        assert_eq!(policy.admit(15, 0), Err(QueueFull { capacity: 15 }));
        assert_eq!(policy.admit(40, 0), Err(QueueFull { capacity: 15 }));
    }

    #[test]
    fn test_custom_policy() {
        let policy = QueuePolicy {
            capacity: 2,
            minutes_per_position: 10,
        };
        assert_eq!(policy.admit(1, 0).unwrap().ready_at, 20 * 60_000);
        assert!(policy.admit(2, 0).is_err());
    }

    #[test]
    fn test_format_ready_time_in_business_zone() {
        // 08:00 UTC = 13:30 IST
        let ts = Utc
            .with_ymd_and_hms(2026, 1, 1, 8, 0, 0)
            .unwrap()
            .timestamp_millis();
        assert_eq!(
            format_ready_time(ts, chrono_tz::Asia::Kolkata).as_deref(),
            Some("01:30 pm")
        );
        assert_eq!(
            format_ready_time(ts, chrono_tz::UTC).as_deref(),
            Some("08:00 am")
        );
    }

    #[test]
    fn test_format_out_of_range() {
        assert_eq!(format_ready_time(i64::MAX, chrono_tz::UTC), None);
    }
}
