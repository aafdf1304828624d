//! Pickup Time Slot Model

use serde::Serialize;

/// Pre-book pickup window
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct TimeSlot {
    pub id: &'static str,
    pub label: &'static str,
}

/// Published pickup windows, in chronological order
pub const TIME_SLOTS: &[TimeSlot] = &[
    TimeSlot {
        id: "12-1230",
        label: "12:00 - 12:30 PM",
    },
    TimeSlot {
        id: "1230-100",
        label: "12:30 - 1:00 PM",
    },
    TimeSlot {
        id: "100-130",
        label: "1:00 - 1:30 PM",
    },
];

pub fn time_slots() -> &'static [TimeSlot] {
    TIME_SLOTS
}

pub fn find_time_slot(id: &str) -> Option<&'static TimeSlot> {
    TIME_SLOTS.iter().find(|slot| slot.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_time_slot() {
        assert_eq!(find_time_slot("1230-100").unwrap().label, "12:30 - 1:00 PM");
        assert!(find_time_slot("9-930").is_none());
    }

    #[test]
    fn test_catalog_order() {
        let ids: Vec<_> = time_slots().iter().map(|s| s.id).collect();
        assert_eq!(ids, vec!["12-1230", "1230-100", "100-130"]);
    }
}
