use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use serde::{Deserialize, Serialize};

use std::fmt;

use super::schedule::{OpeningHours, WeeklySchedule};

pub const SLOT_INTERVAL_MINUTES: i64 = 30;

/// A bookable time of day.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimeSlot(NaiveTime);

impl TimeSlot {
    pub fn new(time: NaiveTime) -> Self {
        Self(time)
    }

    pub fn time(&self) -> NaiveTime {
        self.0
    }

    /// Form value, 24h "17:30".
    pub fn value(&self) -> String {
        self.0.format("%H:%M").to_string()
    }

    /// Display label, "5:30 PM".
    pub fn label(&self) -> String {
        self.0.format("%-I:%M %p").to_string()
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for TimeSlot {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        NaiveTime::parse_from_str(s, "%H:%M")
            .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M:%S"))
            .map(Self)
            .map_err(|_| format!("invalid time slot: {}", s))
    }
}

/// Every slot from `open` to `close` inclusive, `interval` apart.
pub fn generate_slots(hours: OpeningHours, interval: TimeDelta) -> Vec<TimeSlot> {
    let mut slots = Vec::new();
    if interval <= TimeDelta::zero() {
        return slots;
    }

    let mut current = hours.open;
    while current <= hours.close {
        slots.push(TimeSlot(current));

        let (next, wrapped) = current.overflowing_add_signed(interval);
        if wrapped != 0 {
            break;
        }
        current = next;
    }

    slots
}

/// Slots that can still be booked on `date` as seen from `now`.
///
/// Past dates have none. On the current date every slot strictly before the
/// current time of day is dropped; later dates get the full schedule.
pub fn available_slots(
    date: NaiveDate,
    now: NaiveDateTime,
    schedule: &WeeklySchedule,
) -> Vec<TimeSlot> {
    let today = now.date();
    if date < today {
        return Vec::new();
    }

    let mut slots = generate_slots(
        schedule.hours_on(date),
        TimeDelta::minutes(SLOT_INTERVAL_MINUTES),
    );

    if date == today {
        let current = now.time();
        slots.retain(|slot| slot.time() >= current);
    }

    slots
}

pub fn is_available(
    slot: TimeSlot,
    date: NaiveDate,
    now: NaiveDateTime,
    schedule: &WeeklySchedule,
) -> bool {
    available_slots(date, now, schedule).contains(&slot)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_generate_slots_includes_close() {
        let slots = generate_slots(OpeningHours::new(t(17, 0), t(18, 0)), TimeDelta::minutes(30));
        let values: Vec<String> = slots.iter().map(TimeSlot::value).collect();
        assert_eq!(values, vec!["17:00", "17:30", "18:00"]);
    }

    #[test]
    fn test_generate_slots_stops_at_midnight() {
        let slots = generate_slots(OpeningHours::new(t(23, 0), t(23, 59)), TimeDelta::minutes(30));
        assert_eq!(slots.len(), 2);
    }

    #[test]
    fn test_time_slot_label_and_parse() {
        let slot: TimeSlot = "17:30".parse().unwrap();
        assert_eq!(slot.label(), "5:30 PM");
        assert_eq!(slot.value(), "17:30");
        assert!("5pm".parse::<TimeSlot>().is_err());
    }
}
