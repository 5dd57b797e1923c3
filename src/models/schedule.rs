use chrono::{Datelike, NaiveDate, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

/// Opening and closing time for a single weekday.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct OpeningHours {
    pub open: NaiveTime,
    pub close: NaiveTime,
}

impl OpeningHours {
    pub fn new(open: NaiveTime, close: NaiveTime) -> Self {
        Self { open, close }
    }

    /// "11:00 AM - 10:00 PM"
    pub fn label(&self) -> String {
        format!(
            "{} - {}",
            self.open.format("%-I:%M %p"),
            self.close.format("%-I:%M %p")
        )
    }
}

/// Fixed per-weekday opening table, indexed from Sunday (0) to Saturday (6).
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct WeeklySchedule {
    days: [OpeningHours; 7],
}

fn hm(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).expect("Invalid schedule time")
}

impl WeeklySchedule {
    pub fn new(days: [OpeningHours; 7]) -> Self {
        Self { days }
    }

    /// The restaurant's published hours.
    pub fn bistro() -> Self {
        let weekday = OpeningHours::new(hm(11, 0), hm(22, 0));
        let weekend = OpeningHours::new(hm(11, 0), hm(23, 0));
        let sunday = OpeningHours::new(hm(11, 0), hm(21, 0));

        Self::new([sunday, weekday, weekday, weekday, weekday, weekend, weekend])
    }

    pub fn hours_for(&self, weekday: Weekday) -> OpeningHours {
        self.days[weekday.num_days_from_sunday() as usize]
    }

    pub fn hours_on(&self, date: NaiveDate) -> OpeningHours {
        self.hours_for(date.weekday())
    }

    /// Consecutive days (Monday first) sharing the same hours are collapsed
    /// into one row, e.g. ("Monday - Thursday", "11:00 AM - 10:00 PM").
    pub fn summary(&self) -> Vec<(String, String)> {
        let order = [
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
            Weekday::Sat,
            Weekday::Sun,
        ];

        let mut rows: Vec<(Weekday, Weekday, OpeningHours)> = Vec::new();
        for day in order {
            let hours = self.hours_for(day);
            match rows.last_mut() {
                Some((_, last, h)) if *h == hours => *last = day,
                _ => rows.push((day, day, hours)),
            }
        }

        rows.into_iter()
            .map(|(first, last, hours)| {
                let days = if first == last {
                    day_name(first).to_string()
                } else {
                    format!("{} - {}", day_name(first), day_name(last))
                };
                (days, hours.label())
            })
            .collect()
    }
}

impl Default for WeeklySchedule {
    fn default() -> Self {
        Self::bistro()
    }
}

pub fn day_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
