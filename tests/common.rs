#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use savory_bistro::models::*;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("Invalid date in test helper")
}

pub fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).expect("Invalid time in test helper")
}

pub fn at(day: NaiveDate, h: u32, m: u32) -> NaiveDateTime {
    day.and_time(time(h, m))
}

pub fn slot(h: u32, m: u32) -> TimeSlot {
    TimeSlot::new(time(h, m))
}

pub fn schedule() -> WeeklySchedule {
    WeeklySchedule::bistro()
}

/// Friday 2026-10-16, 09:00 - before opening.
pub fn friday_morning() -> NaiveDateTime {
    at(date(2026, 10, 16), 9, 0)
}

pub fn get_valid_reservation_form() -> ReservationForm {
    let mut form = ReservationForm::default();
    form.name = "Ada Lovelace".to_string();
    form.email = "ada@example.com".to_string();
    form.phone = "(555) 010-2030".to_string();
    form.date = "2026-10-17".to_string();
    form.time = "19:00".to_string();
    form.guests = "4".to_string();
    form.special_requests = "Window seat, please".to_string();
    form
}

pub fn get_valid_contact_form() -> ContactForm {
    let mut form = ContactForm::default();
    form.name = "Grace Hopper".to_string();
    form.email = "grace@example.com".to_string();
    form.subject = "Private dining".to_string();
    form.message = "Do you host parties of 20?".to_string();
    form
}
