use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use std::fmt;

use super::availability::{TimeSlot, available_slots};
use super::schedule::WeeklySchedule;
use super::submission::SubmissionStatus;
use super::validation::{FieldErrors, is_valid_email};
use crate::types::ReservationConfirmation;

pub const DEFAULT_GUESTS: u32 = 2;
pub const MAX_GUESTS_OFFERED: u32 = 10;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReservationField {
    Name,
    Email,
    Phone,
    Date,
    Time,
    Guests,
    SpecialRequests,
}

impl ReservationField {
    pub const ALL: [ReservationField; 7] = [
        Self::Name,
        Self::Email,
        Self::Phone,
        Self::Date,
        Self::Time,
        Self::Guests,
        Self::SpecialRequests,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Date => "date",
            Self::Time => "time",
            Self::Guests => "guests",
            Self::SpecialRequests => "special_requests",
        }
    }
}

impl fmt::Display for ReservationField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ReservationField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| format!("invalid reservation field: {}", s))
    }
}

/// A validated booking, ready to be submitted.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ReservationRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date: NaiveDate,
    pub time: TimeSlot,
    pub guests: u32,
    pub special_requests: String,
}

impl ReservationRequest {
    /// Re-runs the form rules against an already-built request.
    pub fn check(
        &self,
        now: NaiveDateTime,
        schedule: &WeeklySchedule,
    ) -> Result<(), FieldErrors<ReservationField>> {
        ReservationForm::from(self).validate(now, schedule).map(|_| ())
    }
}

/// Raw reservation form state as typed by the user.
#[derive(Debug, Clone, PartialEq)]
pub struct ReservationForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date: String,
    pub time: String,
    pub guests: String,
    pub special_requests: String,
    errors: FieldErrors<ReservationField>,
    server_error: Option<String>,
    pub status: SubmissionStatus<ReservationConfirmation>,
}

impl Default for ReservationForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            date: String::new(),
            time: String::new(),
            guests: DEFAULT_GUESTS.to_string(),
            special_requests: String::new(),
            errors: FieldErrors::new(),
            server_error: None,
            status: SubmissionStatus::Idle,
        }
    }
}

impl From<&ReservationRequest> for ReservationForm {
    fn from(request: &ReservationRequest) -> Self {
        Self {
            name: request.name.clone(),
            email: request.email.clone(),
            phone: request.phone.clone(),
            date: request.date.format("%Y-%m-%d").to_string(),
            time: request.time.value(),
            guests: request.guests.to_string(),
            special_requests: request.special_requests.clone(),
            ..Default::default()
        }
    }
}

impl ReservationForm {
    pub fn value(&self, field: ReservationField) -> &str {
        match field {
            ReservationField::Name => &self.name,
            ReservationField::Email => &self.email,
            ReservationField::Phone => &self.phone,
            ReservationField::Date => &self.date,
            ReservationField::Time => &self.time,
            ReservationField::Guests => &self.guests,
            ReservationField::SpecialRequests => &self.special_requests,
        }
    }

    /// Stores `value` and drops any error previously reported for `field`.
    pub fn set_field(&mut self, field: ReservationField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ReservationField::Name => self.name = value,
            ReservationField::Email => self.email = value,
            ReservationField::Phone => self.phone = value,
            ReservationField::Date => self.date = value,
            ReservationField::Time => self.time = value,
            ReservationField::Guests => self.guests = value,
            ReservationField::SpecialRequests => self.special_requests = value,
        }
        self.errors.clear(field);
    }

    /// Changes the date and clears the chosen time if it is no longer offered.
    pub fn set_date(
        &mut self,
        value: impl Into<String>,
        now: NaiveDateTime,
        schedule: &WeeklySchedule,
    ) {
        self.set_field(ReservationField::Date, value);

        if self.time.is_empty() {
            return;
        }

        let still_offered = self
            .time
            .parse::<TimeSlot>()
            .map(|slot| self.available_slots(now, schedule).contains(&slot))
            .unwrap_or(false);

        if !still_offered {
            self.time.clear();
        }
    }

    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d").ok()
    }

    /// Slots for the currently selected date; empty while no valid date is set.
    pub fn available_slots(&self, now: NaiveDateTime, schedule: &WeeklySchedule) -> Vec<TimeSlot> {
        self.parsed_date()
            .map(|date| available_slots(date, now, schedule))
            .unwrap_or_default()
    }

    pub fn error(&self, field: ReservationField) -> Option<&str> {
        self.errors.get(field)
    }

    pub fn errors(&self) -> &FieldErrors<ReservationField> {
        &self.errors
    }

    pub fn server_error(&self) -> Option<&str> {
        self.server_error.as_deref()
    }

    pub fn validate(
        &self,
        now: NaiveDateTime,
        schedule: &WeeklySchedule,
    ) -> Result<ReservationRequest, FieldErrors<ReservationField>> {
        let mut errors = FieldErrors::new();

        let name = self.name.trim();
        if name.is_empty() {
            errors.insert(ReservationField::Name, "Name is required");
        }

        // Surrounding spaces are not silently dropped; the address is sent as typed.
        let email = self.email.as_str();
        if email.trim().is_empty() {
            errors.insert(ReservationField::Email, "Email is required");
        } else if !is_valid_email(email) {
            errors.insert(ReservationField::Email, "Please enter a valid email address");
        }

        let phone = self.phone.trim();
        if phone.is_empty() {
            errors.insert(ReservationField::Phone, "Phone number is required");
        }

        let date = if self.date.trim().is_empty() {
            errors.insert(ReservationField::Date, "Date is required");
            None
        } else {
            match self.parsed_date() {
                Some(date) if date < now.date() => {
                    errors.insert(ReservationField::Date, "Please select a future date");
                    None
                }
                Some(date) => Some(date),
                None => {
                    errors.insert(ReservationField::Date, "Please enter a valid date");
                    None
                }
            }
        };

        let time = if self.time.trim().is_empty() {
            errors.insert(ReservationField::Time, "Time is required");
            None
        } else {
            let slot = self.time.parse::<TimeSlot>().ok().filter(|slot| match date {
                Some(date) => available_slots(date, now, schedule).contains(slot),
                None => true,
            });
            if slot.is_none() {
                errors.insert(ReservationField::Time, "Please select an available time");
            }
            slot
        };

        let guests = match self.guests.trim().parse::<u32>() {
            Ok(n) if n >= 1 => Some(n),
            _ => {
                errors.insert(ReservationField::Guests, "Number of guests must be at least 1");
                None
            }
        };

        match (date, time, guests) {
            (Some(date), Some(time), Some(guests)) if errors.is_empty() => Ok(ReservationRequest {
                name: name.to_string(),
                email: email.to_string(),
                phone: phone.to_string(),
                date,
                time,
                guests,
                special_requests: self.special_requests.trim().to_string(),
            }),
            _ => Err(errors),
        }
    }

    /// Validates and, on success, moves the form into `Submitting`.
    ///
    /// Returns the request to send, or `None` when validation failed (errors
    /// are recorded on the form) or a submission is already running.
    pub fn try_submit(
        &mut self,
        now: NaiveDateTime,
        schedule: &WeeklySchedule,
    ) -> Option<ReservationRequest> {
        if !self.status.is_idle() {
            return None;
        }

        match self.validate(now, schedule) {
            Ok(request) => {
                self.errors = FieldErrors::new();
                self.server_error = None;
                self.status.begin();
                Some(request)
            }
            Err(errors) => {
                self.errors = errors;
                None
            }
        }
    }

    pub fn confirm(&mut self, confirmation: ReservationConfirmation) {
        self.status.complete(confirmation);
    }

    /// The server turned the request down; back to editing.
    pub fn reject(&mut self, message: impl Into<String>) {
        self.status.reset();
        self.server_error = Some(message.into());
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
