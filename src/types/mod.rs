use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{ReservationRequest, TimeSlot};

/// Accepted reservation, echoed back to the guest
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ReservationConfirmation {
    pub name: String,
    pub email: String,
    pub date: NaiveDate,
    pub time: TimeSlot,
    pub guests: u32,
}

impl ReservationConfirmation {
    /// "Friday, October 16, 2026"
    pub fn date_label(&self) -> String {
        self.date.format("%A, %B %-d, %Y").to_string()
    }

    pub fn message(&self) -> String {
        format!(
            "Thank you for your reservation. We've sent a confirmation email to {}. \
             We look forward to serving you on {} at {}.",
            self.email,
            self.date_label(),
            self.time.label()
        )
    }
}

impl From<ReservationRequest> for ReservationConfirmation {
    fn from(request: ReservationRequest) -> Self {
        Self {
            name: request.name,
            email: request.email,
            date: request.date,
            time: request.time,
            guests: request.guests,
        }
    }
}

/// Contact message receipt
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ContactReceipt {
    pub name: String,
    pub email: String,
    /// How long the thank-you note stays up before the form clears
    pub reset_after_ms: u64,
}

/// Newsletter signup receipt
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct NewsletterReceipt {
    pub email: String,
    pub reset_after_ms: u64,
}
