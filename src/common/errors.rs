use thiserror::Error;

use crate::models::{ContactField, FieldErrors, ReservationField};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} must be a whole number of milliseconds, got {value:?}")]
    InvalidDelay { name: &'static str, value: String },

    #[error("SITE_THEME must be `savory` or `noctora`, got {0:?}")]
    UnknownTheme(String),

    #[error("SITE_TZ must be an IANA time zone such as `America/New_York`, got {0:?}")]
    UnknownTimezone(String),
}

fn field_list<F: Ord + Copy + std::fmt::Display>(errors: &FieldErrors<F>) -> String {
    errors
        .fields()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Error, Debug)]
pub enum ReservationError {
    #[error("Invalid reservation: {}", field_list(.0))]
    Invalid(FieldErrors<ReservationField>),
}

#[derive(Error, Debug)]
pub enum ContactError {
    #[error("Invalid message: {}", field_list(.0))]
    Invalid(FieldErrors<ContactField>),

    #[error("Invalid email address")]
    InvalidEmail,
}
