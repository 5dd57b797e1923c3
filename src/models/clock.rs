use chrono::{DateTime, NaiveDateTime, Utc};
use chrono_tz::Tz;

/// The schedule's time zone. Matches the address in the footer.
pub const DEFAULT_TIMEZONE: Tz = chrono_tz::America::New_York;

/// Wall clock of the restaurant.
///
/// Browser and server both read "now" through this, so they agree on which
/// day it is and which slots have passed regardless of where either runs.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct SiteClock {
    tz: Tz,
}

impl SiteClock {
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }

    pub fn tz(&self) -> Tz {
        self.tz
    }

    /// Restaurant-local time for a given instant.
    pub fn local(&self, instant: DateTime<Utc>) -> NaiveDateTime {
        instant.with_timezone(&self.tz).naive_local()
    }

    pub fn now(&self) -> NaiveDateTime {
        self.local(Utc::now())
    }
}

impl Default for SiteClock {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEZONE)
    }
}
