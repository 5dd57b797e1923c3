use std::time::Duration;

use chrono_tz::Tz;

use crate::common::errors::ConfigError;
use crate::models::{DEFAULT_TIMEZONE, SiteClock, ThemeVariant};

pub const DEFAULT_SUBMIT_DELAY_MS: u64 = 1500;
pub const DEFAULT_RESET_DELAY_MS: u64 = 3000;

/// Runtime settings for the site, read once at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteConfig {
    pub theme: ThemeVariant,
    /// Time zone the opening hours are expressed in
    pub timezone: Tz,
    /// Simulated latency of every form submission
    pub submit_delay: Duration,
    /// How long contact/newsletter confirmations stay up
    pub reset_delay: Duration,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            theme: ThemeVariant::default(),
            timezone: DEFAULT_TIMEZONE,
            submit_delay: Duration::from_millis(DEFAULT_SUBMIT_DELAY_MS),
            reset_delay: Duration::from_millis(DEFAULT_RESET_DELAY_MS),
        }
    }
}

impl SiteConfig {
    #[cfg(feature = "ssr")]
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key/value source; unset keys fall back to
    /// the defaults, malformed values are rejected.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let theme = match lookup("SITE_THEME") {
            Some(raw) if !raw.trim().is_empty() => raw
                .parse::<ThemeVariant>()
                .map_err(|_| ConfigError::UnknownTheme(raw))?,
            _ => ThemeVariant::default(),
        };

        let timezone = match lookup("SITE_TZ") {
            Some(raw) if !raw.trim().is_empty() => raw
                .trim()
                .parse::<Tz>()
                .map_err(|_| ConfigError::UnknownTimezone(raw))?,
            _ => DEFAULT_TIMEZONE,
        };

        let submit_delay = delay(&lookup, "SUBMIT_DELAY_MS", DEFAULT_SUBMIT_DELAY_MS)?;
        let reset_delay = delay(&lookup, "RESET_DELAY_MS", DEFAULT_RESET_DELAY_MS)?;

        Ok(Self {
            theme,
            timezone,
            submit_delay,
            reset_delay,
        })
    }

    pub fn clock(&self) -> SiteClock {
        SiteClock::new(self.timezone)
    }

    pub fn reset_after_ms(&self) -> u64 {
        self.reset_delay.as_millis() as u64
    }
}

fn delay<F>(lookup: &F, name: &'static str, default_ms: u64) -> Result<Duration, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse::<u64>()
            .map(Duration::from_millis)
            .map_err(|_| ConfigError::InvalidDelay { name, value: raw }),
        _ => Ok(Duration::from_millis(default_ms)),
    }
}
