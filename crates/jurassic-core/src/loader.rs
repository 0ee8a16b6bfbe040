//! Per-render loader data shown in the hero status line.

use chrono::{DateTime, SecondsFormat, Utc};

/// Status message shown under the hero actions.
pub const MESSAGE: &str = "New fossils are being prepared in the lab.";

/// Data produced fresh for each render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderResult {
    pub message: String,
    pub last_updated: DateTime<Utc>,
}

impl LoaderResult {
    /// Load with the current time.
    #[must_use]
    pub fn load() -> Self {
        Self::at(Utc::now())
    }

    /// Load as of a fixed instant.
    #[must_use]
    pub fn at(now: DateTime<Utc>) -> Self {
        Self {
            message: MESSAGE.to_string(),
            last_updated: now,
        }
    }

    /// ISO-8601 timestamp with millisecond precision, e.g. `2026-10-19T08:30:00.000Z`.
    #[must_use]
    pub fn last_updated_iso(&self) -> String {
        self.last_updated.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    /// Human readable date, e.g. `October 19, 2026`.
    #[must_use]
    pub fn last_updated_display(&self) -> String {
        self.last_updated.format("%B %-d, %Y").to_string()
    }
}
