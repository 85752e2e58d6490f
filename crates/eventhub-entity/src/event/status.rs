//! Event status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Publication state of an event. New events always start as `Draft`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "event_status", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventStatus {
    /// Created but not yet visible to attendees.
    #[default]
    Draft,
    /// Visible, enrollment not yet open.
    Published,
    /// Accepting enrollments.
    BeganEnrollment,
    /// Enrollment closed.
    ClosedEnrollment,
    /// Event in progress.
    Started,
    /// Event finished.
    Ended,
}

impl EventStatus {
    /// Return the status as its wire code.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "DRAFT",
            Self::Published => "PUBLISHED",
            Self::BeganEnrollment => "BEGAN_ENROLLMENT",
            Self::ClosedEnrollment => "CLOSED_ENROLLMENT",
            Self::Started => "STARTED",
            Self::Ended => "ENDED",
        }
    }
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_codes_match_display() {
        for status in [
            EventStatus::Draft,
            EventStatus::BeganEnrollment,
            EventStatus::ClosedEnrollment,
        ] {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{status}\""));
        }
    }
}
