// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur while reading external input into domain values.
///
/// Gating, filtering and ranking never fail; only parsing and range checks
/// on caller-supplied values produce these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Facility type label is not one of the known types.
    UnknownFacilityType(String),
    /// Region label is not one of the known regions.
    UnknownRegion(String),
    /// Relation label is not one of the known relations.
    UnknownRelation(String),
    /// Special day kind is not one of the known kinds.
    UnknownSpecialDayKind(String),
    /// Time capsule status is not one of the known states.
    UnknownCapsuleStatus(String),
    /// Failed to parse date from string.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
    /// Post office deadline hour outside of a day.
    InvalidDeadlineHour {
        /// The rejected hour.
        hour: u8,
    },
    /// A required letter field was left blank.
    MissingLetterField {
        /// Name of the blank field.
        field: &'static str,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownFacilityType(value) => write!(f, "Unknown facility type: '{value}'"),
            Self::UnknownRegion(value) => write!(f, "Unknown region: '{value}'"),
            Self::UnknownRelation(value) => write!(f, "Unknown relation: '{value}'"),
            Self::UnknownSpecialDayKind(value) => {
                write!(f, "Unknown special day kind: '{value}'")
            }
            Self::UnknownCapsuleStatus(value) => {
                write!(f, "Unknown time capsule status: '{value}'")
            }
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
            Self::InvalidDeadlineHour { hour } => {
                write!(
                    f,
                    "Invalid deadline hour: {hour}. Must be between 0 and 23"
                )
            }
            Self::MissingLetterField { field } => {
                write!(f, "Letter {field} cannot be empty")
            }
        }
    }
}

impl std::error::Error for DomainError {}
