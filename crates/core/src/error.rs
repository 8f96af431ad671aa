// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use orange_mail_domain::DomainError;

/// Errors that can occur while turning external input into commands.
///
/// Applying a command never fails; refusals are reported through
/// [`crate::Outcome`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A value did not parse into a domain type.
    DomainViolation(DomainError),
    /// The command word is not recognized.
    UnknownCommand(String),
    /// The command needs an argument that was not given.
    MissingArgument {
        /// The command word.
        command: String,
    },
    /// The step name is not recognized.
    UnknownStep(String),
    /// The phase number is outside `1..=7`.
    UnknownPhase(u8),
    /// The phase argument is not a number.
    InvalidPhaseNumber(String),
    /// No saved sender address has this identifier.
    UnknownSavedAddress(String),
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::UnknownCommand(word) => write!(f, "Unknown command: '{word}'"),
            Self::MissingArgument { command } => {
                write!(f, "Command '{command}' requires an argument")
            }
            Self::UnknownStep(name) => write!(f, "Unknown step: '{name}'"),
            Self::UnknownPhase(number) => {
                write!(f, "Unknown phase: {number}. Must be between 1 and 7")
            }
            Self::InvalidPhaseNumber(value) => {
                write!(f, "Invalid phase number: '{value}'")
            }
            Self::UnknownSavedAddress(id) => write!(f, "No saved address with id '{id}'"),
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
