// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use serde::{Deserialize, Serialize};

/// Top-level phases of the compose wizard, in order.
///
/// Only `RecipientInfo` has a gating predicate; the remaining phases are
/// always satisfied. `Payment` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    RecipientInfo,
    Paper,
    Content,
    Preview,
    Photos,
    Options,
    Payment,
}

impl Phase {
    /// All phases in order.
    pub const ALL: [Self; 7] = [
        Self::RecipientInfo,
        Self::Paper,
        Self::Content,
        Self::Preview,
        Self::Photos,
        Self::Options,
        Self::Payment,
    ];

    /// Returns the 1-based position shown on the step chip.
    #[must_use]
    pub const fn number(&self) -> u8 {
        match self {
            Self::RecipientInfo => 1,
            Self::Paper => 2,
            Self::Content => 3,
            Self::Preview => 4,
            Self::Photos => 5,
            Self::Options => 6,
            Self::Payment => 7,
        }
    }

    /// Returns the chip label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::RecipientInfo => "받는 사람",
            Self::Paper => "편지지",
            Self::Content => "내용 작성",
            Self::Preview => "미리보기",
            Self::Photos => "사진",
            Self::Options => "옵션",
            Self::Payment => "결제",
        }
    }

    /// Looks up a phase by its 1-based number.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::UnknownPhase` if `number` is not in `1..=7`.
    pub fn from_number(number: u8) -> Result<Self, CoreError> {
        Self::ALL
            .into_iter()
            .find(|p| p.number() == number)
            .ok_or(CoreError::UnknownPhase(number))
    }

    /// Returns the following phase, or `None` at `Payment`.
    #[must_use]
    pub const fn next(&self) -> Option<Self> {
        match self {
            Self::RecipientInfo => Some(Self::Paper),
            Self::Paper => Some(Self::Content),
            Self::Content => Some(Self::Preview),
            Self::Preview => Some(Self::Photos),
            Self::Photos => Some(Self::Options),
            Self::Options => Some(Self::Payment),
            Self::Payment => None,
        }
    }

    /// Returns the preceding phase, or `None` at `RecipientInfo`.
    #[must_use]
    pub const fn prev(&self) -> Option<Self> {
        match self {
            Self::RecipientInfo => None,
            Self::Paper => Some(Self::RecipientInfo),
            Self::Content => Some(Self::Paper),
            Self::Preview => Some(Self::Content),
            Self::Photos => Some(Self::Preview),
            Self::Options => Some(Self::Photos),
            Self::Payment => Some(Self::Options),
        }
    }

    /// Returns true for the last phase.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Payment)
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}. {}", self.number(), self.label())
    }
}
