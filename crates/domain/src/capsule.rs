// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Time capsules: letters collected from several family members and
//! delivered together on a target date.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::Date;

/// Capsule lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CapsuleStatus {
    /// Still accepting letters.
    Collecting,
    /// Closed for contributions, waiting for the target date.
    Sealed,
    /// Delivered.
    Opened,
}

impl FromStr for CapsuleStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "collecting" => Ok(Self::Collecting),
            "sealed" => Ok(Self::Sealed),
            "opened" => Ok(Self::Opened),
            _ => Err(DomainError::UnknownCapsuleStatus(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contributor {
    pub name: String,
    pub contributed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeCapsule {
    pub id: String,
    pub title: String,
    pub recipient: String,
    pub target_date: Date,
    pub status: CapsuleStatus,
    pub contributors: Vec<Contributor>,
    pub letter_count: u32,
    pub target_letters: u32,
}

impl TimeCapsule {
    /// Returns collection progress toward `target_letters`, in `[0, 100]`.
    #[must_use]
    pub fn progress_percent(&self) -> f64 {
        if self.target_letters == 0 {
            return 100.0;
        }
        (100.0 * f64::from(self.letter_count) / f64::from(self.target_letters)).clamp(0.0, 100.0)
    }

    /// Returns the contributors who have not written yet.
    #[must_use]
    pub fn pending_contributors(&self) -> Vec<&Contributor> {
        self.contributors.iter().filter(|c| !c.contributed).collect()
    }

    /// Returns true once the capsule no longer accepts letters.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        matches!(self.status, CapsuleStatus::Sealed | CapsuleStatus::Opened)
    }
}

/// Splits capsules into (collecting, completed), preserving order.
#[must_use]
pub fn partition_capsules(capsules: &[TimeCapsule]) -> (Vec<&TimeCapsule>, Vec<&TimeCapsule>) {
    capsules.iter().partition(|c| !c.is_completed())
}
