// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

mod capsule;
mod catalog;
mod deadline;
mod error;
mod filter;
mod growth;
mod rewards;
mod selection;
mod sender;
mod special_days;
mod validation;

#[cfg(test)]
mod tests;

pub use capsule::{CapsuleStatus, Contributor, TimeCapsule, partition_capsules};
pub use deadline::{DEFAULT_DEADLINE_HOUR, DeadlineStatus, deadline_countdown};
pub use filter::{available_regions, facilities_for, find_facility};
pub use growth::{
    GROWTH_STAGES, GrowthStage, LetterTally, NextStageInfo, clamp_letter_count, next_stage_info,
    progress_percent, stage_for, stage_markers,
};
pub use rewards::{EXPIRING_SOON_DAYS, Prize, PrizeKind};
pub use special_days::{
    SpecialDayEntry, SpecialDayKind, d_day_label, days_remaining, days_remaining_iso,
    parse_iso_date, rank_upcoming, rank_upcoming_for, today_local,
};

// Re-export public types
pub use catalog::{
    AddressBookMember, FACILITIES, Facility, FacilityType, Region, RelationType, SavedAddress,
    default_saved_addresses,
};
pub use error::DomainError;
pub use selection::{RecipientChange, RecipientSelection};
pub use sender::{SenderContract, SenderField, SenderInfo, default_sender};
pub use validation::validate_special_day_letter;
