// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Orange tree growth progression.
//!
//! Every letter sent or received grows the tree. The cumulative count maps to
//! one of five stages; the dashboard shows the current stage, how many letters
//! remain until the next one and a progress bar within the current band.
//!
//! ## Invariants
//!
//! - Stage thresholds are strictly increasing with level.
//! - The level 1 threshold is 0, so every count has a stage.
//!
//! All functions here are total over `u32`.

use serde::Serialize;

/// One milestone in the growth progression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GrowthStage {
    /// 1-based level.
    pub level: u8,
    pub name: &'static str,
    /// Cumulative letters needed to reach this stage.
    pub min_letters: u32,
    pub message: &'static str,
    pub icon: &'static str,
}

/// The stage table, ordered by level.
pub const GROWTH_STAGES: [GrowthStage; 5] = [
    GrowthStage {
        level: 1,
        name: "씨앗",
        min_letters: 0,
        message: "첫 편지로 씨앗을 심었어요",
        icon: "orange-seed.png",
    },
    GrowthStage {
        level: 2,
        name: "새싹",
        min_letters: 5,
        message: "새싹이 돋아났어요",
        icon: "orange-sprout.png",
    },
    GrowthStage {
        level: 3,
        name: "어린나무",
        min_letters: 15,
        message: "어린나무로 자라고 있어요",
        icon: "orange-young-tree.png",
    },
    GrowthStage {
        level: 4,
        name: "나무",
        min_letters: 30,
        message: "튼튼한 나무가 되었어요",
        icon: "orange-full-tree.png",
    },
    GrowthStage {
        level: 5,
        name: "열매나무",
        min_letters: 50,
        message: "주렁주렁 열매가 열렸어요",
        icon: "orange-ripe.png",
    },
];

/// The stage above the current one and the letters still needed to reach it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NextStageInfo {
    /// `None` once the top stage is reached.
    pub next_stage: Option<GrowthStage>,
    pub letters_remaining: u32,
}

/// Letters exchanged with one recipient.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LetterTally {
    pub sent: u32,
    pub received: u32,
}

impl LetterTally {
    /// Creates a new `LetterTally`.
    #[must_use]
    pub const fn new(sent: u32, received: u32) -> Self {
        Self { sent, received }
    }

    /// Returns the cumulative letter count that drives growth.
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.sent.saturating_add(self.received)
    }
}

/// Clamps an externally supplied count to the valid domain.
///
/// Negative counts are treated as zero.
#[must_use]
pub fn clamp_letter_count(count: i64) -> u32 {
    u32::try_from(count.max(0)).unwrap_or(u32::MAX)
}

fn stage_index(letter_count: u32) -> usize {
    GROWTH_STAGES
        .iter()
        .rposition(|stage| stage.min_letters <= letter_count)
        .unwrap_or(0)
}

/// Returns the highest stage whose threshold has been reached.
#[must_use]
pub fn stage_for(letter_count: u32) -> GrowthStage {
    GROWTH_STAGES[stage_index(letter_count)]
}

/// Returns the next stage and how many letters remain until it.
#[must_use]
pub fn next_stage_info(letter_count: u32) -> NextStageInfo {
    let next_stage: Option<GrowthStage> = GROWTH_STAGES.get(stage_index(letter_count) + 1).copied();
    let letters_remaining: u32 =
        next_stage.map_or(0, |stage| stage.min_letters.saturating_sub(letter_count));

    NextStageInfo {
        next_stage,
        letters_remaining,
    }
}

/// Returns progress through the current stage band as a percentage.
///
/// The value is in `[0, 100]` and is 100 at the top stage.
#[must_use]
pub fn progress_percent(letter_count: u32) -> f64 {
    let current: GrowthStage = stage_for(letter_count);
    let Some(next) = next_stage_info(letter_count).next_stage else {
        return 100.0;
    };

    let span: u32 = next.min_letters - current.min_letters;
    if span == 0 {
        return 100.0;
    }
    let done: u32 = letter_count - current.min_letters;
    (100.0 * f64::from(done) / f64::from(span)).clamp(0.0, 100.0)
}

/// Returns, for each stage in order, whether it has been reached.
#[must_use]
pub fn stage_markers(letter_count: u32) -> [(GrowthStage, bool); 5] {
    GROWTH_STAGES.map(|stage| (stage, stage.min_letters <= letter_count))
}
