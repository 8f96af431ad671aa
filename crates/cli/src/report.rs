// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Plain-text and JSON reports printed by the CLI.

use orange_mail::{ComposeWizard, StepState};
use orange_mail_domain::{
    Facility, GrowthStage, LetterTally, NextStageInfo, Region, SpecialDayEntry, d_day_label,
    days_remaining, next_stage_info, progress_percent, stage_for, stage_markers,
};
use serde::Serialize;
use std::fmt::Write;
use time::Date;

/// Growth summary for a letter tally.
#[derive(Debug, Clone, Serialize)]
pub struct GrowthReport {
    pub tally: LetterTally,
    pub total: u32,
    pub stage: GrowthStage,
    pub next: NextStageInfo,
    pub progress_percent: f64,
}

impl GrowthReport {
    #[must_use]
    pub fn new(tally: LetterTally) -> Self {
        let total: u32 = tally.total();
        Self {
            tally,
            total,
            stage: stage_for(total),
            next: next_stage_info(total),
            progress_percent: progress_percent(total),
        }
    }

    #[must_use]
    pub fn render(&self) -> String {
        let mut out: String = String::new();
        let _ = writeln!(
            out,
            "{} Lv.{} {} ({}통: 보낸 편지 {} / 받은 편지 {})",
            self.stage.icon,
            self.stage.level,
            self.stage.name,
            self.total,
            self.tally.sent,
            self.tally.received
        );
        let _ = writeln!(out, "{}", self.stage.message);
        match self.next.next_stage {
            Some(next) => {
                let _ = writeln!(
                    out,
                    "다음 단계 {}까지 {}통 남음 ({:.1}%)",
                    next.name, self.next.letters_remaining, self.progress_percent
                );
            }
            None => {
                let _ = writeln!(out, "최고 단계에 도달했습니다 (100%)");
            }
        }
        let markers: Vec<String> = stage_markers(self.total)
            .iter()
            .map(|(stage, reached)| {
                let mark: &str = if *reached { "●" } else { "○" };
                format!("{mark} {}", stage.name)
            })
            .collect();
        let _ = write!(out, "{}", markers.join("  "));
        out
    }
}

/// One facility per line, with its id first.
#[must_use]
pub fn render_facilities(facilities: &[&Facility]) -> String {
    facilities
        .iter()
        .map(|f| {
            format!(
                "{:>3}  {} {}  [{}]  {}",
                f.id,
                f.facility_type.emoji(),
                f.name,
                f.region,
                f.address
            )
        })
        .collect::<Vec<String>>()
        .join("\n")
}

#[must_use]
pub fn render_regions(regions: &[Region]) -> String {
    regions
        .iter()
        .map(Region::as_str)
        .collect::<Vec<&str>>()
        .join(", ")
}

/// A ranked special day with its derived offset.
#[derive(Debug, Clone, Serialize)]
pub struct RankedDay<'a> {
    pub d_day: String,
    pub days_remaining: i64,
    #[serde(flatten)]
    pub entry: &'a SpecialDayEntry,
}

#[must_use]
pub fn rank_rows<'a>(ranked: &[&'a SpecialDayEntry], today: Date) -> Vec<RankedDay<'a>> {
    ranked
        .iter()
        .map(|entry| {
            let days: i64 = days_remaining(entry.date, today);
            RankedDay {
                d_day: d_day_label(days),
                days_remaining: days,
                entry,
            }
        })
        .collect()
}

#[must_use]
pub fn render_special_days(rows: &[RankedDay<'_>]) -> String {
    if rows.is_empty() {
        return String::from("다가오는 일정이 없습니다");
    }
    rows.iter()
        .map(|row| {
            let star: &str = if row.entry.important { " ★" } else { "" };
            format!(
                "{:<6} {} {}{}  ({})",
                row.d_day,
                row.entry.kind.badge(),
                row.entry.title,
                star,
                row.entry.date
            )
        })
        .collect::<Vec<String>>()
        .join("\n")
}

fn render_step(step: &StepState) -> String {
    let status: &str = match (step.is_visible, step.is_complete) {
        (false, _) => "🔒",
        (true, true) => "✔",
        (true, false) => "…",
    };
    let expanded: &str = if step.is_expanded { " ▼" } else { "" };
    let value: String = step
        .display_value
        .as_deref()
        .map_or_else(String::new, |v| format!(": {v}"));
    format!("  {status} {}. {}{value}{expanded}", step.ordinal, step.title)
}

/// Current phase followed by every step of both sub-wizards.
#[must_use]
pub fn render_wizard(wizard: &ComposeWizard) -> String {
    let phase = wizard.phase();
    let mut out: String = String::new();
    let _ = writeln!(out, "[{}/7] {}", phase.number(), phase.label());
    for step in wizard.all_step_states() {
        let _ = writeln!(out, "{}", render_step(&step));
    }
    let _ = write!(
        out,
        "받는 분 {} / 보내는 분 {}",
        if wizard.recipient_complete() { "완료" } else { "미완료" },
        if wizard.sender_complete() { "완료" } else { "미완료" }
    );
    out
}
