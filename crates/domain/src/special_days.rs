// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Special-day countdowns.
//!
//! Special days (release dates, lawyer consultations, visits, ...) are owned
//! by callers; this module only derives day offsets and orders entries by
//! proximity. Offsets are computed on calendar dates, never stored.

use crate::error::DomainError;
use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::{Date, Month};

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

/// Category of a special day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecialDayKind {
    /// Release or sentencing timeline.
    Timeline,
    /// Lawyer consultation.
    Lawyer,
    /// Visit or other family event.
    Event,
    Birthday,
    Anniversary,
}

impl SpecialDayKind {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Timeline => "timeline",
            Self::Lawyer => "lawyer",
            Self::Event => "event",
            Self::Birthday => "birthday",
            Self::Anniversary => "anniversary",
        }
    }

    /// Returns the short badge label shown next to the date.
    #[must_use]
    pub const fn badge(&self) -> &'static str {
        match self {
            Self::Timeline => "출소일정",
            Self::Lawyer => "변호사",
            Self::Event => "면회",
            Self::Birthday => "생일",
            Self::Anniversary => "기념일",
        }
    }
}

impl FromStr for SpecialDayKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "timeline" => Ok(Self::Timeline),
            "lawyer" => Ok(Self::Lawyer),
            "event" => Ok(Self::Event),
            "birthday" => Ok(Self::Birthday),
            "anniversary" => Ok(Self::Anniversary),
            _ => Err(DomainError::UnknownSpecialDayKind(s.to_string())),
        }
    }
}

/// A dated entry tied to one recipient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialDayEntry {
    pub id: String,
    /// The recipient this entry belongs to.
    pub entity_id: String,
    pub kind: SpecialDayKind,
    pub title: String,
    #[serde(with = "iso_date")]
    pub date: Date,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub important: bool,
}

/// Parses an ISO 8601 calendar date (`YYYY-MM-DD`).
///
/// # Errors
///
/// Returns `DomainError::DateParseError` if the string is not a valid date.
pub fn parse_iso_date(date_string: &str) -> Result<Date, DomainError> {
    Date::parse(
        date_string,
        &time::format_description::well_known::Iso8601::DEFAULT,
    )
    .map_err(|e| DomainError::DateParseError {
        date_string: date_string.to_string(),
        error: e.to_string(),
    })
}

/// Returns today's calendar date in the local time zone.
///
/// # Errors
///
/// Returns an error if the local date cannot be represented.
pub fn today_local() -> Result<Date, DomainError> {
    let local = chrono::Local::now().date_naive();
    let invalid = |error: String| DomainError::DateParseError {
        date_string: local.to_string(),
        error,
    };

    let month_number: u8 =
        u8::try_from(local.month()).map_err(|e| invalid(e.to_string()))?;
    let month: Month = Month::try_from(month_number).map_err(|e| invalid(e.to_string()))?;
    let day: u8 = u8::try_from(local.day()).map_err(|e| invalid(e.to_string()))?;

    Date::from_calendar_date(local.year(), month, day).map_err(|e| invalid(e.to_string()))
}

/// Returns the signed number of days from `today` to `date`.
///
/// Positive for future dates, zero for today, negative for past dates.
#[must_use]
pub fn days_remaining(date: Date, today: Date) -> i64 {
    (date - today).whole_days()
}

/// Parses `date_string` and returns its day offset from `today`.
///
/// # Errors
///
/// Returns `DomainError::DateParseError` if the string is not a valid date.
pub fn days_remaining_iso(date_string: &str, today: Date) -> Result<i64, DomainError> {
    parse_iso_date(date_string).map(|date| days_remaining(date, today))
}

/// Formats a day offset as a D-day label.
#[must_use]
pub fn d_day_label(days: i64) -> String {
    match days {
        0 => String::from("D-Day"),
        d if d > 0 => format!("D-{d}"),
        d => format!("D+{}", d.unsigned_abs()),
    }
}

/// Orders entries soonest (or most overdue) first and keeps at most `limit`.
///
/// Entries with the same offset keep their original relative order.
/// Ranking an already ranked list with the same `limit` returns it unchanged.
#[must_use]
pub fn rank_upcoming<'a, I>(entries: I, limit: usize, today: Date) -> Vec<&'a SpecialDayEntry>
where
    I: IntoIterator<Item = &'a SpecialDayEntry>,
{
    let mut ranked: Vec<&SpecialDayEntry> = entries.into_iter().collect();
    ranked.sort_by_key(|entry| days_remaining(entry.date, today));
    ranked.truncate(limit);
    ranked
}

/// Ranks the entries belonging to `entity_id`.
#[must_use]
pub fn rank_upcoming_for<'a>(
    entries: &'a [SpecialDayEntry],
    entity_id: &str,
    limit: usize,
    today: Date,
) -> Vec<&'a SpecialDayEntry> {
    rank_upcoming(
        entries.iter().filter(|entry| entry.entity_id == entity_id),
        limit,
        today,
    )
}
