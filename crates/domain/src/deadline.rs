// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Same-day post office cutoff countdown.
//!
//! Callers re-evaluate this on a fixed interval; there is nothing to cancel.

use crate::error::DomainError;
use time::Time;

/// Default cutoff hour for same-day dispatch.
pub const DEFAULT_DEADLINE_HOUR: u8 = 17;

/// Where the current time sits relative to today's cutoff.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeadlineStatus {
    /// Time left before the cutoff.
    Open {
        hours: u8,
        minutes: u8,
        seconds: u8,
    },
    /// The cutoff has passed for today.
    Expired,
}

impl std::fmt::Display for DeadlineStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open {
                hours,
                minutes,
                seconds,
            } => write!(f, "{hours}시 {minutes:02}분 {seconds:02}초"),
            Self::Expired => write!(f, "오늘 마감이 종료되었습니다"),
        }
    }
}

/// Computes the time left until `deadline_hour:00:00` on the same day.
///
/// # Errors
///
/// Returns `DomainError::InvalidDeadlineHour` if `deadline_hour` is not in `0..=23`.
pub fn deadline_countdown(now: Time, deadline_hour: u8) -> Result<DeadlineStatus, DomainError> {
    let deadline: Time = Time::from_hms(deadline_hour, 0, 0)
        .map_err(|_| DomainError::InvalidDeadlineHour {
            hour: deadline_hour,
        })?;

    if now >= deadline {
        return Ok(DeadlineStatus::Expired);
    }

    let left: i64 = (deadline - now).whole_seconds();
    let hours: u8 = u8::try_from(left / 3600).unwrap_or(u8::MAX);
    let minutes: u8 = u8::try_from((left % 3600) / 60).unwrap_or(0);
    let seconds: u8 = u8::try_from(left % 60).unwrap_or(0);

    Ok(DeadlineStatus::Open {
        hours,
        minutes,
        seconds,
    })
}
