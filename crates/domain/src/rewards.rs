// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::special_days::days_remaining;
use serde::Serialize;
use time::Date;

/// Prizes within this many days of expiry are flagged.
pub const EXPIRING_SOON_DAYS: i64 = 30;

/// Kind of reward a prize grants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PrizeKind {
    Coupon,
    Point,
    Item,
}

/// A reward held by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Prize {
    pub id: String,
    pub name: String,
    pub kind: PrizeKind,
    pub quantity: u32,
    pub used_quantity: u32,
    pub expiry_date: Date,
}

impl Prize {
    /// Returns how many units are still unused.
    #[must_use]
    pub const fn remaining(&self) -> u32 {
        self.quantity.saturating_sub(self.used_quantity)
    }

    /// Returns the signed number of days until the prize expires.
    #[must_use]
    pub fn days_until_expiry(&self, today: Date) -> i64 {
        days_remaining(self.expiry_date, today)
    }

    /// Returns true when the prize expires within [`EXPIRING_SOON_DAYS`].
    ///
    /// Already expired prizes also count.
    #[must_use]
    pub fn is_expiring_soon(&self, today: Date) -> bool {
        self.days_until_expiry(today) <= EXPIRING_SOON_DAYS
    }
}
