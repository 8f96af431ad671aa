// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::catalog::SavedAddress;
use serde::{Deserialize, Serialize};

/// Which rule decides that sender details are complete.
///
/// The compose wizard requires a phone number before the letter may move on;
/// adding an address-book entry does not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SenderContract {
    /// Name, phone and address are all required.
    Strict,
    /// Name and address are required, phone is optional.
    Relaxed,
}

/// Editable sender field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SenderField {
    Name,
    Phone,
    Address,
}

/// Return address details of the person writing the letter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SenderInfo {
    pub name: String,
    pub phone: String,
    pub address: String,
}

/// Sender details a new compose session opens with.
#[must_use]
pub fn default_sender() -> SenderInfo {
    SenderInfo::new("김민수", "010-1234-5678", "서울시 강남구 테헤란로 123")
}

impl SenderInfo {
    /// Creates a new `SenderInfo`.
    #[must_use]
    pub fn new(name: &str, phone: &str, address: &str) -> Self {
        Self {
            name: name.to_string(),
            phone: phone.to_string(),
            address: address.to_string(),
        }
    }

    /// Builds sender details from an address-book entry.
    #[must_use]
    pub fn from_saved(address: &SavedAddress) -> Self {
        Self::new(&address.name, &address.phone, &address.address)
    }

    /// Returns a copy with one field replaced.
    #[must_use]
    pub fn with_field(&self, field: SenderField, value: String) -> Self {
        let mut next: Self = self.clone();
        match field {
            SenderField::Name => next.name = value,
            SenderField::Phone => next.phone = value,
            SenderField::Address => next.address = value,
        }
        next
    }

    /// Returns true if the details satisfy `contract`.
    ///
    /// Whitespace-only values count as empty.
    #[must_use]
    pub fn is_complete(&self, contract: SenderContract) -> bool {
        let base: bool = !self.name.trim().is_empty() && !self.address.trim().is_empty();
        match contract {
            SenderContract::Strict => base && !self.phone.trim().is_empty(),
            SenderContract::Relaxed => base,
        }
    }

    /// Converts the details into an address-book entry, trimming each field.
    ///
    /// Returns `None` when the relaxed contract is not met.
    #[must_use]
    pub fn to_saved_address(&self, id: &str) -> Option<SavedAddress> {
        if !self.is_complete(SenderContract::Relaxed) {
            return None;
        }
        Some(SavedAddress::new(
            id,
            self.name.trim(),
            self.phone.trim(),
            self.address.trim(),
        ))
    }
}
