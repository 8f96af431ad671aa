// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Recipient selection and the cascade-reset transition.
//!
//! A [`RecipientSelection`] is never edited field by field. Every change goes
//! through [`RecipientSelection::with_change`], which returns a complete new
//! selection with all dependent fields already reset.
//!
//! ## Invariants
//!
//! - Changing the facility type clears region and facility.
//! - Changing the region clears the facility.
//! - A facility is only ever recorded if it is eligible under the current
//!   type and region.
//! - With `GeneralAddress` no region or facility is recorded.

use crate::catalog::{AddressBookMember, Facility, FacilityType, Region, RelationType};
use crate::filter::{facilities_for, find_facility};
use serde::Serialize;

/// A single requested change to a recipient selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecipientChange {
    FacilityType(Option<FacilityType>),
    Region(Option<Region>),
    Facility(Option<String>),
    RecipientName(String),
    IdentifierNumber(String),
    Relation(Option<RelationType>),
    FreeformAddress(String),
    /// Prefill name, identifier and relation from the address book.
    /// Facility data is left alone.
    FromAddressBook(AddressBookMember),
}

/// Recipient fields collected by the recipient sub-wizard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RecipientSelection {
    facility_type: Option<FacilityType>,
    region: Option<Region>,
    facility_id: Option<String>,
    recipient_name: String,
    identifier_number: String,
    relation: Option<RelationType>,
    freeform_address: String,
}

impl RecipientSelection {
    /// Creates an empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn facility_type(&self) -> Option<FacilityType> {
        self.facility_type
    }

    #[must_use]
    pub const fn region(&self) -> Option<Region> {
        self.region
    }

    #[must_use]
    pub fn facility_id(&self) -> Option<&str> {
        self.facility_id.as_deref()
    }

    #[must_use]
    pub fn recipient_name(&self) -> &str {
        &self.recipient_name
    }

    #[must_use]
    pub fn identifier_number(&self) -> &str {
        &self.identifier_number
    }

    #[must_use]
    pub const fn relation(&self) -> Option<RelationType> {
        self.relation
    }

    /// Returns the typed address. Only meaningful for `GeneralAddress`.
    #[must_use]
    pub fn freeform_address(&self) -> &str {
        &self.freeform_address
    }

    /// Returns true if the free-form address path is active.
    #[must_use]
    pub fn is_general_address(&self) -> bool {
        self.facility_type.is_some_and(|t| t.is_general_address())
    }

    /// Resolves the selected facility against the catalog.
    #[must_use]
    pub fn selected_facility(&self) -> Option<&'static Facility> {
        self.facility_id.as_deref().and_then(find_facility)
    }

    /// Returns the facilities the user may pick from right now.
    #[must_use]
    pub fn eligible_facilities(&self) -> Vec<&'static Facility> {
        facilities_for(self.facility_type, self.region)
    }

    /// Returns true if `id` is selectable under the current type and region.
    #[must_use]
    pub fn accepts_facility(&self, id: &str) -> bool {
        self.region.is_some() && self.eligible_facilities().iter().any(|f| f.id == id)
    }

    /// Returns true if a region may be recorded under the current type.
    #[must_use]
    pub fn accepts_region(&self) -> bool {
        self.facility_type.is_some_and(|t| !t.is_general_address())
    }

    /// Returns true if the selection satisfies every cascade invariant.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        if self.is_general_address() {
            return self.region.is_none() && self.facility_id.is_none();
        }
        if self.facility_type.is_none() && self.region.is_some() {
            return false;
        }
        match &self.facility_id {
            None => true,
            Some(id) => self.accepts_facility(id),
        }
    }

    /// Applies one change and returns the resulting selection.
    ///
    /// Upstream changes reset every dependent field in the same step, so a
    /// stale facility can never coexist with a new type or region. Region or
    /// facility changes that are not valid under the current filter leave the
    /// selection unchanged.
    #[must_use]
    pub fn with_change(&self, change: RecipientChange) -> Self {
        let mut next: Self = self.clone();
        match change {
            RecipientChange::FacilityType(facility_type) => {
                next.facility_type = facility_type;
                next.region = None;
                next.facility_id = None;
            }
            RecipientChange::Region(region) => {
                if region.is_some() && !self.accepts_region() {
                    return next;
                }
                next.region = region;
                next.facility_id = None;
            }
            RecipientChange::Facility(facility_id) => match facility_id {
                Some(id) if self.accepts_facility(&id) => next.facility_id = Some(id),
                Some(_) => {}
                None => next.facility_id = None,
            },
            RecipientChange::RecipientName(name) => next.recipient_name = name,
            RecipientChange::IdentifierNumber(number) => next.identifier_number = number,
            RecipientChange::Relation(relation) => next.relation = relation,
            RecipientChange::FreeformAddress(address) => next.freeform_address = address,
            RecipientChange::FromAddressBook(member) => {
                next.recipient_name = member.name;
                next.identifier_number = member.identifier_number.unwrap_or_default();
                next.relation = member.relation;
            }
        }
        next
    }
}
