// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Cascading facility filter.
//!
//! These functions are pure lookups over [`FACILITIES`]. Clearing dependent
//! selections when an upstream selection changes is the caller's job; see
//! [`crate::RecipientSelection::with_change`].

use crate::catalog::{FACILITIES, Facility, FacilityType, Region};

/// Returns the facilities eligible for selection under the given filter.
///
/// - No type selected: empty.
/// - `GeneralAddress`: empty; callers switch to free-form address entry.
/// - Otherwise: every facility of that type, further restricted to `region`
///   when one is given, in catalog order.
#[must_use]
pub fn facilities_for(
    facility_type: Option<FacilityType>,
    region: Option<Region>,
) -> Vec<&'static Facility> {
    let Some(facility_type) = facility_type else {
        return Vec::new();
    };
    if facility_type.is_general_address() {
        return Vec::new();
    }

    FACILITIES
        .iter()
        .filter(|f| f.facility_type == facility_type)
        .filter(|f| region.is_none_or(|r| f.region == r))
        .collect()
}

/// Returns the regions that hold at least one facility of the given type.
///
/// Regions appear in the order they are first seen in the catalog.
#[must_use]
pub fn available_regions(facility_type: Option<FacilityType>) -> Vec<Region> {
    let mut regions: Vec<Region> = Vec::new();
    for facility in facilities_for(facility_type, None) {
        if !regions.contains(&facility.region) {
            regions.push(facility.region);
        }
    }
    regions
}

/// Looks up a facility by identifier.
#[must_use]
pub fn find_facility(id: &str) -> Option<&'static Facility> {
    FACILITIES.iter().find(|f| f.id == id)
}
