// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Step tables for the recipient and sender sub-wizards.
//!
//! The facility type decides which path applies: a facility type walks
//! region → facility, while `GeneralAddress` swaps both for a typed address.

use crate::state::ComposeState;
use crate::step::{StepDef, StepGate, StepId};
use orange_mail_domain::SenderContract;

const ADDRESS_PREVIEW_CHARS: usize = 20;

fn recipient_step_complete(state: &ComposeState) -> bool {
    let r = &state.recipient;
    !r.recipient_name().trim().is_empty()
        && (r.is_general_address() || !r.identifier_number().trim().is_empty())
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

/// Recipient sub-wizard, in display order.
pub static RECIPIENT_STEPS: [StepDef<ComposeState>; 6] = [
    StepDef {
        id: StepId::FacilityType,
        title: "시설 유형 선택",
        is_complete: |s| s.recipient.facility_type().is_some(),
        is_visible: |_| true,
        display_value: |s| s.recipient.facility_type().map(|t| t.to_string()),
    },
    StepDef {
        id: StepId::Region,
        title: "지역 선택",
        is_complete: |s| s.recipient.region().is_some(),
        is_visible: |s| s.recipient.accepts_region(),
        display_value: |s| s.recipient.region().map(|r| r.to_string()),
    },
    StepDef {
        id: StepId::Facility,
        title: "시설 선택",
        is_complete: |s| s.recipient.facility_id().is_some(),
        is_visible: |s| s.recipient.accepts_region() && s.recipient.region().is_some(),
        display_value: |s| s.recipient.selected_facility().map(|f| f.name.to_string()),
    },
    StepDef {
        id: StepId::FreeformAddress,
        title: "주소 입력",
        is_complete: |s| !s.recipient.freeform_address().trim().is_empty(),
        is_visible: |s| s.recipient.is_general_address(),
        display_value: |s| {
            let address = s.recipient.freeform_address();
            if address.is_empty() {
                return None;
            }
            let preview: String = address.chars().take(ADDRESS_PREVIEW_CHARS).collect();
            Some(format!("{preview}..."))
        },
    },
    StepDef {
        id: StepId::Recipient,
        title: "받는 분 정보",
        is_complete: recipient_step_complete,
        is_visible: |s| {
            let r = &s.recipient;
            r.facility_id().is_some()
                || (r.is_general_address() && !r.freeform_address().trim().is_empty())
        },
        display_value: |s| non_empty(s.recipient.recipient_name()),
    },
    StepDef {
        id: StepId::Relation,
        title: "받는분과의 관계",
        is_complete: |s| s.recipient.relation().is_some(),
        is_visible: recipient_step_complete,
        display_value: |s| s.recipient.relation().map(|r| r.to_string()),
    },
];

/// Sender sub-wizard. Hidden until the recipient sub-wizard is finished.
pub static SENDER_STEPS: [StepDef<ComposeState>; 1] = [StepDef {
    id: StepId::SenderContact,
    title: "연락처 정보",
    is_complete: |s| s.sender.is_complete(SenderContract::Strict),
    is_visible: recipient_complete,
    display_value: |s| non_empty(&s.sender.name),
}];

/// Gate over [`RECIPIENT_STEPS`].
#[must_use]
pub fn recipient_gate() -> StepGate<'static, ComposeState> {
    StepGate::new(&RECIPIENT_STEPS)
}

/// Gate over [`SENDER_STEPS`].
#[must_use]
pub fn sender_gate() -> StepGate<'static, ComposeState> {
    StepGate::new(&SENDER_STEPS)
}

/// Returns true once every recipient step on the active path is complete.
#[must_use]
pub fn recipient_complete(state: &ComposeState) -> bool {
    recipient_gate().is_finished(state)
}

/// Returns true once the sender details meet the compose-wizard contract.
///
/// Independent of whether the sender step is shown yet.
#[must_use]
pub fn sender_complete(state: &ComposeState) -> bool {
    state.sender.is_complete(SenderContract::Strict)
}
