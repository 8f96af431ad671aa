// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::apply::{apply, can_proceed};
use crate::command::Command;
use crate::phase::Phase;
use crate::state::{ComposeState, Outcome};
use crate::step::{StepId, StepState, SubWizard};
use crate::steps::{recipient_complete, recipient_gate, sender_complete, sender_gate};
use orange_mail_domain::{
    AddressBookMember, FacilityType, Region, RelationType, SavedAddress, SenderField, SenderInfo,
};

/// An open compose wizard.
///
/// Holds the current [`ComposeState`] and replaces it with the result of
/// [`apply`] on every call. Every mutating method returns the [`Outcome`].
#[derive(Debug, Clone, Default)]
pub struct ComposeWizard {
    state: ComposeState,
}

impl ComposeWizard {
    /// Opens a wizard with empty recipient and sender details.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a wizard with the sender details already known.
    #[must_use]
    pub fn with_sender(sender: SenderInfo) -> Self {
        Self {
            state: ComposeState::with_sender(sender),
        }
    }

    #[must_use]
    pub const fn state(&self) -> &ComposeState {
        &self.state
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.state.phase
    }

    /// Applies a raw command.
    pub fn dispatch(&mut self, command: Command) -> Outcome {
        let result = apply(&self.state, command);
        self.state = result.new_state;
        result.outcome
    }

    /// Returns the presentation snapshot of a step in either sub-wizard.
    #[must_use]
    pub fn step_state(&self, id: StepId) -> Option<StepState> {
        match id.sub_wizard() {
            SubWizard::Recipient => {
                recipient_gate().step_state(&self.state, self.state.recipient_expanded, id)
            }
            SubWizard::Sender => {
                sender_gate().step_state(&self.state, self.state.sender_expanded, id)
            }
        }
    }

    /// Returns snapshots of every recipient step followed by every sender step.
    #[must_use]
    pub fn all_step_states(&self) -> Vec<StepState> {
        let mut states: Vec<StepState> =
            recipient_gate().all_states(&self.state, self.state.recipient_expanded);
        states.extend(sender_gate().all_states(&self.state, self.state.sender_expanded));
        states
    }

    #[must_use]
    pub fn can_proceed(&self, phase: Phase) -> bool {
        can_proceed(&self.state, phase)
    }

    #[must_use]
    pub fn recipient_complete(&self) -> bool {
        recipient_complete(&self.state)
    }

    #[must_use]
    pub fn sender_complete(&self) -> bool {
        sender_complete(&self.state)
    }

    pub fn advance(&mut self) -> Outcome {
        self.dispatch(Command::Advance)
    }

    pub fn retreat(&mut self) -> Outcome {
        self.dispatch(Command::Retreat)
    }

    pub fn jump_to(&mut self, phase: Phase) -> Outcome {
        self.dispatch(Command::JumpTo(phase))
    }

    pub fn set_facility_type(&mut self, facility_type: Option<FacilityType>) -> Outcome {
        self.dispatch(Command::SetFacilityType(facility_type))
    }

    pub fn set_region(&mut self, region: Option<Region>) -> Outcome {
        self.dispatch(Command::SetRegion(region))
    }

    pub fn set_facility_id(&mut self, facility_id: Option<&str>) -> Outcome {
        self.dispatch(Command::SetFacilityId(facility_id.map(str::to_string)))
    }

    pub fn set_recipient_name(&mut self, name: &str) -> Outcome {
        self.dispatch(Command::SetRecipientName(name.to_string()))
    }

    pub fn set_identifier_number(&mut self, number: &str) -> Outcome {
        self.dispatch(Command::SetIdentifierNumber(number.to_string()))
    }

    pub fn set_relation(&mut self, relation: Option<RelationType>) -> Outcome {
        self.dispatch(Command::SetRelation(relation))
    }

    pub fn set_freeform_address(&mut self, address: &str) -> Outcome {
        self.dispatch(Command::SetFreeformAddress(address.to_string()))
    }

    pub fn set_sender_field(&mut self, field: SenderField, value: &str) -> Outcome {
        self.dispatch(Command::SetSenderField {
            field,
            value: value.to_string(),
        })
    }

    pub fn toggle_step(&mut self, id: StepId) -> Outcome {
        self.dispatch(Command::ToggleStep(id))
    }

    pub fn select_saved_sender(&mut self, address: &SavedAddress) -> Outcome {
        self.dispatch(Command::SelectSavedSender(address.clone()))
    }

    pub fn fill_from_address_book(&mut self, member: &AddressBookMember) -> Outcome {
        self.dispatch(Command::FillFromAddressBook(member.clone()))
    }
}
