// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::phase::Phase;
use crate::state::{ComposeState, Outcome, Rejection, TransitionResult};
use crate::step::{StepGate, StepId, SubWizard, Toggle};
use crate::steps::{recipient_complete, recipient_gate, sender_complete, sender_gate};
use orange_mail_domain::{RecipientChange, SenderInfo};
use tracing::{debug, info};

/// Returns true if the wizard may leave `phase` going forward.
///
/// Only the recipient info phase is gated; it needs both sub-wizards done.
#[must_use]
pub fn can_proceed(state: &ComposeState, phase: Phase) -> bool {
    match phase {
        Phase::RecipientInfo => recipient_complete(state) && sender_complete(state),
        _ => true,
    }
}

/// Applies a command to the compose state, producing a new state and outcome.
///
/// This function is pure: the input state is never modified. Refused
/// commands return a copy of the input state together with the
/// [`Rejection`] that explains why.
///
/// After every applied command both expanded steps are normalized, so an
/// expansion can never point at a step that became unreachable.
///
/// # Arguments
///
/// * `state` - The current compose state (immutable)
/// * `command` - The command to apply
#[must_use]
pub fn apply(state: &ComposeState, command: Command) -> TransitionResult {
    let name: &'static str = command.name();
    debug!(command = name, phase = %state.phase, "Applying command");

    let result: TransitionResult = match command {
        Command::SetFacilityType(facility_type) => select(
            state,
            RecipientChange::FacilityType(facility_type),
            Some(StepId::FacilityType),
        ),
        Command::SetRegion(region) => {
            if region.is_some() && !state.recipient.accepts_region() {
                TransitionResult::rejected(state, Rejection::RegionNotApplicable)
            } else {
                select(state, RecipientChange::Region(region), Some(StepId::Region))
            }
        }
        Command::SetFacilityId(facility_id) => match facility_id {
            Some(id) if !state.recipient.accepts_facility(&id) => {
                TransitionResult::rejected(state, Rejection::FacilityNotEligible(id))
            }
            facility_id => select(
                state,
                RecipientChange::Facility(facility_id),
                Some(StepId::Facility),
            ),
        },
        Command::SetRecipientName(name) => {
            select(state, RecipientChange::RecipientName(name), None)
        }
        Command::SetIdentifierNumber(number) => {
            select(state, RecipientChange::IdentifierNumber(number), None)
        }
        Command::SetRelation(relation) => select(
            state,
            RecipientChange::Relation(relation),
            Some(StepId::Relation),
        ),
        Command::SetFreeformAddress(address) => {
            select(state, RecipientChange::FreeformAddress(address), None)
        }
        Command::FillFromAddressBook(member) => {
            select(state, RecipientChange::FromAddressBook(member), None)
        }
        Command::SetSenderField { field, value } => {
            let mut next: ComposeState = state.clone();
            next.sender = state.sender.with_field(field, value);
            TransitionResult::applied(normalized(next))
        }
        Command::SelectSavedSender(address) => {
            let mut next: ComposeState = state.clone();
            next.sender = SenderInfo::from_saved(&address);
            next.sender_expanded = None;
            TransitionResult::applied(normalized(next))
        }
        Command::ToggleStep(id) => toggle(state, id),
        Command::Advance => advance(state),
        Command::Retreat => retreat(state),
        Command::JumpTo(phase) => jump_to(state, phase),
    };

    debug!(
        command = name,
        phase = %result.new_state.phase,
        outcome = ?result.outcome,
        "Command applied"
    );
    result
}

/// Records a recipient change, then moves the recipient expansion forward
/// when the change came from a click inside `from`.
fn select(
    state: &ComposeState,
    change: RecipientChange,
    from: Option<StepId>,
) -> TransitionResult {
    let mut next: ComposeState = state.clone();
    next.recipient = state.recipient.with_change(change);
    if let Some(from) = from {
        next.recipient_expanded = recipient_gate().after_selection(&next, from);
    }
    TransitionResult::applied(normalized(next))
}

fn normalized(mut state: ComposeState) -> ComposeState {
    state.recipient_expanded =
        recipient_gate().normalize_expanded(&state, state.recipient_expanded);
    state.sender_expanded = sender_gate().normalize_expanded(&state, state.sender_expanded);
    state
}

fn toggle(state: &ComposeState, id: StepId) -> TransitionResult {
    let gate: StepGate<'static, ComposeState> = match id.sub_wizard() {
        SubWizard::Recipient => recipient_gate(),
        SubWizard::Sender => sender_gate(),
    };
    let expanded: Option<StepId> = match id.sub_wizard() {
        SubWizard::Recipient => state.recipient_expanded,
        SubWizard::Sender => state.sender_expanded,
    };

    match gate.toggle(state, expanded, id) {
        Toggle::Locked => TransitionResult::rejected(state, Rejection::StepLocked(id)),
        Toggle::Expanded(expanded) => {
            let mut next: ComposeState = state.clone();
            match id.sub_wizard() {
                SubWizard::Recipient => next.recipient_expanded = expanded,
                SubWizard::Sender => next.sender_expanded = expanded,
            }
            TransitionResult::applied(next)
        }
    }
}

fn advance(state: &ComposeState) -> TransitionResult {
    let Some(target) = state.phase.next() else {
        return TransitionResult::rejected(state, Rejection::AtFinalPhase);
    };
    if !can_proceed(state, state.phase) {
        return TransitionResult::rejected(state, Rejection::PhaseIncomplete(state.phase));
    }

    info!(from = %state.phase, to = %target, "Advancing phase");
    let mut next: ComposeState = state.clone();
    next.phase = target;
    TransitionResult::applied(next)
}

fn retreat(state: &ComposeState) -> TransitionResult {
    let Some(target) = state.phase.prev() else {
        info!("Close requested from the first phase");
        return TransitionResult {
            new_state: state.clone(),
            outcome: Outcome::CloseRequested,
        };
    };

    info!(from = %state.phase, to = %target, "Retreating phase");
    let mut next: ComposeState = state.clone();
    next.phase = target;
    TransitionResult::applied(next)
}

fn jump_to(state: &ComposeState, phase: Phase) -> TransitionResult {
    if phase > state.phase {
        return TransitionResult::rejected(state, Rejection::FuturePhase(phase));
    }

    if phase != state.phase {
        info!(from = %state.phase, to = %phase, "Jumping to phase");
    }
    let mut next: ComposeState = state.clone();
    next.phase = phase;
    TransitionResult::applied(next)
}
