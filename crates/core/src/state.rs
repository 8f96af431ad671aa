// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::phase::Phase;
use crate::step::StepId;
use orange_mail_domain::{RecipientSelection, SenderInfo};

/// The complete state of one open compose wizard.
///
/// State lives only as long as the wizard is open. It is replaced wholesale
/// by [`crate::apply`]; callers never edit nested fields directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposeState {
    /// The phase currently shown.
    pub phase: Phase,
    /// Recipient sub-wizard input.
    pub recipient: RecipientSelection,
    /// Sender sub-wizard input.
    pub sender: SenderInfo,
    /// The open step of the recipient sub-wizard, if any.
    pub recipient_expanded: Option<StepId>,
    /// The open step of the sender sub-wizard, if any.
    pub sender_expanded: Option<StepId>,
}

impl ComposeState {
    /// Creates the state of a freshly opened wizard.
    ///
    /// The facility type step starts expanded; the sender step starts
    /// collapsed.
    #[must_use]
    pub fn new() -> Self {
        Self::with_sender(SenderInfo::default())
    }

    /// Creates a fresh state with sender details prefilled.
    #[must_use]
    pub fn with_sender(sender: SenderInfo) -> Self {
        Self {
            phase: Phase::RecipientInfo,
            recipient: RecipientSelection::new(),
            sender,
            recipient_expanded: Some(StepId::FacilityType),
            sender_expanded: None,
        }
    }
}

impl Default for ComposeState {
    fn default() -> Self {
        Self::new()
    }
}

/// Why a command was refused. The state is left unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// The step is behind an incomplete earlier step.
    StepLocked(StepId),
    /// The phase's gate is not satisfied yet.
    PhaseIncomplete(Phase),
    /// Jumping ahead of the current phase is not allowed.
    FuturePhase(Phase),
    /// There is no phase after payment.
    AtFinalPhase,
    /// The facility is not in the filtered list for the current selection.
    FacilityNotEligible(String),
    /// A region was chosen while the free-form path or no type is active.
    RegionNotApplicable,
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::StepLocked(id) => write!(f, "Step '{id}' is locked"),
            Self::PhaseIncomplete(phase) => {
                write!(f, "Phase {} ({phase}) is not complete", phase.number())
            }
            Self::FuturePhase(phase) => {
                write!(f, "Phase {} ({phase}) has not been reached", phase.number())
            }
            Self::AtFinalPhase => write!(f, "Already at the final phase"),
            Self::FacilityNotEligible(id) => {
                write!(f, "Facility '{id}' is not available for this selection")
            }
            Self::RegionNotApplicable => {
                write!(f, "A region cannot be chosen for this facility type")
            }
        }
    }
}

/// What happened when a command was applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    Rejected(Rejection),
    /// Retreat from the first phase: the caller should close the wizard.
    CloseRequested,
}

/// The result of applying a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The state after the command. Equal to the input state unless the
    /// outcome is `Applied`.
    pub new_state: ComposeState,
    pub outcome: Outcome,
}

impl TransitionResult {
    pub(crate) const fn applied(new_state: ComposeState) -> Self {
        Self {
            new_state,
            outcome: Outcome::Applied,
        }
    }

    pub(crate) fn rejected(state: &ComposeState, rejection: Rejection) -> Self {
        Self {
            new_state: state.clone(),
            outcome: Outcome::Rejected(rejection),
        }
    }

    /// Returns true if the command changed nothing because it was refused.
    #[must_use]
    pub const fn is_rejected(&self) -> bool {
        matches!(self.outcome, Outcome::Rejected(_))
    }
}
