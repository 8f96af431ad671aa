// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Step gating engine.
//!
//! A sub-wizard is a declarative table of [`StepDef`]s evaluated top to
//! bottom against the current form state. Nothing here is cached: every
//! query re-runs the predicates, because any upstream field change can flip
//! them.
//!
//! ## Rules
//!
//! - A step is *effectively visible* when its own visibility predicate holds
//!   and every effectively visible step before it is complete. The first
//!   incomplete effectively visible step is the *current* step; everything
//!   after it is unreachable.
//! - Only effectively visible steps may be expanded, and at most one at a
//!   time.
//! - Completing a step by selection moves expansion to the next incomplete
//!   effectively visible step after it, skipping hidden steps.
//!
//! The engine never fails; it only answers questions.

use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Identifies a step in either sub-wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepId {
    FacilityType,
    Region,
    Facility,
    FreeformAddress,
    Recipient,
    Relation,
    SenderContact,
}

/// The two sub-wizards embedded in the first compose phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubWizard {
    Recipient,
    Sender,
}

impl StepId {
    /// Returns the sub-wizard this step belongs to.
    #[must_use]
    pub const fn sub_wizard(&self) -> SubWizard {
        match self {
            Self::SenderContact => SubWizard::Sender,
            _ => SubWizard::Recipient,
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::FacilityType => "facility_type",
            Self::Region => "region",
            Self::Facility => "facility",
            Self::FreeformAddress => "freeform_address",
            Self::Recipient => "recipient",
            Self::Relation => "relation",
            Self::SenderContact => "sender_contact",
        }
    }
}

impl FromStr for StepId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "facility_type" => Ok(Self::FacilityType),
            "region" => Ok(Self::Region),
            "facility" => Ok(Self::Facility),
            "freeform_address" => Ok(Self::FreeformAddress),
            "recipient" => Ok(Self::Recipient),
            "relation" => Ok(Self::Relation),
            "sender_contact" => Ok(Self::SenderContact),
            _ => Err(CoreError::UnknownStep(s.to_string())),
        }
    }
}

impl std::fmt::Display for StepId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One row of a step table.
pub struct StepDef<S> {
    pub id: StepId,
    pub title: &'static str,
    /// Whether the step's input is satisfied.
    pub is_complete: fn(&S) -> bool,
    /// Whether the step is shown at all, before ordering rules apply.
    pub is_visible: fn(&S) -> bool,
    /// Summary shown on the collapsed header.
    pub display_value: fn(&S) -> Option<String>,
}

/// Presentation snapshot of one step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepState {
    pub id: StepId,
    pub title: &'static str,
    /// 1-based position in the table.
    pub ordinal: usize,
    pub is_complete: bool,
    pub is_expanded: bool,
    pub is_visible: bool,
    pub display_value: Option<String>,
}

/// Result of clicking a step header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    /// The expanded step after the click.
    Expanded(Option<StepId>),
    /// The step is locked behind an incomplete earlier step.
    Locked,
}

/// Evaluates a step table against a form state.
pub struct StepGate<'t, S> {
    steps: &'t [StepDef<S>],
}

impl<'t, S> StepGate<'t, S> {
    /// Creates a gate over `steps`.
    #[must_use]
    pub const fn new(steps: &'t [StepDef<S>]) -> Self {
        Self { steps }
    }

    /// Returns the effectively visible steps, in order.
    ///
    /// Evaluation stops at the first incomplete visible step; it is always
    /// the last element when present.
    #[must_use]
    pub fn effective_steps(&self, state: &S) -> Vec<&'t StepDef<S>> {
        let mut effective: Vec<&StepDef<S>> = Vec::new();
        for step in self.steps {
            if !(step.is_visible)(state) {
                continue;
            }
            effective.push(step);
            if !(step.is_complete)(state) {
                break;
            }
        }
        effective
    }

    /// Returns true if `id` is effectively visible.
    #[must_use]
    pub fn is_reachable(&self, state: &S, id: StepId) -> bool {
        self.effective_steps(state).iter().any(|s| s.id == id)
    }

    /// Returns the first incomplete effectively visible step.
    #[must_use]
    pub fn current_step(&self, state: &S) -> Option<StepId> {
        self.effective_steps(state)
            .last()
            .filter(|s| !(s.is_complete)(state))
            .map(|s| s.id)
    }

    /// Returns true once every visible step is complete.
    #[must_use]
    pub fn is_finished(&self, state: &S) -> bool {
        let effective = self.effective_steps(state);
        !effective.is_empty() && effective.iter().all(|s| (s.is_complete)(state))
    }

    /// Handles a click on a step header.
    ///
    /// Reachable steps toggle open/closed; locked steps are refused.
    #[must_use]
    pub fn toggle(&self, state: &S, expanded: Option<StepId>, id: StepId) -> Toggle {
        if !self.is_reachable(state, id) {
            return Toggle::Locked;
        }
        if expanded == Some(id) {
            Toggle::Expanded(None)
        } else {
            Toggle::Expanded(Some(id))
        }
    }

    /// Returns which step to expand after a value was chosen inside `from`.
    ///
    /// If `from` is still incomplete it stays open. Otherwise the next
    /// incomplete effectively visible step after it opens. When there is
    /// none, the current step opens, which is nothing once the table is done.
    #[must_use]
    pub fn after_selection(&self, state: &S, from: StepId) -> Option<StepId> {
        let from_index: usize = self.position(from)?;
        if !(self.steps[from_index].is_complete)(state) {
            return Some(from);
        }

        self.effective_steps(state)
            .into_iter()
            .filter(|s| self.position(s.id).is_some_and(|i| i > from_index))
            .find(|s| !(s.is_complete)(state))
            .map(|s| s.id)
            .or_else(|| self.current_step(state))
    }

    /// Drops an expansion that points at a step which is no longer reachable,
    /// falling back to the current step.
    #[must_use]
    pub fn normalize_expanded(&self, state: &S, expanded: Option<StepId>) -> Option<StepId> {
        match expanded {
            Some(id) if !self.is_reachable(state, id) => self.current_step(state),
            other => other,
        }
    }

    /// Builds the presentation snapshot of `id`.
    ///
    /// Returns `None` if `id` is not part of this table.
    #[must_use]
    pub fn step_state(&self, state: &S, expanded: Option<StepId>, id: StepId) -> Option<StepState> {
        let index: usize = self.position(id)?;
        let step: &StepDef<S> = &self.steps[index];
        let is_visible: bool = self.is_reachable(state, id);

        Some(StepState {
            id,
            title: step.title,
            ordinal: index + 1,
            is_complete: (step.is_complete)(state),
            is_expanded: is_visible && expanded == Some(id),
            is_visible,
            display_value: (step.display_value)(state),
        })
    }

    /// Snapshots every step of the table, in order.
    #[must_use]
    pub fn all_states(&self, state: &S, expanded: Option<StepId>) -> Vec<StepState> {
        self.steps
            .iter()
            .filter_map(|step| self.step_state(state, expanded, step.id))
            .collect()
    }

    fn position(&self, id: StepId) -> Option<usize> {
        self.steps.iter().position(|s| s.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A toy form: three flags, the second step only shown when `show_b`.
    #[derive(Default)]
    struct Form {
        a: bool,
        b: bool,
        c: bool,
        show_b: bool,
    }

    static STEPS: [StepDef<Form>; 3] = [
        StepDef {
            id: StepId::FacilityType,
            title: "a",
            is_complete: |f| f.a,
            is_visible: |_| true,
            display_value: |f| f.a.then(|| String::from("A")),
        },
        StepDef {
            id: StepId::Region,
            title: "b",
            is_complete: |f| f.b,
            is_visible: |f| f.show_b,
            display_value: |_| None,
        },
        StepDef {
            id: StepId::Facility,
            title: "c",
            is_complete: |f| f.c,
            is_visible: |_| true,
            display_value: |_| None,
        },
    ];

    fn gate() -> StepGate<'static, Form> {
        StepGate::new(&STEPS)
    }

    #[test]
    fn test_later_steps_locked_until_earlier_complete() {
        let form = Form::default();
        assert_eq!(gate().current_step(&form), Some(StepId::FacilityType));
        assert!(!gate().is_reachable(&form, StepId::Facility));
        assert_eq!(
            gate().toggle(&form, None, StepId::Facility),
            Toggle::Locked
        );
    }

    #[test]
    fn test_hidden_step_is_skipped() {
        let form = Form {
            a: true,
            ..Form::default()
        };
        assert_eq!(gate().current_step(&form), Some(StepId::Facility));
        assert_eq!(
            gate().after_selection(&form, StepId::FacilityType),
            Some(StepId::Facility)
        );
        assert!(!gate().is_reachable(&form, StepId::Region));
    }

    #[test]
    fn test_visible_incomplete_step_blocks_following() {
        let form = Form {
            a: true,
            c: true,
            show_b: true,
            ..Form::default()
        };
        assert_eq!(gate().current_step(&form), Some(StepId::Region));
        assert!(!gate().is_reachable(&form, StepId::Facility));
        assert!(!gate().is_finished(&form));
    }

    #[test]
    fn test_toggle_completed_step() {
        let form = Form {
            a: true,
            ..Form::default()
        };
        assert_eq!(
            gate().toggle(&form, Some(StepId::Facility), StepId::FacilityType),
            Toggle::Expanded(Some(StepId::FacilityType))
        );
        assert_eq!(
            gate().toggle(&form, Some(StepId::FacilityType), StepId::FacilityType),
            Toggle::Expanded(None)
        );
    }

    #[test]
    fn test_after_selection_on_incomplete_step_stays() {
        let form = Form::default();
        assert_eq!(
            gate().after_selection(&form, StepId::FacilityType),
            Some(StepId::FacilityType)
        );
    }

    #[test]
    fn test_after_selection_on_last_step_collapses() {
        let form = Form {
            a: true,
            c: true,
            ..Form::default()
        };
        assert_eq!(gate().after_selection(&form, StepId::Facility), None);
        assert!(gate().is_finished(&form));
    }

    #[test]
    fn test_normalize_expanded_falls_back_to_current() {
        let form = Form::default();
        assert_eq!(
            gate().normalize_expanded(&form, Some(StepId::Facility)),
            Some(StepId::FacilityType)
        );
        assert_eq!(gate().normalize_expanded(&form, None), None);
    }

    #[test]
    fn test_step_state_snapshot() {
        let form = Form {
            a: true,
            ..Form::default()
        };
        let snapshot = gate()
            .step_state(&form, Some(StepId::FacilityType), StepId::FacilityType)
            .unwrap();
        assert!(snapshot.is_complete);
        assert!(snapshot.is_expanded);
        assert!(snapshot.is_visible);
        assert_eq!(snapshot.ordinal, 1);
        assert_eq!(snapshot.display_value.as_deref(), Some("A"));

        assert!(
            gate()
                .step_state(&form, None, StepId::SenderContact)
                .is_none()
        );
        assert_eq!(gate().all_states(&form, None).len(), 3);
    }
}
