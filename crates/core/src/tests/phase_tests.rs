// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{create_facility_path_wizard, create_test_sender};
use crate::{ComposeState, ComposeWizard, Outcome, Phase, Rejection};
use orange_mail_domain::{SenderField, SenderInfo};

#[test]
fn test_cannot_proceed_with_empty_sender_address() {
    let sender: SenderInfo = SenderInfo::new("홍길동", "010-9876-5432", "");
    let mut wizard: ComposeWizard = create_facility_path_wizard(sender);

    assert!(!wizard.can_proceed(Phase::RecipientInfo));
    assert_eq!(
        wizard.advance(),
        Outcome::Rejected(Rejection::PhaseIncomplete(Phase::RecipientInfo))
    );
    assert_eq!(wizard.phase(), Phase::RecipientInfo);

    wizard.set_sender_field(SenderField::Address, "서울시 종로구 세종대로 100");
    assert!(wizard.can_proceed(Phase::RecipientInfo));
    assert_eq!(wizard.advance(), Outcome::Applied);
    assert_eq!(wizard.phase(), Phase::Paper);
}

#[test]
fn test_cannot_proceed_with_incomplete_recipient() {
    let mut wizard: ComposeWizard = ComposeWizard::with_sender(create_test_sender());

    assert!(wizard.sender_complete());
    assert!(!wizard.can_proceed(Phase::RecipientInfo));
    assert!(matches!(wizard.advance(), Outcome::Rejected(_)));
}

#[test]
fn test_later_phases_are_ungated() {
    let wizard: ComposeWizard = ComposeWizard::new();
    for phase in Phase::ALL.into_iter().skip(1) {
        assert!(wizard.can_proceed(phase));
    }
}

#[test]
fn test_advance_through_every_phase_and_stop_at_payment() {
    let mut wizard: ComposeWizard = create_facility_path_wizard(create_test_sender());

    for expected in Phase::ALL.into_iter().skip(1) {
        assert_eq!(wizard.advance(), Outcome::Applied);
        assert_eq!(wizard.phase(), expected);
    }

    assert_eq!(wizard.phase(), Phase::Payment);
    assert_eq!(
        wizard.advance(),
        Outcome::Rejected(Rejection::AtFinalPhase)
    );
    assert_eq!(wizard.phase(), Phase::Payment);
}

#[test]
fn test_retreat_from_first_phase_requests_close() {
    let mut wizard: ComposeWizard = ComposeWizard::new();
    let before: ComposeState = wizard.state().clone();

    assert_eq!(wizard.retreat(), Outcome::CloseRequested);
    assert_eq!(wizard.state(), &before);
}

#[test]
fn test_retreat_moves_back_one_phase() {
    let mut wizard: ComposeWizard = create_facility_path_wizard(create_test_sender());
    wizard.advance();
    wizard.advance();
    assert_eq!(wizard.phase(), Phase::Content);

    assert_eq!(wizard.retreat(), Outcome::Applied);
    assert_eq!(wizard.phase(), Phase::Paper);
}

#[test]
fn test_jump_to_completed_or_current_phase() {
    let mut wizard: ComposeWizard = create_facility_path_wizard(create_test_sender());
    for _ in 0..3 {
        wizard.advance();
    }
    assert_eq!(wizard.phase(), Phase::Preview);

    assert_eq!(wizard.jump_to(Phase::Preview), Outcome::Applied);
    assert_eq!(wizard.jump_to(Phase::RecipientInfo), Outcome::Applied);
    assert_eq!(wizard.phase(), Phase::RecipientInfo);
}

#[test]
fn test_jump_to_future_phase_is_rejected() {
    let mut wizard: ComposeWizard = create_facility_path_wizard(create_test_sender());
    wizard.advance();

    assert_eq!(
        wizard.jump_to(Phase::Options),
        Outcome::Rejected(Rejection::FuturePhase(Phase::Options))
    );
    assert_eq!(wizard.phase(), Phase::Paper);
}
