// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{create_facility_path_wizard, create_test_member, create_test_sender};
use crate::{
    Command, ComposeState, ComposeWizard, Outcome, Rejection, StepId, TransitionResult, apply,
};
use orange_mail_domain::{
    FacilityType, Region, RelationType, SenderField, SenderInfo, default_saved_addresses,
};

#[test]
fn test_new_state_expands_first_recipient_step_only() {
    let state: ComposeState = ComposeState::new();
    assert_eq!(state.recipient_expanded, Some(StepId::FacilityType));
    assert_eq!(state.sender_expanded, None);
}

#[test]
fn test_apply_does_not_modify_input_state() {
    let state: ComposeState = ComposeState::new();
    let before: ComposeState = state.clone();

    let result: TransitionResult = apply(
        &state,
        Command::SetFacilityType(Some(FacilityType::Prison)),
    );

    assert_eq!(state, before);
    assert_eq!(result.outcome, Outcome::Applied);
    assert_eq!(
        result.new_state.recipient.facility_type(),
        Some(FacilityType::Prison)
    );
}

#[test]
fn test_click_selections_advance_expanded_step() {
    let state: ComposeState = ComposeState::new();

    let state: ComposeState = apply(
        &state,
        Command::SetFacilityType(Some(FacilityType::DetentionCenter)),
    )
    .new_state;
    assert_eq!(state.recipient_expanded, Some(StepId::Region));

    let state: ComposeState = apply(&state, Command::SetRegion(Some(Region::Seoul))).new_state;
    assert_eq!(state.recipient_expanded, Some(StepId::Facility));

    let state: ComposeState =
        apply(&state, Command::SetFacilityId(Some(String::from("3")))).new_state;
    assert_eq!(state.recipient_expanded, Some(StepId::Recipient));
}

#[test]
fn test_typing_does_not_move_expanded_step() {
    let mut wizard: ComposeWizard = ComposeWizard::new();
    wizard.set_facility_type(Some(FacilityType::DetentionCenter));
    wizard.set_region(Some(Region::Seoul));
    wizard.set_facility_id(Some("3"));
    wizard.set_recipient_name("김철수");
    wizard.set_identifier_number("2024-0117");

    assert_eq!(wizard.state().recipient_expanded, Some(StepId::Recipient));
    assert!(wizard.step_state(StepId::Relation).unwrap().is_visible);
}

#[test]
fn test_relation_selection_collapses_recipient_wizard() {
    let wizard: ComposeWizard = create_facility_path_wizard(create_test_sender());
    assert_eq!(wizard.state().recipient_expanded, None);
    assert!(wizard.recipient_complete());
}

#[test]
fn test_type_change_clears_region_and_facility() {
    let mut wizard: ComposeWizard = create_facility_path_wizard(create_test_sender());

    let outcome: Outcome = wizard.set_facility_type(Some(FacilityType::Prison));

    assert_eq!(outcome, Outcome::Applied);
    let recipient = &wizard.state().recipient;
    assert_eq!(recipient.region(), None);
    assert_eq!(recipient.facility_id(), None);
    assert_eq!(recipient.recipient_name(), "김철수");
    assert_eq!(wizard.state().recipient_expanded, Some(StepId::Region));
    assert!(!wizard.recipient_complete());
}

#[test]
fn test_region_change_clears_facility() {
    let mut wizard: ComposeWizard = create_facility_path_wizard(create_test_sender());

    wizard.set_region(Some(Region::Gyeonggi));

    assert_eq!(wizard.state().recipient.region(), Some(Region::Gyeonggi));
    assert_eq!(wizard.state().recipient.facility_id(), None);
    assert_eq!(wizard.state().recipient_expanded, Some(StepId::Facility));
}

#[test]
fn test_ineligible_facility_is_rejected() {
    let mut wizard: ComposeWizard = ComposeWizard::new();
    wizard.set_facility_type(Some(FacilityType::DetentionCenter));
    wizard.set_region(Some(Region::Seoul));
    let before: ComposeState = wizard.state().clone();

    // 안양교도소 is a prison in 경기
    let outcome: Outcome = wizard.set_facility_id(Some("5"));

    assert_eq!(
        outcome,
        Outcome::Rejected(Rejection::FacilityNotEligible(String::from("5")))
    );
    assert_eq!(wizard.state(), &before);
}

#[test]
fn test_unknown_facility_is_rejected() {
    let mut wizard: ComposeWizard = ComposeWizard::new();
    wizard.set_facility_type(Some(FacilityType::Prison));
    wizard.set_region(Some(Region::Seoul));

    let outcome: Outcome = wizard.set_facility_id(Some("999"));

    assert!(matches!(
        outcome,
        Outcome::Rejected(Rejection::FacilityNotEligible(_))
    ));
    assert_eq!(wizard.state().recipient.facility_id(), None);
}

#[test]
fn test_facility_rejected_before_region_is_chosen() {
    let state: ComposeState = apply(
        &ComposeState::new(),
        Command::SetFacilityType(Some(FacilityType::DetentionCenter)),
    )
    .new_state;

    let result: TransitionResult = apply(&state, Command::SetFacilityId(Some(String::from("3"))));

    assert!(result.is_rejected());
}

#[test]
fn test_region_rejected_without_facility_type() {
    let result: TransitionResult =
        apply(&ComposeState::new(), Command::SetRegion(Some(Region::Seoul)));

    assert_eq!(
        result.outcome,
        Outcome::Rejected(Rejection::RegionNotApplicable)
    );
}

#[test]
fn test_region_rejected_on_general_address_path() {
    let mut wizard: ComposeWizard = ComposeWizard::new();
    wizard.set_facility_type(Some(FacilityType::GeneralAddress));

    let outcome: Outcome = wizard.set_region(Some(Region::Busan));

    assert_eq!(outcome, Outcome::Rejected(Rejection::RegionNotApplicable));
    assert_eq!(wizard.state().recipient.region(), None);
}

#[test]
fn test_clearing_name_moves_expansion_back_to_recipient_step() {
    let mut wizard: ComposeWizard = create_facility_path_wizard(create_test_sender());
    assert_eq!(wizard.toggle_step(StepId::Relation), Outcome::Applied);
    assert_eq!(wizard.toggle_step(StepId::SenderContact), Outcome::Applied);

    wizard.set_recipient_name("  ");

    assert_eq!(wizard.state().recipient_expanded, Some(StepId::Recipient));
    assert_eq!(wizard.state().sender_expanded, None);
}

#[test]
fn test_sender_field_updates_only_that_field() {
    let mut wizard: ComposeWizard = ComposeWizard::with_sender(create_test_sender());

    wizard.set_sender_field(SenderField::Phone, "010-0000-0000");

    let sender: &SenderInfo = &wizard.state().sender;
    assert_eq!(sender.phone, "010-0000-0000");
    assert_eq!(sender.name, "홍길동");
}

#[test]
fn test_select_saved_sender_fills_and_collapses() {
    let mut wizard: ComposeWizard = create_facility_path_wizard(SenderInfo::default());
    wizard.toggle_step(StepId::SenderContact);
    assert_eq!(wizard.state().sender_expanded, Some(StepId::SenderContact));
    let saved = &default_saved_addresses()[0];

    let outcome: Outcome = wizard.select_saved_sender(saved);

    assert_eq!(outcome, Outcome::Applied);
    assert_eq!(wizard.state().sender, SenderInfo::from_saved(saved));
    assert_eq!(wizard.state().sender_expanded, None);
    assert!(wizard.sender_complete());
}

#[test]
fn test_fill_from_address_book_keeps_facility() {
    let mut wizard: ComposeWizard = ComposeWizard::new();
    wizard.set_facility_type(Some(FacilityType::DetentionCenter));
    wizard.set_region(Some(Region::Seoul));
    wizard.set_facility_id(Some("3"));

    wizard.fill_from_address_book(&create_test_member());

    let recipient = &wizard.state().recipient;
    assert_eq!(recipient.facility_id(), Some("3"));
    assert_eq!(recipient.recipient_name(), "김철수");
    assert_eq!(recipient.identifier_number(), "2024-0117");
    assert_eq!(recipient.relation(), Some(RelationType::Child));
    assert!(wizard.recipient_complete());
}

#[test]
fn test_relation_picked_before_recipient_complete_keeps_recipient_open() {
    let mut wizard: ComposeWizard = ComposeWizard::new();
    wizard.set_facility_type(Some(FacilityType::DetentionCenter));
    wizard.set_region(Some(Region::Seoul));
    wizard.set_facility_id(Some("3"));
    wizard.set_recipient_name("김철수");
    assert_eq!(wizard.state().recipient_expanded, Some(StepId::Recipient));

    assert_eq!(
        wizard.set_relation(Some(RelationType::Mother)),
        Outcome::Applied
    );

    assert_eq!(wizard.state().recipient_expanded, Some(StepId::Recipient));
    assert_eq!(wizard.state().recipient.relation(), Some(RelationType::Mother));

    wizard.set_identifier_number("2024-0117");
    assert!(wizard.recipient_complete());
}
