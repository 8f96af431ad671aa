// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Command, ComposeWizard, CoreError, Outcome, Phase, StepId, parse_script_line};
use orange_mail_domain::{
    DomainError, FacilityType, Region, RelationType, SavedAddress, SenderField,
    default_saved_addresses,
};

fn parse(line: &str) -> Result<Command, CoreError> {
    parse_script_line(line, &default_saved_addresses())
}

#[test]
fn test_parse_selection_commands() {
    assert_eq!(
        parse("type 구치소").unwrap(),
        Command::SetFacilityType(Some(FacilityType::DetentionCenter))
    );
    assert_eq!(
        parse("region 서울").unwrap(),
        Command::SetRegion(Some(Region::Seoul))
    );
    assert_eq!(
        parse("facility 3").unwrap(),
        Command::SetFacilityId(Some(String::from("3")))
    );
    assert_eq!(
        parse("relation 어머니").unwrap(),
        Command::SetRelation(Some(RelationType::Mother))
    );
}

#[test]
fn test_parse_none_clears_selection() {
    assert_eq!(parse("type none").unwrap(), Command::SetFacilityType(None));
    assert_eq!(parse("region none").unwrap(), Command::SetRegion(None));
    assert_eq!(parse("facility none").unwrap(), Command::SetFacilityId(None));
}

#[test]
fn test_parse_text_keeps_inner_spaces() {
    assert_eq!(
        parse("address  부산광역시 해운대구 센텀중앙로 55 ").unwrap(),
        Command::SetFreeformAddress(String::from("부산광역시 해운대구 센텀중앙로 55"))
    );
    assert_eq!(
        parse("sender.phone 010-1111-2222").unwrap(),
        Command::SetSenderField {
            field: SenderField::Phone,
            value: String::from("010-1111-2222"),
        }
    );
    assert_eq!(parse("name").unwrap(), Command::SetRecipientName(String::new()));
}

#[test]
fn test_parse_navigation() {
    assert_eq!(parse("next").unwrap(), Command::Advance);
    assert_eq!(parse("prev").unwrap(), Command::Retreat);
    assert_eq!(parse("jump 3").unwrap(), Command::JumpTo(Phase::Content));
    assert_eq!(
        parse("toggle sender_contact").unwrap(),
        Command::ToggleStep(StepId::SenderContact)
    );
}

#[test]
fn test_parse_saved_sender() {
    let saved: Vec<SavedAddress> = default_saved_addresses();
    assert_eq!(
        parse("saved 2").unwrap(),
        Command::SelectSavedSender(saved[1].clone())
    );
    assert_eq!(
        parse("saved 42"),
        Err(CoreError::UnknownSavedAddress(String::from("42")))
    );
}

#[test]
fn test_parse_errors() {
    assert_eq!(
        parse("teleport"),
        Err(CoreError::UnknownCommand(String::from("teleport")))
    );
    assert_eq!(
        parse("region"),
        Err(CoreError::MissingArgument {
            command: String::from("region")
        })
    );
    assert_eq!(
        parse("region 뉴욕"),
        Err(CoreError::DomainViolation(DomainError::UnknownRegion(
            String::from("뉴욕")
        )))
    );
    assert_eq!(parse("jump 8"), Err(CoreError::UnknownPhase(8)));
    assert_eq!(
        parse("jump x"),
        Err(CoreError::InvalidPhaseNumber(String::from("x")))
    );
    assert_eq!(
        parse("toggle header"),
        Err(CoreError::UnknownStep(String::from("header")))
    );
}

#[test]
fn test_scripted_session_reaches_payment() {
    let script: &str = "
        type 일반 주소
        address 부산광역시 해운대구 센텀중앙로 55
        name 이영희
        relation 친구
        saved 1
        next
        next
        next
        next
        next
        next
    ";
    let mut wizard: ComposeWizard = ComposeWizard::new();

    for line in script.lines().map(str::trim).filter(|l| !l.is_empty()) {
        let command: Command = parse(line).unwrap();
        assert_eq!(wizard.dispatch(command), Outcome::Applied, "line: {line}");
    }

    assert_eq!(wizard.phase(), Phase::Payment);
}
