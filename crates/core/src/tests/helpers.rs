// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{ComposeState, ComposeWizard, Outcome};
use orange_mail_domain::{AddressBookMember, FacilityType, Region, RelationType, SenderInfo};

pub fn create_test_sender() -> SenderInfo {
    SenderInfo::new("홍길동", "010-9876-5432", "서울시 종로구 세종대로 100")
}

pub fn create_test_member() -> AddressBookMember {
    AddressBookMember {
        id: String::from("m-1"),
        name: String::from("김철수"),
        relation: Some(RelationType::Child),
        identifier_number: Some(String::from("2024-0117")),
    }
}

/// A wizard with the recipient picked through the facility cascade:
/// 구치소 → 서울 → 서울구치소, with name, number and relation filled in.
pub fn create_facility_path_wizard(sender: SenderInfo) -> ComposeWizard {
    let mut wizard: ComposeWizard = ComposeWizard::with_sender(sender);
    assert_eq!(
        wizard.set_facility_type(Some(FacilityType::DetentionCenter)),
        Outcome::Applied
    );
    assert_eq!(wizard.set_region(Some(Region::Seoul)), Outcome::Applied);
    assert_eq!(wizard.set_facility_id(Some("3")), Outcome::Applied);
    assert_eq!(wizard.set_recipient_name("김철수"), Outcome::Applied);
    assert_eq!(wizard.set_identifier_number("2024-0117"), Outcome::Applied);
    assert_eq!(wizard.set_relation(Some(RelationType::Mother)), Outcome::Applied);
    wizard
}

/// A state on the free-form address path with every recipient field filled.
pub fn create_general_address_state() -> ComposeState {
    let mut wizard: ComposeWizard = ComposeWizard::with_sender(create_test_sender());
    wizard.set_facility_type(Some(FacilityType::GeneralAddress));
    wizard.set_freeform_address("부산광역시 해운대구 센텀중앙로 55 101동 202호");
    wizard.set_recipient_name("이영희");
    wizard.set_relation(Some(RelationType::Friend));
    wizard.state().clone()
}
