// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::DomainError;

#[test]
fn test_domain_error_display() {
    let err: DomainError = DomainError::UnknownFacilityType(String::from("우체국"));
    assert_eq!(format!("{err}"), "Unknown facility type: '우체국'");

    let err: DomainError = DomainError::UnknownRegion(String::from("Tokyo"));
    assert_eq!(format!("{err}"), "Unknown region: 'Tokyo'");

    let err: DomainError = DomainError::UnknownRelation(String::from("이웃"));
    assert_eq!(format!("{err}"), "Unknown relation: '이웃'");

    let err: DomainError = DomainError::UnknownSpecialDayKind(String::from("party"));
    assert_eq!(format!("{err}"), "Unknown special day kind: 'party'");

    let err: DomainError = DomainError::UnknownCapsuleStatus(String::from("lost"));
    assert_eq!(format!("{err}"), "Unknown time capsule status: 'lost'");

    let err: DomainError = DomainError::DateParseError {
        date_string: String::from("2025-13-01"),
        error: String::from("bad month"),
    };
    assert_eq!(
        format!("{err}"),
        "Failed to parse date '2025-13-01': bad month"
    );

    let err: DomainError = DomainError::InvalidDeadlineHour { hour: 25 };
    assert_eq!(
        format!("{err}"),
        "Invalid deadline hour: 25. Must be between 0 and 23"
    );

    let err: DomainError = DomainError::MissingLetterField { field: "message" };
    assert_eq!(format!("{err}"), "Letter message cannot be empty");
}
