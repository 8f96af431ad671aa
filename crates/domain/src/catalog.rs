// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Static reference data: facility types, regions, relations and the
//! facility directory.
//!
//! Everything here is read-only. Labels are the Korean display strings used
//! throughout the product; they double as the serialized form.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The kind of institution a recipient is held in.
///
/// `GeneralAddress` bypasses the facility cascade entirely: the sender
/// types a postal address instead of picking a facility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FacilityType {
    #[serde(rename = "교도소")]
    Prison,
    #[serde(rename = "구치소")]
    DetentionCenter,
    #[serde(rename = "소년원/소년교도소")]
    JuvenileFacility,
    #[serde(rename = "군부대/훈련소")]
    MilitaryTraining,
    #[serde(rename = "일반 주소")]
    GeneralAddress,
}

impl FacilityType {
    /// All facility types in display order.
    pub const ALL: [Self; 5] = [
        Self::Prison,
        Self::DetentionCenter,
        Self::JuvenileFacility,
        Self::MilitaryTraining,
        Self::GeneralAddress,
    ];

    /// Returns the display label.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Prison => "교도소",
            Self::DetentionCenter => "구치소",
            Self::JuvenileFacility => "소년원/소년교도소",
            Self::MilitaryTraining => "군부대/훈련소",
            Self::GeneralAddress => "일반 주소",
        }
    }

    /// Returns the emoji shown next to the type chip.
    #[must_use]
    pub const fn emoji(&self) -> &'static str {
        match self {
            Self::Prison | Self::DetentionCenter => "🏛️",
            Self::JuvenileFacility => "🏫",
            Self::MilitaryTraining => "🎖️",
            Self::GeneralAddress => "🏠",
        }
    }

    /// Returns true if this type skips region and facility selection.
    #[must_use]
    pub const fn is_general_address(&self) -> bool {
        matches!(self, Self::GeneralAddress)
    }
}

impl FromStr for FacilityType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| DomainError::UnknownFacilityType(s.to_string()))
    }
}

impl std::fmt::Display for FacilityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Geographic area used as a filter key over facilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    #[serde(rename = "서울")]
    Seoul,
    #[serde(rename = "경기")]
    Gyeonggi,
    #[serde(rename = "인천")]
    Incheon,
    #[serde(rename = "강원")]
    Gangwon,
    #[serde(rename = "충북")]
    Chungbuk,
    #[serde(rename = "충남")]
    Chungnam,
    #[serde(rename = "대전")]
    Daejeon,
    #[serde(rename = "세종")]
    Sejong,
    #[serde(rename = "전북")]
    Jeonbuk,
    #[serde(rename = "전남")]
    Jeonnam,
    #[serde(rename = "광주")]
    Gwangju,
    #[serde(rename = "경북")]
    Gyeongbuk,
    #[serde(rename = "경남")]
    Gyeongnam,
    #[serde(rename = "대구")]
    Daegu,
    #[serde(rename = "울산")]
    Ulsan,
    #[serde(rename = "부산")]
    Busan,
    #[serde(rename = "제주")]
    Jeju,
}

impl Region {
    /// All regions in display order.
    pub const ALL: [Self; 17] = [
        Self::Seoul,
        Self::Gyeonggi,
        Self::Incheon,
        Self::Gangwon,
        Self::Chungbuk,
        Self::Chungnam,
        Self::Daejeon,
        Self::Sejong,
        Self::Jeonbuk,
        Self::Jeonnam,
        Self::Gwangju,
        Self::Gyeongbuk,
        Self::Gyeongnam,
        Self::Daegu,
        Self::Ulsan,
        Self::Busan,
        Self::Jeju,
    ];

    /// Returns the display label.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Seoul => "서울",
            Self::Gyeonggi => "경기",
            Self::Incheon => "인천",
            Self::Gangwon => "강원",
            Self::Chungbuk => "충북",
            Self::Chungnam => "충남",
            Self::Daejeon => "대전",
            Self::Sejong => "세종",
            Self::Jeonbuk => "전북",
            Self::Jeonnam => "전남",
            Self::Gwangju => "광주",
            Self::Gyeongbuk => "경북",
            Self::Gyeongnam => "경남",
            Self::Daegu => "대구",
            Self::Ulsan => "울산",
            Self::Busan => "부산",
            Self::Jeju => "제주",
        }
    }
}

impl FromStr for Region {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| DomainError::UnknownRegion(s.to_string()))
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The sender's relationship to the recipient. Selected, never derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RelationType {
    #[serde(rename = "조부모")]
    Grandparent,
    #[serde(rename = "어머니")]
    Mother,
    #[serde(rename = "아버지")]
    Father,
    #[serde(rename = "형제/자매")]
    Sibling,
    #[serde(rename = "자녀")]
    Child,
    #[serde(rename = "배우자")]
    Spouse,
    #[serde(rename = "연인")]
    Partner,
    #[serde(rename = "친구")]
    Friend,
    #[serde(rename = "선배/후배")]
    SeniorJunior,
    #[serde(rename = "지인")]
    Acquaintance,
    #[serde(rename = "법률대리인")]
    LegalRepresentative,
}

impl RelationType {
    /// All relations in display order.
    pub const ALL: [Self; 11] = [
        Self::Grandparent,
        Self::Mother,
        Self::Father,
        Self::Sibling,
        Self::Child,
        Self::Spouse,
        Self::Partner,
        Self::Friend,
        Self::SeniorJunior,
        Self::Acquaintance,
        Self::LegalRepresentative,
    ];

    /// Returns the display label.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Grandparent => "조부모",
            Self::Mother => "어머니",
            Self::Father => "아버지",
            Self::Sibling => "형제/자매",
            Self::Child => "자녀",
            Self::Spouse => "배우자",
            Self::Partner => "연인",
            Self::Friend => "친구",
            Self::SeniorJunior => "선배/후배",
            Self::Acquaintance => "지인",
            Self::LegalRepresentative => "법률대리인",
        }
    }
}

impl FromStr for RelationType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| DomainError::UnknownRelation(s.to_string()))
    }
}

impl std::fmt::Display for RelationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A correctional, detention or training institution.
///
/// Facilities are immutable reference data; the core only reads them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Facility {
    /// Stable identifier.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Institution type.
    pub facility_type: FacilityType,
    /// Region the institution is located in.
    pub region: Region,
    /// Postal address.
    pub address: &'static str,
}

const fn facility(
    id: &'static str,
    name: &'static str,
    facility_type: FacilityType,
    region: Region,
    address: &'static str,
) -> Facility {
    Facility {
        id,
        name,
        facility_type,
        region,
        address,
    }
}

use FacilityType::{DetentionCenter, JuvenileFacility, MilitaryTraining, Prison};
use Region::{
    Busan, Chungbuk, Chungnam, Daegu, Daejeon, Gangwon, Gwangju, Gyeongbuk, Gyeongnam, Gyeonggi,
    Incheon, Jeju, Jeonbuk, Jeonnam, Seoul, Ulsan,
};

/// The facility directory, in catalog order.
///
/// Filter results preserve this order.
pub const FACILITIES: &[Facility] = &[
    facility("1", "서울남부교도소", Prison, Seoul, "서울특별시 금천구 시흥대로 143"),
    facility("2", "서울동부구치소", DetentionCenter, Seoul, "서울특별시 송파구 문정로 20"),
    facility("3", "서울구치소", DetentionCenter, Seoul, "서울특별시 송파구 위례성대로 16"),
    facility("4", "서울남부구치소", DetentionCenter, Seoul, "서울특별시 양천구 신정로7길 30"),
    facility("5", "안양교도소", Prison, Gyeonggi, "경기도 안양시 동안구 호계동"),
    facility("6", "수원구치소", DetentionCenter, Gyeonggi, "경기도 수원시 팔달구 동수원로 397"),
    facility("7", "의정부교도소", Prison, Gyeonggi, "경기도 의정부시 호원동"),
    facility("8", "화성직업훈련교도소", Prison, Gyeonggi, "경기도 화성시 팔탄면"),
    facility("9", "인천교도소", Prison, Incheon, "인천광역시 남동구 호구포로 99"),
    facility("10", "인천구치소", DetentionCenter, Incheon, "인천광역시 미추홀구 석정로 163"),
    facility("11", "춘천교도소", Prison, Gangwon, "강원도 춘천시 서면 박사로 955"),
    facility("12", "원주교도소", Prison, Gangwon, "강원도 원주시 문막읍"),
    facility("13", "강릉교도소", Prison, Gangwon, "강원도 강릉시 성산면"),
    facility("14", "영월교도소", Prison, Gangwon, "강원도 영월군 영월읍"),
    facility("15", "청주교도소", Prison, Chungbuk, "충청북도 청주시 서원구 남이면"),
    facility("16", "청주여자교도소", Prison, Chungbuk, "충청북도 청주시 흥덕구"),
    facility("17", "충주교도소", Prison, Chungbuk, "충청북도 충주시 앙성면"),
    facility("18", "천안교도소", Prison, Chungnam, "충청남도 천안시 동남구"),
    facility("19", "홍성교도소", Prison, Chungnam, "충청남도 홍성군 홍성읍"),
    facility("20", "공주교도소", Prison, Chungnam, "충청남도 공주시 탄천면"),
    facility("21", "대전교도소", Prison, Daejeon, "대전광역시 중구 보문로 255"),
    facility("22", "대전구치소", DetentionCenter, Daejeon, "대전광역시 유성구"),
    facility("23", "전주교도소", Prison, Jeonbuk, "전라북도 전주시 덕진구"),
    facility("24", "군산교도소", Prison, Jeonbuk, "전라북도 군산시"),
    facility("25", "정읍교도소", Prison, Jeonbuk, "전라북도 정읍시"),
    facility("26", "광주교도소", Prison, Jeonnam, "광주광역시 북구 두암동"),
    facility("27", "목포교도소", Prison, Jeonnam, "전라남도 무안군"),
    facility("28", "순천교도소", Prison, Jeonnam, "전라남도 순천시"),
    facility("29", "해남교도소", Prison, Jeonnam, "전라남도 해남군"),
    facility("30", "장흥교도소", Prison, Jeonnam, "전라남도 장흥군"),
    facility("31", "광주구치소", DetentionCenter, Gwangju, "광주광역시 북구"),
    facility("32", "대구교도소", Prison, Gyeongbuk, "경상북도 경산시 남산면"),
    facility("33", "포항교도소", Prison, Gyeongbuk, "경상북도 포항시 북구"),
    facility("34", "경북북부교도소", Prison, Gyeongbuk, "경상북도 영덕군"),
    facility("35", "김천소년교도소", JuvenileFacility, Gyeongbuk, "경상북도 김천시"),
    facility("36", "안동교도소", Prison, Gyeongbuk, "경상북도 안동시"),
    facility("37", "경북직업훈련교도소", Prison, Gyeongbuk, "경상북도 칠곡군"),
    facility("38", "창원교도소", Prison, Gyeongnam, "경상남도 창원시 성산구"),
    facility("39", "밀양구치소", DetentionCenter, Gyeongnam, "경상남도 밀양시"),
    facility("40", "진주교도소", Prison, Gyeongnam, "경상남도 진주시"),
    facility("41", "통영구치소", DetentionCenter, Gyeongnam, "경상남도 통영시"),
    facility("42", "대구구치소", DetentionCenter, Daegu, "대구광역시 달서구"),
    facility("43", "울산구치소", DetentionCenter, Ulsan, "울산광역시 중구"),
    facility("44", "부산교도소", Prison, Busan, "부산광역시 강서구"),
    facility("45", "부산구치소", DetentionCenter, Busan, "부산광역시 사상구"),
    facility("46", "제주교도소", Prison, Jeju, "제주특별자치도 제주시"),
    facility("47", "서울소년원", JuvenileFacility, Seoul, "서울특별시 노원구"),
    facility("48", "대전소년원", JuvenileFacility, Daejeon, "대전광역시 유성구"),
    facility("49", "대구소년원", JuvenileFacility, Daegu, "대구광역시 달서구"),
    facility("50", "광주소년원", JuvenileFacility, Gwangju, "광주광역시 북구"),
    facility("51", "부산소년원", JuvenileFacility, Busan, "부산광역시 강서구"),
    facility("52", "춘천소년원", JuvenileFacility, Gangwon, "강원도 춘천시"),
    facility("53", "전주소년원", JuvenileFacility, Jeonbuk, "전라북도 전주시"),
    facility("54", "안양소년원", JuvenileFacility, Gyeonggi, "경기도 안양시"),
    facility("55", "청주소년원", JuvenileFacility, Chungbuk, "충청북도 청주시"),
    facility("56", "제주소년원", JuvenileFacility, Jeju, "제주특별자치도 제주시"),
    facility("57", "논산훈련소", MilitaryTraining, Chungnam, "충청남도 논산시 연무읍"),
    facility("58", "육군훈련소", MilitaryTraining, Chungnam, "충청남도 논산시"),
    facility("59", "해군교육사령부", MilitaryTraining, Gyeongnam, "경상남도 창원시 진해구"),
    facility("60", "공군교육사령부", MilitaryTraining, Gyeongnam, "경상남도 진주시"),
    facility("61", "해병대교육훈련단", MilitaryTraining, Gyeongbuk, "경상북도 포항시"),
];

/// A sender address-book entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedAddress {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub address: String,
}

impl SavedAddress {
    /// Creates a new `SavedAddress`.
    #[must_use]
    pub fn new(id: &str, name: &str, phone: &str, address: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            phone: phone.to_string(),
            address: address.to_string(),
        }
    }
}

/// The address book a fresh session starts with.
#[must_use]
pub fn default_saved_addresses() -> Vec<SavedAddress> {
    vec![
        SavedAddress::new("1", "Bang Kyung", "010-1234-5678", "서울시 강남구 테헤란로 123"),
        SavedAddress::new("2", "홍길동", "010-9876-5432", "서울시 종로구 세종대로 100"),
    ]
}

/// A recipient address-book entry.
///
/// Carries only the personal fields; the facility must still be picked
/// through the cascade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressBookMember {
    pub id: String,
    pub name: String,
    pub relation: Option<RelationType>,
    pub identifier_number: Option<String>,
}
