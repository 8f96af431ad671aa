// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use crate::phase::Phase;
use crate::step::StepId;
use orange_mail_domain::{
    AddressBookMember, FacilityType, Region, RelationType, SavedAddress, SenderField,
};

/// A command represents user intent as data only.
///
/// Commands are the only way to change a [`crate::ComposeState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Pick (or clear) the facility type. Clears region and facility.
    SetFacilityType(Option<FacilityType>),
    /// Pick (or clear) the region. Clears the facility.
    SetRegion(Option<Region>),
    /// Pick (or clear) a facility from the filtered list.
    SetFacilityId(Option<String>),
    SetRecipientName(String),
    SetIdentifierNumber(String),
    SetRelation(Option<RelationType>),
    SetFreeformAddress(String),
    SetSenderField {
        /// Which sender field to replace.
        field: SenderField,
        /// The new value.
        value: String,
    },
    /// Fill every sender field from the address book.
    SelectSavedSender(SavedAddress),
    /// Prefill recipient personal fields from the address book.
    FillFromAddressBook(AddressBookMember),
    /// Click on a step header.
    ToggleStep(StepId),
    /// Move to the next phase.
    Advance,
    /// Move to the previous phase, or close the wizard from the first.
    Retreat,
    /// Click on a phase chip.
    JumpTo(Phase),
}

impl Command {
    /// Returns the command name used in logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::SetFacilityType(_) => "SetFacilityType",
            Self::SetRegion(_) => "SetRegion",
            Self::SetFacilityId(_) => "SetFacilityId",
            Self::SetRecipientName(_) => "SetRecipientName",
            Self::SetIdentifierNumber(_) => "SetIdentifierNumber",
            Self::SetRelation(_) => "SetRelation",
            Self::SetFreeformAddress(_) => "SetFreeformAddress",
            Self::SetSenderField { .. } => "SetSenderField",
            Self::SelectSavedSender(_) => "SelectSavedSender",
            Self::FillFromAddressBook(_) => "FillFromAddressBook",
            Self::ToggleStep(_) => "ToggleStep",
            Self::Advance => "Advance",
            Self::Retreat => "Retreat",
            Self::JumpTo(_) => "JumpTo",
        }
    }
}

fn optional<T, E>(argument: &str, parse: impl Fn(&str) -> Result<T, E>) -> Result<Option<T>, E> {
    if argument == "none" {
        Ok(None)
    } else {
        parse(argument).map(Some)
    }
}

/// Parses one line of a scripted compose session.
///
/// Each line is a command word followed by an optional argument, e.g.
/// `type 교도소`, `region 서울`, `facility 1`, `name 김철수`, `next`.
/// `none` clears an optional selection. `saved <id>` looks the id up in
/// `saved_addresses`.
///
/// # Errors
///
/// Returns an error if the command word is unknown, a required argument is
/// missing, or the argument does not parse.
pub fn parse_script_line(
    line: &str,
    saved_addresses: &[SavedAddress],
) -> Result<Command, CoreError> {
    let line: &str = line.trim();
    let (word, argument) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(w, a)| (w, a.trim()));

    let require = |argument: &str| -> Result<String, CoreError> {
        if argument.is_empty() {
            Err(CoreError::MissingArgument {
                command: word.to_string(),
            })
        } else {
            Ok(argument.to_string())
        }
    };

    let command: Command = match word {
        "type" => Command::SetFacilityType(optional(&require(argument)?, str::parse)?),
        "region" => Command::SetRegion(optional(&require(argument)?, str::parse)?),
        "facility" => Command::SetFacilityId(optional(&require(argument)?, |id| {
            Ok::<String, CoreError>(id.to_string())
        })?),
        "name" => Command::SetRecipientName(argument.to_string()),
        "number" => Command::SetIdentifierNumber(argument.to_string()),
        "relation" => Command::SetRelation(optional(&require(argument)?, str::parse)?),
        "address" => Command::SetFreeformAddress(argument.to_string()),
        "sender.name" => Command::SetSenderField {
            field: SenderField::Name,
            value: argument.to_string(),
        },
        "sender.phone" => Command::SetSenderField {
            field: SenderField::Phone,
            value: argument.to_string(),
        },
        "sender.address" => Command::SetSenderField {
            field: SenderField::Address,
            value: argument.to_string(),
        },
        "saved" => {
            let id: String = require(argument)?;
            let address: &SavedAddress = saved_addresses
                .iter()
                .find(|a| a.id == id)
                .ok_or(CoreError::UnknownSavedAddress(id))?;
            Command::SelectSavedSender(address.clone())
        }
        "toggle" => Command::ToggleStep(require(argument)?.parse()?),
        "next" => Command::Advance,
        "prev" => Command::Retreat,
        "jump" => {
            let value: String = require(argument)?;
            let number: u8 = value
                .parse()
                .map_err(|_| CoreError::InvalidPhaseNumber(value))?;
            Command::JumpTo(Phase::from_number(number)?)
        }
        other => return Err(CoreError::UnknownCommand(other.to_string())),
    };

    Ok(command)
}
