// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;

/// Validates a quick special-day letter before it is handed off for sending.
///
/// # Arguments
///
/// * `recipient` - Who the letter is addressed to
/// * `message` - The letter body
///
/// # Returns
///
/// * `Ok(())` if both fields are filled in
/// * `Err(DomainError::MissingLetterField)` naming the first blank field
///
/// # Errors
///
/// Returns an error if:
/// - The recipient is blank
/// - The message is blank
pub fn validate_special_day_letter(recipient: &str, message: &str) -> Result<(), DomainError> {
    // Rule: recipient must not be empty
    if recipient.trim().is_empty() {
        return Err(DomainError::MissingLetterField { field: "recipient" });
    }

    // Rule: message must not be empty
    if message.trim().is_empty() {
        return Err(DomainError::MissingLetterField { field: "message" });
    }

    Ok(())
}
