//! Value object checks.

use serde::Serialize;

use full_colombiano_core::{Address, AddressDto, AddressError, Email, EmailError};

/// A parsed email address and its parts.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailReport {
    pub email: String,
    pub local_part: String,
    pub domain: String,
}

/// Parse an email address.
///
/// # Errors
///
/// Returns the reason the address was rejected.
pub fn email(value: &str) -> Result<EmailReport, EmailError> {
    let email = Email::parse(value)?;
    Ok(EmailReport {
        local_part: email.local_part().to_string(),
        domain: email.domain().to_string(),
        email: email.into_inner(),
    })
}

/// Build a postal address.
///
/// # Errors
///
/// Returns the first missing required field.
pub fn address(dto: AddressDto) -> Result<Address, AddressError> {
    Address::from_dto(dto)
}
