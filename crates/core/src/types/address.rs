//! Postal address value object.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when building an [`Address`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
    /// A required field is missing or blank.
    #[error("address {0} is required")]
    MissingField(&'static str),
}

/// Plain data form of an [`Address`], used at serialization boundaries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressDto {
    #[serde(default)]
    pub street: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip_code: Option<String>,
    #[serde(default)]
    pub country: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_info: Option<String>,
}

/// A validated postal address.
///
/// Street, city and state (department) are required. Country defaults to
/// Colombia. Values are trimmed; blank optional fields are dropped.
///
/// ```
/// use full_colombiano_core::{Address, AddressDto};
///
/// let address = Address::from_dto(AddressDto {
///     street: "Calle 10 # 43-12".into(),
///     city: "Medellín".into(),
///     state: "Antioquia".into(),
///     ..AddressDto::default()
/// })
/// .unwrap();
///
/// assert_eq!(address.to_string(), "Calle 10 # 43-12, Medellín, Antioquia, Colombia");
/// assert_eq!(Address::from_dto(address.to_dto()).unwrap(), address);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "AddressDto", into = "AddressDto")]
pub struct Address {
    street: String,
    city: String,
    state: String,
    zip_code: Option<String>,
    country: String,
    additional_info: Option<String>,
}

impl Address {
    /// Country used when none is given.
    pub const DEFAULT_COUNTRY: &'static str = "Colombia";

    /// Build an address from its plain data form.
    ///
    /// # Errors
    ///
    /// Returns `AddressError::MissingField` if street, city or state is blank.
    pub fn from_dto(dto: AddressDto) -> Result<Self, AddressError> {
        let street = required(dto.street, "street")?;
        let city = required(dto.city, "city")?;
        let state = required(dto.state, "state")?;
        let country =
            optional(Some(dto.country)).unwrap_or_else(|| Self::DEFAULT_COUNTRY.to_owned());

        Ok(Self {
            street,
            city,
            state,
            zip_code: optional(dto.zip_code),
            country,
            additional_info: optional(dto.additional_info),
        })
    }

    /// Plain data form of this address.
    #[must_use]
    pub fn to_dto(&self) -> AddressDto {
        AddressDto {
            street: self.street.clone(),
            city: self.city.clone(),
            state: self.state.clone(),
            zip_code: self.zip_code.clone(),
            country: self.country.clone(),
            additional_info: self.additional_info.clone(),
        }
    }

    #[must_use]
    pub fn street(&self) -> &str {
        &self.street
    }

    #[must_use]
    pub fn city(&self) -> &str {
        &self.city
    }

    #[must_use]
    pub fn state(&self) -> &str {
        &self.state
    }

    #[must_use]
    pub fn zip_code(&self) -> Option<&str> {
        self.zip_code.as_deref()
    }

    #[must_use]
    pub fn country(&self) -> &str {
        &self.country
    }

    #[must_use]
    pub fn additional_info(&self) -> Option<&str> {
        self.additional_info.as_deref()
    }
}

impl TryFrom<AddressDto> for Address {
    type Error = AddressError;

    fn try_from(dto: AddressDto) -> Result<Self, Self::Error> {
        Self::from_dto(dto)
    }
}

impl From<Address> for AddressDto {
    fn from(address: Address) -> Self {
        Self {
            street: address.street,
            city: address.city,
            state: address.state,
            zip_code: address.zip_code,
            country: address.country,
            additional_info: address.additional_info,
        }
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts = [
            Some(self.street.as_str()),
            Some(self.city.as_str()),
            Some(self.state.as_str()),
            self.zip_code.as_deref(),
            Some(self.country.as_str()),
        ];
        let line = parts.into_iter().flatten().collect::<Vec<_>>().join(", ");
        f.write_str(&line)
    }
}

fn required(value: String, field: &'static str) -> Result<String, AddressError> {
    optional(Some(value)).ok_or(AddressError::MissingField(field))
}

fn optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn bogota() -> AddressDto {
        AddressDto {
            street: "Carrera 7 # 71-21".to_string(),
            city: "Bogotá".to_string(),
            state: "Bogotá D.C.".to_string(),
            zip_code: Some("110231".to_string()),
            country: "Colombia".to_string(),
            additional_info: Some("Torre B, oficina 502".to_string()),
        }
    }

    #[test]
    fn test_valid_address_round_trips_through_dto() {
        let samples = [
            ("Calle 1", "Cali", "Valle del Cauca"),
            ("Cra 50 # 10-20", "Pasto", "Nariño"),
            ("Vereda La Esperanza", "Guatapé", "Antioquia"),
        ];
        for (street, city, state) in samples {
            let address = Address::from_dto(AddressDto {
                street: street.to_string(),
                city: city.to_string(),
                state: state.to_string(),
                ..AddressDto::default()
            })
            .unwrap();
            assert_eq!(Address::from_dto(address.to_dto()).unwrap(), address);
        }

        let full = Address::from_dto(bogota()).unwrap();
        assert_eq!(full.to_dto(), bogota());
    }

    #[test]
    fn test_missing_required_fields() {
        let mut dto = bogota();
        dto.street = "  ".to_string();
        assert_eq!(
            Address::from_dto(dto),
            Err(AddressError::MissingField("street"))
        );

        let mut dto = bogota();
        dto.city = String::new();
        assert_eq!(
            Address::from_dto(dto),
            Err(AddressError::MissingField("city"))
        );

        let mut dto = bogota();
        dto.state = String::new();
        assert_eq!(
            Address::from_dto(dto),
            Err(AddressError::MissingField("state"))
        );
    }

    #[test]
    fn test_country_defaults_to_colombia() {
        let mut dto = bogota();
        dto.country = String::new();
        let address = Address::from_dto(dto).unwrap();
        assert_eq!(address.country(), "Colombia");
    }

    #[test]
    fn test_blank_optionals_are_dropped() {
        let mut dto = bogota();
        dto.zip_code = Some("   ".to_string());
        dto.additional_info = Some(String::new());
        let address = Address::from_dto(dto).unwrap();
        assert_eq!(address.zip_code(), None);
        assert_eq!(address.additional_info(), None);
    }

    #[test]
    fn test_display_joins_present_parts() {
        let address = Address::from_dto(bogota()).unwrap();
        assert_eq!(
            address.to_string(),
            "Carrera 7 # 71-21, Bogotá, Bogotá D.C., 110231, Colombia"
        );

        let mut dto = bogota();
        dto.zip_code = None;
        let address = Address::from_dto(dto).unwrap();
        assert_eq!(
            address.to_string(),
            "Carrera 7 # 71-21, Bogotá, Bogotá D.C., Colombia"
        );
    }

    #[test]
    fn test_serde_uses_camel_case_and_validates() {
        let address = Address::from_dto(bogota()).unwrap();
        let json = serde_json::to_value(&address).unwrap();
        assert_eq!(json["zipCode"], "110231");
        assert_eq!(json["additionalInfo"], "Torre B, oficina 502");

        let parsed: Address = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, address);

        let invalid = serde_json::json!({ "street": "", "city": "Cali", "state": "Valle" });
        assert!(serde_json::from_value::<Address>(invalid).is_err());
    }
}
