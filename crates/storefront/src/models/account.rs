//! Account and seller application domain types.
//!
//! These types hold validated domain values; raw request bodies live in
//! [`crate::forms`].

use secrecy::SecretString;
use serde::Serialize;
use uuid::Uuid;

use full_colombiano_core::{Address, CategoryId, CityId, DepartmentId, Email};

/// A marketplace account (shopper or seller).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: Uuid,
    pub email: Email,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    /// Whether the account has an accepted seller application.
    pub is_seller: bool,
}

impl Account {
    /// Full display name.
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Validated registration data.
#[derive(Debug)]
pub struct NewAccount {
    pub email: Email,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub password: SecretString,
}

/// A validated seller onboarding application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SellerApplication {
    pub id: Uuid,
    pub account_id: Uuid,
    pub store_name: String,
    pub owner_name: String,
    pub contact_email: Email,
    pub phone: String,
    pub category_id: CategoryId,
    pub department_id: DepartmentId,
    pub city_id: CityId,
    pub address: Address,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
