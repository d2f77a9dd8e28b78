//! Session-related types.
//!
//! Types stored in the session for authentication state.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use full_colombiano_core::Email;

use super::Account;

/// Session-stored user identity.
///
/// Minimal data stored in the session to identify the logged-in account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUser {
    /// Account ID.
    pub id: Uuid,
    /// Account email address.
    pub email: Email,
    /// Display name.
    pub name: String,
    /// Whether the account can manage a store.
    pub is_seller: bool,
}

impl From<&Account> for CurrentUser {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id,
            email: account.email.clone(),
            name: account.display_name(),
            is_seller: account.is_seller,
        }
    }
}

/// Session keys for authentication data.
pub mod keys {
    /// Key for storing the current logged-in user.
    pub const CURRENT_USER: &str = "current_user";
}
