//! Domain models for the storefront.

pub mod account;
pub mod session;

pub use account::{Account, NewAccount, SellerApplication};
pub use session::{CurrentUser, keys as session_keys};
