//! Core types for Full Colombiano.
//!
//! This module provides value objects and type-safe wrappers for the
//! marketplace's domain concepts.

pub mod address;
pub mod category;
pub mod email;
pub mod geo;
pub mod id;
pub mod money;

pub use address::{Address, AddressDto, AddressError};
pub use category::StoreCategory;
pub use email::{Email, EmailError};
pub use geo::{City, Department};
pub use id::*;
pub use money::{Currency, Locale, Money, MoneyError};
