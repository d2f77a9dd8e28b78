//! Full Colombiano Core - Value objects and shared domain types.
//!
//! This crate provides the types used across all Full Colombiano components:
//! - `storefront` - Marketplace API consumed by the web front-end
//! - `cli` - Command-line tools for querying catalog data and validating input
//!
//! # Architecture
//!
//! The core crate contains only types and validation - no I/O, no HTTP, no
//! async. Every value object validates at construction time and is immutable
//! afterwards; operations return new values.
//!
//! # Modules
//!
//! - [`types`] - Money, email, address, and catalog (geo, category) types

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
