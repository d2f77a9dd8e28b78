//! Full Colombiano storefront library.
//!
//! JSON API backing the marketplace front-end: catalog lookups served as
//! `{data, loading, error}` resources, account registration and login, and
//! seller onboarding. The crate is a library so the router can be tested
//! and reused; `main.rs` only wires it to a socket.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod forms;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
