//! Data services for the storefront.
//!
//! # Services
//!
//! - `geo` - Colombian departments and cities
//! - `categories` - Store categories for seller onboarding and filters
//! - `resource` - Loader that turns a service call into a `{data, loading, error}` resource
//! - `auth` - In-memory account store for login and registration
//! - `sellers` - Seller onboarding applications
//!
//! The geo and category services are traits so the mock implementations,
//! which answer from static data after an artificial delay, can be replaced
//! by real API clients without touching the routes.

pub mod auth;
pub mod categories;
mod error;
pub mod geo;
mod latency;
pub mod resource;
pub mod sellers;

pub use categories::{CategoryService, MockCategoryService};
pub use error::ServiceError;
pub use geo::{GeoService, MockGeoService};
pub use latency::MockLatency;
pub use resource::{Resource, ResourceHandle, ResourceLoader};
pub use sellers::{SellerError, SellerRegistry};
