//! Site navigation.

pub use full_colombiano_storefront::routes::paths::navigation;
