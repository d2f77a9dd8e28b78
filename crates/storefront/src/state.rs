//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::StorefrontConfig;
use crate::services::auth::AuthStore;
use crate::services::{
    CategoryService, GeoService, MockCategoryService, MockGeoService, MockLatency, SellerRegistry,
};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// data services, the account store and configuration.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    geo: Arc<dyn GeoService>,
    categories: Arc<dyn CategoryService>,
    auth: AuthStore,
    sellers: SellerRegistry,
}

impl AppState {
    /// Create application state backed by the mock data services.
    ///
    /// The mocks answer after `config.mock_latency`.
    #[must_use]
    pub fn new(config: StorefrontConfig) -> Self {
        let latency = MockLatency::new(config.mock_latency);
        Self::with_services(
            config,
            Arc::new(MockGeoService::new(latency)),
            Arc::new(MockCategoryService::new(latency)),
        )
    }

    /// Create application state with explicit data services.
    #[must_use]
    pub fn with_services(
        config: StorefrontConfig,
        geo: Arc<dyn GeoService>,
        categories: Arc<dyn CategoryService>,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                geo,
                categories,
                auth: AuthStore::new(),
                sellers: SellerRegistry::new(),
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Shared handle to the geographic data service.
    #[must_use]
    pub fn geo(&self) -> Arc<dyn GeoService> {
        Arc::clone(&self.inner.geo)
    }

    /// Shared handle to the store category service.
    #[must_use]
    pub fn categories(&self) -> Arc<dyn CategoryService> {
        Arc::clone(&self.inner.categories)
    }

    /// Get a reference to the account store.
    #[must_use]
    pub fn auth(&self) -> &AuthStore {
        &self.inner.auth
    }

    /// Get a reference to the seller application registry.
    #[must_use]
    pub fn sellers(&self) -> &SellerRegistry {
        &self.inner.sellers
    }
}
