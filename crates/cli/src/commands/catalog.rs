//! Catalog lookups through the mock data services.

use full_colombiano_core::{City, Department, DepartmentId, StoreCategory};
use full_colombiano_storefront::services::{
    CategoryService, GeoService, MockCategoryService, MockGeoService, MockLatency, ResourceLoader,
    ServiceError,
};

/// Failure to load a catalog. Carries the notice the storefront would show.
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct CatalogError(String);

/// Watch a catalog fetch until it settles.
async fn fetch<T, F>(notice: &'static str, future: F) -> Result<T, CatalogError>
where
    T: Clone + Default + Send + Sync + 'static,
    F: Future<Output = Result<T, ServiceError>> + Send + 'static,
{
    let mut handle = ResourceLoader::watch(notice, future);
    tracing::debug!(loading = handle.current().loading, "fetching catalog");

    let resource = handle.settled().await;
    resource.error.map_or(Ok(resource.data), |notice| Err(CatalogError(notice)))
}

/// All departments.
///
/// # Errors
///
/// Returns an error if the geo service fails.
pub async fn departments(latency: MockLatency) -> Result<Vec<Department>, CatalogError> {
    let geo = MockGeoService::new(latency);
    fetch("No se pudieron cargar los departamentos", async move {
        geo.departments().await
    })
    .await
}

/// Cities of a department. Unknown departments give an empty list.
///
/// # Errors
///
/// Returns an error if the geo service fails.
pub async fn cities(latency: MockLatency, department_id: &str) -> Result<Vec<City>, CatalogError> {
    let geo = MockGeoService::new(latency);
    let department_id = DepartmentId::new(department_id.trim());
    fetch("No se pudieron cargar las ciudades", async move {
        geo.cities(&department_id).await
    })
    .await
}

/// All store categories.
///
/// # Errors
///
/// Returns an error if the category service fails.
pub async fn categories(latency: MockLatency) -> Result<Vec<StoreCategory>, CatalogError> {
    let service = MockCategoryService::new(latency);
    fetch("No se pudieron cargar las categorías", async move {
        service.categories().await
    })
    .await
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_departments() {
        let all = departments(MockLatency::DEFAULT).await.unwrap();
        assert_eq!(all.len(), 24);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cities_trims_the_code() {
        let antioquia = cities(MockLatency::NONE, " 05 ").await.unwrap();
        assert!(antioquia.iter().any(|c| c.name == "Medellín"));
        assert!(cities(MockLatency::NONE, "999").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_failed_fetch_reports_notice() {
        let err = fetch("No se pudieron cargar las ciudades", async {
            Err::<Vec<City>, _>(ServiceError::Unavailable("geo caído".to_string()))
        })
        .await
        .unwrap_err();
        assert_eq!(err.to_string(), "No se pudieron cargar las ciudades");
    }

    #[tokio::test(start_paused = true)]
    async fn test_categories() {
        let all = categories(MockLatency::NONE).await.unwrap();
        assert_eq!(all.len(), 10);
    }
}
