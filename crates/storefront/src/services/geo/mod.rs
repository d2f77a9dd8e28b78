//! Geographic data service (departments and cities).

mod data;

use async_trait::async_trait;
use tracing::instrument;

use full_colombiano_core::{City, CityId, Department, DepartmentId};

use super::{MockLatency, ServiceError};

/// Source of Colombian departments and cities.
#[async_trait]
pub trait GeoService: Send + Sync {
    /// All departments, in catalog order.
    async fn departments(&self) -> Result<Vec<Department>, ServiceError>;

    /// Cities of a department. Unknown departments yield an empty list.
    async fn cities(&self, department_id: &DepartmentId) -> Result<Vec<City>, ServiceError>;
}

/// Geo service answering from the static catalog after a simulated delay.
#[derive(Debug, Clone, Default)]
pub struct MockGeoService {
    latency: MockLatency,
    failure: Option<String>,
}

impl MockGeoService {
    #[must_use]
    pub const fn new(latency: MockLatency) -> Self {
        Self {
            latency,
            failure: None,
        }
    }

    /// A service whose every call fails with `ServiceError::Unavailable`.
    #[must_use]
    pub fn failing(latency: MockLatency, reason: impl Into<String>) -> Self {
        Self {
            latency,
            failure: Some(reason.into()),
        }
    }

    fn check(&self) -> Result<(), ServiceError> {
        self.failure
            .as_ref()
            .map_or(Ok(()), |reason| Err(ServiceError::Unavailable(reason.clone())))
    }
}

#[async_trait]
impl GeoService for MockGeoService {
    #[instrument(skip(self))]
    async fn departments(&self) -> Result<Vec<Department>, ServiceError> {
        self.latency.wait().await;
        self.check()?;

        Ok(data::DEPARTMENTS
            .iter()
            .map(|(id, name)| Department {
                id: DepartmentId::new(*id),
                name: (*name).to_string(),
            })
            .collect())
    }

    #[instrument(skip(self, department_id), fields(department_id = %department_id))]
    async fn cities(&self, department_id: &DepartmentId) -> Result<Vec<City>, ServiceError> {
        self.latency.wait().await;
        self.check()?;

        let cities: Vec<City> = data::CITIES
            .iter()
            .filter(|(_, _, department)| *department == department_id.as_str())
            .map(|(id, name, department)| City {
                id: CityId::new(*id),
                name: (*name).to_string(),
                department_id: DepartmentId::new(*department),
            })
            .collect();

        if cities.is_empty() {
            tracing::debug!("no cities for department");
        }

        Ok(cities)
    }
}
