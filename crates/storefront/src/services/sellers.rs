//! Seller application registry.

use std::collections::HashMap;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::SellerApplication;

/// Errors from the seller registry.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SellerError {
    /// The account already submitted an application.
    #[error("an application already exists for this account")]
    AlreadyApplied,
}

/// In-memory store of seller applications, one per account.
#[derive(Default)]
pub struct SellerRegistry {
    applications: RwLock<HashMap<Uuid, SellerApplication>>,
}

impl SellerRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an application.
    ///
    /// # Errors
    ///
    /// Returns `SellerError::AlreadyApplied` if the account already applied.
    pub async fn submit(&self, application: SellerApplication) -> Result<(), SellerError> {
        let mut applications = self.applications.write().await;
        if applications.contains_key(&application.account_id) {
            return Err(SellerError::AlreadyApplied);
        }
        tracing::info!(
            account_id = %application.account_id,
            store_name = %application.store_name,
            "seller application submitted"
        );
        applications.insert(application.account_id, application);
        Ok(())
    }

    /// The application submitted by an account, if any.
    pub async fn for_account(&self, account_id: Uuid) -> Option<SellerApplication> {
        self.applications.read().await.get(&account_id).cloned()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use full_colombiano_core::{Address, AddressDto, CategoryId, CityId, DepartmentId, Email};

    use super::*;

    fn application(account_id: Uuid) -> SellerApplication {
        SellerApplication {
            id: Uuid::new_v4(),
            account_id,
            store_name: "Sombreros Vueltiao".to_string(),
            owner_name: "Rafael Martínez".to_string(),
            contact_email: Email::parse("rafa@vueltiao.co").unwrap(),
            phone: "3004445566".to_string(),
            category_id: CategoryId::new("3"),
            department_id: DepartmentId::new("23"),
            city_id: CityId::new("23001"),
            address: Address::from_dto(AddressDto {
                street: "Carrera 3 # 27-10".to_string(),
                city: "Montería".to_string(),
                state: "Córdoba".to_string(),
                ..AddressDto::default()
            })
            .unwrap(),
            description: None,
        }
    }

    #[tokio::test]
    async fn test_one_application_per_account() {
        let registry = SellerRegistry::new();
        let account_id = Uuid::new_v4();

        registry.submit(application(account_id)).await.unwrap();
        assert_eq!(
            registry.submit(application(account_id)).await,
            Err(SellerError::AlreadyApplied)
        );

        registry.submit(application(Uuid::new_v4())).await.unwrap();
    }

    #[tokio::test]
    async fn test_for_account() {
        let registry = SellerRegistry::new();
        let account_id = Uuid::new_v4();
        assert!(registry.for_account(account_id).await.is_none());

        let submitted = application(account_id);
        registry.submit(submitted.clone()).await.unwrap();
        assert_eq!(registry.for_account(account_id).await, Some(submitted));
    }
}
