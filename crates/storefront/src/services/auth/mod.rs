//! Account store for password authentication.
//!
//! The store is owned by [`crate::state::AppState`] and handed to handlers
//! explicitly; there is no process-wide auth singleton. Accounts live in
//! memory until the real backend's account API is wired in.

mod error;

pub use error::AuthError;

use std::collections::HashMap;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use secrecy::{ExposeSecret, SecretString};
use tokio::sync::RwLock;
use tracing::instrument;
use uuid::Uuid;

use full_colombiano_core::Email;

use crate::models::{Account, NewAccount};

struct StoredAccount {
    account: Account,
    password_hash: String,
}

/// In-memory account store.
#[derive(Default)]
pub struct AuthStore {
    accounts: RwLock<HashMap<Email, StoredAccount>>,
}

impl AuthStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new account.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::AccountExists` if the email is already registered.
    #[instrument(skip(self, new_account), fields(email = %new_account.email))]
    pub async fn register(&self, new_account: NewAccount) -> Result<Account, AuthError> {
        // Hashed before the write lock is taken
        let password_hash = hash_password(&new_account.password)?;

        let mut accounts = self.accounts.write().await;
        if accounts.contains_key(&new_account.email) {
            return Err(AuthError::AccountExists);
        }

        let account = Account {
            id: Uuid::new_v4(),
            email: new_account.email,
            first_name: new_account.first_name,
            last_name: new_account.last_name,
            phone: new_account.phone,
            is_seller: false,
        };

        accounts.insert(
            account.email.clone(),
            StoredAccount {
                account: account.clone(),
                password_hash,
            },
        );
        tracing::info!(account_id = %account.id, "account registered");

        Ok(account)
    }

    /// Login with email and password.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` if the email/password is wrong.
    #[instrument(skip(self, password), fields(email = %email))]
    pub async fn login(&self, email: &Email, password: &SecretString) -> Result<Account, AuthError> {
        let (account, password_hash) = {
            let accounts = self.accounts.read().await;
            let stored = accounts.get(email).ok_or(AuthError::InvalidCredentials)?;
            (stored.account.clone(), stored.password_hash.clone())
        };

        verify_password(password, &password_hash)?;

        Ok(account)
    }

    /// Look up an account by ID.
    pub async fn find(&self, id: Uuid) -> Option<Account> {
        self.accounts
            .read()
            .await
            .values()
            .find(|stored| stored.account.id == id)
            .map(|stored| stored.account.clone())
    }

    /// Mark an account as a seller.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::AccountNotFound` if no account has this ID.
    pub async fn promote_to_seller(&self, id: Uuid) -> Result<Account, AuthError> {
        let mut accounts = self.accounts.write().await;
        let stored = accounts
            .values_mut()
            .find(|stored| stored.account.id == id)
            .ok_or(AuthError::AccountNotFound)?;

        stored.account.is_seller = true;
        Ok(stored.account.clone())
    }
}

/// Hash a password using Argon2id.
fn hash_password(password: &SecretString) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.expose_secret().as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| AuthError::PasswordHash)
}

/// Verify a password against a hash.
fn verify_password(password: &SecretString, hash: &str) -> Result<(), AuthError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|_| AuthError::InvalidCredentials)?;
    let argon2 = Argon2::default();

    argon2
        .verify_password(password.expose_secret().as_bytes(), &parsed_hash)
        .map_err(|_| AuthError::InvalidCredentials)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn new_account(email: &str, password: &str) -> NewAccount {
        NewAccount {
            email: Email::parse(email).unwrap(),
            first_name: "Camila".to_string(),
            last_name: "Restrepo".to_string(),
            phone: "3001234567".to_string(),
            password: SecretString::from(password),
        }
    }

    #[tokio::test]
    async fn test_register_then_login() {
        let store = AuthStore::new();
        let account = store
            .register(new_account("camila@example.com", "cafe2024"))
            .await
            .unwrap();
        assert!(!account.is_seller);

        let email = Email::parse("camila@example.com").unwrap();
        let logged_in = store
            .login(&email, &SecretString::from("cafe2024"))
            .await
            .unwrap();
        assert_eq!(logged_in, account);
    }

    #[tokio::test]
    async fn test_duplicate_registration_rejected() {
        let store = AuthStore::new();
        store
            .register(new_account("camila@example.com", "cafe2024"))
            .await
            .unwrap();

        let err = store
            .register(new_account("camila@example.com", "otra2024"))
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::AccountExists));
    }

    #[tokio::test]
    async fn test_concurrent_registrations_of_one_email() {
        let store = AuthStore::new();
        let (first, second) = tokio::join!(
            store.register(new_account("doble@example.com", "cafe2024")),
            store.register(new_account("doble@example.com", "cafe2025")),
        );

        assert_eq!(usize::from(first.is_ok()) + usize::from(second.is_ok()), 1);
        assert!(
            matches!(first, Err(AuthError::AccountExists))
                || matches!(second, Err(AuthError::AccountExists))
        );
    }

    #[tokio::test]
    async fn test_wrong_password_and_unknown_email() {
        let store = AuthStore::new();
        store
            .register(new_account("camila@example.com", "cafe2024"))
            .await
            .unwrap();

        let email = Email::parse("camila@example.com").unwrap();
        let err = store
            .login(&email, &SecretString::from("wrong-pass1"))
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));

        let stranger = Email::parse("nadie@example.com").unwrap();
        let err = store
            .login(&stranger, &SecretString::from("cafe2024"))
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_promote_to_seller() {
        let store = AuthStore::new();
        let account = store
            .register(new_account("tienda@example.com", "cafe2024"))
            .await
            .unwrap();

        let promoted = store.promote_to_seller(account.id).await.unwrap();
        assert!(promoted.is_seller);
        assert!(store.find(account.id).await.unwrap().is_seller);

        assert!(matches!(
            store.promote_to_seller(Uuid::new_v4()).await,
            Err(AuthError::AccountNotFound)
        ));
    }
}
