//! Form schemas for login, registration and seller onboarding.
//!
//! Each form is the raw JSON body the front-end submits, read with the
//! [`FormJson`] extractor. Field rules are declared with `validator`;
//! `into_*` methods run them and then build the domain values, so
//! value-object errors (email shape, missing address fields) come back as
//! field errors too. Errors are keyed by the camelCase names the front-end
//! sends.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use axum::{
    Json,
    extract::{FromRequest, Request},
};
use regex::Regex;
use secrecy::SecretString;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use uuid::Uuid;
use validator::{Validate, ValidationError, ValidationErrors};

use full_colombiano_core::{
    Address, AddressDto, AddressError, CategoryId, CityId, DepartmentId, Email,
};

use crate::error::AppError;
use crate::models::{NewAccount, SellerApplication};

/// Person names: letters (accents included), spaces, apostrophes, dots and hyphens.
static NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\p{L}[\p{L} '.-]*$").expect("name regex is valid"));

/// Colombian mobile number, optionally prefixed with +57.
static PHONE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\+57)?3\d{9}$").expect("phone regex is valid"));

// =============================================================================
// Extraction
// =============================================================================

/// JSON form body whose rejection renders as an [`AppError`] body.
///
/// # Example
///
/// ```rust,ignore
/// async fn login(FormJson(form): FormJson<LoginForm>) -> Result<Json<CurrentUser>> {
///     // ...
/// }
/// ```
pub struct FormJson<T>(pub T);

impl<S, T> FromRequest<S> for FormJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(form) = Json::<T>::from_request(req, state).await?;
        Ok(Self(form))
    }
}

// =============================================================================
// Field Errors
// =============================================================================

/// Field name -> messages, as rendered next to each input.
///
/// Field names are stored in camelCase (`address.zip_code` becomes
/// `address.zipCode`) so they match the keys of the submitted body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FormErrors(BTreeMap<String, Vec<String>>);

impl FormErrors {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A single error on one field.
    #[must_use]
    pub fn single(field: &str, message: &str) -> Self {
        let mut errors = Self::new();
        errors.add(field, message);
        errors
    }

    pub fn add(&mut self, field: &str, message: &str) {
        self.0
            .entry(wire_name(field))
            .or_default()
            .push(message.to_string());
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Messages for one field, by its camelCase name.
    #[must_use]
    pub fn messages(&self, field: &str) -> &[String] {
        self.0.get(field).map_or(&[], Vec::as_slice)
    }

    /// Field names with at least one error.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Merge another set of errors into this one.
    pub fn extend(&mut self, other: Self) {
        for (field, messages) in other.0 {
            self.0.entry(field).or_default().extend(messages);
        }
    }

    /// `Ok(value)` when there are no errors.
    ///
    /// # Errors
    ///
    /// Returns `self` if any field has an error.
    pub fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() { Ok(value) } else { Err(self) }
    }
}

impl From<ValidationErrors> for FormErrors {
    fn from(errors: ValidationErrors) -> Self {
        let mut form_errors = Self::new();
        for (field, field_errors) in errors.field_errors() {
            for error in field_errors {
                let message = error
                    .message
                    .as_ref()
                    .map_or_else(|| error.code.to_string(), ToString::to_string);
                form_errors.add(&field, &message);
            }
        }
        form_errors
    }
}

/// camelCase form of a snake_case field path.
fn wire_name(field: &str) -> String {
    let mut name = String::with_capacity(field.len());
    let mut upper = false;
    for c in field.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            name.extend(c.to_uppercase());
            upper = false;
        } else {
            name.push(c);
        }
    }
    name
}

fn validate_fields(form: &impl Validate) -> FormErrors {
    form.validate().map_or_else(FormErrors::from, |()| FormErrors::new())
}

// =============================================================================
// Custom Rules
// =============================================================================

fn email_shape(value: &str) -> Result<(), ValidationError> {
    Email::parse(value)
        .map(|_| ())
        .map_err(|_| ValidationError::new("email").with_message("Correo electrónico inválido".into()))
}

fn colombian_phone(value: &str) -> Result<(), ValidationError> {
    if PHONE_REGEX.is_match(&normalize_phone(value)) {
        Ok(())
    } else {
        Err(ValidationError::new("phone")
            .with_message("Ingresa un celular colombiano de 10 dígitos".into()))
    }
}

fn password_strength(value: &str) -> Result<(), ValidationError> {
    let has_letter = value.chars().any(char::is_alphabetic);
    let has_digit = value.chars().any(|c| c.is_ascii_digit());
    if has_letter && has_digit {
        Ok(())
    } else {
        Err(ValidationError::new("password_strength")
            .with_message("La contraseña debe tener letras y números".into()))
    }
}

fn must_be_true(value: &bool) -> Result<(), ValidationError> {
    if *value {
        Ok(())
    } else {
        Err(ValidationError::new("accept_terms")
            .with_message("Debes aceptar los términos y condiciones".into()))
    }
}

/// Strip spaces, dashes and parentheses from a phone number.
fn normalize_phone(value: &str) -> String {
    value
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '(' | ')'))
        .collect()
}

// =============================================================================
// Login
// =============================================================================

/// Login form data.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginForm {
    #[validate(custom(function = "email_shape"))]
    pub email: String,
    #[validate(length(min = 1, message = "Ingresa tu contraseña"))]
    pub password: String,
}

impl LoginForm {
    /// Validate and split into an email and a secret password.
    ///
    /// # Errors
    ///
    /// Returns field errors if the form is invalid.
    pub fn into_credentials(self) -> Result<(Email, SecretString), FormErrors> {
        let errors = validate_fields(&self);
        let email = match Email::parse(&self.email) {
            Ok(email) => email,
            Err(_) => return Err(errors),
        };
        errors.into_result((email, SecretString::from(self.password)))
    }
}

// =============================================================================
// Registration
// =============================================================================

/// Registration form data.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterForm {
    #[validate(
        length(min = 2, max = 50, message = "El nombre debe tener entre 2 y 50 caracteres"),
        regex(path = "*NAME_REGEX", message = "El nombre solo puede contener letras")
    )]
    pub first_name: String,
    #[validate(
        length(min = 2, max = 50, message = "El apellido debe tener entre 2 y 50 caracteres"),
        regex(path = "*NAME_REGEX", message = "El apellido solo puede contener letras")
    )]
    pub last_name: String,
    #[validate(custom(function = "email_shape"))]
    pub email: String,
    #[validate(custom(function = "colombian_phone"))]
    pub phone: String,
    #[validate(
        length(min = 8, message = "La contraseña debe tener al menos 8 caracteres"),
        custom(function = "password_strength")
    )]
    pub password: String,
    #[validate(must_match(other = "password", message = "Las contraseñas no coinciden"))]
    pub password_confirmation: String,
    #[serde(default)]
    #[validate(custom(function = "must_be_true"))]
    pub accept_terms: bool,
}

impl RegisterForm {
    /// Validate and build the account to create.
    ///
    /// # Errors
    ///
    /// Returns field errors if the form is invalid.
    pub fn into_new_account(self) -> Result<NewAccount, FormErrors> {
        let errors = validate_fields(&self);
        let email = match Email::parse(&self.email) {
            Ok(email) => email,
            Err(_) => return Err(errors),
        };

        errors.into_result(NewAccount {
            email,
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            phone: normalize_phone(&self.phone),
            password: SecretString::from(self.password),
        })
    }
}

// =============================================================================
// Seller Onboarding
// =============================================================================

/// Seller onboarding form data.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SellerApplicationForm {
    #[validate(length(min = 3, max = 80, message = "El nombre de la tienda debe tener entre 3 y 80 caracteres"))]
    pub store_name: String,
    #[validate(
        length(min = 2, max = 100, message = "Ingresa el nombre del responsable"),
        regex(path = "*NAME_REGEX", message = "El nombre solo puede contener letras")
    )]
    pub owner_name: String,
    #[validate(custom(function = "email_shape"))]
    pub email: String,
    #[validate(custom(function = "colombian_phone"))]
    pub phone: String,
    #[validate(length(min = 1, message = "Selecciona una categoría"))]
    pub category_id: String,
    #[validate(length(min = 1, message = "Selecciona un departamento"))]
    pub department_id: String,
    #[validate(length(min = 1, message = "Selecciona una ciudad"))]
    pub city_id: String,
    #[serde(default)]
    pub address: AddressDto,
    #[validate(length(max = 500, message = "La descripción no puede superar 500 caracteres"))]
    pub description: Option<String>,
}

impl SellerApplicationForm {
    /// Validate and build the application for an account.
    ///
    /// Catalog references (category, department, city) are only checked for
    /// presence here; the route checks them against the catalog services.
    ///
    /// # Errors
    ///
    /// Returns field errors if the form is invalid.
    pub fn into_application(self, account_id: Uuid) -> Result<SellerApplication, FormErrors> {
        let mut errors = validate_fields(&self);

        let address = match Address::from_dto(self.address) {
            Ok(address) => Some(address),
            Err(AddressError::MissingField(field)) => {
                errors.add(&format!("address.{field}"), "Este campo es obligatorio");
                None
            }
        };

        let (Ok(contact_email), Some(address)) = (Email::parse(&self.email), address) else {
            return Err(errors);
        };

        errors.into_result(SellerApplication {
            id: Uuid::new_v4(),
            account_id,
            store_name: self.store_name.trim().to_string(),
            owner_name: self.owner_name.trim().to_string(),
            contact_email,
            phone: normalize_phone(&self.phone),
            category_id: CategoryId::new(self.category_id.trim()),
            department_id: DepartmentId::new(self.department_id.trim()),
            city_id: CityId::new(self.city_id.trim()),
            address,
            description: self
                .description
                .map(|d| d.trim().to_string())
                .filter(|d| !d.is_empty()),
        })
    }
}
