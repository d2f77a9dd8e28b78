//! Newtype codes for type-safe catalog references.
//!
//! Catalog entities (departments, cities, store categories) are identified by
//! string codes such as DANE department codes (`"05"`, `"11"`). Use the
//! `define_code!` macro to create wrappers that prevent mixing codes from
//! different entity types.

/// Macro to define a type-safe string code wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`, `PartialOrd`, `Ord`
/// - Conversion methods: `new()`, `as_str()`, `into_inner()`
/// - `From<&str>`, `From<String>` and `Display` implementations
///
/// # Example
///
/// ```rust
/// # use full_colombiano_core::define_code;
/// define_code!(WarehouseCode);
/// define_code!(ZoneCode);
///
/// let warehouse = WarehouseCode::new("bog-01");
/// let zone = ZoneCode::new("bog-01");
/// assert_eq!(warehouse.as_str(), zone.as_str());
///
/// // These are different types, so this won't compile:
/// // let _: WarehouseCode = zone;
/// ```
#[macro_export]
macro_rules! define_code {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new code from any string-like value.
            #[must_use]
            pub fn new(code: impl Into<String>) -> Self {
                Self(code.into())
            }

            /// Get the code as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the code and return the inner string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(code: &str) -> Self {
                Self(code.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(code: String) -> Self {
                Self(code)
            }
        }

        impl From<$name> for String {
            fn from(code: $name) -> Self {
                code.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

// Catalog codes
define_code!(DepartmentId);
define_code!(CityId);
define_code!(CategoryId);
