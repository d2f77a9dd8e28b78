//! Route paths used by the front-end navigation.
//!
//! Every link the site renders comes from here so pages can move without
//! hunting for string literals.

use std::fmt::Display;

use serde::Serialize;

pub const HOME: &str = "/";
pub const MARKETPLACE: &str = "/marketplace";
pub const SELLER_APPLY: &str = "/sellers/apply";
pub const BLOG: &str = "/blog";
pub const PRIVACY_POLICY: &str = "/privacy-policy";
pub const COOKIES: &str = "/cookies";

/// Authentication pages.
pub mod auth {
    pub const LOGIN: &str = "/auth/login";
    pub const REGISTER: &str = "/auth/register";
}

/// Seller dashboard pages.
pub mod dashboard {
    pub const PRODUCTS: &str = "/d/products";
    pub const ORDERS: &str = "/d/orders";
    pub const STORE: &str = "/d/store";
}

/// Detail page of one product in the seller dashboard.
#[must_use]
pub fn dashboard_product(id: impl Display) -> String {
    format!("{}/{id}", dashboard::PRODUCTS)
}

/// A labelled link in a menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

const fn link(label: &'static str, href: &'static str) -> NavLink {
    NavLink { label, href }
}

const MAIN_MENU: &[NavLink] = &[
    link("Inicio", HOME),
    link("Marketplace", MARKETPLACE),
    link("Vende con nosotros", SELLER_APPLY),
    link("Blog", BLOG),
];

const DASHBOARD_MENU: &[NavLink] = &[
    link("Productos", dashboard::PRODUCTS),
    link("Pedidos", dashboard::ORDERS),
    link("Mi tienda", dashboard::STORE),
];

const ACCOUNT_MENU: &[NavLink] = &[
    link("Iniciar sesión", auth::LOGIN),
    link("Crear cuenta", auth::REGISTER),
];

const LEGAL_MENU: &[NavLink] = &[
    link("Política de privacidad", PRIVACY_POLICY),
    link("Cookies", COOKIES),
];

/// Every menu the site renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Navigation {
    pub main: &'static [NavLink],
    pub dashboard: &'static [NavLink],
    pub account: &'static [NavLink],
    pub legal: &'static [NavLink],
}

/// The site menus.
#[must_use]
pub const fn navigation() -> Navigation {
    Navigation {
        main: MAIN_MENU,
        dashboard: DASHBOARD_MENU,
        account: ACCOUNT_MENU,
        legal: LEGAL_MENU,
    }
}
