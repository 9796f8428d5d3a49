//! Bazaar-RS Library
//!
//! Commerce domain slices (favourites, carts, orders, payments, shippings)
//! served over HTTP, with cross-service read composition against peer-owned
//! users, products, carts and orders.

use shadow_rs::shadow;
shadow!(build);

pub mod api;
pub mod cli;
pub mod config;
pub mod db;
pub mod error;
pub mod keys;
pub mod logger;
pub mod models;
pub mod remote;
pub mod repositories;
pub mod schema;
pub mod server;
pub mod services;
pub mod state;
pub mod utils;

pub use state::AppState;

pub fn pkg_version() -> &'static str {
    build::PKG_VERSION
}
