//! # API crate: the REST side of the user manager
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | `USERS_API_URL` lookup and validation ([`ApiConfig`]) |
//! | [`client`] | [`HttpUserStore`], the reqwest implementation of [`store::UserStore`] |

pub mod client;
pub mod config;

pub use client::HttpUserStore;
pub use config::{ApiConfig, ConfigError, API_URL_VAR};
