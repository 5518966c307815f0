//! Terminal client for managing imóveis (properties) and their cômodos (rooms)
//! through the remote imóvel REST API.

pub mod api;
pub mod config;
pub mod models;
pub mod view;

pub use api::{ApiSettings, HttpPropertyApi, PropertyApi};
pub use config::{load_config, Config};
pub use view::ViewController;
