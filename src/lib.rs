pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use app::server::{router, serve, AppState};
pub use config::{CliConfig, TomlConfig};
pub use core::catalog::InMemoryCatalog;
pub use core::scan::CatalogScanner;
pub use core::world::WorldList;
pub use utils::error::{PkgscanError, Result};
