pub mod toml_config;

use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

pub use toml_config::TomlConfig;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "pkgscan")]
#[command(about = "Package catalog web service with world-list scanning")]
pub struct CliConfig {
    #[arg(long, default_value = "127.0.0.1:8000")]
    pub bind: String,

    #[arg(long, help = "Path to the catalog file (.json or .toml)")]
    pub catalog: Option<String>,

    #[arg(long, help = "Path to an optional TOML configuration file")]
    pub config: Option<String>,

    #[arg(long, default_value = "1000")]
    pub max_world_entries: usize,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

impl CliConfig {
    /// Overlay file-based settings: CLI flags win where both are present,
    /// except that defaults yield to explicit file values.
    pub fn merged_with(self, file: &TomlConfig) -> Self {
        let mut merged = self;
        if merged.bind == "127.0.0.1:8000" {
            if let Some(bind) = file.server.as_ref().and_then(|s| s.bind.clone()) {
                merged.bind = bind;
            }
        }
        if merged.catalog.is_none() {
            merged.catalog = file.catalog.as_ref().map(|c| c.path.clone());
        }
        if merged.max_world_entries == 1000 {
            if let Some(max) = file.scan.as_ref().and_then(|s| s.max_world_entries) {
                merged.max_world_entries = max;
            }
        }
        merged
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_bind_addr("bind", &self.bind)?;
        if let Some(catalog) = &self.catalog {
            validation::validate_path("catalog", catalog)?;
        }
        validation::validate_positive_number("max_world_entries", self.max_world_entries, 1)?;
        Ok(())
    }
}
