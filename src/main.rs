use anyhow::Context;
use clap::Parser;
use pkgscan::adapters::catalog_file;
use pkgscan::utils::{logger, validation::Validate};
use pkgscan::{AppState, CliConfig, InMemoryCatalog, TomlConfig};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mut config = CliConfig::parse();

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting pkgscan");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 合併 TOML 配置
    if let Some(path) = config.config.clone() {
        let file_config = TomlConfig::from_file(&path)
            .with_context(|| format!("failed to load config file {}", path))?;
        if let Err(e) = file_config.validate() {
            tracing::error!("Configuration file validation failed: {}", e);
            std::process::exit(1);
        }
        config = config.merged_with(&file_config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }

    let catalog = match &config.catalog {
        Some(path) => {
            catalog_file::load_catalog(path).with_context(|| format!("failed to load catalog {}", path))?
        }
        None => {
            tracing::warn!("No catalog file given, serving an empty catalog");
            InMemoryCatalog::default()
        }
    };

    let addr: std::net::SocketAddr = config
        .bind
        .parse()
        .with_context(|| format!("invalid bind address {}", config.bind))?;
    let state = Arc::new(AppState::new(Arc::new(catalog), config.max_world_entries));

    pkgscan::serve(addr, state).await?;
    Ok(())
}
