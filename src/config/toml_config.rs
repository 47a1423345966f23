use crate::utils::error::{PkgscanError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub server: Option<ServerConfig>,
    pub catalog: Option<CatalogConfig>,
    pub scan: Option<ScanConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub bind: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    pub max_world_entries: Option<usize>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(PkgscanError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        // 處理環境變數替換
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(PkgscanError::TomlError)
    }

    /// 替換環境變數 (例如 ${CATALOG_PATH})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| PkgscanError::ServerError {
            message: format!("env substitution regex failed: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(bind) = self.server.as_ref().and_then(|s| s.bind.as_deref()) {
            validation::validate_bind_addr("server.bind", bind)?;
        }
        if let Some(catalog) = &self.catalog {
            validation::validate_path("catalog.path", &catalog.path)?;
        }
        if let Some(max) = self.scan.as_ref().and_then(|s| s.max_world_entries) {
            validation::validate_positive_number("scan.max_world_entries", max, 1)?;
        }
        Ok(())
    }
}
