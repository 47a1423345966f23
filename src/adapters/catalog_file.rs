use crate::core::catalog::InMemoryCatalog;
use crate::domain::model::{Herd, Maintainer, Package};
use crate::utils::error::{PkgscanError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// On-disk catalog document. JSON and TOML carry the same shape; the file
/// extension selects the parser.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogFile {
    #[serde(default)]
    pub packages: Vec<Package>,
    #[serde(default)]
    pub herds: Vec<Herd>,
    #[serde(default)]
    pub maintainers: Vec<Maintainer>,
}

impl CatalogFile {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(PkgscanError::IoError)?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(serde_json::from_str(&content)?),
            Some("toml") => Ok(toml::from_str(&content)?),
            other => Err(PkgscanError::InvalidConfigValueError {
                field: "catalog.path".to_string(),
                value: path.display().to_string(),
                reason: format!(
                    "Unsupported catalog format '{}'. Supported formats: json, toml",
                    other.unwrap_or("none")
                ),
            }),
        }
    }

    pub fn into_catalog(self) -> Result<InMemoryCatalog> {
        InMemoryCatalog::build(self.packages, self.herds, self.maintainers)
    }
}

/// Convenience wrapper: read and index a catalog in one step.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<InMemoryCatalog> {
    let path = path.as_ref();
    let file = CatalogFile::from_file(path)?;
    tracing::info!(
        "Loaded catalog from {}: {} packages, {} herds, {} maintainers",
        path.display(),
        file.packages.len(),
        file.herds.len(),
        file.maintainers.len()
    );
    file.into_catalog()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::Catalog;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn named_temp(suffix: &str, content: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_json_catalog() {
        let json = r#"
        {
            "packages": [
                {"category": "app-foo", "name": "bar", "herds": ["web"],
                 "versions": [{"version": "1.0", "overlay": "gentoo"}]},
                {"category": "app-foo", "name": "baz"}
            ],
            "herds": [{"name": "web", "email": "web@example.org"}]
        }
        "#;
        let file = named_temp(".json", json);

        let catalog = load_catalog(file.path()).unwrap();
        assert_eq!(catalog.package_count(), 2);
        assert_eq!(catalog.packages_in_herd("web").unwrap().len(), 1);
        assert_eq!(catalog.packages_in_overlay("gentoo").unwrap().len(), 1);
    }

    #[test]
    fn test_load_toml_catalog() {
        let toml_content = r#"
[[maintainers]]
id = 1
name = "Alice"

[[packages]]
category = "app-foo"
name = "bar"
maintainers = [1]

[[packages.versions]]
version = "1.0"
overlay = "gentoo"
"#;
        let file = named_temp(".toml", toml_content);

        let catalog = load_catalog(file.path()).unwrap();
        assert_eq!(catalog.package_count(), 1);
        assert_eq!(catalog.packages_for_maintainer(1).unwrap().len(), 1);
    }

    #[test]
    fn test_unsupported_extension_rejected() {
        let file = named_temp(".yaml", "packages: []");
        assert!(load_catalog(file.path()).is_err());
    }

    #[test]
    fn test_malformed_json_rejected() {
        let file = named_temp(".json", "{not json");
        assert!(load_catalog(file.path()).is_err());
    }

    #[test]
    fn test_missing_file_rejected() {
        assert!(load_catalog("/no/such/catalog.json").is_err());
    }
}
