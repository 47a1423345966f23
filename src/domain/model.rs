use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A package version contributed by an overlay repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Version {
    pub version: String,
    pub overlay: String,
}

/// A catalog package, uniquely identified by (category, name).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Package {
    pub category: String,
    pub name: String,
    #[serde(default)]
    pub herds: Vec<String>,
    #[serde(default)]
    pub maintainers: Vec<u64>,
    #[serde(default)]
    pub versions: Vec<Version>,
}

impl Package {
    pub fn new(category: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            name: name.into(),
            herds: Vec::new(),
            maintainers: Vec::new(),
            versions: Vec::new(),
        }
    }

    /// Qualified identifier in `category/name` form.
    pub fn qualified_name(&self) -> String {
        format!("{}/{}", self.category, self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Herd {
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Maintainer {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// Summary row for a named group of packages (category, herd, overlay).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupSummary {
    pub name: String,
    pub package_count: usize,
}

/// Outcome of reconciling one world list against the catalog.
///
/// `matched` keeps submission order; a bare token that resolves to several
/// categories contributes one entry per match.
#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    pub matched: Vec<Package>,
    pub unknown: Vec<String>,
    pub generated_at: DateTime<Utc>,
}

impl ScanReport {
    pub fn is_empty(&self) -> bool {
        self.matched.is_empty() && self.unknown.is_empty()
    }
}
