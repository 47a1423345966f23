use crate::domain::model::{GroupSummary, Herd, Maintainer, Package};
use crate::domain::ports::Catalog;
use crate::utils::error::{PkgscanError, Result};
use std::collections::{BTreeMap, BTreeSet};

/// Immutable in-memory catalog with precomputed indexes.
///
/// Built once at startup; request handlers only read from it, so it can be
/// shared across requests without locking.
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    packages: Vec<Package>,
    herds: BTreeMap<String, Herd>,
    maintainers: BTreeMap<u64, Maintainer>,
    by_category: BTreeMap<String, Vec<usize>>,
    by_herd: BTreeMap<String, Vec<usize>>,
    by_maintainer: BTreeMap<u64, Vec<usize>>,
    by_overlay: BTreeMap<String, Vec<usize>>,
    by_name: BTreeMap<String, Vec<usize>>,
}

impl InMemoryCatalog {
    pub fn build(
        mut packages: Vec<Package>,
        herds: Vec<Herd>,
        maintainers: Vec<Maintainer>,
    ) -> Result<Self> {
        // 目錄順序固定：先按 category 再按 name 排序
        packages.sort_by(|a, b| {
            (a.category.as_str(), a.name.as_str()).cmp(&(b.category.as_str(), b.name.as_str()))
        });

        let mut catalog = InMemoryCatalog {
            herds: herds.into_iter().map(|h| (h.name.clone(), h)).collect(),
            maintainers: maintainers.into_iter().map(|m| (m.id, m)).collect(),
            ..Default::default()
        };

        let mut seen = BTreeSet::new();
        for (idx, package) in packages.iter().enumerate() {
            let key = (package.category.clone(), package.name.clone());
            if !seen.insert(key) {
                return Err(PkgscanError::catalog(format!(
                    "duplicate package: {}",
                    package.qualified_name()
                )));
            }

            catalog
                .by_category
                .entry(package.category.clone())
                .or_default()
                .push(idx);
            catalog
                .by_name
                .entry(package.name.clone())
                .or_default()
                .push(idx);

            for herd in &package.herds {
                // Herds referenced by a package but never declared are
                // registered with just their name.
                catalog
                    .herds
                    .entry(herd.clone())
                    .or_insert_with(|| Herd {
                        name: herd.clone(),
                        email: None,
                    });
                catalog.by_herd.entry(herd.clone()).or_default().push(idx);
            }

            for maintainer_id in &package.maintainers {
                if !catalog.maintainers.contains_key(maintainer_id) {
                    return Err(PkgscanError::catalog(format!(
                        "package {} references unknown maintainer id {}",
                        package.qualified_name(),
                        maintainer_id
                    )));
                }
                catalog
                    .by_maintainer
                    .entry(*maintainer_id)
                    .or_default()
                    .push(idx);
            }

            for version in &package.versions {
                let slot = catalog.by_overlay.entry(version.overlay.clone()).or_default();
                // A package lists once per overlay even with several versions
                if slot.last() != Some(&idx) {
                    slot.push(idx);
                }
            }
        }

        // Declared herds with no packages still project as empty groups
        for herd in catalog.herds.keys() {
            catalog.by_herd.entry(herd.clone()).or_default();
        }
        for id in catalog.maintainers.keys() {
            catalog.by_maintainer.entry(*id).or_default();
        }

        catalog.packages = packages;
        Ok(catalog)
    }

    fn collect(&self, indexes: &[usize]) -> Vec<Package> {
        indexes.iter().map(|&i| self.packages[i].clone()).collect()
    }
}

impl Catalog for InMemoryCatalog {
    fn categories(&self) -> Vec<GroupSummary> {
        self.by_category
            .iter()
            .map(|(name, indexes)| GroupSummary {
                name: name.clone(),
                package_count: indexes.len(),
            })
            .collect()
    }

    fn packages_in_category(&self, category: &str) -> Option<Vec<Package>> {
        self.by_category.get(category).map(|idx| self.collect(idx))
    }

    fn herds(&self) -> Vec<Herd> {
        self.herds.values().cloned().collect()
    }

    fn packages_in_herd(&self, herd: &str) -> Option<Vec<Package>> {
        self.by_herd.get(herd).map(|idx| self.collect(idx))
    }

    fn maintainers(&self) -> Vec<Maintainer> {
        self.maintainers.values().cloned().collect()
    }

    fn maintainer(&self, id: u64) -> Option<Maintainer> {
        self.maintainers.get(&id).cloned()
    }

    fn packages_for_maintainer(&self, id: u64) -> Option<Vec<Package>> {
        self.by_maintainer.get(&id).map(|idx| self.collect(idx))
    }

    fn overlays(&self) -> Vec<GroupSummary> {
        self.by_overlay
            .iter()
            .map(|(name, indexes)| GroupSummary {
                name: name.clone(),
                package_count: indexes.len(),
            })
            .collect()
    }

    fn packages_in_overlay(&self, overlay: &str) -> Option<Vec<Package>> {
        self.by_overlay.get(overlay).map(|idx| self.collect(idx))
    }

    fn find_package(&self, category: &str, name: &str) -> Option<Package> {
        let indexes = self.by_category.get(category)?;
        indexes
            .iter()
            .map(|&i| &self.packages[i])
            .find(|p| p.name == name)
            .cloned()
    }

    fn find_by_name(&self, name: &str) -> Vec<Package> {
        self.by_name
            .get(name)
            .map(|idx| self.collect(idx))
            .unwrap_or_default()
    }

    fn package_count(&self) -> usize {
        self.packages.len()
    }
}
