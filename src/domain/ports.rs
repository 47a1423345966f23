use crate::domain::model::{GroupSummary, Herd, Maintainer, Package, ScanReport};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Read-only projections over the package catalog.
///
/// `None` from the single-group lookups means the group itself is unknown;
/// a known group with no packages returns an empty vector.
pub trait Catalog: Send + Sync {
    fn categories(&self) -> Vec<GroupSummary>;
    fn packages_in_category(&self, category: &str) -> Option<Vec<Package>>;

    fn herds(&self) -> Vec<Herd>;
    fn packages_in_herd(&self, herd: &str) -> Option<Vec<Package>>;

    fn maintainers(&self) -> Vec<Maintainer>;
    fn maintainer(&self, id: u64) -> Option<Maintainer>;
    fn packages_for_maintainer(&self, id: u64) -> Option<Vec<Package>>;

    fn overlays(&self) -> Vec<GroupSummary>;
    fn packages_in_overlay(&self, overlay: &str) -> Option<Vec<Package>>;

    fn find_package(&self, category: &str, name: &str) -> Option<Package>;
    fn find_by_name(&self, name: &str) -> Vec<Package>;

    fn package_count(&self) -> usize;
}

/// Downstream boundary for world-list reconciliation: takes the normalized
/// token sequence, returns the matched package records.
#[async_trait]
pub trait ScanTrigger: Send + Sync {
    async fn scan(&self, tokens: &[String]) -> Result<ScanReport>;
}
