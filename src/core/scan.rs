use crate::domain::model::ScanReport;
use crate::domain::ports::{Catalog, ScanTrigger};
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;

/// Reconciles world-list tokens against the catalog.
///
/// A token of the form `category/name` resolves exactly; a bare `name`
/// matches every category that carries it. Tokens that resolve to nothing
/// are reported as unknown rather than dropped.
pub struct CatalogScanner {
    catalog: Arc<dyn Catalog>,
}

impl CatalogScanner {
    pub fn new(catalog: Arc<dyn Catalog>) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl ScanTrigger for CatalogScanner {
    async fn scan(&self, tokens: &[String]) -> Result<ScanReport> {
        let mut matched = Vec::new();
        let mut unknown = Vec::new();

        for token in tokens {
            let hits = match token.split_once('/') {
                Some((category, name)) => self
                    .catalog
                    .find_package(category, name)
                    .into_iter()
                    .collect(),
                None => self.catalog.find_by_name(token),
            };

            if hits.is_empty() {
                tracing::debug!("world token not in catalog: {}", token);
                unknown.push(token.clone());
            } else {
                matched.extend(hits);
            }
        }

        tracing::info!(
            "world scan: {} tokens, {} matched, {} unknown",
            tokens.len(),
            matched.len(),
            unknown.len()
        );

        Ok(ScanReport {
            matched,
            unknown,
            generated_at: Utc::now(),
        })
    }
}
