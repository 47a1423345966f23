use crate::utils::error::{PkgscanError, Result};
use std::collections::HashSet;

/// A normalized world list: the ordered package-name tokens from one
/// submission, after trimming, blank-line removal, and deduplication.
///
/// Inline text and uploaded files reduce to the same token sequence, so the
/// two submission paths stay equivalent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorldList {
    tokens: Vec<String>,
}

impl WorldList {
    pub fn from_text(text: &str) -> Self {
        let mut seen = HashSet::new();
        let mut tokens = Vec::new();

        for line in text.lines() {
            let token = line.trim();
            if token.is_empty() {
                continue;
            }
            if seen.insert(token.to_string()) {
                tokens.push(token.to_string());
            }
        }

        Self { tokens }
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let text = std::str::from_utf8(bytes)
            .map_err(|_| PkgscanError::input("world file is not valid UTF-8 text"))?;
        Ok(Self::from_text(text))
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
