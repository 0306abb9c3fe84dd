//! Catalog configuration.
//!
//! # Invariants
//! - `page_size` is always at least 1.

/// Questions served per page when the caller does not configure one.
pub const QUESTIONS_PER_PAGE: u32 = 10;

/// Tunables shared by the query engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogConfig {
    page_size: u32,
}

impl CatalogConfig {
    /// Builds a config; a zero page size is raised to 1.
    pub fn with_page_size(page_size: u32) -> Self {
        Self {
            page_size: page_size.max(1),
        }
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self::with_page_size(QUESTIONS_PER_PAGE)
    }
}
