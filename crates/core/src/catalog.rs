//! Read-side catalog operations: category filter and featured/regular split.
//!
//! Both operations keep the relative order of their input, which is the
//! repository order (most recently created first).

use serde::Serialize;

use crate::category::{CategoryFilter, ProjectCategory};

/// What the catalog needs to know about a project.
pub trait CatalogEntry {
    fn category(&self) -> ProjectCategory;
    fn is_featured(&self) -> bool;
}

/// Filtered catalog split into its two sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogView<T> {
    pub featured: Vec<T>,
    pub regular: Vec<T>,
}

impl<T: CatalogEntry> CatalogView<T> {
    /// Filter `projects` by `filter`, then partition the survivors.
    pub fn build(projects: Vec<T>, filter: CategoryFilter) -> Self {
        let (featured, regular) = partition(filter_by_category(projects, filter));
        Self { featured, regular }
    }
}

impl<T> CatalogView<T> {
    pub fn is_empty(&self) -> bool {
        self.featured.is_empty() && self.regular.is_empty()
    }

    pub fn len(&self) -> usize {
        self.featured.len() + self.regular.len()
    }
}

/// Keep projects matching `filter`; [`CategoryFilter::All`] passes everything through.
pub fn filter_by_category<T: CatalogEntry>(projects: Vec<T>, filter: CategoryFilter) -> Vec<T> {
    match filter {
        CategoryFilter::All => projects,
        CategoryFilter::Only(_) => projects
            .into_iter()
            .filter(|p| filter.matches(p.category()))
            .collect(),
    }
}

/// Stable split into `(featured, regular)`.
pub fn partition<T: CatalogEntry>(projects: Vec<T>) -> (Vec<T>, Vec<T>) {
    projects.into_iter().partition(|p| p.is_featured())
}
