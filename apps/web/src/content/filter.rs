//! Category filter for the projects page.
//!
//! The selected filter travels in the `category` query parameter; the visible
//! list and the per-category counts are recomputed from the full project list
//! on every request.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::content::models::{Project, ProjectCategory};

pub const ALL_LABEL: &str = "All";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(ProjectCategory),
}

impl CategoryFilter {
    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => ALL_LABEL,
            CategoryFilter::Only(category) => category.as_str(),
        }
    }

    pub fn matches(&self, project: &Project) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => project.category == *category,
        }
    }

    /// Filter bar order: "All" first, then each category.
    pub fn choices() -> impl Iterator<Item = CategoryFilter> {
        std::iter::once(CategoryFilter::All)
            .chain(ProjectCategory::ALL.into_iter().map(CategoryFilter::Only))
    }
}

impl FromStr for CategoryFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == ALL_LABEL {
            return Ok(CategoryFilter::All);
        }
        s.parse().map(CategoryFilter::Only)
    }
}

/// `?category=` as sent by the filter bar. Absent or blank means "All".
#[derive(Debug, Default, Deserialize)]
pub struct CategoryQuery {
    pub category: Option<String>,
}

impl CategoryQuery {
    pub fn filter(&self) -> Result<CategoryFilter, String> {
        match self.category.as_deref().map(str::trim) {
            None | Some("") => Ok(CategoryFilter::All),
            Some(name) => name.parse(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryCount {
    pub name: &'static str,
    pub count: usize,
    pub active: bool,
}

/// Projects visible under `filter`, in their original order.
pub fn filter_projects(projects: &[Project], filter: CategoryFilter) -> Vec<&Project> {
    projects.iter().filter(|p| filter.matches(p)).collect()
}

pub fn category_counts(projects: &[Project], selected: CategoryFilter) -> Vec<CategoryCount> {
    CategoryFilter::choices()
        .map(|choice| CategoryCount {
            name: choice.label(),
            count: projects.iter().filter(|p| choice.matches(p)).count(),
            active: choice == selected,
        })
        .collect()
}
