//! Project categories and the catalog category filter.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Wire value of the pass-through catalog filter.
pub const FILTER_ALL: &str = "all";

/// Closed set of project categories shown on the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectCategory {
    #[default]
    Residential,
    Commercial,
    Public,
}

impl ProjectCategory {
    /// Every category, in the order the site lists them.
    pub const ALL: [ProjectCategory; 3] = [Self::Residential, Self::Commercial, Self::Public];

    /// Parse from the stored `category` column / form value.
    pub fn from_name(name: &str) -> Result<Self, CoreError> {
        match name {
            "residential" => Ok(Self::Residential),
            "commercial" => Ok(Self::Commercial),
            "public" => Ok(Self::Public),
            other => Err(CoreError::Validation(format!(
                "Unknown project type '{other}'. Must be one of: residential, commercial, public"
            ))),
        }
    }

    /// Database and wire value.
    pub fn name(self) -> &'static str {
        match self {
            Self::Residential => "residential",
            Self::Commercial => "commercial",
            Self::Public => "public",
        }
    }

    /// Display label used by the site.
    pub fn label(self) -> &'static str {
        match self {
            Self::Residential => "Konut",
            Self::Commercial => "Ticari",
            Self::Public => "Kamu",
        }
    }
}

impl fmt::Display for ProjectCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ProjectCategory {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

/// Lets sqlx decode the TEXT column straight into the enum
/// (`#[sqlx(try_from = "String")]`).
impl TryFrom<String> for ProjectCategory {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_name(&value)
    }
}

/// Catalog filter selected by a visitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(ProjectCategory),
}

impl CategoryFilter {
    /// Parse `"all"` or a category name.
    pub fn parse(value: &str) -> Result<Self, CoreError> {
        if value == FILTER_ALL {
            Ok(Self::All)
        } else {
            ProjectCategory::from_name(value).map(Self::Only)
        }
    }

    /// Whether a project of `category` passes this filter.
    pub fn matches(self, category: ProjectCategory) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == category,
        }
    }
}
