//! Project entity model and DTOs.

use ceral_core::catalog::CatalogEntry;
use ceral_core::category::ProjectCategory;
use ceral_core::form::ProjectFields;
use ceral_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A project row from the `projects` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub year: i32,
    pub location: String,
    #[serde(rename = "type")]
    #[sqlx(try_from = "String")]
    pub category: ProjectCategory,
    pub is_featured: bool,
    /// Public URLs in upload order; the first one is the catalog thumbnail.
    pub images: Vec<String>,
    pub video: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Project {
    /// Descriptive fields, as loaded into the editor on begin-edit.
    pub fn fields(&self) -> ProjectFields {
        ProjectFields {
            title: self.title.clone(),
            description: self.description.clone(),
            year: self.year,
            location: self.location.clone(),
            category: self.category,
            is_featured: self.is_featured,
        }
    }

    /// Every media URL referenced by this record, images first.
    pub fn media_urls(&self) -> impl Iterator<Item = &str> {
        self.images
            .iter()
            .map(String::as_str)
            .chain(self.video.as_deref())
    }
}

impl CatalogEntry for Project {
    fn category(&self) -> ProjectCategory {
        self.category
    }

    fn is_featured(&self) -> bool {
        self.is_featured
    }
}

/// DTO for creating a new project. Media is attached by a follow-up update
/// once the id exists; `created_at` is assigned by the store.
#[derive(Debug, Clone)]
pub struct CreateProject {
    pub title: String,
    pub description: String,
    pub year: i32,
    pub location: String,
    pub category: ProjectCategory,
    pub is_featured: bool,
}

impl From<ProjectFields> for CreateProject {
    fn from(fields: ProjectFields) -> Self {
        Self {
            title: fields.title,
            description: fields.description,
            year: fields.year,
            location: fields.location,
            category: fields.category,
            is_featured: fields.is_featured,
        }
    }
}

/// DTO for updating an existing project. All fields are optional; `None`
/// leaves the stored value untouched. `created_at` is not updatable.
#[derive(Debug, Clone, Default)]
pub struct UpdateProject {
    pub title: Option<String>,
    pub description: Option<String>,
    pub year: Option<i32>,
    pub location: Option<String>,
    pub category: Option<ProjectCategory>,
    pub is_featured: Option<bool>,
    /// Replaces the whole image list when present.
    pub images: Option<Vec<String>>,
    pub video: Option<String>,
}

impl UpdateProject {
    /// Update carrying every descriptive field and no media.
    pub fn from_fields(fields: ProjectFields) -> Self {
        Self {
            title: Some(fields.title),
            description: Some(fields.description),
            year: Some(fields.year),
            location: Some(fields.location),
            category: Some(fields.category),
            is_featured: Some(fields.is_featured),
            images: None,
            video: None,
        }
    }

    /// Update carrying only media.
    pub fn media(images: Option<Vec<String>>, video: Option<String>) -> Self {
        Self {
            images,
            video,
            ..Self::default()
        }
    }
}
