//! Project editor form and its submission-time validation.
//!
//! The form mirrors what the operator types: free text, an optional year
//! (the field can be cleared), and a category pick. [`ProjectForm::validated`]
//! turns it into [`ProjectFields`], the shape the repository persists.

use chrono::Datelike;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::category::ProjectCategory;
use crate::error::CoreError;

/// Validated order and display names of the required fields.
const REQUIRED_FIELDS: &[(&str, &str)] = &[
    ("title", "title"),
    ("description", "description"),
    ("year", "year"),
    ("location", "location"),
    ("category", "type"),
];

/// In-progress editor input.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct ProjectForm {
    #[validate(custom(function = "not_blank"))]
    pub title: String,
    #[validate(custom(function = "not_blank"))]
    pub description: String,
    /// Free-form; no range is enforced beyond presence.
    #[validate(required)]
    pub year: Option<i32>,
    #[validate(custom(function = "not_blank"))]
    pub location: String,
    #[validate(required)]
    pub category: Option<ProjectCategory>,
    pub is_featured: bool,
}

/// Descriptive fields of a project after validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectFields {
    pub title: String,
    pub description: String,
    pub year: i32,
    pub location: String,
    #[serde(rename = "type")]
    pub category: ProjectCategory,
    pub is_featured: bool,
}

impl Default for ProjectForm {
    /// The editor's reset state: empty text, this year, residential, not featured.
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            year: Some(chrono::Utc::now().year()),
            location: String::new(),
            category: Some(ProjectCategory::default()),
            is_featured: false,
        }
    }
}

impl ProjectForm {
    /// Load an existing record's fields into the editor (begin-edit).
    pub fn from_fields(fields: ProjectFields) -> Self {
        Self {
            title: fields.title,
            description: fields.description,
            year: Some(fields.year),
            location: fields.location,
            category: Some(fields.category),
            is_featured: fields.is_featured,
        }
    }

    /// Names of required fields that are empty or absent, in form order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let Err(errors) = self.validate() else {
            return Vec::new();
        };
        let failed = errors.field_errors();
        REQUIRED_FIELDS
            .iter()
            .filter(|(field, _)| failed.contains_key(*field))
            .map(|(_, display)| *display)
            .collect()
    }

    /// Check every required field and produce the persistable field set.
    pub fn validated(&self) -> Result<ProjectFields, CoreError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(CoreError::Validation(format!(
                "Missing required fields: {}",
                missing.join(", ")
            )));
        }

        match (self.year, self.category) {
            (Some(year), Some(category)) => Ok(ProjectFields {
                title: self.title.clone(),
                description: self.description.clone(),
                year,
                location: self.location.clone(),
                category,
                is_featured: self.is_featured,
            }),
            _ => Err(CoreError::Validation(
                "Missing required fields: year, type".into(),
            )),
        }
    }
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}
