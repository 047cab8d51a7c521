//! The project catalog: an immutable, ordered store of [`ProjectRecord`]s.
//!
//! Catalog order is the display order of every gallery view. Filtering only
//! ever removes records from this sequence, it never reorders them.

use std::collections::BTreeSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{CatalogError, Result};
use crate::project::ProjectRecord;

const BUILTIN_CATALOG: &str = include_str!("../data/projects.json");

/// On-disk shape of a catalog file.
#[derive(Debug, Serialize, Deserialize)]
struct CatalogFile {
    projects: Vec<ProjectRecord>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    projects: Vec<ProjectRecord>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids and empty required fields.
    pub fn from_records(projects: Vec<ProjectRecord>) -> Result<Self> {
        let mut seen = BTreeSet::new();
        for project in &projects {
            if project.id.trim().is_empty() {
                return Err(CatalogError::EmptyField {
                    id: project.id.clone(),
                    field: "id",
                });
            }
            if project.title.trim().is_empty() {
                return Err(CatalogError::EmptyField {
                    id: project.id.clone(),
                    field: "title",
                });
            }
            if project.description.trim().is_empty() {
                return Err(CatalogError::EmptyField {
                    id: project.id.clone(),
                    field: "description",
                });
            }
            if !seen.insert(project.id.as_str()) {
                return Err(CatalogError::DuplicateId(project.id.clone()));
            }
        }
        Ok(Self { projects })
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Self::from_records(file.projects)
    }

    /// Load a catalog from a JSON file of the form `{"projects": [...]}`.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&json)?;
        info!(
            path = %path.display(),
            projects = catalog.len(),
            "loaded catalog"
        );
        Ok(catalog)
    }

    /// The catalog shipped with the site.
    pub fn builtin() -> Result<Self> {
        let catalog = Self::from_json_str(BUILTIN_CATALOG)?;
        debug!(projects = catalog.len(), "loaded built-in catalog");
        Ok(catalog)
    }

    pub fn to_json_string(&self) -> Result<String> {
        let file = CatalogFile {
            projects: self.projects.clone(),
        };
        Ok(serde_json::to_string_pretty(&file)?)
    }

    pub fn projects(&self) -> &[ProjectRecord] {
        &self.projects
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ProjectRecord> {
        self.projects.iter()
    }

    pub fn get(&self, id: &str) -> Option<&ProjectRecord> {
        self.projects.iter().find(|project| project.id == id)
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a ProjectRecord;
    type IntoIter = std::slice::Iter<'a, ProjectRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
