//! Category tokens and the rules that decide category membership.
//!
//! The table is plain configuration. Adding a category means adding an entry
//! here (or to the JSON file), never touching the filter evaluator.
//!
//! ```text
//! {"categories": [
//!   {"token": "All", "rule": {"kind": "all"}},
//!   {"token": "Shopify Plus", "rule": {"kind": "tag_contains", "needle": "Shopify Plus"}},
//!   {"token": "Custom Themes", "rule": {"kind": "any_tag", "tags": ["Liquid", "SCSS"]}}
//! ]}
//! ```

use std::collections::BTreeSet;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{CatalogError, Result};

const BUILTIN_CATEGORIES: &str = include_str!("../data/categories.json");

/// How a category decides whether a project belongs to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CategoryRule {
    /// Accepts every project.
    All,
    /// Accepts projects flagged as featured.
    Featured,
    /// Accepts projects with at least one tag equal to a member of `tags`.
    AnyTag { tags: BTreeSet<String> },
    /// Accepts projects with at least one tag containing `needle`.
    TagContains { needle: String },
}

impl CategoryRule {
    pub fn any_tag<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        CategoryRule::AnyTag {
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }

    pub fn tag_contains(needle: impl Into<String>) -> Self {
        CategoryRule::TagContains {
            needle: needle.into(),
        }
    }
}

impl fmt::Display for CategoryRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryRule::All => write!(f, "every project"),
            CategoryRule::Featured => write!(f, "featured projects"),
            CategoryRule::AnyTag { tags } => {
                let tags: Vec<&str> = tags.iter().map(String::as_str).collect();
                write!(f, "any tag in [{}]", tags.join(", "))
            }
            CategoryRule::TagContains { needle } => write!(f, "any tag containing {needle:?}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Label shown on the filter button, also the lookup key.
    pub token: String,
    pub rule: CategoryRule,
}

impl Category {
    pub fn new(token: impl Into<String>, rule: CategoryRule) -> Self {
        Self {
            token: token.into(),
            rule,
        }
    }
}

/// Ordered category lookup table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTable {
    categories: Vec<Category>,
}

impl CategoryTable {
    pub fn new(categories: Vec<Category>) -> Result<Self> {
        let mut seen = BTreeSet::new();
        for category in &categories {
            if category.token.trim().is_empty() {
                return Err(CatalogError::EmptyCategory);
            }
            if !seen.insert(category.token.as_str()) {
                return Err(CatalogError::DuplicateCategory(category.token.clone()));
            }
        }
        Ok(Self { categories })
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let table: CategoryTable = serde_json::from_str(json)?;
        Self::new(table.categories)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let table = Self::from_json_str(&json)?;
        info!(
            path = %path.display(),
            categories = table.len(),
            "loaded category table"
        );
        Ok(table)
    }

    /// The six categories of the projects page.
    pub fn builtin() -> Result<Self> {
        Self::from_json_str(BUILTIN_CATEGORIES)
    }

    pub fn rule(&self, token: &str) -> Option<&CategoryRule> {
        self.categories
            .iter()
            .find(|category| category.token == token)
            .map(|category| &category.rule)
    }

    pub fn contains(&self, token: &str) -> bool {
        self.rule(token).is_some()
    }

    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|category| category.token.as_str())
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// A copy of this table restricted to `tokens`, in the order given.
    ///
    /// Unknown tokens are skipped.
    #[must_use]
    pub fn subset<'t, I>(&self, tokens: I) -> Self
    where
        I: IntoIterator<Item = &'t str>,
    {
        let mut categories = Vec::new();
        for token in tokens {
            if let Some(category) = self.categories.iter().find(|c| c.token == token)
                && !categories.iter().any(|c: &Category| c.token == token)
            {
                categories.push(category.clone());
            }
        }
        Self { categories }
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
