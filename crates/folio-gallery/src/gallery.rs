//! Gallery controller.
//!
//! Holds the active category and search text for one page visit and keeps
//! the visible project list in sync with them. Every setter re-derives the
//! list synchronously; the catalog itself is never touched.

use std::fmt;
use std::str::FromStr;

use folio_model::{ALL_CATEGORY, Catalog, CategoryTable, FEATURED_CATEGORY, ProjectRecord};
use tracing::debug;

use crate::error::{GalleryError, Result};
use crate::filter::{FilterQuery, filter_projects};

/// Number of technology tags shown on a card before the "+N" overflow chip.
pub const CARD_TAG_LIMIT: usize = 4;

/// Page variants that embed a gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageVariant {
    /// Home page showcase: no "All" button, opens on featured work.
    Home,
    /// Full projects page: every category, opens on "All".
    Projects,
}

impl PageVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            PageVariant::Home => "home",
            PageVariant::Projects => "projects",
        }
    }

    /// Gallery configuration for this page drawn from `table`.
    pub fn config(&self, table: &CategoryTable) -> Result<GalleryConfig> {
        match self {
            PageVariant::Home => {
                let tokens = table.tokens().filter(|token| *token != ALL_CATEGORY);
                GalleryConfig::new(table.subset(tokens), FEATURED_CATEGORY)
            }
            PageVariant::Projects => GalleryConfig::new(table.clone(), ALL_CATEGORY),
        }
    }
}

impl fmt::Display for PageVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PageVariant {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "home" => Ok(PageVariant::Home),
            "projects" => Ok(PageVariant::Projects),
            other => Err(format!("unknown page variant: {other}")),
        }
    }
}

/// Category set and starting category for one gallery instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryConfig {
    categories: CategoryTable,
    default_category: String,
}

impl GalleryConfig {
    pub fn new(categories: CategoryTable, default_category: impl Into<String>) -> Result<Self> {
        let default_category = default_category.into();
        if categories.is_empty() {
            return Err(GalleryError::NoCategories);
        }
        if !categories.contains(&default_category) {
            return Err(GalleryError::UnknownDefaultCategory(default_category));
        }
        Ok(Self {
            categories,
            default_category,
        })
    }

    pub fn categories(&self) -> &CategoryTable {
        &self.categories
    }

    pub fn default_category(&self) -> &str {
        &self.default_category
    }
}

/// Empty-state copy shown when no project matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyState {
    pub title: &'static str,
    pub hint: &'static str,
}

pub const NO_RESULTS: EmptyState = EmptyState {
    title: "No projects found",
    hint: "Try adjusting your search or filter criteria",
};

/// Controller state for one gallery on one page visit.
#[derive(Debug, Clone)]
pub struct Gallery<'c> {
    catalog: &'c Catalog,
    config: GalleryConfig,
    query: FilterQuery,
    visible: Vec<&'c ProjectRecord>,
}

impl<'c> Gallery<'c> {
    pub fn new(catalog: &'c Catalog, config: GalleryConfig) -> Self {
        let query = FilterQuery::new(config.default_category(), "");
        let mut gallery = Self {
            catalog,
            config,
            query,
            visible: Vec::new(),
        };
        gallery.refresh();
        gallery
    }

    /// Select a category and re-derive the visible list.
    ///
    /// Tokens outside the configured set are accepted and match nothing.
    pub fn set_category(&mut self, token: impl Into<String>) {
        let token = token.into();
        if token == self.query.category {
            return;
        }
        self.query.category = token;
        self.refresh();
    }

    /// Replace the search text and re-derive the visible list.
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text == self.query.search {
            return;
        }
        self.query.search = text;
        self.refresh();
    }

    fn refresh(&mut self) {
        self.visible = filter_projects(
            self.catalog,
            self.config.categories(),
            &self.query.category,
            &self.query.search,
        );
        debug!(
            category = %self.query.category,
            search = %self.query.search,
            visible = self.visible.len(),
            "gallery refreshed"
        );
    }

    pub fn active_category(&self) -> &str {
        &self.query.category
    }

    pub fn search_text(&self) -> &str {
        &self.query.search
    }

    pub fn query(&self) -> &FilterQuery {
        &self.query
    }

    pub fn config(&self) -> &GalleryConfig {
        &self.config
    }

    /// Category buttons in display order, with the active one flagged.
    pub fn category_buttons(&self) -> Vec<(&str, bool)> {
        self.config
            .categories()
            .tokens()
            .map(|token| (token, token == self.query.category))
            .collect()
    }

    pub fn visible(&self) -> &[&'c ProjectRecord] {
        &self.visible
    }

    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    /// "1 project found" / "N projects found".
    pub fn count_label(&self) -> String {
        let count = self.visible.len();
        let plural = if count == 1 { "" } else { "s" };
        format!("{count} project{plural} found")
    }

    pub fn empty_state(&self) -> Option<EmptyState> {
        self.visible.is_empty().then_some(NO_RESULTS)
    }

    pub fn cards(&self) -> Vec<ProjectCard<'c>> {
        self.visible
            .iter()
            .map(|&project| ProjectCard::new(project))
            .collect()
    }
}

/// Card view of a project in the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectCard<'c> {
    pub project: &'c ProjectRecord,
    /// First letter of each word of the title.
    pub monogram: String,
    pub tags: &'c [String],
    /// Number of tags hidden behind the "+N" chip.
    pub hidden_tags: usize,
}

impl<'c> ProjectCard<'c> {
    pub fn new(project: &'c ProjectRecord) -> Self {
        let shown = project.technologies.len().min(CARD_TAG_LIMIT);
        Self {
            project,
            monogram: monogram(&project.title),
            tags: &project.technologies[..shown],
            hidden_tags: project.technologies.len() - shown,
        }
    }

    pub fn is_featured(&self) -> bool {
        self.project.featured
    }

    /// Text of the overflow chip, if any tags are hidden.
    pub fn overflow_label(&self) -> Option<String> {
        (self.hidden_tags > 0).then(|| format!("+{}", self.hidden_tags))
    }
}

fn monogram(title: &str) -> String {
    title
        .split(' ')
        .filter_map(|word| word.chars().next())
        .collect()
}
