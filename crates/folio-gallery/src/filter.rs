//! Filter predicate engine.
//!
//! A project is visible when it satisfies both the category predicate and
//! the search predicate. Results keep input order; nothing is sorted or
//! deduplicated. The engine is total: unknown categories and searches that
//! match nothing simply produce an empty list.

use folio_model::{CategoryRule, CategoryTable, ProjectRecord};
use tracing::debug;

/// Category token plus search text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FilterQuery {
    pub category: String,
    pub search: String,
}

impl FilterQuery {
    pub fn new(category: impl Into<String>, search: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            search: search.into(),
        }
    }
}

/// Returns true if `project` belongs to the category described by `rule`.
pub fn category_matches(rule: &CategoryRule, project: &ProjectRecord) -> bool {
    match rule {
        CategoryRule::All => true,
        CategoryRule::Featured => project.featured,
        CategoryRule::AnyTag { tags } => project.technologies.iter().any(|tech| tags.contains(tech)),
        CategoryRule::TagContains { needle } => project
            .technologies
            .iter()
            .any(|tech| tech.contains(needle.as_str())),
    }
}

/// Returns true if `search` (already lowercased) occurs in the title,
/// the description or any technology tag.
///
/// An empty search matches everything. Whitespace is significant.
pub fn search_matches(search: &str, project: &ProjectRecord) -> bool {
    search.is_empty()
        || project.title.to_lowercase().contains(search)
        || project.description.to_lowercase().contains(search)
        || project
            .technologies
            .iter()
            .any(|tech| tech.to_lowercase().contains(search))
}

/// Filter `projects` by a category token and a search string.
///
/// Accepts anything that yields project references, so a previous result
/// can be filtered again.
pub fn filter_projects<'a, I>(
    projects: I,
    table: &CategoryTable,
    category: &str,
    search: &str,
) -> Vec<&'a ProjectRecord>
where
    I: IntoIterator<Item = &'a ProjectRecord>,
{
    let Some(rule) = table.rule(category) else {
        debug!(category, "unknown category, nothing matches");
        return Vec::new();
    };
    let search = search.to_lowercase();
    projects
        .into_iter()
        .filter(|project| category_matches(rule, project) && search_matches(&search, project))
        .collect()
}

/// [`filter_projects`] taking a [`FilterQuery`].
pub fn apply_query<'a, I>(
    projects: I,
    table: &CategoryTable,
    query: &FilterQuery,
) -> Vec<&'a ProjectRecord>
where
    I: IntoIterator<Item = &'a ProjectRecord>,
{
    filter_projects(projects, table, &query.category, &query.search)
}
