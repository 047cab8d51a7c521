pub mod catalog;
pub mod category;
pub mod error;
pub mod project;

pub use catalog::Catalog;
pub use category::{Category, CategoryRule, CategoryTable};
pub use error::{CatalogError, Result};
pub use project::ProjectRecord;

/// Token of the category that accepts every project.
pub const ALL_CATEGORY: &str = "All";

/// Token of the category that accepts featured projects.
pub const FEATURED_CATEGORY: &str = "Featured";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_data_parses() {
        let catalog = Catalog::builtin().expect("builtin catalog");
        assert_eq!(catalog.len(), 10);
        let table = CategoryTable::builtin().expect("builtin categories");
        assert!(table.contains(ALL_CATEGORY));
        assert!(table.contains(FEATURED_CATEGORY));
    }
}
