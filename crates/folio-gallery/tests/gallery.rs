//! Tests for the gallery controller and page variants.

use folio_gallery::{Gallery, GalleryConfig, GalleryError, NO_RESULTS, PageVariant, ProjectCard};
use folio_model::{Catalog, CategoryTable, ProjectRecord};

fn setup() -> (Catalog, CategoryTable) {
    (
        Catalog::builtin().expect("builtin catalog"),
        CategoryTable::builtin().expect("builtin categories"),
    )
}

fn visible_ids<'a>(gallery: &'a Gallery<'_>) -> Vec<&'a str> {
    gallery.visible().iter().map(|p| p.id.as_str()).collect()
}

#[test]
fn projects_page_starts_on_all() {
    let (catalog, table) = setup();
    let config = PageVariant::Projects.config(&table).expect("projects config");
    let gallery = Gallery::new(&catalog, config);
    assert_eq!(gallery.active_category(), "All");
    assert_eq!(gallery.search_text(), "");
    assert_eq!(gallery.visible_count(), catalog.len());
    assert_eq!(gallery.count_label(), "10 projects found");
    assert_eq!(gallery.empty_state(), None);
}

#[test]
fn home_page_starts_on_featured_without_all() {
    let (catalog, table) = setup();
    let config = PageVariant::Home.config(&table).expect("home config");
    let gallery = Gallery::new(&catalog, config);
    assert_eq!(gallery.active_category(), "Featured");
    assert_eq!(visible_ids(&gallery), ["1", "2", "3"]);
    let buttons: Vec<&str> = gallery.category_buttons().into_iter().map(|(t, _)| t).collect();
    assert_eq!(
        buttons,
        [
            "Featured",
            "Shopify Plus",
            "Custom Themes",
            "Apps & Integrations",
            "Migrations"
        ]
    );
}

#[test]
fn setters_rederive_visible_list() {
    let (catalog, table) = setup();
    let config = PageVariant::Projects.config(&table).expect("projects config");
    let mut gallery = Gallery::new(&catalog, config);

    gallery.set_category("Shopify Plus");
    assert_eq!(visible_ids(&gallery), ["1", "6", "9"]);

    gallery.set_search_text("B2B");
    assert_eq!(visible_ids(&gallery), ["1", "9"]);

    gallery.set_category("Migrations");
    assert!(gallery.visible().is_empty());
    assert_eq!(gallery.count_label(), "0 projects found");
    assert_eq!(gallery.empty_state(), Some(NO_RESULTS));

    gallery.set_search_text("");
    assert_eq!(visible_ids(&gallery), ["6"]);
    assert_eq!(gallery.count_label(), "1 project found");
}

#[test]
fn active_button_is_flagged() {
    let (catalog, table) = setup();
    let config = PageVariant::Projects.config(&table).expect("projects config");
    let mut gallery = Gallery::new(&catalog, config);
    gallery.set_category("Migrations");
    let active: Vec<&str> = gallery
        .category_buttons()
        .into_iter()
        .filter(|(_, active)| *active)
        .map(|(token, _)| token)
        .collect();
    assert_eq!(active, ["Migrations"]);
}

#[test]
fn gallery_never_mutates_catalog() {
    let (catalog, table) = setup();
    let before = catalog.clone();
    let config = PageVariant::Projects.config(&table).expect("projects config");
    let mut gallery = Gallery::new(&catalog, config);
    gallery.set_category("Featured");
    gallery.set_search_text("app");
    drop(gallery);
    assert_eq!(catalog, before);
}

#[test]
fn config_rejects_unknown_default() {
    let table = CategoryTable::builtin().expect("builtin categories");
    let result = GalleryConfig::new(table, "Blog");
    assert!(matches!(result, Err(GalleryError::UnknownDefaultCategory(token)) if token == "Blog"));
}

#[test]
fn config_rejects_empty_table() {
    let result = GalleryConfig::new(CategoryTable::default(), "All");
    assert!(matches!(result, Err(GalleryError::NoCategories)));
}

#[test]
fn card_truncates_tags() {
    let project = ProjectRecord::new("1", "Custom Shopify Plus Store", "Desc", "/1.png")
        .with_technologies(["A", "B", "C", "D", "E", "F"])
        .with_featured(true);
    let card = ProjectCard::new(&project);
    assert_eq!(card.monogram, "CSPS");
    assert_eq!(card.tags, ["A", "B", "C", "D"]);
    assert_eq!(card.hidden_tags, 2);
    assert_eq!(card.overflow_label().as_deref(), Some("+2"));
    assert!(card.is_featured());

    let short = ProjectRecord::new("2", "Audit", "Desc", "/2.png").with_technologies(["A"]);
    let card = ProjectCard::new(&short);
    assert_eq!(card.hidden_tags, 0);
    assert_eq!(card.overflow_label(), None);
}

#[test]
fn cards_follow_visible_order() {
    let (catalog, table) = setup();
    let config = PageVariant::Home.config(&table).expect("home config");
    let gallery = Gallery::new(&catalog, config);
    let monograms: Vec<String> = gallery.cards().into_iter().map(|c| c.monogram).collect();
    assert_eq!(monograms, ["CSPS", "CSTD", "SAD"]);
}
