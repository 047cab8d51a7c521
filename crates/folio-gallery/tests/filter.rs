//! Tests for the filter predicate engine.

use folio_gallery::{FilterQuery, apply_query, filter_projects};
use folio_model::{Catalog, CategoryTable, ProjectRecord};
use proptest::prelude::*;

const TAG_POOL: &[&str] = &[
    "Shopify Plus",
    "Shopify",
    "Liquid",
    "SCSS",
    "GraphQL",
    "REST API",
    "Data Migration Tools",
    "React",
];

const WORD_POOL: &[&str] = &["Custom", "Store", "Theme", "App", "Portal", "Headless"];

const CATEGORY_POOL: &[&str] = &[
    "All",
    "Featured",
    "Shopify Plus",
    "Custom Themes",
    "Apps & Integrations",
    "Migrations",
    "Unknown",
];

const SEARCH_POOL: &[&str] = &["", "store", "STORE", "shop", "liquid", "app ", "x"];

fn builtin() -> (Catalog, CategoryTable) {
    (
        Catalog::builtin().expect("builtin catalog"),
        CategoryTable::builtin().expect("builtin categories"),
    )
}

fn ids<'a>(projects: &[&'a ProjectRecord]) -> Vec<&'a str> {
    projects.iter().map(|p| p.id.as_str()).collect()
}

fn scenario_catalog() -> Catalog {
    let titles = [
        "Custom Shopify Plus Store",
        "Theme Refresh",
        "Inventory App",
        "Headless Storefront",
        "POS Integration",
        "Subscription Portal",
        "Wholesale Portal",
        "Speed Audit",
        "Store Migration",
        "Analytics Dashboard",
    ];
    let featured = [1, 4, 8];
    let records = titles
        .iter()
        .enumerate()
        .map(|(i, title)| {
            ProjectRecord::new(
                format!("p{i}"),
                *title,
                "Ecommerce engagement",
                format!("/img/{i}.png"),
            )
            .with_technologies(["Liquid", "JavaScript"])
            .with_featured(featured.contains(&i))
        })
        .collect();
    Catalog::from_records(records).expect("scenario catalog")
}

#[test]
fn all_with_empty_search_is_identity() {
    let (catalog, table) = builtin();
    let result = filter_projects(&catalog, &table, "All", "");
    let expected: Vec<&ProjectRecord> = catalog.iter().collect();
    assert_eq!(result, expected);
}

#[test]
fn featured_returns_featured_in_order() {
    let catalog = scenario_catalog();
    let table = CategoryTable::builtin().expect("builtin categories");
    let result = filter_projects(&catalog, &table, "Featured", "");
    assert_eq!(ids(&result), ["p1", "p4", "p8"]);
}

#[test]
fn search_plus_finds_single_record() {
    let catalog = scenario_catalog();
    let table = CategoryTable::builtin().expect("builtin categories");
    let result = filter_projects(&catalog, &table, "All", "plus");
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].title, "Custom Shopify Plus Store");
}

#[test]
fn builtin_category_results() {
    let (catalog, table) = builtin();
    let cases = [
        ("Featured", vec!["1", "2", "3"]),
        ("Shopify Plus", vec!["1", "6", "9"]),
        ("Custom Themes", vec!["1", "2", "6", "8", "9", "10"]),
        ("Apps & Integrations", vec!["1", "3", "4", "7"]),
        ("Migrations", vec!["6"]),
    ];
    for (category, expected) in cases {
        let result = filter_projects(&catalog, &table, category, "");
        assert_eq!(ids(&result), expected, "category {category}");
    }
}

#[test]
fn category_and_search_combine() {
    let (catalog, table) = builtin();
    let result = filter_projects(&catalog, &table, "Shopify Plus", "wholesale");
    assert_eq!(ids(&result), ["1", "9"]);
}

#[test]
fn search_matches_technology_tags() {
    let (catalog, table) = builtin();
    let result = filter_projects(&catalog, &table, "All", "sqlite");
    assert_eq!(ids(&result), ["7"]);
}

#[test]
fn unknown_category_and_no_match_are_empty() {
    let (catalog, table) = builtin();
    assert!(filter_projects(&catalog, &table, "Blog", "").is_empty());
    assert!(filter_projects(&catalog, &table, "All", "kubernetes").is_empty());
    assert!(filter_projects(&catalog, &table, "Migrations", "subscription").is_empty());
}

#[test]
fn search_is_case_insensitive() {
    let (catalog, table) = builtin();
    let upper = filter_projects(&catalog, &table, "All", "SHOPIFY");
    let lower = filter_projects(&catalog, &table, "All", "shopify");
    assert_eq!(upper, lower);
    assert!(!upper.is_empty());
}

#[test]
fn query_matches_function() {
    let (catalog, table) = builtin();
    let query = FilterQuery::new("Custom Themes", "liquid");
    assert_eq!(
        apply_query(&catalog, &table, &query),
        filter_projects(&catalog, &table, "Custom Themes", "liquid")
    );
}

fn record_strategy() -> impl Strategy<Value = (Vec<&'static str>, Vec<&'static str>, bool)> {
    (
        prop::collection::vec(prop::sample::select(WORD_POOL), 1..4),
        prop::collection::vec(prop::sample::select(TAG_POOL), 0..4),
        any::<bool>(),
    )
}

fn catalog_strategy() -> impl Strategy<Value = Catalog> {
    prop::collection::vec(record_strategy(), 0..12).prop_map(|records| {
        let records = records
            .into_iter()
            .enumerate()
            .map(|(i, (words, tags, featured))| {
                ProjectRecord::new(i.to_string(), words.join(" "), "Project", "/p.png")
                    .with_technologies(tags)
                    .with_featured(featured)
            })
            .collect();
        Catalog::from_records(records).expect("generated catalog")
    })
}

fn category_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(CATEGORY_POOL)
}

fn search_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(SEARCH_POOL).prop_map(str::to_string)
}

proptest! {
    #[test]
    fn filtering_is_idempotent(
        catalog in catalog_strategy(),
        category in category_strategy(),
        search in search_strategy(),
    ) {
        let table = CategoryTable::builtin().expect("builtin categories");
        let once = filter_projects(&catalog, &table, category, &search);
        let twice = filter_projects(once.iter().copied(), &table, category, &search);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn results_are_ordered_subsequence(
        catalog in catalog_strategy(),
        category in category_strategy(),
        search in search_strategy(),
    ) {
        let table = CategoryTable::builtin().expect("builtin categories");
        let result = filter_projects(&catalog, &table, category, &search);
        let positions: Vec<usize> = result
            .iter()
            .map(|p| catalog.iter().position(|c| c.id == p.id).expect("from catalog"))
            .collect();
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn featured_is_exact_subsequence(catalog in catalog_strategy()) {
        let table = CategoryTable::builtin().expect("builtin categories");
        let result = filter_projects(&catalog, &table, "Featured", "");
        let expected: Vec<&ProjectRecord> = catalog.iter().filter(|p| p.featured).collect();
        prop_assert_eq!(result, expected);
    }

    #[test]
    fn search_ignores_case(
        catalog in catalog_strategy(),
        category in category_strategy(),
        search in search_strategy(),
    ) {
        let table = CategoryTable::builtin().expect("builtin categories");
        let upper = filter_projects(&catalog, &table, category, &search.to_uppercase());
        let lower = filter_projects(&catalog, &table, category, &search.to_lowercase());
        prop_assert_eq!(upper, lower);
    }
}
