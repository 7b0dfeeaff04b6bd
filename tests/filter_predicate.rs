use educore_dashboard::filter::{self, matches, CatalogFilter};
use educore_dashboard::Fixtures;

fn titles(filter: &CatalogFilter) -> Vec<String> {
    let fixtures = Fixtures::embedded().unwrap();
    filter::apply(&fixtures.catalog, filter)
        .into_iter()
        .map(|item| item.title.clone())
        .collect()
}

#[test]
fn default_filter_matches_everything() {
    let fixtures = Fixtures::embedded().unwrap();
    let all = filter::apply(&fixtures.catalog, &CatalogFilter::default());
    assert_eq!(all.len(), fixtures.catalog.len());
}

#[test]
fn search_text_is_case_insensitive() {
    assert_eq!(
        titles(&CatalogFilter::search("react")),
        vec!["Advanced React Development"]
    );
    assert_eq!(
        titles(&CatalogFilter::search("REACT")),
        vec!["Advanced React Development"]
    );
}

#[test]
fn search_text_looks_at_description_and_skills() {
    // Only in the description of the cloud course.
    assert_eq!(
        titles(&CatalogFilter::search("amazon web services")),
        vec!["AWS Cloud Architecture"]
    );
    // Only in a skill tag.
    assert_eq!(titles(&CatalogFilter::search("figma")), vec!["UI/UX Design Principles"]);
}

#[test]
fn category_and_difficulty_combine_with_and() {
    let filter = CatalogFilter::default()
        .with_category("design")
        .with_difficulty("beginner");
    assert_eq!(titles(&filter), vec!["UI/UX Design Principles"]);

    let none = CatalogFilter::default()
        .with_category("design")
        .with_difficulty("advanced");
    assert!(titles(&none).is_empty());
}

#[test]
fn category_comparison_is_exact() {
    let fixtures = Fixtures::embedded().unwrap();
    let design = &fixtures.catalog[2];
    assert!(matches(design, &CatalogFilter::default().with_category("design")));
    assert!(!matches(design, &CatalogFilter::default().with_category("Design")));
    assert!(matches(design, &CatalogFilter::default().with_difficulty("BEGINNER")));
}

#[test]
fn results_keep_catalog_order() {
    let filter = CatalogFilter::default().with_difficulty("advanced");
    assert_eq!(
        titles(&filter),
        vec!["Advanced React Development", "AWS Cloud Architecture"]
    );
}

#[test]
fn predicate_is_stable() {
    let fixtures = Fixtures::embedded().unwrap();
    let filter = CatalogFilter::search("design").with_difficulty("beginner");
    for item in &fixtures.catalog {
        assert_eq!(matches(item, &filter), matches(item, &filter));
    }
}
