//! Tests for global filter-option extraction.

use facet_engine::{extract_filter_options, FacetConfig, FacetDef};
use serde_json::{json, Value};

// ── Fixtures ────────────────────────────────────────────────────────────────

/// A small agenda in the shapes the backing store actually produces.
fn agenda() -> Vec<Value> {
    vec![
        json!({"title": "Opening keynote", "focus": "Adoption, Trust", "level": "all", "region": "EMEA"}),
        json!({"title": "Registry deep dive", "focus": ["Interoperability", "Trust"], "level": "expert"}),
        json!({"title": "Panel", "focus": null, "level": "all", "region": "APAC"}),
        json!({"title": "Workshop", "level": "beginner"}),
    ]
}

fn config() -> FacetConfig {
    FacetConfig::new(vec![
        FacetDef::exact("focus"),
        FacetDef::exact("level"),
        FacetDef::exact("region"),
        FacetDef::contains("goals"),
    ])
    .unwrap()
}

// ── Extraction ──────────────────────────────────────────────────────────────

#[test]
fn options_are_deduplicated_and_sorted() {
    let options = extract_filter_options(&agenda(), &config());

    assert_eq!(options[0].category, "focus");
    assert_eq!(options[0].values, ["Adoption", "Interoperability", "Trust"]);

    assert_eq!(options[1].category, "level");
    assert_eq!(options[1].values, ["all", "beginner", "expert"]);
}

#[test]
fn categories_follow_config_order() {
    let options = extract_filter_options(&agenda(), &config());
    let names: Vec<&str> = options.iter().map(|o| o.category.as_str()).collect();
    assert_eq!(names, ["focus", "level", "region", "goals"]);
}

#[test]
fn category_with_no_values_is_present_and_empty() {
    // No item carries "goals" — the facet is reported empty so the UI can
    // hide it.
    let options = extract_filter_options(&agenda(), &config());
    assert_eq!(options[3].category, "goals");
    assert!(options[3].values.is_empty());
}

#[test]
fn sort_is_case_insensitive() {
    let items = vec![
        json!({"focus": "beta"}),
        json!({"focus": "Alpha"}),
        json!({"focus": "gamma, Beta"}),
    ];
    let config = FacetConfig::new(vec![FacetDef::exact("focus")]).unwrap();

    // Case-insensitive order, spelling ("B" before "b") breaking the tie.
    let options = extract_filter_options(&items, &config);
    assert_eq!(options[0].values, ["Alpha", "Beta", "beta", "gamma"]);
}

#[test]
fn extraction_is_order_independent() {
    let config = config();
    let forward = extract_filter_options(&agenda(), &config);

    let mut reversed_items = agenda();
    reversed_items.reverse();
    let reversed = extract_filter_options(&reversed_items, &config);

    assert_eq!(forward, reversed);
}

#[test]
fn empty_collection_yields_empty_lists() {
    let options = extract_filter_options(&[], &config());
    assert_eq!(options.len(), 4);
    assert!(options.iter().all(|o| o.values.is_empty()));
}

// ── Config validation ───────────────────────────────────────────────────────

#[test]
fn duplicate_category_names_are_rejected() {
    let result = FacetConfig::new(vec![FacetDef::exact("focus"), FacetDef::contains("focus")]);
    assert!(result.is_err());
}

#[test]
fn blank_category_names_are_rejected() {
    assert!(FacetConfig::new(vec![FacetDef::exact("  ")]).is_err());
}
