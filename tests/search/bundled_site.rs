//! The site definition shipped in `data/site.json`.

use avp_search::{filter_with, find_validator, validators_by_category};

use crate::common::{hrefs, BUNDLED_NAV_ENTRIES, BUNDLED_VALIDATORS, SITE, SITE_INDEX};

#[test]
fn test_index_size() {
    assert_eq!(SITE.validators.len(), BUNDLED_VALIDATORS);
    assert_eq!(SITE_INDEX.len(), BUNDLED_NAV_ENTRIES + BUNDLED_VALIDATORS);
}

#[test]
fn test_preview_is_sidebar_prefix() {
    let results = filter_with(&SITE_INDEX, "", SITE.search.preview_limit);
    let titles: Vec<&str> = results.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "Introduction",
            "Lifecycle",
            "Triggers",
            "Severity Levels",
            "VALIDATOR.md Schema"
        ]
    );
    assert_eq!(results[0].category, "About AVP");
}

#[test]
fn test_nav_and_validator_entries_for_same_page() {
    let results = filter_with(&SITE_INDEX, "complexity", SITE.search.preview_limit);
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].category, "Quality");
    assert_eq!(results[1].category, "Validators");
    assert_eq!(results[0].href, results[1].href);
}

#[test]
fn test_untagged_validator_route() {
    let results = filter_with(&SITE_INDEX, "coverage", SITE.search.preview_limit);
    assert_eq!(hrefs(&results), vec!["/validators/other/coverage-check"]);
}

#[test]
fn test_catalogue_grouping() {
    let groups = validators_by_category(&SITE.validators, &SITE.search.fallback_tag);
    let keys: Vec<&str> = groups.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["security", "quality", "docs", "testing"]);
    assert_eq!(groups["security"].len(), 3);
}

#[test]
fn test_find_validator() {
    let validator = find_validator(&SITE.validators, "function-length").unwrap();
    assert_eq!(validator.estimated_tokens.as_deref(), Some("200-400"));
    assert!(find_validator(&SITE.validators, "missing").is_none());
}
