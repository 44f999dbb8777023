//! Shared test utilities and fixtures.

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::LazyLock;

use avp_search::{build_index_with, SearchEntry, SiteConfig};

// Re-export canonical test utilities from avp_search::testing
pub use avp_search::testing::{
    flat_nav, make_entry, make_validator, make_validator_with_tags, security_and_reference_nav,
};

/// The site definition bundled with the repository.
pub const BUNDLED_SITE: &str = "data/site.json";

/// Navigation leaves in the bundled site.
pub const BUNDLED_NAV_ENTRIES: usize = 15;

/// Validators in the bundled site.
pub const BUNDLED_VALIDATORS: usize = 9;

pub fn bundled_site_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(BUNDLED_SITE)
}

/// Bundled site, parsed once per test binary.
pub static SITE: LazyLock<SiteConfig> = LazyLock::new(|| {
    SiteConfig::load(bundled_site_path()).expect("bundled site should load")
});

/// Index built from the bundled site.
pub static SITE_INDEX: LazyLock<Vec<SearchEntry>> =
    LazyLock::new(|| build_index_with(&SITE.navigation, &SITE.validators, &SITE.search));

/// Three entries with distinct titles, for modal navigation tests.
pub fn three_entries() -> Vec<SearchEntry> {
    vec![
        make_entry("Alpha guide", "/docs/alpha", "Guides", None),
        make_entry("Alpha reference", "/reference/alpha", "Reference", None),
        make_entry("Alpha validator", "/validators/other/alpha", "Validators", Some("alpha")),
    ]
}

pub fn hrefs(entries: &[SearchEntry]) -> Vec<&str> {
    entries.iter().map(|e| e.href.as_str()).collect()
}
