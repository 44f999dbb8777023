//! Index construction laws.

use avp_search::{build_index, NavNode};
use proptest::prelude::*;

use crate::strategies::{nav_strategy, validators_strategy};

fn count_navigable(nodes: &[NavNode]) -> usize {
    nodes
        .iter()
        .map(|n| usize::from(n.href.is_some()) + count_navigable(n.children()))
        .sum()
}

/// Oracle walk: (href, category of nearest enclosing group) in depth-first order.
fn expected_categories(nodes: &[NavNode], parent: Option<&str>, out: &mut Vec<(String, String)>) {
    for node in nodes {
        if let Some(href) = &node.href {
            out.push((href.clone(), parent.unwrap_or("Docs").to_string()));
        }
        expected_categories(node.children(), Some(&node.title), out);
    }
}

proptest! {
    /// Output length is navigable nodes plus validators.
    #[test]
    fn prop_index_length(nav in nav_strategy(), validators in validators_strategy()) {
        let index = build_index(&nav, &validators);
        prop_assert_eq!(index.len(), count_navigable(&nav) + validators.len());
    }

    /// Every navigation entry is categorised by its nearest group.
    #[test]
    fn prop_nearest_group_category(nav in nav_strategy()) {
        let index = build_index(&nav, &[]);
        let mut expected = Vec::new();
        expected_categories(&nav, None, &mut expected);

        let actual: Vec<(String, String)> = index
            .iter()
            .map(|e| (e.href.clone(), e.category.clone()))
            .collect();
        prop_assert_eq!(actual, expected);
    }

    /// Validator entries follow all navigation entries, in catalogue order.
    #[test]
    fn prop_validators_trail_navigation(
        nav in nav_strategy(),
        validators in validators_strategy(),
    ) {
        let index = build_index(&nav, &validators);
        let tail = &index[count_navigable(&nav)..];

        prop_assert_eq!(tail.len(), validators.len());
        for (entry, validator) in tail.iter().zip(&validators) {
            prop_assert_eq!(&entry.title, &validator.name);
            prop_assert_eq!(entry.category.as_str(), "Validators");
            prop_assert_eq!(entry.excerpt.as_deref(), Some(validator.description.as_str()));
            let tag = validator.tags.first().map(String::as_str).unwrap_or("other");
            prop_assert_eq!(&entry.href, &format!("/validators/{}/{}", tag, validator.name));
        }
    }

    /// Building twice gives the same index.
    #[test]
    fn prop_index_deterministic(nav in nav_strategy(), validators in validators_strategy()) {
        prop_assert_eq!(build_index(&nav, &validators), build_index(&nav, &validators));
    }
}
