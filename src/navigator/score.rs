//! Fuzzy scoring of action labels against the query

use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;
use std::cmp::Reverse;

use super::actions::QuickSearchAction;

/// Score `label` against `query` (higher is better).
///
/// An empty query matches everything with score 0. `None` means no match.
/// Smart case: case-insensitive unless the query contains uppercase.
pub fn score_label(label: &str, query: &str) -> Option<i64> {
    let query = query.trim();
    if query.is_empty() {
        return Some(0);
    }

    SkimMatcherV2::default().smart_case().fuzzy_match(label, query)
}

/// Keep actions whose label matches `query`, with their score filled in
pub fn filter_actions(actions: Vec<QuickSearchAction>, query: &str) -> Vec<QuickSearchAction> {
    actions
        .into_iter()
        .filter_map(|action| {
            score_label(&action.label, query).map(|score| QuickSearchAction { score, ..action })
        })
        .collect()
}

/// Sort by score (best first), ties by label
pub fn sort_by_score(actions: &mut [QuickSearchAction]) {
    actions.sort_by(|a, b| {
        Reverse(a.score)
            .cmp(&Reverse(b.score))
            .then_with(|| a.label.cmp(&b.label))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigator::actions::{ActionCommand, QuickSearchActionType};

    fn action(label: &str) -> QuickSearchAction {
        QuickSearchAction::new(
            label,
            QuickSearchActionType::View,
            ActionCommand::Navigate("/".to_string()),
        )
    }

    #[test]
    fn test_empty_query_matches_everything() {
        assert_eq!(score_label("Products", ""), Some(0));
        assert_eq!(score_label("Products", "   "), Some(0));
    }

    #[test]
    fn test_fuzzy_match() {
        assert!(score_label("Product Types", "prty").is_some());
        assert!(score_label("Customers", "xyz").is_none());
    }

    #[test]
    fn test_filter_drops_non_matching() {
        let filtered = filter_actions(
            vec![action("Orders"), action("Draft Orders"), action("Customers")],
            "order",
        );
        let labels: Vec<_> = filtered.iter().map(|a| a.label.as_str()).collect();
        assert_eq!(labels, vec!["Orders", "Draft Orders"]);
        assert!(filtered.iter().all(|a| a.score > 0));
    }

    #[test]
    fn test_sort_by_score_then_label() {
        let mut actions = vec![
            QuickSearchAction { score: 10, ..action("b") },
            QuickSearchAction { score: 30, ..action("c") },
            QuickSearchAction { score: 10, ..action("a") },
        ];
        sort_by_score(&mut actions);
        let labels: Vec<_> = actions.iter().map(|a| a.label.as_str()).collect();
        assert_eq!(labels, vec!["c", "a", "b"]);
    }
}
