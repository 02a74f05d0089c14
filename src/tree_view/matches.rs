//! Search-match enumeration over the tree.
//!
//! Matching is a tree-view concern: the controller hands over the query
//! and options and receives back the ordered match set. Matches are
//! enumerated in depth-first document order over every node, visible or
//! not, so the navigator's focus index always means "the n-th match in
//! reading order".

use std::collections::HashSet;

use regex::Regex;

use crate::tree::{NodePath, TreeNode};

/// How the query string is interpreted
#[derive(Debug, Clone, Copy, Default)]
pub struct MatchOptions {
    pub case_sensitive: bool,
    pub use_regex: bool,
}

/// The ordered match set reported back to the controller
#[derive(Debug, Clone, Default)]
pub struct Matches {
    paths: Vec<NodePath>,
    members: HashSet<NodePath>,
}

impl Matches {
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// The n-th match in document order
    pub fn get(&self, index: usize) -> Option<&NodePath> {
        self.paths.get(index)
    }

    /// Is this row part of the match set? (used for row highlighting)
    pub fn contains(&self, path: &[usize]) -> bool {
        self.members.contains(path)
    }

    fn from_paths(paths: Vec<NodePath>) -> Self {
        let members = paths.iter().cloned().collect();
        Matches { paths, members }
    }
}

/// Search all nodes for the query.
///
/// Returns (matches, error_message) where error_message is Some if the
/// regex is invalid; an invalid pattern yields no matches rather than a
/// fault. An empty query matches nothing.
pub fn evaluate_matches(
    forest: &[TreeNode],
    query: &str,
    options: MatchOptions,
) -> (Matches, Option<String>) {
    if query.is_empty() {
        return (Matches::default(), None);
    }

    // Build the matcher based on options
    let regex = if options.use_regex {
        let pattern = if options.case_sensitive {
            query.to_string()
        } else {
            format!("(?i){}", query)
        };
        match Regex::new(&pattern) {
            Ok(r) => Some(r),
            Err(e) => return (Matches::default(), Some(format!("Invalid regex: {}", e))),
        }
    } else {
        None
    };

    // Helper closure for matching a single text field
    let matches = |text: &str| -> bool {
        if let Some(ref re) = regex {
            re.is_match(text)
        } else if options.case_sensitive {
            text.contains(query)
        } else {
            text.to_lowercase().contains(&query.to_lowercase())
        }
    };

    let mut paths = Vec::new();
    let mut prefix = Vec::new();
    collect_matches(forest, &matches, &mut prefix, &mut paths);

    (Matches::from_paths(paths), None)
}

/// Walk the forest in document order, recording every matching node's path
fn collect_matches(
    forest: &[TreeNode],
    matches: &dyn Fn(&str) -> bool,
    prefix: &mut NodePath,
    out: &mut Vec<NodePath>,
) {
    for (index, node) in forest.iter().enumerate() {
        prefix.push(index);

        let subtitle_hit = node.subtitle.as_deref().is_some_and(matches);
        if matches(&node.title) || subtitle_hit {
            out.push(prefix.clone());
        }

        collect_matches(&node.children, matches, prefix, out);
        prefix.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_forest() -> Vec<TreeNode> {
        vec![
            TreeNode {
                subtitle: Some(String::from("quarterly plan")),
                children: vec![
                    TreeNode::new("Research"),
                    TreeNode {
                        children: vec![TreeNode::new("Wireframes")],
                        ..TreeNode::new("Design")
                    },
                ],
                ..TreeNode::new("Roadmap")
            },
            TreeNode::new("Archive"),
        ]
    }

    #[test]
    fn test_empty_query_matches_nothing() {
        let (matches, error) = evaluate_matches(&sample_forest(), "", MatchOptions::default());
        assert!(matches.is_empty());
        assert!(error.is_none());
    }

    #[test]
    fn test_substring_match_covers_title_and_subtitle() {
        let forest = sample_forest();

        let (matches, _) = evaluate_matches(&forest, "Design", MatchOptions::default());
        assert_eq!(matches.len(), 1);
        assert_eq!(matches.get(0).unwrap(), &vec![0, 1]);

        // Subtitle text is searched too
        let (matches, _) = evaluate_matches(&forest, "quarterly", MatchOptions::default());
        assert_eq!(matches.len(), 1);
        assert_eq!(matches.get(0).unwrap(), &vec![0]);
    }

    #[test]
    fn test_matches_come_in_document_order() {
        let forest = sample_forest();
        // "r" appears in Roadmap (subtitle too), Research, Wireframes, Archive
        let (matches, _) = evaluate_matches(&forest, "r", MatchOptions::default());

        let paths: Vec<&NodePath> = (0..matches.len()).map(|i| matches.get(i).unwrap()).collect();
        assert_eq!(
            paths,
            [&vec![0], &vec![0, 0], &vec![0, 1, 0], &vec![1]]
        );
        assert!(matches.contains(&[0, 1, 0]));
        assert!(!matches.contains(&[0, 1]));
    }

    #[test]
    fn test_collapsed_nodes_still_match() {
        // Nothing in sample_forest is expanded; matching ignores visibility
        let (matches, _) = evaluate_matches(&sample_forest(), "Wireframes", MatchOptions::default());
        assert_eq!(matches.len(), 1);
    }

    #[test]
    fn test_case_sensitivity_option() {
        let forest = sample_forest();
        let insensitive = MatchOptions::default();
        let sensitive = MatchOptions {
            case_sensitive: true,
            ..MatchOptions::default()
        };

        let (matches, _) = evaluate_matches(&forest, "research", insensitive);
        assert_eq!(matches.len(), 1);

        let (matches, _) = evaluate_matches(&forest, "research", sensitive);
        assert!(matches.is_empty());

        let (matches, _) = evaluate_matches(&forest, "Research", sensitive);
        assert_eq!(matches.len(), 1);
    }

    #[test]
    fn test_regex_match_and_invalid_pattern() {
        let forest = sample_forest();
        let regex = MatchOptions {
            use_regex: true,
            ..MatchOptions::default()
        };

        let (matches, error) = evaluate_matches(&forest, "^(Res|Arch)", regex);
        assert!(error.is_none());
        assert_eq!(matches.len(), 2);

        // Invalid regex reports an error and matches nothing
        let (matches, error) = evaluate_matches(&forest, "[broken", regex);
        assert!(error.is_some());
        assert!(matches.is_empty());
    }
}
