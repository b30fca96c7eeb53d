//! Dot-path operations on translation trees.
//!
//! Paths like `"services.fullStackDev.title"` address nodes by walking one
//! map level per segment.

use crate::types::{TranslationNode, TranslationTree, Translations};

/// Look up the node at `path`. Returns `None` if any segment is missing or
/// a leaf is reached before the path ends.
pub fn get_nested_value<'a>(tree: &'a TranslationTree, path: &str) -> Option<&'a TranslationNode> {
    let mut segments = path.split('.');
    let mut node = tree.get(segments.next()?)?;
    for segment in segments {
        node = node.as_branch()?.get(segment)?;
    }
    Some(node)
}

/// Write a leaf at `path`, creating intermediate branches as needed.
/// A leaf sitting where a branch is required gets replaced.
pub fn set_nested_value(tree: &mut TranslationTree, path: &str, value: &str) {
    let mut segments = path.split('.').peekable();
    let mut current = tree;
    while let Some(segment) = segments.next() {
        if segments.peek().is_none() {
            current.insert(
                segment.to_string(),
                TranslationNode::Leaf(value.to_string()),
            );
            return;
        }
        let node = current
            .entry(segment.to_string())
            .or_insert_with(|| TranslationNode::Branch(TranslationTree::new()));
        if let TranslationNode::Leaf(_) = node {
            *node = TranslationNode::Branch(TranslationTree::new());
        }
        current = match node {
            TranslationNode::Branch(child) => child,
            TranslationNode::Leaf(_) => return,
        };
    }
}

/// Remove the node at `path`. Branches left empty by the removal are pruned.
/// Returns `true` if something was removed.
pub fn remove_nested_value(tree: &mut TranslationTree, path: &str) -> bool {
    match path.split_once('.') {
        None => tree.remove(path).is_some(),
        Some((head, rest)) => {
            let Some(TranslationNode::Branch(child)) = tree.get_mut(head) else {
                return false;
            };
            let removed = remove_nested_value(child, rest);
            if removed && child.is_empty() {
                tree.remove(head);
            }
            removed
        }
    }
}

/// Recursively merge `overrides` into `base`. Leaves in `overrides` win;
/// branches present on both sides are merged key by key.
pub fn merge_trees(base: &mut TranslationTree, overrides: &TranslationTree) {
    for (key, node) in overrides {
        if let (Some(TranslationNode::Branch(existing)), TranslationNode::Branch(incoming)) =
            (base.get_mut(key), node)
        {
            merge_trees(existing, incoming);
            continue;
        }
        base.insert(key.clone(), node.clone());
    }
}

/// Merge per-category overrides on top of `base`, returning a new value.
pub fn merge_translations(base: &Translations, overrides: &Translations) -> Translations {
    let mut merged = base.clone();
    for (category, tree) in overrides {
        merge_trees(merged.entry(category.clone()).or_default(), tree);
    }
    merged
}

/// Dot paths of every leaf in `tree`, in key order.
pub fn leaf_paths(tree: &TranslationTree) -> Vec<String> {
    let mut out = Vec::new();
    collect_leaf_paths(tree, "", &mut out);
    out
}

fn collect_leaf_paths(tree: &TranslationTree, prefix: &str, out: &mut Vec<String>) {
    for (key, node) in tree {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };
        match node {
            TranslationNode::Leaf(_) => out.push(path),
            TranslationNode::Branch(child) => collect_leaf_paths(child, &path, out),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TranslationTree {
        serde_json::from_str(
            r#"{
                "title": "Our Services",
                "fullStackDev": {
                    "title": "Full-Stack Development",
                    "features": { "api": "API design", "ui": "UI engineering" }
                }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_get_nested_value_walks_segments() {
        let tree = sample();
        assert_eq!(
            get_nested_value(&tree, "fullStackDev.features.api").and_then(|n| n.as_leaf()),
            Some("API design")
        );
        assert_eq!(
            get_nested_value(&tree, "title").and_then(|n| n.as_leaf()),
            Some("Our Services")
        );
    }

    #[test]
    fn test_get_nested_value_missing_or_through_leaf() {
        let tree = sample();
        assert!(get_nested_value(&tree, "missing").is_none());
        assert!(get_nested_value(&tree, "fullStackDev.nope").is_none());
        // "title" is a leaf, so nothing lives beneath it.
        assert!(get_nested_value(&tree, "title.deeper").is_none());
    }

    #[test]
    fn test_get_nested_value_returns_branch_for_namespace() {
        let tree = sample();
        let node = get_nested_value(&tree, "fullStackDev.features").unwrap();
        assert_eq!(node.as_branch().map(|b| b.len()), Some(2));
    }

    #[test]
    fn test_set_nested_value_creates_intermediates() {
        let mut tree = TranslationTree::new();
        set_nested_value(&mut tree, "plan.free.label", "Free");
        assert_eq!(
            get_nested_value(&tree, "plan.free.label").and_then(|n| n.as_leaf()),
            Some("Free")
        );
    }

    #[test]
    fn test_set_nested_value_replaces_leaf_with_branch() {
        let mut tree = sample();
        set_nested_value(&mut tree, "title.short", "Services");
        assert_eq!(
            get_nested_value(&tree, "title.short").and_then(|n| n.as_leaf()),
            Some("Services")
        );
    }

    #[test]
    fn test_set_nested_value_replaces_leaf_mid_path() {
        let mut tree = sample();
        set_nested_value(&mut tree, "title.short.label", "Svc");
        assert_eq!(
            get_nested_value(&tree, "title.short.label").and_then(|n| n.as_leaf()),
            Some("Svc")
        );
        assert!(get_nested_value(&tree, "title").and_then(|n| n.as_branch()).is_some());
    }

    #[test]
    fn test_set_nested_value_is_idempotent() {
        let mut tree = sample();
        set_nested_value(&mut tree, "fullStackDev.title", "Full Stack");
        let once = tree.clone();
        set_nested_value(&mut tree, "fullStackDev.title", "Full Stack");
        assert_eq!(tree, once);
    }

    #[test]
    fn test_remove_nested_value_prunes_empty_branches() {
        let mut tree = TranslationTree::new();
        set_nested_value(&mut tree, "a.b.c", "x");
        set_nested_value(&mut tree, "keep", "y");
        assert!(remove_nested_value(&mut tree, "a.b.c"));
        assert!(!tree.contains_key("a"));
        assert!(tree.contains_key("keep"));
        assert!(!remove_nested_value(&mut tree, "a.b.c"));
    }

    #[test]
    fn test_merge_trees_is_recursive() {
        let mut base = sample();
        let overrides: TranslationTree =
            serde_json::from_str(r#"{"fullStackDev":{"features":{"api":"REST & GraphQL"}}}"#)
                .unwrap();
        merge_trees(&mut base, &overrides);
        assert_eq!(
            get_nested_value(&base, "fullStackDev.features.api").and_then(|n| n.as_leaf()),
            Some("REST & GraphQL")
        );
        // Siblings of the overridden leaf survive.
        assert_eq!(
            get_nested_value(&base, "fullStackDev.features.ui").and_then(|n| n.as_leaf()),
            Some("UI engineering")
        );
        assert_eq!(
            get_nested_value(&base, "fullStackDev.title").and_then(|n| n.as_leaf()),
            Some("Full-Stack Development")
        );
    }

    #[test]
    fn test_merge_translations_adds_new_categories() {
        let mut base = Translations::new();
        base.insert("common".to_string(), sample());
        let mut overrides = Translations::new();
        let mut pricing = TranslationTree::new();
        set_nested_value(&mut pricing, "plan.free", "Free");
        overrides.insert("pricing".to_string(), pricing);

        let merged = merge_translations(&base, &overrides);
        assert!(merged.contains_key("common"));
        assert!(merged.contains_key("pricing"));
        // Inputs are untouched.
        assert!(!base.contains_key("pricing"));
    }

    #[test]
    fn test_leaf_paths() {
        let paths = leaf_paths(&sample());
        assert_eq!(
            paths,
            vec![
                "fullStackDev.features.api",
                "fullStackDev.features.ui",
                "fullStackDev.title",
                "title",
            ]
        );
    }
}
