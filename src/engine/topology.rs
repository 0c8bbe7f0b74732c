// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Root/leaf discovery and ancestry queries over a pipeline's links.
//!
//! # Algorithms
//!
//! ## Roots and leaves
//! - **Roots**: start from every registered key and strike out each link's `dest`. O(V + E).
//! - **Leaves**: keys with no outgoing link. O(V).
//!
//! Both report keys in registration order.
//!
//! ## Ancestry
//! `is_ancestor` walks the links with an explicit stack and a visited set, so it
//! terminates on any graph and never recurses. A single query is O(V + E).
//!
//! During a run the scheduler asks the same ancestry questions over and over while
//! re-ordering its queue. [`Reachability`] answers them from a descendant table
//! built once per run instead of walking the graph per comparison.

use std::collections::{HashMap, HashSet, VecDeque};

use crate::config::{LinkMap, ModuleMap};
use crate::errors::PipelineError;

/// Modules with no incoming link, in registration order.
pub fn root_keys(modules: &ModuleMap, links: &LinkMap) -> Vec<String> {
    let mut candidates: HashSet<&str> = modules.keys().map(String::as_str).collect();
    for link in links.links() {
        candidates.remove(link.dest.as_str());
    }

    modules
        .keys()
        .filter(|key| candidates.contains(key.as_str()))
        .cloned()
        .collect()
}

/// Modules with no outgoing link, in registration order.
pub fn leaf_keys(modules: &ModuleMap, links: &LinkMap) -> Vec<String> {
    modules
        .keys()
        .filter(|key| !links.has_outgoing(key))
        .cloned()
        .collect()
}

/// The only root, or the error naming why there is not exactly one.
pub fn single_root(modules: &ModuleMap, links: &LinkMap) -> Result<String, PipelineError> {
    let mut roots = root_keys(modules, links);
    match roots.len() {
        0 => Err(PipelineError::NoRoot),
        1 => Ok(roots.remove(0)),
        _ => Err(PipelineError::MultipleRoots { roots }),
    }
}

/// The only leaf, or the error naming why there is not exactly one.
///
/// An empty pipeline has no leaf and reports `NoRoot`, since nothing could run.
pub fn single_leaf(modules: &ModuleMap, links: &LinkMap) -> Result<String, PipelineError> {
    let mut leaves = leaf_keys(modules, links);
    match leaves.len() {
        0 => Err(PipelineError::NoRoot),
        1 => Ok(leaves.remove(0)),
        _ => Err(PipelineError::MultipleLeaves { leaves }),
    }
}

/// Whether `ancestor` reaches `descendant` by following links.
///
/// A module is never its own ancestor; asking is an error.
pub fn is_ancestor(
    ancestor: &str,
    descendant: &str,
    links: &LinkMap,
) -> Result<bool, PipelineError> {
    if ancestor == descendant {
        return Err(PipelineError::SelfAncestry(ancestor.to_string()));
    }
    Ok(find_path(ancestor, descendant, links).is_some())
}

/// A link path from `from` to `to`, both ends included.
///
/// Returns `None` when `to` is unreachable. `from == to` yields the one-element path.
pub fn find_path(from: &str, to: &str, links: &LinkMap) -> Option<Vec<String>> {
    let mut parents: HashMap<&str, &str> = HashMap::new();
    let mut visited: HashSet<&str> = HashSet::from([from]);
    let mut stack: Vec<&str> = vec![from];

    while let Some(node) = stack.pop() {
        if node == to {
            let mut path = vec![to.to_string()];
            let mut current = to;
            while let Some(&parent) = parents.get(current) {
                path.push(parent.to_string());
                current = parent;
            }
            path.reverse();
            return Some(path);
        }

        for child in links.children(node) {
            if visited.insert(child.as_str()) {
                parents.insert(child.as_str(), node);
                stack.push(child.as_str());
            }
        }
    }

    None
}

/// Descendant table for every module, computed once per run.
#[derive(Debug, Clone, Default)]
pub struct Reachability {
    descendants: HashMap<String, HashSet<String>>,
}

impl Reachability {
    pub fn build(modules: &ModuleMap, links: &LinkMap) -> Self {
        let mut descendants = HashMap::with_capacity(modules.len());

        for key in modules.keys() {
            let mut reached: HashSet<String> = HashSet::new();
            let mut stack: Vec<&str> = links.children(key).map(String::as_str).collect();

            while let Some(node) = stack.pop() {
                if reached.insert(node.to_string()) {
                    stack.extend(links.children(node).map(String::as_str));
                }
            }

            descendants.insert(key.clone(), reached);
        }

        Self { descendants }
    }

    /// Whether `ancestor` reaches `descendant`. Unknown keys reach nothing.
    pub fn is_ancestor(&self, ancestor: &str, descendant: &str) -> bool {
        ancestor != descendant
            && self
                .descendants
                .get(ancestor)
                .map_or(false, |reached| reached.contains(descendant))
    }

    /// Stable ancestral sort.
    ///
    /// Every item lands before the first already-placed item that descends from
    /// it, otherwise at the end. Ancestors therefore always precede descendants,
    /// and items with no ancestry relation stay in the order they arrived.
    pub fn ancestral_sort<T, F>(&self, items: VecDeque<T>, key: F) -> VecDeque<T>
    where
        F: Fn(&T) -> &str,
    {
        let mut sorted: VecDeque<T> = VecDeque::with_capacity(items.len());

        for item in items {
            let position = sorted
                .iter()
                .position(|placed| self.is_ancestor(key(&item), key(placed)))
                .unwrap_or(sorted.len());
            sorted.insert(position, item);
        }

        sorted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::stub::StubModule;
    use crate::config::Link;
    use std::sync::Arc;

    fn graph(keys: &[&str], edges: &[(&str, &str)]) -> (ModuleMap, LinkMap) {
        let mut modules = ModuleMap::new();
        for key in keys {
            modules
                .insert(key.to_string(), Arc::new(StubModule::new()))
                .unwrap();
        }
        let mut links = LinkMap::new();
        for (src, dest) in edges {
            links.add(Link::new(*src, *dest));
        }
        (modules, links)
    }

    #[test]
    fn test_roots_and_leaves_diamond() {
        let (modules, links) = graph(
            &["a", "b", "c", "d"],
            &[("a", "b"), ("a", "c"), ("b", "d"), ("c", "d")],
        );

        assert_eq!(root_keys(&modules, &links), vec!["a"]);
        assert_eq!(leaf_keys(&modules, &links), vec!["d"]);
    }

    #[test]
    fn test_roots_of_disconnected_components() {
        let (modules, links) = graph(&["a", "b", "x", "y"], &[("a", "b"), ("x", "y")]);

        assert_eq!(root_keys(&modules, &links), vec!["a", "x"]);
        assert_eq!(leaf_keys(&modules, &links), vec!["b", "y"]);
    }

    #[test]
    fn test_is_ancestor() {
        let (_, links) = graph(&["a", "b", "c", "d"], &[("a", "b"), ("b", "c")]);

        assert!(is_ancestor("a", "c", &links).unwrap());
        assert!(is_ancestor("b", "c", &links).unwrap());
        assert!(!is_ancestor("c", "a", &links).unwrap());
        assert!(!is_ancestor("a", "d", &links).unwrap());
    }

    #[test]
    fn test_self_ancestry_rejected_for_every_key() {
        let (modules, links) = graph(&["a", "b", "c"], &[("a", "b"), ("b", "c")]);

        for key in modules.keys() {
            assert!(matches!(
                is_ancestor(key, key, &links),
                Err(PipelineError::SelfAncestry(k)) if &k == key
            ));
        }
    }

    #[test]
    fn test_find_path() {
        let (_, links) = graph(&["a", "b", "c"], &[("a", "b"), ("b", "c")]);

        assert_eq!(
            find_path("a", "c", &links),
            Some(vec!["a".to_string(), "b".to_string(), "c".to_string()])
        );
        assert_eq!(find_path("c", "a", &links), None);
    }

    #[test]
    fn test_reachability_matches_is_ancestor() {
        let (modules, links) = graph(
            &["a", "b", "c", "d", "e"],
            &[("a", "b"), ("a", "c"), ("b", "d"), ("c", "d")],
        );
        let reachability = Reachability::build(&modules, &links);

        for x in modules.keys() {
            for y in modules.keys() {
                if x == y {
                    assert!(!reachability.is_ancestor(x, y));
                } else {
                    assert_eq!(
                        reachability.is_ancestor(x, y),
                        is_ancestor(x, y, &links).unwrap(),
                        "{} -> {}",
                        x,
                        y
                    );
                }
            }
        }
    }

    #[test]
    fn test_ancestral_sort_moves_ancestors_first() {
        let (modules, links) = graph(&["a", "b", "c", "d"], &[("a", "b"), ("b", "c")]);
        let reachability = Reachability::build(&modules, &links);

        let sorted = reachability.ancestral_sort(VecDeque::from(["c", "d", "b", "a"]), |k| *k);

        assert_eq!(sorted, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_ancestral_sort_keeps_unrelated_order() {
        let (modules, links) = graph(&["a", "b", "c", "d"], &[("a", "b")]);
        let reachability = Reachability::build(&modules, &links);

        let sorted = reachability.ancestral_sort(VecDeque::from(["d", "c", "b", "a"]), |k| *k);

        // a must precede b; c and d have no relation to anything
        assert_eq!(sorted, vec!["d", "c", "a", "b"]);
    }
}
