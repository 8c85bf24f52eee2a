//! Comparator primitives for collection diffing.
//!
//! Two matching strategies are provided:
//! - [`set_diff`] for set-like fields, where elements are compared by key
//!   only and the result is a remove/add partition
//! - [`keyed_list_diff`] for keyed lists, where matched pairs are kept for a
//!   per-pair field diff
//!
//! Both preserve source order: removals follow the current list's order,
//! additions and matched pairs follow the target list's order. Duplicate
//! keys on one side are considered once; the first occurrence wins.

use std::collections::HashSet;
use std::hash::Hash;

/// Result of a set-like diff: elements to remove and elements to add.
#[derive(Debug)]
pub struct SetDelta<'a, T> {
    /// Current elements absent from the target, in current-list order.
    pub to_remove: Vec<&'a T>,
    /// Target elements absent from the current list, in target-list order.
    pub to_add: Vec<&'a T>,
}

/// Computes a set-like diff over two slices, comparing elements by key.
///
/// Differs built on this primitive emit all removals before any addition,
/// so a slot freed by a removal is never transiently occupied twice.
pub fn set_diff<'a, T, K, F>(target: &'a [T], current: &'a [T], key: F) -> SetDelta<'a, T>
where
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let target_keys: HashSet<K> = target.iter().map(&key).collect();
    let current_keys: HashSet<K> = current.iter().map(&key).collect();

    let mut seen = HashSet::new();
    let to_remove = current
        .iter()
        .filter(|e| !target_keys.contains(&key(e)) && seen.insert(key(e)))
        .collect();

    let mut seen = HashSet::new();
    let to_add = target
        .iter()
        .filter(|e| !current_keys.contains(&key(e)) && seen.insert(key(e)))
        .collect();

    SetDelta { to_remove, to_add }
}

/// Result of a keyed-list diff: unmatched elements on each side plus matched
/// pairs for per-pair field diffing.
#[derive(Debug)]
pub struct KeyedDelta<'a, T> {
    /// Target elements with no current counterpart, in target-list order.
    pub added: Vec<&'a T>,
    /// Current elements with no target counterpart, in current-list order.
    pub removed: Vec<&'a T>,
    /// Matched `(target, current)` pairs, in target-list order.
    pub matched: Vec<(&'a T, &'a T)>,
}

/// Matches two lists by natural key.
pub fn keyed_list_diff<'a, T, K, F>(target: &'a [T], current: &'a [T], key: F) -> KeyedDelta<'a, T>
where
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let mut current_by_key: Vec<(K, &T)> = Vec::with_capacity(current.len());
    for e in current {
        let k = key(e);
        if !current_by_key.iter().any(|(seen, _)| *seen == k) {
            current_by_key.push((k, e));
        }
    }
    let target_keys: HashSet<K> = target.iter().map(&key).collect();

    let mut added = Vec::new();
    let mut matched = Vec::new();
    let mut seen = HashSet::new();
    for t in target {
        let k = key(t);
        if !seen.insert(key(t)) {
            continue;
        }
        match current_by_key.iter().find(|(ck, _)| *ck == k) {
            Some((_, c)) => matched.push((t, *c)),
            None => added.push(t),
        }
    }

    let removed = current_by_key
        .iter()
        .filter(|(k, _)| !target_keys.contains(k))
        .map(|(_, e)| *e)
        .collect();

    KeyedDelta {
        added,
        removed,
        matched,
    }
}
