//! Generational grouping
//!
//! Assigns every person reachable from a root an integer generation level:
//! ancestors negative, descendants positive, spouses and siblings on the
//! level of the person they were reached from. The traversal is keyed by
//! `(id, level)` pairs, so a person reached along paths that disagree about
//! their generation legitimately appears in more than one bucket.

use crate::graph::FamilyGraph;
use crate::models::person::PersonRecord;
use rustc_hash::FxHashSet;
use std::collections::{BTreeMap, VecDeque};
use std::sync::Arc;

/// Group every person reachable from `root_id` by generation level.
///
/// Levels iterate in ascending order; ordering of people within a level is
/// left to the caller.
#[must_use]
pub fn group_by_generation(
    graph: &FamilyGraph,
    root_id: &str,
) -> BTreeMap<i32, Vec<Arc<PersonRecord>>> {
    let mut grouped: BTreeMap<i32, Vec<Arc<PersonRecord>>> = BTreeMap::new();

    let children_of = graph.parents_to_children();
    let mut seen: FxHashSet<(String, i32)> = FxHashSet::default();
    let mut queue: VecDeque<(String, i32)> = VecDeque::new();
    queue.push_back((root_id.to_string(), 0));

    while let Some((id, level)) = queue.pop_front() {
        if !seen.insert((id.clone(), level)) {
            continue;
        }
        let Some(record) = graph.get(&id) else {
            continue;
        };

        grouped.entry(level).or_default().push(Arc::clone(&record));

        let rels = &record.rels;
        let parents = [rels.father.as_deref(), rels.mother.as_deref()];

        for parent_id in parents.into_iter().flatten() {
            queue.push_back((parent_id.to_string(), level - 1));
        }
        for child_id in &rels.children {
            queue.push_back((child_id.clone(), level + 1));
        }
        for spouse_id in &rels.spouses {
            queue.push_back((spouse_id.clone(), level));
        }
        // Siblings share a father or mother and stay on the same level
        for parent_id in parents.into_iter().flatten() {
            if let Some(siblings) = children_of.get(parent_id) {
                for sibling_id in siblings {
                    if sibling_id != &id {
                        queue.push_back((sibling_id.clone(), level));
                    }
                }
            }
        }
    }

    log::debug!(
        "grouped {} placement(s) into {} generation level(s) from {root_id}",
        seen.len(),
        grouped.len()
    );
    grouped
}
