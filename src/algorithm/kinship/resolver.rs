//! Breadth-first relation path search
//!
//! Walks the family graph outward from a root person over father, mother,
//! spouse and child edges until the target person is found, then labels the
//! discovered relation path. The visited set is keyed by id and checked at
//! dequeue, so the first (shortest) path to each person is the one labeled.

use crate::algorithm::kinship::labels::relation_label;
use crate::algorithm::kinship::path::{MAX_RELATION_DEPTH, RelationPath, RelationStep, simplify};
use crate::graph::FamilyGraph;
use itertools::Itertools;
use rustc_hash::FxHashSet;
use std::collections::VecDeque;

/// Describe how `target_id` relates to `root_id`.
///
/// Returns a label of the form `"<Relation> of <RootFirstName>"`; distinct
/// labels for the target are deduplicated and comma-joined in discovery
/// order. The result is empty when the target equals the root, is not
/// reachable within the depth cap, or either id is unknown. Malformed
/// references are skipped, never reported.
#[must_use]
pub fn describe_relationship(graph: &FamilyGraph, root_id: &str, target_id: &str) -> String {
    let mut visited: FxHashSet<String> = FxHashSet::default();
    let mut queue: VecDeque<(String, RelationPath)> = VecDeque::new();
    queue.push_back((root_id.to_string(), RelationPath::new()));

    let mut labels: Vec<String> = Vec::new();

    while let Some((id, path)) = queue.pop_front() {
        if visited.contains(&id) || path.len() > MAX_RELATION_DEPTH {
            continue;
        }
        visited.insert(id.clone());

        let Some(record) = graph.get(&id) else {
            continue;
        };

        if id == target_id && !path.is_empty() {
            let label = relation_label(&simplify(&path), record.profile.gender);
            let root_name = graph.get(root_id).map_or_else(
                || "Unnamed".to_string(),
                |root| root.profile.display_first_name().to_string(),
            );
            log::trace!("{root_id} -> {target_id}: {label} via {path:?}");
            labels.push(format!("{label} of {root_name}"));
            continue;
        }

        let rels = &record.rels;
        let neighbors = rels
            .father
            .iter()
            .map(|father| (father, RelationStep::Father))
            .chain(rels.mother.iter().map(|mother| (mother, RelationStep::Mother)))
            .chain(rels.spouses.iter().map(|spouse| (spouse, RelationStep::Spouse)))
            .chain(rels.children.iter().map(|child| (child, RelationStep::Child)));

        for (next_id, step) in neighbors {
            let mut next_path = path.clone();
            next_path.push(step);
            queue.push_back((next_id.clone(), next_path));
        }
    }

    labels.into_iter().unique().join(", ")
}
