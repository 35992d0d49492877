//! Record filtering passes
//!
//! Two independent cleanup passes over a snapshot, composable with
//! normalization but deliberately not part of it:
//!
//! - `retain_meaningful` drops placeholder records whose profile is empty or
//!   carries nothing but a gender code (the editing surface creates such
//!   cards for yet-unfilled relatives),
//! - `prune_dangling` strips relationship references that do not resolve to
//!   any record in the collection. Normalization keeps dangling references
//!   intact; callers that want them gone run this pass explicitly.

use crate::models::person::PersonRecord;
use rustc_hash::FxHashSet;

/// Keep only records whose profile carries meaningful content
#[must_use]
pub fn retain_meaningful(records: Vec<PersonRecord>) -> Vec<PersonRecord> {
    let total = records.len();
    let kept: Vec<PersonRecord> = records
        .into_iter()
        .filter(|record| record.profile.is_meaningful())
        .collect();
    if kept.len() < total {
        log::debug!("dropped {} placeholder record(s)", total - kept.len());
    }
    kept
}

/// Remove relationship references that do not resolve within the collection
#[must_use]
pub fn prune_dangling(records: Vec<PersonRecord>) -> Vec<PersonRecord> {
    let known: FxHashSet<String> = records.iter().map(|record| record.id.clone()).collect();

    let dangling = records
        .iter()
        .flat_map(|record| record.rels.references())
        .filter(|id| !known.contains(*id))
        .count();
    if dangling > 0 {
        log::debug!("pruning {dangling} dangling reference(s)");
    }

    records
        .into_iter()
        .map(|mut record| {
            let rels = &mut record.rels;
            if rels.father.as_deref().is_some_and(|id| !known.contains(id)) {
                rels.father = None;
            }
            if rels.mother.as_deref().is_some_and(|id| !known.contains(id)) {
                rels.mother = None;
            }
            rels.spouses.retain(|id| known.contains(id));
            rels.children.retain(|id| known.contains(id));
            record
        })
        .collect()
}
