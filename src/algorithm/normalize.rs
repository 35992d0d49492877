//! Snapshot normalization
//!
//! Repairs a possibly inconsistent collection of person records into one
//! where parent/child and spouse links agree in both directions:
//!
//! - every resolvable father/mother reference is mirrored in that parent's
//!   children list,
//! - a parent of known gender fills in a child's missing father or mother
//!   (never overwriting an existing one),
//! - spouse links are symmetric,
//! - id lists are deduplicated and blank ids dropped.
//!
//! No relationship is ever invented beyond what an existing edge implies,
//! and references to ids absent from the input are left untouched. The pass
//! is pure and idempotent.

use crate::models::person::PersonRecord;
use crate::models::types::Gender;
use indexmap::IndexMap;

/// Normalize a snapshot of person records.
///
/// Duplicate ids collapse to the last record seen, keeping the position of
/// the first occurrence in the output order.
#[must_use]
pub fn normalize(records: Vec<PersonRecord>) -> Vec<PersonRecord> {
    let total = records.len();

    // Sanitize each record and index by id, last write wins.
    let mut index: IndexMap<String, PersonRecord> = IndexMap::with_capacity(total);
    for mut record in records {
        record.rels = record.rels.sanitized();
        index.insert(record.id.clone(), record);
    }

    let ids: Vec<String> = index.keys().cloned().collect();

    // Parent → child: every resolvable father/mother reference adds this
    // record to that parent's children.
    for id in &ids {
        let record = &index[id];
        let parents = [record.rels.father.clone(), record.rels.mother.clone()];
        for parent_id in parents.into_iter().flatten() {
            if let Some(parent) = index.get_mut(&parent_id) {
                push_unique(&mut parent.rels.children, id);
            }
        }
    }

    // Child → parent: a parent of known gender fills the matching slot on
    // each resolvable child, unless the child already has one.
    for id in &ids {
        let record = &index[id];
        let gender = record.profile.gender;
        if gender == Gender::Unknown {
            continue;
        }
        for child_id in record.rels.children.clone() {
            if let Some(child) = index.get_mut(&child_id) {
                match gender {
                    Gender::Male if child.rels.father.is_none() => {
                        child.rels.father = Some(id.clone());
                    }
                    Gender::Female if child.rels.mother.is_none() => {
                        child.rels.mother = Some(id.clone());
                    }
                    _ => {}
                }
            }
        }
    }

    // Spouse ↔ spouse: every resolvable spouse edge gains its reciprocal.
    for id in &ids {
        for spouse_id in index[id].rels.spouses.clone() {
            if let Some(spouse) = index.get_mut(&spouse_id) {
                push_unique(&mut spouse.rels.spouses, id);
            }
        }
    }

    log::debug!("normalized {total} record(s) into {} distinct id(s)", index.len());
    index.into_values().collect()
}

fn push_unique(ids: &mut Vec<String>, id: &str) {
    if !ids.iter().any(|existing| existing == id) {
        ids.push(id.to_string());
    }
}
