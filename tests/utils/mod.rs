//! Shared helpers for integration tests

use kintree::{FamilyGraph, Gender, PersonRecord, normalize};

/// Create a named record with the given gender
pub fn person(id: &str, first_name: &str, gender: Gender) -> PersonRecord {
    PersonRecord::new(id)
        .with_first_name(first_name)
        .with_gender(gender)
}

/// Normalize a set of records and index them as a graph
pub fn graph_of(records: Vec<PersonRecord>) -> FamilyGraph {
    FamilyGraph::from_records(normalize(records))
}
