//! In-memory family graph index
//!
//! A `FamilyGraph` is the transient working index the traversal algorithms
//! run against: a mapping from record id to `PersonRecord`, built fresh from
//! a snapshot for the duration of one computation. It holds no state between
//! invocations and is never persisted.

use crate::models::person::PersonRecord;
use rustc_hash::FxHashMap;
use std::sync::Arc;

/// Id-indexed collection of person records
#[derive(Debug, Default)]
pub struct FamilyGraph {
    /// Records indexed by id
    records: FxHashMap<String, Arc<PersonRecord>>,
}

impl FamilyGraph {
    /// Create a new empty graph
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: FxHashMap::default(),
        }
    }

    /// Build a graph from a snapshot of records.
    ///
    /// Records sharing an id collapse to the last one seen.
    #[must_use]
    pub fn from_records(records: Vec<PersonRecord>) -> Self {
        let mut graph = Self::new();
        for record in records {
            graph.add(record);
        }
        graph
    }

    /// Add a record to the graph, replacing any record with the same id
    pub fn add(&mut self, record: PersonRecord) {
        let record = Arc::new(record);
        self.records.insert(record.id.clone(), record);
    }

    /// Get a record by id
    #[must_use]
    pub fn get(&self, id: &str) -> Option<Arc<PersonRecord>> {
        self.records.get(id).cloned()
    }

    /// Whether a record with the given id exists
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.records.contains_key(id)
    }

    /// All records in the graph
    #[must_use]
    pub fn all(&self) -> Vec<Arc<PersonRecord>> {
        self.records.values().cloned().collect()
    }

    /// All record ids in the graph
    #[must_use]
    pub fn ids(&self) -> Vec<String> {
        self.records.keys().cloned().collect()
    }

    /// Number of records in the graph
    #[must_use]
    pub fn count(&self) -> usize {
        self.records.len()
    }

    /// Whether the graph holds no records
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Derived parent-id → children-ids index, computed from the father and
    /// mother pointers of every record.
    ///
    /// Recomputed on demand by consumers that need sibling lookups; the
    /// index is never stored on the graph.
    #[must_use]
    pub fn parents_to_children(&self) -> FxHashMap<String, Vec<String>> {
        let mut index: FxHashMap<String, Vec<String>> = FxHashMap::default();
        for record in self.records.values() {
            let parents = [record.rels.father.as_deref(), record.rels.mother.as_deref()];
            for parent_id in parents.into_iter().flatten() {
                let children = index.entry(parent_id.to_string()).or_default();
                if !children.iter().any(|child| child == &record.id) {
                    children.push(record.id.clone());
                }
            }
        }
        index
    }
}
