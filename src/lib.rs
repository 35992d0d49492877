//! A Rust library for repairing family graphs, resolving human-readable
//! kinship labels, and grouping people into generation levels.

pub mod algorithm;
pub mod error;
pub mod graph;
pub mod models;
pub mod reminders;
pub mod snapshot;
pub mod utils;

// Re-export the most common types for easier use
// Core types
pub use error::{FamilyGraphError, Result};
pub use graph::FamilyGraph;
pub use models::person::{DateParts, PersonProfile, PersonRecord, Relationships};
pub use models::types::Gender;

// Graph algorithms
pub use algorithm::filtering::{prune_dangling, retain_meaningful};
pub use algorithm::generation::group_by_generation;
pub use algorithm::kinship::describe_relationship;
pub use algorithm::normalize::normalize;

// Date-based reminders
pub use reminders::{EventKind, UpcomingEvent, upcoming_events, upcoming_events_within};

// Snapshot helpers
pub use snapshot::{parse_snapshot, read_snapshot, write_snapshot};
