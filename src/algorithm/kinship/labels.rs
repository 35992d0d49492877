//! Kinship label table and path classification
//!
//! A simplified relation path is classified by which markers it contains and
//! how many generations it spans, then looked up in a fixed table of
//! (male term, female term) pairs. Table misses fall back to a generated
//! label instead of failing, so a reachable person always gets a label.

use crate::algorithm::kinship::path::{MAX_RELATION_DEPTH, RelationMarker};
use crate::models::types::Gender;

/// Label for paths no classification rule covers
pub const GENERIC_RELATIVE: &str = "Relative";

/// Relation key → (male term, female term)
const RELATION_LABELS: &[(&str, &str, &str)] = &[
    ("self", "Self", "Self"),
    ("child", "Son", "Daughter"),
    ("grandchild", "Grandson", "Granddaughter"),
    ("great-grandchild", "Great Grandson", "Great Granddaughter"),
    ("2nd-great-grandchild", "2nd Great Grandson", "2nd Great Granddaughter"),
    ("3rd-great-grandchild", "3rd Great Grandson", "3rd Great Granddaughter"),
    ("4th-great-grandchild", "4th Great Grandson", "4th Great Granddaughter"),
    ("5th-great-grandchild", "5th Great Grandson", "5th Great Granddaughter"),
    ("6th-great-grandchild", "6th Great Grandson", "6th Great Granddaughter"),
    ("7th-great-grandchild", "7th Great Grandson", "7th Great Granddaughter"),
    ("8th-great-grandchild", "8th Great Grandson", "8th Great Granddaughter"),
    ("parent", "Father", "Mother"),
    ("grandparent", "Grandfather", "Grandmother"),
    ("great-grandparent", "Great Grandfather", "Great Grandmother"),
    ("2nd-great-grandparent", "2nd Great Grandfather", "2nd Great Grandmother"),
    ("3rd-great-grandparent", "3rd Great Grandfather", "3rd Great Grandmother"),
    ("4th-great-grandparent", "4th Great Grandfather", "4th Great Grandmother"),
    ("5th-great-grandparent", "5th Great Grandfather", "5th Great Grandmother"),
    ("6th-great-grandparent", "6th Great Grandfather", "6th Great Grandmother"),
    ("7th-great-grandparent", "7th Great Grandfather", "7th Great Grandmother"),
    ("8th-great-grandparent", "8th Great Grandfather", "8th Great Grandmother"),
    ("spouse", "Husband", "Wife"),
    ("sibling", "Brother", "Sister"),
    ("uncle", "Uncle", "Aunt"),
    ("cousin", "Cousin (M)", "Cousin (F)"),
    ("in-law-sibling", "Brother-in-law", "Sister-in-law"),
    ("in-law-parent", "Father-in-law", "Mother-in-law"),
    ("in-law-grandparent", "Grandfather-in-law", "Grandmother-in-law"),
    ("in-law-great-grandparent", "Great Grandfather-in-law", "Great Grandmother-in-law"),
    ("in-law-2nd-great-grandparent", "2nd Great Grandfather-in-law", "2nd Great Grandmother-in-law"),
    ("in-law-3rd-great-grandparent", "3rd Great Grandfather-in-law", "3rd Great Grandmother-in-law"),
    ("in-law-4th-great-grandparent", "4th Great Grandfather-in-law", "4th Great Grandmother-in-law"),
    ("in-law-5th-great-grandparent", "5th Great Grandfather-in-law", "5th Great Grandmother-in-law"),
    ("in-law-6th-great-grandparent", "6th Great Grandfather-in-law", "6th Great Grandmother-in-law"),
    ("in-law-7th-great-grandparent", "7th Great Grandfather-in-law", "7th Great Grandmother-in-law"),
    ("in-law-8th-great-grandparent", "8th Great Grandfather-in-law", "8th Great Grandmother-in-law"),
    ("in-law-child", "Son-in-law", "Daughter-in-law"),
    ("in-law-grandchild", "Grandson-in-law", "Granddaughter-in-law"),
    ("in-law-great-grandchild", "Great Grandson-in-law", "Great Granddaughter-in-law"),
    ("in-law-2nd-great-grandchild", "2nd Great Grandson-in-law", "2nd Great Granddaughter-in-law"),
    ("in-law-3rd-great-grandchild", "3rd Great Grandson-in-law", "3rd Great Granddaughter-in-law"),
    ("in-law-4th-great-grandchild", "4th Great Grandson-in-law", "4th Great Granddaughter-in-law"),
    ("in-law-5th-great-grandchild", "5th Great Grandson-in-law", "5th Great Granddaughter-in-law"),
    ("in-law-6th-great-grandchild", "6th Great Grandson-in-law", "6th Great Granddaughter-in-law"),
    ("in-law-7th-great-grandchild", "7th Great Grandson-in-law", "7th Great Granddaughter-in-law"),
    ("in-law-8th-great-grandchild", "8th Great Grandson-in-law", "8th Great Granddaughter-in-law"),
];

fn gendered(key: &str, gender: Gender) -> Option<String> {
    RELATION_LABELS
        .iter()
        .find(|(entry, _, _)| *entry == key)
        .map(|(_, male, female)| {
            match gender {
                Gender::Female => (*female).to_string(),
                // Unknown genders take the male column
                _ => (*male).to_string(),
            }
        })
}

fn ordinal(n: usize) -> String {
    match n {
        1 => "1st".to_string(),
        2 => "2nd".to_string(),
        3 => "3rd".to_string(),
        _ => format!("{n}th"),
    }
}

/// Build the table key for a pure ancestor/descendant relation of the given
/// generation distance; `base` is `"parent"` or `"child"`.
fn generation_key(base: &str, generation: usize) -> String {
    match generation {
        0 | 1 => base.to_string(),
        2 => format!("grand{base}"),
        3 => format!("great-grand{base}"),
        4..=MAX_RELATION_DEPTH => format!("{}-great-grand{base}", ordinal(generation - 2)),
        _ => base.to_string(),
    }
}

/// Generated in-law label for keys the table does not carry
fn in_law_fallback(key: &str, gender: Gender) -> String {
    let mut parts: Vec<&str> = key.split('-').collect();
    let relation = parts.pop().unwrap_or_default();
    let prefix = parts.join(" ");

    let (male, female) = match relation {
        "child" => ("Son", "Daughter"),
        "parent" => ("Father", "Mother"),
        "grandchild" => ("Grandson", "Granddaughter"),
        "grandparent" => ("Grandfather", "Grandmother"),
        _ => (GENERIC_RELATIVE, GENERIC_RELATIVE),
    };
    let term = if gender == Gender::Female { female } else { male };

    if prefix.is_empty() {
        format!("{term}-in-law")
    } else {
        format!("{prefix} {term}-in-law")
    }
}

/// Generated blood-relation label for keys the table does not carry
fn lineage_fallback(base: &str, generation: usize, gender: Gender) -> String {
    let female = gender == Gender::Female;
    match (base, generation) {
        ("child", 1) => if female { "Daughter" } else { "Son" }.to_string(),
        ("parent", 1) => if female { "Mother" } else { "Father" }.to_string(),
        ("child", g) => format!(
            "{} Great {}",
            ordinal(g.saturating_sub(2)),
            if female { "Granddaughter" } else { "Grandson" }
        ),
        ("parent", g) => format!(
            "{} Great {}",
            ordinal(g.saturating_sub(2)),
            if female { "Grandmother" } else { "Grandfather" }
        ),
        _ => GENERIC_RELATIVE.to_string(),
    }
}

/// Classify a simplified relation path into a gendered kinship label.
///
/// Precedence: in-law relations (any spouse marker) first, then sibling
/// derived relations, then pure descendant/ancestor chains; anything else is
/// a generic relative.
#[must_use]
pub fn relation_label(markers: &[RelationMarker], gender: Gender) -> String {
    let parents = markers
        .iter()
        .filter(|m| **m == RelationMarker::Parent)
        .count();
    let children = markers
        .iter()
        .filter(|m| **m == RelationMarker::Child)
        .count();
    let has_spouse = markers.contains(&RelationMarker::Spouse);
    let has_sibling = markers.contains(&RelationMarker::Sibling);

    if has_spouse {
        if parents > 0 && children == 0 {
            let key = generation_key("parent", parents);
            return gendered(&format!("in-law-{key}"), gender)
                .unwrap_or_else(|| in_law_fallback(&key, gender));
        }
        if children > 0 && parents == 0 {
            let key = generation_key("child", children);
            return gendered(&format!("in-law-{key}"), gender)
                .unwrap_or_else(|| in_law_fallback(&key, gender));
        }
        if has_sibling {
            return gendered("in-law-sibling", gender)
                .unwrap_or_else(|| GENERIC_RELATIVE.to_string());
        }
        return gendered("spouse", gender).unwrap_or_else(|| GENERIC_RELATIVE.to_string());
    }

    if has_sibling && children > 0 {
        return gendered("cousin", gender).unwrap_or_else(|| GENERIC_RELATIVE.to_string());
    }
    if has_sibling && parents > 0 {
        return gendered("uncle", gender).unwrap_or_else(|| GENERIC_RELATIVE.to_string());
    }
    if has_sibling {
        return gendered("sibling", gender).unwrap_or_else(|| GENERIC_RELATIVE.to_string());
    }

    if children > 0 && parents == 0 {
        let key = generation_key("child", children);
        return gendered(&key, gender)
            .unwrap_or_else(|| lineage_fallback("child", children, gender));
    }
    if parents > 0 && children == 0 {
        let key = generation_key("parent", parents);
        return gendered(&key, gender)
            .unwrap_or_else(|| lineage_fallback("parent", parents, gender));
    }

    GENERIC_RELATIVE.to_string()
}
