use crate::utils::person;
use kintree::{Gender, PersonRecord, normalize};

fn find<'a>(records: &'a [PersonRecord], id: &str) -> &'a PersonRecord {
    records.iter().find(|record| record.id == id).unwrap()
}

#[test]
fn test_parent_reference_adds_child_to_parent() {
    let records = normalize(vec![
        person("f", "Fardun", Gender::Male),
        person("m", "Meher", Gender::Female),
        person("c", "Cyrus", Gender::Male).with_father("f").with_mother("m"),
    ]);
    assert_eq!(find(&records, "f").rels.children, vec!["c"]);
    assert_eq!(find(&records, "m").rels.children, vec!["c"]);
}

#[test]
fn test_child_reference_fills_missing_parent_by_gender() {
    let records = normalize(vec![
        person("f", "Fardun", Gender::Male).with_child("c"),
        person("m", "Meher", Gender::Female).with_child("c"),
        person("c", "Cyrus", Gender::Male),
    ]);
    let child = find(&records, "c");
    assert_eq!(child.rels.father.as_deref(), Some("f"));
    assert_eq!(child.rels.mother.as_deref(), Some("m"));
}

#[test]
fn test_existing_parent_is_never_overwritten() {
    let records = normalize(vec![
        person("f1", "Fardun", Gender::Male).with_child("c"),
        person("f2", "Firoz", Gender::Male),
        person("c", "Cyrus", Gender::Male).with_father("f2"),
    ]);
    assert_eq!(find(&records, "c").rels.father.as_deref(), Some("f2"));
}

#[test]
fn test_unknown_gender_infers_no_parent_slot() {
    let records = normalize(vec![
        PersonRecord::new("p").with_first_name("Pari").with_child("c"),
        person("c", "Cyrus", Gender::Male),
    ]);
    let child = find(&records, "c");
    assert_eq!(child.rels.father, None);
    assert_eq!(child.rels.mother, None);
}

#[test]
fn test_spouse_links_become_symmetric() {
    let records = normalize(vec![
        person("a", "Adil", Gender::Male).with_spouse("b"),
        person("b", "Banoo", Gender::Female),
    ]);
    assert_eq!(find(&records, "b").rels.spouses, vec!["a"]);
}

#[test]
fn test_blank_and_duplicate_ids_are_dropped() {
    let mut record = person("a", "Adil", Gender::Male);
    record.rels.spouses = vec!["b".into(), String::new(), "  ".into(), "b".into()];
    record.rels.children = vec!["c".into(), "c".into()];
    record.rels.father = Some(String::new());

    let records = normalize(vec![
        record,
        person("b", "Banoo", Gender::Female),
        person("c", "Cyrus", Gender::Male),
    ]);
    let a = find(&records, "a");
    assert_eq!(a.rels.spouses, vec!["b"]);
    assert_eq!(a.rels.children, vec!["c"]);
    assert_eq!(a.rels.father, None);
}

#[test]
fn test_dangling_references_are_left_intact() {
    let records = normalize(vec![
        person("a", "Adil", Gender::Male)
            .with_father("ghost")
            .with_spouse("phantom"),
    ]);
    let a = find(&records, "a");
    assert_eq!(a.rels.father.as_deref(), Some("ghost"));
    assert_eq!(a.rels.spouses, vec!["phantom"]);
    // No records were invented for the unresolved ids
    assert_eq!(records.len(), 1);
}

#[test]
fn test_duplicate_record_ids_last_write_wins() {
    let records = normalize(vec![
        person("a", "First", Gender::Male),
        person("b", "Banoo", Gender::Female),
        person("a", "Second", Gender::Male),
    ]);
    assert_eq!(records.len(), 2);
    // The surviving record keeps the position of the first occurrence
    assert_eq!(records[0].id, "a");
    assert_eq!(records[0].profile.first_name.as_deref(), Some("Second"));
}

#[test]
fn test_normalize_is_idempotent() {
    let input = vec![
        person("f", "Fardun", Gender::Male).with_child("a").with_child("b"),
        person("m", "Meher", Gender::Female).with_spouse("f"),
        person("a", "Adil", Gender::Male).with_mother("m"),
        person("b", "Banoo", Gender::Female).with_father("f"),
    ];
    let once = normalize(input);
    let twice = normalize(once.clone());
    assert_eq!(once, twice);
}

#[test]
fn test_parent_child_and_spouse_consistency_properties() {
    let records = normalize(vec![
        person("gf", "Gustad", Gender::Male).with_child("f"),
        person("f", "Fardun", Gender::Male).with_spouse("m").with_child("a"),
        person("m", "Meher", Gender::Female).with_child("a").with_child("b"),
        person("a", "Adil", Gender::Male),
        person("b", "Banoo", Gender::Female).with_father("f"),
    ]);

    for record in &records {
        for parent_id in [record.rels.father.as_deref(), record.rels.mother.as_deref()]
            .into_iter()
            .flatten()
        {
            let parent = find(&records, parent_id);
            assert!(
                parent.rels.children.contains(&record.id),
                "{parent_id} is missing child {}",
                record.id
            );
        }
        for spouse_id in &record.rels.spouses {
            let spouse = find(&records, spouse_id);
            assert!(
                spouse.rels.spouses.contains(&record.id),
                "{spouse_id} is missing spouse {}",
                record.id
            );
        }
    }
}
