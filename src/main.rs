use anyhow::{Context, Result};
use chrono::Local;
use kintree::{
    FamilyGraph, describe_relationship, group_by_generation, normalize, read_snapshot,
    retain_meaningful, upcoming_events_within,
};
use log::info;
use std::path::Path;

fn main() -> Result<()> {
    kintree::utils::logging::init_from_env();

    let mut args = std::env::args().skip(1);
    let snapshot_path = args
        .next()
        .context("usage: kintree <snapshot.json> [root-id [target-id]]")?;
    let root_id = args.next();
    let target_id = args.next();

    let records = read_snapshot(Path::new(&snapshot_path))?;
    let records = normalize(retain_meaningful(records));
    info!("{} record(s) after filtering and normalization", records.len());

    let today = Local::now().date_naive();
    for event in upcoming_events_within(&records, today, 30) {
        info!(
            "{}: {} (in {} day(s))",
            event.date, event.label, event.days_until
        );
    }

    let graph = FamilyGraph::from_records(records);
    match (root_id, target_id) {
        (Some(root), Some(target)) => {
            let label = describe_relationship(&graph, &root, &target);
            if label.is_empty() {
                println!("{target} is not reachable from {root}");
            } else {
                println!("{label}");
            }
        }
        (Some(root), None) => {
            for (level, people) in group_by_generation(&graph, &root) {
                let names = people
                    .iter()
                    .map(|person| person.profile.display_name())
                    .collect::<Vec<_>>()
                    .join(", ");
                println!("generation {level}: {names}");
            }
        }
        _ => info!("pass a root id (and optionally a target id) for kinship output"),
    }

    Ok(())
}
