//! Date-based reminders
//!
//! Computes the upcoming birthday, wedding anniversary and death-anniversary
//! events for a snapshot of person records. Each event carries its next
//! occurrence date relative to a caller-supplied reference day; occurrences
//! already past this year roll over to the next. The library never reads
//! the clock; binaries pass today's date in.

use crate::models::person::{DateParts, PersonRecord};
use chrono::{Datelike, NaiveDate};
use itertools::Itertools;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

/// Kind of calendar event a reminder is about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    /// A living person's birthday
    Birthday,
    /// A couple's wedding anniversary
    Anniversary,
    /// The anniversary of a person's death
    DeathAnniversary,
}

/// One upcoming calendar event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpcomingEvent {
    /// What kind of event this is
    pub kind: EventKind,
    /// The people the event is about (two for anniversaries)
    pub person_ids: Vec<String>,
    /// Human-readable event label
    pub label: String,
    /// Next occurrence of the event
    pub date: NaiveDate,
    /// Days between the reference day and the occurrence
    pub days_until: i64,
    /// Age being turned, years married, or years since death
    pub years: i32,
}

/// Compute all upcoming events for a snapshot, sorted by date ascending.
///
/// Only complete dates produce events. Anniversaries require at least one
/// spouse that resolves within the snapshot and are reported once per
/// couple.
#[must_use]
pub fn upcoming_events(records: &[PersonRecord], today: NaiveDate) -> Vec<UpcomingEvent> {
    let by_id: FxHashMap<&str, &PersonRecord> =
        records.iter().map(|record| (record.id.as_str(), record)).collect();
    let mut seen_couples: FxHashSet<(String, String)> = FxHashSet::default();
    let mut events: Vec<UpcomingEvent> = Vec::new();

    for person in records {
        if let Some((date, years)) = next_occurrence(&person.profile.birth, today) {
            events.push(UpcomingEvent {
                kind: EventKind::Birthday,
                person_ids: vec![person.id.clone()],
                label: format!("{}'s Birthday", person.profile.display_name()),
                date,
                days_until: (date - today).num_days(),
                years,
            });
        }

        if let Some(event) = anniversary_event(person, &by_id, &mut seen_couples, today) {
            events.push(event);
        }

        if let Some((date, years)) = next_occurrence(&person.profile.death, today) {
            events.push(UpcomingEvent {
                kind: EventKind::DeathAnniversary,
                person_ids: vec![person.id.clone()],
                label: format!("{}'s Death Anniversary", person.profile.display_name()),
                date,
                days_until: (date - today).num_days(),
                years,
            });
        }
    }

    events.into_iter().sorted_by_key(|event| event.date).collect()
}

/// Like [`upcoming_events`], keeping only events within the next
/// `window_days` days.
#[must_use]
pub fn upcoming_events_within(
    records: &[PersonRecord],
    today: NaiveDate,
    window_days: i64,
) -> Vec<UpcomingEvent> {
    upcoming_events(records, today)
        .into_iter()
        .filter(|event| event.days_until <= window_days)
        .collect()
}

fn anniversary_event(
    person: &PersonRecord,
    by_id: &FxHashMap<&str, &PersonRecord>,
    seen_couples: &mut FxHashSet<(String, String)>,
    today: NaiveDate,
) -> Option<UpcomingEvent> {
    if !person.profile.marriage.is_complete() {
        return None;
    }
    let spouse_id = person.rels.spouses.first()?;
    if spouse_id.is_empty() || spouse_id == &person.id {
        return None;
    }
    if !seen_couples.insert(couple_key(&person.id, spouse_id)) {
        return None;
    }
    let spouse = by_id.get(spouse_id.as_str())?;
    let (date, years) = next_occurrence(&person.profile.marriage, today)?;

    let name = person.profile.display_name();
    let spouse_name = spouse.profile.display_name();
    let label = if name == spouse_name {
        format!("{name}'s Anniversary")
    } else {
        format!("{name} & {spouse_name}")
    };

    Some(UpcomingEvent {
        kind: EventKind::Anniversary,
        person_ids: vec![person.id.clone(), spouse_id.clone()],
        label,
        date,
        days_until: (date - today).num_days(),
        years,
    })
}

fn couple_key(a: &str, b: &str) -> (String, String) {
    if a <= b {
        (a.to_string(), b.to_string())
    } else {
        (b.to_string(), a.to_string())
    }
}

/// Next occurrence of a recurring date on or after `today`, with the number
/// of years since the original. Returns `None` for incomplete dates.
fn next_occurrence(parts: &DateParts, today: NaiveDate) -> Option<(NaiveDate, i32)> {
    let (day, month, year) = (parts.day?, parts.month?, parts.year?);
    // Validate against the original year before projecting forward
    NaiveDate::from_ymd_opt(year, month, day)?;

    let mut date = occurrence_in_year(today.year(), month, day)?;
    if date < today {
        date = occurrence_in_year(today.year() + 1, month, day)?;
    }
    Some((date, date.year() - year))
}

// Feb 29 rolls to Mar 1 in years without a leap day
fn occurrence_in_year(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day).or_else(|| {
        if month == 2 && day == 29 {
            NaiveDate::from_ymd_opt(year, 3, 1)
        } else {
            None
        }
    })
}
