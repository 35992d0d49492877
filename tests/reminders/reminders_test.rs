use crate::utils::person;
use kintree::{DateParts, EventKind, Gender, PersonRecord, upcoming_events, upcoming_events_within};
use chrono::NaiveDate;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

const TODAY: (i32, u32, u32) = (2026, 8, 6);

fn today() -> NaiveDate {
    date(TODAY.0, TODAY.1, TODAY.2)
}

#[test]
fn test_upcoming_birthday_this_year() {
    let records = vec![
        person("a", "Adil", Gender::Male)
            .with_last_name("Vakil")
            .with_birth(DateParts::new(10, 8, 1990)),
    ];
    let events = upcoming_events(&records, today());

    assert_eq!(events.len(), 1);
    let event = &events[0];
    assert_eq!(event.kind, EventKind::Birthday);
    assert_eq!(event.label, "Adil Vakil's Birthday");
    assert_eq!(event.date, date(2026, 8, 10));
    assert_eq!(event.days_until, 4);
    assert_eq!(event.years, 36);
}

#[test]
fn test_passed_birthday_rolls_to_next_year() {
    let records = vec![person("a", "Adil", Gender::Male).with_birth(DateParts::new(1, 3, 1990))];
    let events = upcoming_events(&records, today());

    assert_eq!(events[0].date, date(2027, 3, 1));
    assert_eq!(events[0].years, 37);
}

#[test]
fn test_birthday_today_counts_as_zero_days() {
    let records =
        vec![person("a", "Adil", Gender::Male).with_birth(DateParts::new(6, 8, 1990))];
    let events = upcoming_events(&records, today());
    assert_eq!(events[0].days_until, 0);
}

#[test]
fn test_incomplete_dates_produce_no_events() {
    let mut record = person("a", "Adil", Gender::Male);
    record.profile.birth = DateParts {
        day: Some(10),
        month: Some(8),
        year: None,
    };
    assert!(upcoming_events(&[record], today()).is_empty());
}

#[test]
fn test_anniversary_reported_once_per_couple() {
    let marriage = DateParts::new(1, 9, 2000);
    let records = vec![
        person("a", "Ardeshir", Gender::Male)
            .with_spouse("b")
            .with_marriage(marriage),
        person("b", "Banoo", Gender::Female)
            .with_spouse("a")
            .with_marriage(marriage),
    ];
    let events = upcoming_events(&records, today());

    assert_eq!(events.len(), 1);
    let event = &events[0];
    assert_eq!(event.kind, EventKind::Anniversary);
    assert_eq!(event.label, "Ardeshir & Banoo");
    assert_eq!(event.person_ids, vec!["a".to_string(), "b".to_string()]);
    assert_eq!(event.date, date(2026, 9, 1));
    assert_eq!(event.years, 26);
}

#[test]
fn test_anniversary_requires_resolvable_spouse() {
    let records = vec![
        person("a", "Ardeshir", Gender::Male)
            .with_spouse("missing")
            .with_marriage(DateParts::new(1, 9, 2000)),
    ];
    assert!(upcoming_events(&records, today()).is_empty());
}

#[test]
fn test_death_anniversary() {
    let records =
        vec![person("a", "Adil", Gender::Male).with_death(DateParts::new(15, 1, 2020))];
    let events = upcoming_events(&records, today());

    let event = &events[0];
    assert_eq!(event.kind, EventKind::DeathAnniversary);
    assert_eq!(event.label, "Adil's Death Anniversary");
    // January 15 has passed this year
    assert_eq!(event.date, date(2027, 1, 15));
    assert_eq!(event.years, 7);
}

#[test]
fn test_events_are_sorted_by_date() {
    let records = vec![
        person("late", "Lata", Gender::Female).with_birth(DateParts::new(1, 12, 1980)),
        person("soon", "Sohrab", Gender::Male).with_birth(DateParts::new(8, 8, 1980)),
        person("mid", "Meher", Gender::Female).with_birth(DateParts::new(1, 10, 1980)),
    ];
    let events = upcoming_events(&records, today());
    let order: Vec<&str> = events
        .iter()
        .map(|event| event.person_ids[0].as_str())
        .collect();
    assert_eq!(order, vec!["soon", "mid", "late"]);
}

#[test]
fn test_window_filter_keeps_near_events_only() {
    let records = vec![
        person("near", "Navroz", Gender::Male).with_birth(DateParts::new(10, 8, 1980)),
        person("far", "Fardun", Gender::Male).with_birth(DateParts::new(1, 12, 1980)),
    ];
    let events = upcoming_events_within(&records, today(), 7);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].person_ids, vec!["near".to_string()]);
}

#[test]
fn test_unnamed_people_still_get_labeled_events() {
    let records = vec![PersonRecord::new("a").with_birth(DateParts::new(10, 8, 1990))];
    let events = upcoming_events(&records, today());
    assert_eq!(events[0].label, "Unnamed's Birthday");
}
