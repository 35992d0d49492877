//! Person record model
//!
//! This module contains the `PersonRecord` entity, the node type of the
//! family graph. A record carries a profile of individually optional,
//! strongly typed attributes and a set of relationship pointers to other
//! records. Records arrive as a complete snapshot from the surrounding
//! application; nothing here is persisted by the crate itself.

use crate::models::types::Gender;
use chrono::NaiveDate;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// A partial calendar date stored as separate day/month/year components.
///
/// Any component may be absent; a date only resolves to a `NaiveDate` when
/// all three are present and form a valid calendar day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DateParts {
    /// Day of month (1-31)
    pub day: Option<u32>,
    /// Month (1-12)
    pub month: Option<u32>,
    /// Calendar year
    pub year: Option<i32>,
}

impl DateParts {
    /// Create date parts from complete day/month/year components
    #[must_use]
    pub const fn new(day: u32, month: u32, year: i32) -> Self {
        Self {
            day: Some(day),
            month: Some(month),
            year: Some(year),
        }
    }

    /// Whether all three components are present
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.day.is_some() && self.month.is_some() && self.year.is_some()
    }

    /// Whether no component is present
    #[must_use]
    pub const fn is_blank(&self) -> bool {
        self.day.is_none() && self.month.is_none() && self.year.is_none()
    }

    /// Resolve to a calendar date, if complete and valid
    #[must_use]
    pub fn resolve(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year?, self.month?, self.day?)
    }
}

/// Profile attributes of a person. Every field is optional; a record with a
/// completely blank profile is a placeholder created by the editing surface.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonProfile {
    /// Given name
    pub first_name: Option<String>,
    /// Family name
    pub last_name: Option<String>,
    /// Gender code
    pub gender: Gender,
    /// Contact email address
    pub email: Option<String>,
    /// Contact phone number
    pub phone: Option<String>,
    /// Postal address
    pub address: Option<String>,
    /// Occupation description
    pub occupation: Option<String>,
    /// Avatar image URL
    pub avatar_url: Option<String>,
    /// Birth date components
    pub birth: DateParts,
    /// Marriage date components
    pub marriage: DateParts,
    /// Death date components
    pub death: DateParts,
}

fn has_text(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|s| !s.trim().is_empty())
}

impl PersonProfile {
    /// Full name assembled from the first and last name, trimmed
    #[must_use]
    pub fn full_name(&self) -> String {
        let first = self.first_name.as_deref().unwrap_or("").trim();
        let last = self.last_name.as_deref().unwrap_or("").trim();
        [first, last]
            .iter()
            .filter(|part| !part.is_empty())
            .join(" ")
    }

    /// Full name, or `"Unnamed"` when both name parts are blank
    #[must_use]
    pub fn display_name(&self) -> String {
        let name = self.full_name();
        if name.is_empty() { "Unnamed".to_string() } else { name }
    }

    /// Given name, or `"Unnamed"` when blank
    #[must_use]
    pub fn display_first_name(&self) -> &str {
        self.first_name
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or("Unnamed")
    }

    /// Whether the profile carries any content besides a gender code.
    ///
    /// Records whose profile fails this test are placeholder cards produced
    /// by the chart editor and are dropped by the meaningful-record filter.
    #[must_use]
    pub fn is_meaningful(&self) -> bool {
        has_text(&self.first_name)
            || has_text(&self.last_name)
            || has_text(&self.email)
            || has_text(&self.phone)
            || has_text(&self.address)
            || has_text(&self.occupation)
            || has_text(&self.avatar_url)
            || !self.birth.is_blank()
            || !self.marriage.is_blank()
            || !self.death.is_blank()
    }
}

/// Relationship pointers from one record to others, by id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Relationships {
    /// Father's record id, if known
    pub father: Option<String>,
    /// Mother's record id, if known
    pub mother: Option<String>,
    /// Spouse record ids
    pub spouses: Vec<String>,
    /// Child record ids
    pub children: Vec<String>,
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .filter(|s| !s.trim().is_empty())
        .map(ToString::to_string)
}

impl Relationships {
    /// A sanitized copy: blank ids dropped, id lists deduplicated with
    /// first-occurrence order preserved.
    #[must_use]
    pub fn sanitized(&self) -> Self {
        Self {
            father: non_blank(self.father.as_deref()),
            mother: non_blank(self.mother.as_deref()),
            spouses: dedup_ids(&self.spouses),
            children: dedup_ids(&self.children),
        }
    }

    /// All ids this record points at, in field order
    pub fn references(&self) -> impl Iterator<Item = &str> {
        self.father
            .as_deref()
            .into_iter()
            .chain(self.mother.as_deref())
            .chain(self.spouses.iter().map(String::as_str))
            .chain(self.children.iter().map(String::as_str))
    }
}

fn dedup_ids(ids: &[String]) -> Vec<String> {
    ids.iter()
        .filter(|id| !id.trim().is_empty())
        .unique()
        .cloned()
        .collect()
}

/// A node in the family graph: one person and their direct relationship
/// pointers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonRecord {
    /// Opaque unique identifier, stable across snapshots
    pub id: String,
    /// Profile attributes
    #[serde(default)]
    pub profile: PersonProfile,
    /// Relationship pointers
    #[serde(default)]
    pub rels: Relationships,
}

impl PersonRecord {
    /// Create an empty record with the given id
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            profile: PersonProfile::default(),
            rels: Relationships::default(),
        }
    }

    /// Set the given name
    #[must_use]
    pub fn with_first_name(mut self, name: &str) -> Self {
        self.profile.first_name = Some(name.to_string());
        self
    }

    /// Set the family name
    #[must_use]
    pub fn with_last_name(mut self, name: &str) -> Self {
        self.profile.last_name = Some(name.to_string());
        self
    }

    /// Set the gender
    #[must_use]
    pub const fn with_gender(mut self, gender: Gender) -> Self {
        self.profile.gender = gender;
        self
    }

    /// Set the father reference
    #[must_use]
    pub fn with_father(mut self, id: &str) -> Self {
        self.rels.father = Some(id.to_string());
        self
    }

    /// Set the mother reference
    #[must_use]
    pub fn with_mother(mut self, id: &str) -> Self {
        self.rels.mother = Some(id.to_string());
        self
    }

    /// Add a spouse reference
    #[must_use]
    pub fn with_spouse(mut self, id: &str) -> Self {
        self.rels.spouses.push(id.to_string());
        self
    }

    /// Add a child reference
    #[must_use]
    pub fn with_child(mut self, id: &str) -> Self {
        self.rels.children.push(id.to_string());
        self
    }

    /// Set the birth date components
    #[must_use]
    pub const fn with_birth(mut self, parts: DateParts) -> Self {
        self.profile.birth = parts;
        self
    }

    /// Set the marriage date components
    #[must_use]
    pub const fn with_marriage(mut self, parts: DateParts) -> Self {
        self.profile.marriage = parts;
        self
    }

    /// Set the death date components
    #[must_use]
    pub const fn with_death(mut self, parts: DateParts) -> Self {
        self.profile.death = parts;
        self
    }
}
