// src/specs/person.rs

use crate::core::sanitize::{normalize_key, slugify};
use crate::csv::Record;

use super::fields;

/// Placeholder slug when a name collapses to nothing.
const SLUG_FALLBACK: &str = "member";

/// Column set for CSV/TSV export, aligned with `Person::to_row`.
pub const EXPORT_HEADERS: &[&str] = &[
    "Id",
    "Name",
    "Name (Roman)",
    "Photo",
    "Birthdate",
    "Major",
    "Grade",
    "Years of Kendo Experience",
    "Hobbies & Interests",
    "Other Skills",
    "Greeting",
];

/// Normalized directory entry. All fields are plain strings; absent sheet
/// columns come through as "".
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Person {
    /// `card-NN-slug`; stable within one load, not across source changes.
    pub id: String,
    /// 0-based position among the kept records.
    pub index: usize,
    pub name_local: String,
    pub name_roman: String,
    pub photo: String,
    pub birthdate: String,
    pub major: String,
    pub grade: String,
    pub years: String,
    pub hobbies: String,
    pub skills: String,
    pub greeting: String,
}

impl Person {
    /// Display name: local first, roman second, positional last.
    pub fn display_name(&self) -> String {
        if !self.name_local.is_empty() {
            return self.name_local.clone();
        }
        if !self.name_roman.is_empty() {
            return self.name_roman.clone();
        }
        format!("Member {}", self.index + 1)
    }

    /// Avatar initials from the roman name, falling back to the local one.
    /// One word → its first two characters; several → first + last initial.
    pub fn initials(&self) -> String {
        let src = if !self.name_roman.is_empty() {
            self.name_roman.trim()
        } else {
            self.name_local.trim()
        };
        let parts: Vec<&str> = src.split_whitespace().collect();
        match parts.as_slice() {
            [] => s!("?"),
            [only] => only.chars().take(2).collect::<String>().to_uppercase(),
            [first, .., last] => {
                let mut out = s!();
                if let Some(c) = first.chars().next() {
                    out.extend(c.to_uppercase());
                }
                if let Some(c) = last.chars().next() {
                    out.extend(c.to_uppercase());
                }
                out
            }
        }
    }

    /// Flat row for export, aligned with `EXPORT_HEADERS`.
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name_local.clone(),
            self.name_roman.clone(),
            self.photo.clone(),
            self.birthdate.clone(),
            self.major.clone(),
            self.grade.clone(),
            self.years.clone(),
            self.hobbies.clone(),
            self.skills.clone(),
            self.greeting.clone(),
        ]
    }
}

/// Build one Person from a record and its 0-based position among the *kept*
/// records. Total: absent fields come through as empty strings.
pub fn build_person(record: &Record, index: usize) -> Person {
    let name_local = fields::resolve(record, fields::NAME_LOCAL);
    let name_roman = fields::resolve(record, fields::NAME_ROMAN);

    let base = if !name_roman.is_empty() {
        name_roman.clone()
    } else if !name_local.is_empty() {
        name_local.clone()
    } else {
        format!("member-{}", index + 1)
    };
    let slug = slugify(&base, SLUG_FALLBACK);
    let id = format!("card-{:02}-{}", index + 1, slug);

    Person {
        id,
        index,
        name_local,
        name_roman,
        photo: fields::resolve(record, fields::PHOTO),
        birthdate: fields::resolve(record, fields::BIRTHDATE),
        major: fields::resolve(record, fields::MAJOR),
        grade: fields::resolve(record, fields::GRADE),
        years: fields::resolve(record, fields::YEARS),
        hobbies: fields::resolve(record, fields::HOBBIES),
        skills: fields::resolve(record, fields::SKILLS),
        greeting: fields::resolve(record, fields::GREETING),
    }
}

/// Records → Persons: drop form-timestamp columns, keep only rows that
/// actually name somebody, then number the survivors from zero.
pub fn persons_from_records(mut records: Vec<Record>) -> Vec<Person> {
    for r in &mut records {
        r.retain_keys(|k| !normalize_key(k).starts_with("timestamp"));
    }

    records
        .iter()
        .filter(|r| !fields::resolve(r, fields::NAME_FILTER).trim().is_empty())
        .enumerate()
        .map(|(i, r)| build_person(r, i))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pairs: &[(&str, &str)]) -> Record {
        Record::new(pairs.iter().map(|(k, v)| (s!(*k), s!(*v))).collect())
    }

    #[test]
    fn initials_variants() {
        let mut p = build_person(&record(&[("Name (Roman)", "Kim Min Jun")]), 0);
        assert_eq!(p.initials(), "KJ");
        p.name_roman = s!("Solo");
        assert_eq!(p.initials(), "SO");
        p.name_roman = s!();
        p.name_local = s!();
        assert_eq!(p.initials(), "?");
    }

    #[test]
    fn display_name_prefers_local() {
        let p = build_person(&record(&[("Name", "김민준"), ("Name (Roman)", "Kim Minjun")]), 0);
        assert_eq!(p.display_name(), "김민준");
    }

    #[test]
    fn slug_prefers_roman_name() {
        let p = build_person(&record(&[("Name", "김민준"), ("Name (Roman)", "Kim Minjun")]), 0);
        assert_eq!(p.id, "card-01-kim-minjun");
    }
}
