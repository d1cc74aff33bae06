// src/specs/fields.rs
//
// Header alias groups for the sheet. The sheet has been relabeled across
// years and languages, so every semantic field carries the spellings seen
// in the wild, in priority order. Configuration, not computation.

use crate::core::sanitize::normalize_key;
use crate::csv::Record;

pub const NAME_LOCAL: &[&str] = &[
    "Name",
    "Name (한글 for SNU, 漢字 for UT)",
    "Name (한글 for SNU, 漢字 for UT) ",
];
pub const NAME_ROMAN: &[&str] = &[
    "Name (Roman)",
    "Romanized Name",
    "English name",
    "Name (roman)",
];
pub const PHOTO: &[&str] = &["Photo", "Upload your photo!", "Profile Photo", "Image"];
pub const BIRTHDATE: &[&str] = &["Birthdate", "Date of Birth", "DOB"];
pub const MAJOR: &[&str] = &["Major", "Department"];
pub const GRADE: &[&str] = &["Grade", "Year"];
pub const YEARS: &[&str] = &[
    "Years of Kendo Experience",
    "Kendo Experience (years)",
    "Kendo years",
];
pub const HOBBIES: &[&str] = &["Hobbies & Interests", "Hobbies", "Interests"];
pub const SKILLS: &[&str] = &[
    "What are you good at other than Kendo",
    "Skills other than Kendo",
];
pub const GREETING: &[&str] = &["Short greeting message", "Greeting", "Message"];

/// Candidates used only to decide whether a row names an actual member.
pub const NAME_FILTER: &[&str] = &[
    "Name",
    "Name (한글 for SNU, 漢字 for UT)",
    "Name (Roman)",
];

/// First candidate that matches one of the record's keys wins; keys are
/// scanned in the record's own column order, candidates in priority order.
/// Matching is case- and whitespace-insensitive. No hit → "".
pub fn resolve(record: &Record, candidates: &[&str]) -> String {
    for cand in candidates {
        let want = normalize_key(cand);
        for (key, value) in record.pairs() {
            if normalize_key(key) == want {
                return s!(value);
            }
        }
    }
    s!()
}
