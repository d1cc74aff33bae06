// tests/person_builder.rs
use clubdir::csv::{Record, parse_csv};
use clubdir::data::Directory;
use clubdir::specs::fields;
use clubdir::specs::person::{build_person, persons_from_records};

fn record(pairs: &[(&str, &str)]) -> Record {
    Record::new(
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
    )
}

#[test]
fn resolver_is_case_and_whitespace_insensitive() {
    let r = record(&[("  NAME  ", "Alice")]);
    assert_eq!(fields::resolve(&r, &["Name"]), "Alice");
}

#[test]
fn resolver_honors_candidate_priority() {
    // "Name (Roman)" is the higher-priority alias even though the record
    // lists "English name" first
    let r = record(&[("English name", "Alice"), ("Name (Roman)", "Alicia")]);
    assert_eq!(fields::resolve(&r, fields::NAME_ROMAN), "Alicia");
}

#[test]
fn resolver_returns_empty_when_no_alias_matches() {
    let r = record(&[("Nickname", "Al")]);
    assert_eq!(fields::resolve(&r, fields::NAME_ROMAN), "");
}

#[test]
fn slug_keeps_literal_character_class_behavior() {
    let r = record(&[("Name (Roman)", "José García")]);
    let p = build_person(&r, 0);
    // no transliteration: accented letters collapse into hyphens
    assert_eq!(p.id, "card-01-jos-garc-a");
    assert_ne!(p.id, "card-01-jose-garcia");
}

#[test]
fn fully_non_latin_name_slugs_to_placeholder() {
    let r = record(&[("Name", "김철수")]);
    let p = build_person(&r, 2);
    assert_eq!(p.id, "card-03-member");
}

#[test]
fn identifier_positions_are_one_based_two_digit() {
    let r = record(&[("Name (Roman)", "Alice")]);
    assert_eq!(build_person(&r, 0).id, "card-01-alice");
    assert_eq!(build_person(&r, 11).id, "card-12-alice");
}

#[test]
fn absent_fields_become_empty_strings() {
    let r = record(&[("Name", "Alice")]);
    let p = build_person(&r, 0);
    assert_eq!(p.name_roman, "");
    assert_eq!(p.photo, "");
    assert_eq!(p.greeting, "");
}

#[test]
fn pipeline_filters_nameless_rows_and_renumbers() {
    let rs = parse_csv("Name,Major\nAlice,CS\n,Unknown\nBob,EE");
    let people = persons_from_records(rs);
    assert_eq!(people.len(), 2);
    assert_eq!(people[0].name_local, "Alice");
    assert_eq!(people[0].index, 0);
    assert_eq!(people[1].name_local, "Bob");
    assert_eq!(people[1].index, 1);
    assert_eq!(people[1].id, "card-02-bob");
}

#[test]
fn timestamp_columns_are_dropped() {
    let rs = parse_csv("Timestamp,Name\n2024/01/01 10:00,\n2024/01/02 11:00,Bob");
    let people = persons_from_records(rs);
    // the first row only has a timestamp, so it is not a member
    assert_eq!(people.len(), 1);
    assert_eq!(people[0].name_local, "Bob");
}

#[test]
fn directory_paging_math() {
    let mut csv = String::from("Name\n");
    for i in 0..30 {
        csv.push_str(&format!("Member{i}\n"));
    }
    let dir = Directory::new(persons_from_records(parse_csv(&csv)));

    assert_eq!(dir.len(), 30);
    assert_eq!(dir.total_pages(), 3);
    assert_eq!(dir.page(0).len(), 12);
    assert_eq!(dir.page(2).len(), 6);
    assert!(dir.page(3).is_empty());
    assert_eq!(dir.page_of(0), 0);
    assert_eq!(dir.page_of(12), 1);

    let id = dir.persons()[13].id.clone();
    assert_eq!(dir.index_of(&id), Some(13));
    assert_eq!(dir.index_of("card-99-nobody"), None);
}

#[test]
fn empty_directory_still_has_one_page() {
    let dir = Directory::new(Vec::new());
    assert_eq!(dir.total_pages(), 1);
    assert!(dir.page(0).is_empty());
}
