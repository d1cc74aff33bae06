// tests/loader_fallback.rs
use clubdir::loader::{Source, load_directory, load_records};

const PIPE_SAMPLE: &str = "Name | Major\n김철수 | CS\nAlice | EE";

#[test]
fn empty_source_falls_through_to_the_next() {
    let sources = vec![
        // header only → parses to zero records → rejected
        Source::Bundled { label: "empty", text: "Name,Major" },
        Source::Bundled { label: "sample", text: PIPE_SAMPLE },
    ];
    let records = load_records(&sources, None).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].get("Name"), Some("김철수"));
}

#[test]
fn bundled_text_is_parsed_per_detected_delimiter() {
    let sources = vec![Source::Bundled { label: "sample", text: PIPE_SAMPLE }];
    let dir = load_directory(&sources, None).unwrap();
    assert_eq!(dir.len(), 2);
    assert_eq!(dir.persons()[1].name_local, "Alice");
    assert_eq!(dir.persons()[1].major, "EE");
}

#[test]
fn unreachable_remote_falls_through_to_bundled() {
    let sources = vec![
        Source::Remote {
            label: "primary",
            host: "nonexistent.invalid",
            path: "/export.csv",
        },
        Source::Bundled { label: "sample", text: PIPE_SAMPLE },
    ];
    let dir = load_directory(&sources, None).unwrap();
    assert_eq!(dir.len(), 2);
}

#[test]
fn exhausted_chain_is_a_fatal_error() {
    let sources = vec![
        Source::Bundled { label: "a", text: "" },
        Source::Bundled { label: "b", text: "Name | Major" },
    ];
    let err = load_records(&sources, None).unwrap_err();
    assert!(err.to_string().contains("sources failed"));
}

#[test]
fn records_without_any_names_fail_the_load() {
    // parses fine, but nothing survives the name filter
    let sources = vec![Source::Bundled { label: "nameless", text: "Major\nCS" }];
    assert!(load_directory(&sources, None).is_err());
}

#[test]
fn shipped_sample_loads_offline() {
    let dir = load_directory(&clubdir::loader::offline_sources(), None).unwrap();
    assert!(!dir.is_empty());
    // every id is unique within a load
    let mut ids: Vec<&str> = dir.persons().iter().map(|p| p.id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), dir.len());
}
