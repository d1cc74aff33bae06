// tests/export_e2e.rs
use std::fs;
use std::path::PathBuf;

use clubdir::config::options::{ExportFormat, ExportOptions};
use clubdir::csv::parse_csv;
use clubdir::file::write_export;
use clubdir::specs::person::persons_from_records;

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("clubdir_e2e_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

#[test]
fn export_single_csv_with_headers() {
    let people = persons_from_records(parse_csv("Name,Major\nAlice,CS\nBob,\"EE, honors\""));
    let mut export = ExportOptions::default();
    export.format = ExportFormat::Csv;
    export.include_headers = true;

    let dir = tmp_dir("csv");
    export.set_path(dir.join("members.csv").to_str().unwrap());

    let path = write_export(&export, &people).unwrap();
    let s = fs::read_to_string(&path).unwrap();

    assert!(s.starts_with("Id,Name,"));
    assert!(s.contains("card-01-alice,Alice"));
    // separator inside a cell comes back quoted
    assert!(s.contains("\"EE, honors\""));
}

#[test]
fn export_tsv_extension_follows_format() {
    let people = persons_from_records(parse_csv("Name\nAlice"));
    let mut export = ExportOptions::default();
    export.format = ExportFormat::Tsv;
    export.include_headers = false;

    let dir = tmp_dir("tsv");
    // pasted extension is ignored; the format controls it
    export.set_path(dir.join("members.csv").to_str().unwrap());

    let path = write_export(&export, &people).unwrap();
    assert!(path.to_string_lossy().ends_with("members.tsv"));

    let s = fs::read_to_string(&path).unwrap();
    assert!(!s.starts_with("Id"));
    assert!(s.contains("card-01-alice\tAlice"));
}

#[test]
fn export_creates_missing_parent_directory() {
    let people = persons_from_records(parse_csv("Name\nAlice"));
    let mut export = ExportOptions::default();

    let dir = tmp_dir("mkdir").join("nested");
    export.set_path(dir.join("members.csv").to_str().unwrap());

    let path = write_export(&export, &people).unwrap();
    assert!(path.exists());
}
