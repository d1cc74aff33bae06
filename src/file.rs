// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::config::options::ExportOptions;
use crate::csv::to_export_string;
use crate::specs::person::{EXPORT_HEADERS, Person};

/// Write the directory as one CSV/TSV file per ExportOptions.
/// Returns the final path written to.
pub fn write_export(
    export: &ExportOptions,
    persons: &[Person],
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let path = export.out_path();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let headers: Vec<String> = EXPORT_HEADERS.iter().map(|h| s!(*h)).collect();
    let rows: Vec<Vec<String>> = persons.iter().map(|p| p.to_row()).collect();
    let contents = to_export_string(
        Some(&headers),
        &rows,
        export.include_headers,
        export.format.delim(),
    );

    fs::write(&path, contents)?;
    Ok(path)
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}
