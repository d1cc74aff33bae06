// src/loader.rs
//
// Sequential source chain: sources are attempted strictly in order and the
// first one that parses to any records wins. A source fails on a fetch
// error, a non-success status, a timeout, or an empty parse; only running
// out of sources is fatal to the load. No retries beyond the chain.

use std::error::Error;
use std::fmt;

use crate::config::consts::{EXPORT_HOST, EXPORT_PATH, GVIZ_PATH, SAMPLE_ROSTER};
use crate::core::net;
use crate::csv::{self, Record};
use crate::data::Directory;
use crate::progress::Progress;
use crate::specs::person;

/// One entry in the fallback chain.
pub enum Source {
    /// Remote CSV export; always parsed with the quoted-CSV grammar.
    Remote {
        label: &'static str,
        host: &'static str,
        path: &'static str,
    },
    /// Raw text carried with the binary; grammar chosen by the detector.
    Bundled {
        label: &'static str,
        text: &'static str,
    },
}

impl Source {
    pub fn label(&self) -> &'static str {
        match self {
            Source::Remote { label, .. } => label,
            Source::Bundled { label, .. } => label,
        }
    }

    fn fetch(&self) -> Result<String, Box<dyn Error>> {
        match self {
            Source::Remote { host, path, .. } => net::http_get(host, path),
            Source::Bundled { text, .. } => Ok(s!(*text)),
        }
    }

    fn parse(&self, text: &str) -> Vec<Record> {
        match self {
            Source::Remote { .. } => csv::parse_csv(text),
            Source::Bundled { .. } => csv::parse_records(text, csv::detect_delim(text)),
        }
    }
}

/// The production chain: sheet export, gviz export, bundled sample.
pub fn default_sources() -> Vec<Source> {
    vec![
        Source::Remote { label: "sheet export", host: EXPORT_HOST, path: EXPORT_PATH },
        Source::Remote { label: "gviz export", host: EXPORT_HOST, path: GVIZ_PATH },
        Source::Bundled { label: "bundled sample", text: SAMPLE_ROSTER },
    ]
}

/// Chain restricted to the bundled sample (CLI `--offline`).
pub fn offline_sources() -> Vec<Source> {
    vec![Source::Bundled { label: "bundled sample", text: SAMPLE_ROSTER }]
}

/// Why a single source was rejected. Malformed input is not in here;
/// it degrades to degenerate records instead of failing.
enum SourceFailure {
    Network(String),
    EmptyResult,
}

impl fmt::Display for SourceFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceFailure::Network(e) => write!(f, "network failure: {}", e),
            SourceFailure::EmptyResult => write!(f, "parsed to zero records"),
        }
    }
}

/// Walk the chain and return the records of the first usable source.
pub fn load_records(
    sources: &[Source],
    mut progress: Option<&mut dyn Progress>,
) -> Result<Vec<Record>, Box<dyn Error>> {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(sources.len());
    }

    let mut last_failure: Option<String> = None;

    for (i, src) in sources.iter().enumerate() {
        if let Some(p) = progress.as_deref_mut() {
            p.log(&format!("Loading {} ({}/{})", src.label(), i + 1, sources.len()));
        }

        let failure = match src.fetch() {
            Ok(text) => {
                let records = src.parse(&text);
                if records.is_empty() {
                    SourceFailure::EmptyResult
                } else {
                    logf!("Load: {} OK ({} records)", src.label(), records.len());
                    if let Some(p) = progress.as_deref_mut() {
                        p.finish();
                    }
                    return Ok(records);
                }
            }
            Err(e) => SourceFailure::Network(e.to_string()),
        };

        loge!("Load: {} failed: {}", src.label(), failure);
        if let Some(p) = progress.as_deref_mut() {
            p.source_failed(src.label());
        }
        last_failure = Some(format!("{}: {}", src.label(), failure));
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    Err(format!(
        "all {} sources failed (last: {})",
        sources.len(),
        last_failure.unwrap_or_else(|| s!("none attempted"))
    )
    .into())
}

/// Full pipeline: chain → records → persons → directory. A load either
/// produces a non-empty directory or fails; there is no partial success.
pub fn load_directory(
    sources: &[Source],
    progress: Option<&mut dyn Progress>,
) -> Result<Directory, Box<dyn Error>> {
    let records = load_records(sources, progress)?;
    let persons = person::persons_from_records(records);
    if persons.is_empty() {
        return Err("no usable member rows in the loaded data".into());
    }
    Ok(Directory::new(persons))
}
