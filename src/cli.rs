// src/cli.rs
use std::env;
use std::error::Error;

use crate::config::options::{AppOptions, ExportFormat};
use crate::file;
use crate::loader;
use crate::progress::Progress;

/// Prints loader status to stderr so stdout stays machine-readable.
struct CliProgress;
impl Progress for CliProgress {
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn source_failed(&mut self, label: &str) {
        eprintln!("{label} failed, trying next source");
    }
}

pub struct Params {
    pub list: bool,       // print the directory listing instead of exporting
    pub offline: bool,    // bundled sample only, skip remote endpoints
    pub out: Option<String>,
    pub options: AppOptions,
}

impl Params {
    pub fn new() -> Self {
        Self {
            list: false,
            offline: false,
            out: None,
            options: AppOptions::default(),
        }
    }
}

pub fn run() -> Result<(), Box<dyn Error>> {
    let mut params = Params::new();
    parse_cli(&mut params)?;

    let sources = if params.offline {
        loader::offline_sources()
    } else {
        loader::default_sources()
    };

    let mut prog = CliProgress;
    let dir = loader::load_directory(&sources, Some(&mut prog))?;

    if params.list {
        for p in dir.persons() {
            println!("{}\t{}\t{}", p.index + 1, p.id, p.display_name());
        }
        return Ok(());
    }

    if let Some(out) = &params.out {
        params.options.export.set_path(out);
    }
    let path = file::write_export(&params.options.export, dir.persons())?;
    println!("Wrote {} member(s) → {}", dir.len(), path.display());
    Ok(())
}

fn parse_cli(params: &mut Params) -> Result<(), Box<dyn Error>> {
    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str() {
            "--list" => params.list = true,
            "--offline" => params.offline = true,
            "-o" | "--out" => {
                params.out = Some(args.next().ok_or("Missing output path")?);
            }
            "--format" => {
                let v = args.next().ok_or("Missing value for --format")?;
                params.options.export.format = match v.to_ascii_lowercase().as_str() {
                    "csv" => ExportFormat::Csv,
                    "tsv" => ExportFormat::Tsv,
                    other => return Err(format!("Unknown format: {}", other).into()),
                };
            }
            "--no-headers" => params.options.export.include_headers = false,
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    Ok(())
}
