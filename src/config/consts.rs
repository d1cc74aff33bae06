// src/config/consts.rs

// Net config. Published sheet 1pMFnTJJiDN3AYKNAP3NEHNXnl2UXPLl5gdEIZR-SA3s.
pub const EXPORT_HOST: &str = "docs.google.com";
pub const EXPORT_PATH: &str =
    "/spreadsheets/d/1pMFnTJJiDN3AYKNAP3NEHNXnl2UXPLl5gdEIZR-SA3s/export?format=csv";
pub const GVIZ_PATH: &str =
    "/spreadsheets/d/1pMFnTJJiDN3AYKNAP3NEHNXnl2UXPLl5gdEIZR-SA3s/gviz/tq?tqx=out:csv";

/// Per-request socket timeout, seconds. A source that stalls past this is
/// failed and the chain moves on.
pub const FETCH_TIMEOUT_SECS: u64 = 10;

// Last-resort roster shipped with the binary.
pub const SAMPLE_ROSTER: &str = include_str!("../../data/sample_roster.txt");

// Directory view
pub const CARDS_PER_PAGE: usize = 12;

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE: &str = "members";
