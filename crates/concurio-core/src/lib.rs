// Core pipeline for concurio benchmark logs: parse the line format, group
// values into insertion-ordered series, crop boundary samples and compute
// moment statistics with a confidence-interval estimate. Rendering lives in
// the CLI crate; this layer only hands it the parsed model.

pub mod error;
pub mod parse;
pub mod series;
pub mod stats;

pub use error::{Error, Result};
pub use parse::{read_log, LogRecord, Mode, TimingLog};
pub use series::{Series, SeriesTable, MARKER_SERIES_ID};
pub use stats::{
    crop, summarize_write_times, ConfidenceTable, Statistics, WriteTimeSummary,
    DEFAULT_CROP_WIDTH, SUMMARY_CONFIDENCE_LEVEL,
};
