use std::io::BufRead;

use crate::error::{Error, Result};
use crate::series::SeriesTable;

/// Recording mode announced by the log header.
///
/// The harness emits `write-time` for per-trial durations and other tokens
/// (e.g. `absolute`) for event-style timestamp logs. The token is classified
/// once here; downstream code matches on the variant and never re-reads the
/// string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    WriteTime,
    Other(String),
}

impl Mode {
    pub fn from_token(token: &str) -> Self {
        match token {
            "write-time" => Mode::WriteTime,
            other => Mode::Other(other.to_string()),
        }
    }
}

/// One body line of the log: `<series_id>: <value>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogRecord {
    pub series_id: i64,
    pub value: i64,
}

/// A fully parsed log: the header mode plus every record grouped by series.
#[derive(Debug)]
pub struct TimingLog {
    pub mode: Mode,
    pub series: SeriesTable,
}

/// Parse a single record line.
///
/// The separator is the literal `": "` the harness prints; anything else is a
/// corrupted log and aborts the run.
pub fn parse_record(line: &str) -> Result<LogRecord> {
    let (id, value) = line
        .split_once(": ")
        .ok_or_else(|| Error::Parse(format!("missing ': ' separator in line: {:?}", line)))?;
    let series_id = id
        .parse::<i64>()
        .map_err(|_| Error::Parse(format!("invalid series id: {:?}", id)))?;
    let value = value
        .trim_end()
        .parse::<i64>()
        .map_err(|_| Error::Parse(format!("invalid value: {:?}", value)))?;
    Ok(LogRecord { series_id, value })
}

/// Read an entire log from `reader`.
///
/// The whole input is consumed before returning: crop boundaries depend on
/// each series' final length, so there is nothing useful to hand out earlier.
pub fn read_log<R: BufRead>(reader: R) -> Result<TimingLog> {
    let mut lines = reader.lines();

    let header = match lines.next() {
        Some(line) => line?,
        None => return Err(Error::Parse("empty input, expected mode header".to_string())),
    };
    let token = header.trim();
    if token.is_empty() {
        return Err(Error::Parse("blank mode header".to_string()));
    }
    let mode = Mode::from_token(token);

    let mut series = SeriesTable::new();
    for line in lines {
        let line = line?;
        series.push(parse_record(&line)?);
    }

    Ok(TimingLog { mode, series })
}
