use std::collections::HashMap;

use crate::parse::LogRecord;

/// Series id `0` marks reference events in event-style logs; the plot renders
/// its values as full-height vertical lines rather than data points.
pub const MARKER_SERIES_ID: i64 = 0;

/// One series: every value recorded under a single id, in encounter order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Series {
    pub id: i64,
    pub values: Vec<i64>,
}

/// Insertion-ordered map from series id to its values.
///
/// Iteration order is first-seen order of the ids. That order is load-bearing:
/// it fixes the order of per-series means in the summary and the layering of
/// the plot, so a plain HashMap will not do.
#[derive(Debug, Default)]
pub struct SeriesTable {
    index: HashMap<i64, usize>,
    series: Vec<Series>,
}

impl SeriesTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record to its series, creating the series on first occurrence.
    pub fn push(&mut self, record: LogRecord) {
        match self.index.get(&record.series_id) {
            Some(&pos) => self.series[pos].values.push(record.value),
            None => {
                self.index.insert(record.series_id, self.series.len());
                self.series.push(Series {
                    id: record.series_id,
                    values: vec![record.value],
                });
            }
        }
    }

    pub fn get(&self, id: i64) -> Option<&[i64]> {
        self.index.get(&id).map(|&pos| self.series[pos].values.as_slice())
    }

    /// Series in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &Series> {
        self.series.iter()
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}
