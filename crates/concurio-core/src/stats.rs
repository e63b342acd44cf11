use crate::error::{Error, Result};
use crate::parse::{Mode, TimingLog};

/// Default number of boundary samples dropped from each end of a series to
/// discard warm-up and cool-down trials.
pub const DEFAULT_CROP_WIDTH: usize = 100;

/// Confidence level used by the summary tool.
pub const SUMMARY_CONFIDENCE_LEVEL: f64 = 0.95;

/// Drop `width` elements from each end of `values`.
///
/// Requires `2 * width < values.len()`; a series that crops to nothing has no
/// defined mean and must fail here rather than produce NaN downstream.
pub fn crop(values: &[i64], width: usize) -> Result<&[i64]> {
    if 2 * width >= values.len() {
        return Err(Error::Statistics(format!(
            "insufficient samples: series of length {} with crop width {}",
            values.len(),
            width
        )));
    }
    Ok(&values[width..values.len() - width])
}

/// Moment statistics over a finite sequence.
///
/// `stddev` is the sample standard deviation (N-1 denominator), 0 when fewer
/// than two values are present.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Statistics {
    pub mean: f64,
    pub stddev: f64,
    pub n: usize,
}

impl Statistics {
    pub fn from_values(values: &[f64]) -> Self {
        let n = values.len();
        if n == 0 {
            return Statistics {
                mean: 0.0,
                stddev: 0.0,
                n: 0,
            };
        }
        let mean = values.iter().sum::<f64>() / n as f64;
        let stddev = if n > 1 {
            let sum_sq: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
            (sum_sq / (n - 1) as f64).sqrt()
        } else {
            0.0
        };
        Statistics { mean, stddev, n }
    }
}

/// z-scores for two-sided confidence intervals, keyed by confidence level.
///
/// Kept as an explicit value handed to the computation so the supported
/// levels are visible at the call site instead of buried in a global.
#[derive(Debug, Clone)]
pub struct ConfidenceTable {
    entries: Vec<(f64, f64)>,
}

impl Default for ConfidenceTable {
    fn default() -> Self {
        ConfidenceTable {
            entries: vec![
                (0.800, 1.28155),
                (0.900, 1.64485),
                (0.950, 1.95996),
                (0.990, 2.57583),
                (0.995, 2.80703),
                (0.999, 3.29053),
            ],
        }
    }
}

impl ConfidenceTable {
    pub fn z_score(&self, level: f64) -> Result<f64> {
        self.entries
            .iter()
            .find(|(l, _)| *l == level)
            .map(|(_, z)| *z)
            .ok_or_else(|| Error::Statistics(format!("unknown confidence level: {}", level)))
    }

    /// Symmetric margin around the mean: `z(level) * stddev / sqrt(n)`.
    pub fn half_width(&self, level: f64, stddev: f64, n: usize) -> Result<f64> {
        Ok(self.z_score(level)? * stddev / (n as f64).sqrt())
    }
}

/// Across-series summary of a write-time log.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WriteTimeSummary {
    pub mean: f64,
    pub stddev: f64,
    pub n: usize,
    pub ci_half_width: f64,
}

/// Summarize a write-time log.
///
/// Two-level reduction: each series is cropped and collapsed to its mean,
/// then `Statistics` runs over the per-series means in table order. The
/// across-series statistic never sees pooled raw values.
pub fn summarize_write_times(
    log: &TimingLog,
    crop_width: usize,
    ci: &ConfidenceTable,
    level: f64,
) -> Result<WriteTimeSummary> {
    match &log.mode {
        Mode::WriteTime => {}
        Mode::Other(token) => return Err(Error::UnsupportedMode(token.clone())),
    }
    if log.series.is_empty() {
        return Err(Error::Statistics(
            "insufficient samples: no series".to_string(),
        ));
    }

    let mut means = Vec::with_capacity(log.series.len());
    for series in log.series.iter() {
        let cropped = crop(&series.values, crop_width)?;
        let sum: i64 = cropped.iter().sum();
        means.push(sum as f64 / cropped.len() as f64);
    }

    let stats = Statistics::from_values(&means);
    let ci_half_width = ci.half_width(level, stats.stddev, stats.n)?;
    Ok(WriteTimeSummary {
        mean: stats.mean,
        stddev: stats.stddev,
        n: stats.n,
        ci_half_width,
    })
}
