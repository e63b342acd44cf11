use anyhow::Result;
use concurio_core::{summarize_write_times, ConfidenceTable, SUMMARY_CONFIDENCE_LEVEL};

use crate::args::SummaryArgs;
use crate::format::format_general;

pub fn handle(args: &SummaryArgs) -> Result<()> {
    let log = super::read_input(args.input.as_deref())?;

    let ci = ConfidenceTable::default();
    let summary = summarize_write_times(&log, args.crop_width, &ci, SUMMARY_CONFIDENCE_LEVEL)?;

    println!(
        "{}, {}, {}, {}",
        format_general(summary.mean),
        format_general(summary.stddev),
        format_general(summary.n as f64),
        format_general(summary.ci_half_width)
    );
    Ok(())
}
