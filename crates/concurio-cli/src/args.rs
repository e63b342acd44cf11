use std::path::PathBuf;

use clap::Parser;
use concurio_core::DEFAULT_CROP_WIDTH;

/// Summarize a write-time log as `mean, stddev, N, ci_half_width`.
#[derive(Parser)]
#[command(name = "concurio-summary")]
#[command(about = "Summarize a concurio write-time log with a confidence interval")]
#[command(version)]
pub struct SummaryArgs {
    /// Samples dropped from each end of every series before averaging
    #[arg(value_name = "CROP_WIDTH", default_value_t = DEFAULT_CROP_WIDTH)]
    pub crop_width: usize,

    /// Log file; standard input when omitted
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,
}

/// Plot the raw series of a concurio log.
#[derive(Parser)]
#[command(name = "concurio-plot")]
#[command(about = "Plot the raw series of a concurio log")]
#[command(version)]
pub struct PlotArgs {
    /// Save the plot to concurioplot.png instead of displaying it
    #[arg(short = 's', long = "save")]
    pub save: bool,

    /// Log file; standard input when omitted
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,
}
