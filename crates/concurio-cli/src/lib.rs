mod args;
mod format;
mod handlers;
mod render;

pub use args::{PlotArgs, SummaryArgs};
pub use handlers::plot::handle as run_plot;
pub use handlers::summary::handle as run_summary;
