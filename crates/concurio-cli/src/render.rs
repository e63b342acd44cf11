//! Plot rendering for concurio logs.
//!
//! Write-time logs get one connected line with cross markers per series
//! (x = trial index, y = value). Event-style logs get one cross per
//! (value, series id) pair, with the marker series drawn as full-height
//! vertical reference lines. The y-axis of an event plot is fixed to
//! [-1, number of series].

use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{bail, Context, Result};
use plotters::prelude::*;

use concurio_core::{Mode, TimingLog, MARKER_SERIES_ID};

/// Fixed output name used by save mode.
pub const PLOT_FILE: &str = "concurioplot.png";

/// 8x6 inch figure at 100 dpi, matching the original tool's output.
const PLOT_SIZE: (u32, u32) = (800, 600);

pub fn render_to_file(log: &TimingLog, path: &Path) -> Result<()> {
    let root = BitMapBackend::new(path, PLOT_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    match &log.mode {
        Mode::WriteTime => draw_write_time(log, &root)?,
        Mode::Other(_) => draw_events(log, &root)?,
    }

    root.present()
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

/// Render to a temporary file and hand it to the platform image viewer.
pub fn display(log: &TimingLog) -> Result<()> {
    let path = temp_plot_path();
    render_to_file(log, &path)?;
    open_viewer(&path)
}

type Area<'a> = DrawingArea<BitMapBackend<'a>, plotters::coord::Shift>;

fn draw_write_time(log: &TimingLog, root: &Area) -> Result<()> {
    let longest = log.series.iter().map(|s| s.values.len()).max().unwrap_or(0);
    let (y_min, y_max) = value_bounds(log.series.iter().flat_map(|s| s.values.iter().copied()));

    let x_max = longest.saturating_sub(1).max(1) as f64;
    let mut chart = ChartBuilder::on(root)
        .margin(10)
        .build_cartesian_2d(0.0..x_max, y_min..y_max)?;

    for (idx, series) in log.series.iter().enumerate() {
        let color = Palette99::pick(idx);
        let points: Vec<(f64, f64)> = series
            .values
            .iter()
            .enumerate()
            .map(|(i, &v)| (i as f64, v as f64))
            .collect();
        chart.draw_series(LineSeries::new(points.clone(), &color))?;
        chart.draw_series(points.iter().map(|&p| Cross::new(p, 4, color.filled())))?;
    }
    Ok(())
}

fn draw_events(log: &TimingLog, root: &Area) -> Result<()> {
    let (x_min, x_max) = value_bounds(log.series.iter().flat_map(|s| s.values.iter().copied()));
    let y_top = log.series.len() as f64;

    let mut chart = ChartBuilder::on(root)
        .margin(10)
        .build_cartesian_2d(x_min..x_max, -1.0..y_top)?;

    for (idx, series) in log.series.iter().enumerate() {
        if series.id == MARKER_SERIES_ID {
            for &v in &series.values {
                chart.draw_series(std::iter::once(PathElement::new(
                    vec![(v as f64, -1.0), (v as f64, y_top)],
                    BLACK.stroke_width(1),
                )))?;
            }
        }
        let color = Palette99::pick(idx);
        let y = series.id as f64;
        chart.draw_series(
            series
                .values
                .iter()
                .map(|&v| Cross::new((v as f64, y), 4, color.filled())),
        )?;
    }
    Ok(())
}

/// Bounds over raw values, widened when degenerate so the coordinate range
/// stays non-empty.
fn value_bounds(values: impl Iterator<Item = i64>) -> (f64, f64) {
    let mut min = i64::MAX;
    let mut max = i64::MIN;
    for v in values {
        min = min.min(v);
        max = max.max(v);
    }
    if min > max {
        return (0.0, 1.0);
    }
    if min == max {
        return (min as f64 - 1.0, max as f64 + 1.0);
    }
    (min as f64, max as f64)
}

fn temp_plot_path() -> PathBuf {
    std::env::temp_dir().join(PLOT_FILE)
}

fn open_viewer(path: &Path) -> Result<()> {
    #[cfg(target_os = "macos")]
    let mut cmd = Command::new("open");
    #[cfg(all(unix, not(target_os = "macos")))]
    let mut cmd = Command::new("xdg-open");
    #[cfg(windows)]
    let mut cmd = {
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", "start", ""]);
        cmd
    };

    let status = cmd
        .arg(path)
        .status()
        .with_context(|| format!("failed to launch a viewer for {}", path.display()))?;
    if !status.success() {
        bail!("viewer exited with {}", status);
    }
    Ok(())
}
