use std::path::Path;

use anyhow::Result;

use crate::args::PlotArgs;
use crate::render;

pub fn handle(args: &PlotArgs) -> Result<()> {
    let log = super::read_input(args.input.as_deref())?;

    if args.save {
        render::render_to_file(&log, Path::new(render::PLOT_FILE))?;
    } else {
        render::display(&log)?;
    }
    Ok(())
}
