use clap::Parser;
use concurio::PlotArgs;

fn main() {
    let args = PlotArgs::parse();

    if let Err(e) = concurio::run_plot(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
