use clap::Parser;
use concurio::SummaryArgs;

fn main() {
    let args = SummaryArgs::parse();

    // Diagnostics go to stderr only; an unsupported-mode log must produce no
    // stdout output at all.
    if let Err(e) = concurio::run_summary(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
