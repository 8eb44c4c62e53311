//! template-menu CLI
//!
//! Browse the two-level template menu and copy the snippet text.

use std::process::ExitCode;

use clap::Parser;

#[derive(Parser)]
#[command(name = "template-menu")]
#[command(about = "Browse template options and copy snippet text")]
#[command(version)]
struct Cli {}

fn main() -> ExitCode {
    // No flags or subcommands; parsing still serves --help/--version
    // and rejects stray arguments.
    Cli::parse();

    match template_menu::tui::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
