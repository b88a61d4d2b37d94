use clap::Parser;
use std::process;

mod cli;

use cli::args::Cli;

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    if let Err(e) = cli::commands::execute_command(&cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
