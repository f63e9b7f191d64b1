use std::io;
use std::process::ExitCode;

use clap::Parser;
use richprint::cli::{self, Cli};

fn main() -> ExitCode {
    match cli::run(Cli::parse(), io::stdout(), io::stderr()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("richprint: {}", e);
            ExitCode::FAILURE
        }
    }
}
