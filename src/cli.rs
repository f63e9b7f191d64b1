//! Command-line interface for the `richprint` binary.

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::error::Result;
use crate::log_init;
use crate::print::Printer;
use crate::timeago::{time_ago, time_ago_from_now};

/// Lines shown by `richprint demo`.
pub const DEMO: &[&str] = &[
    "[red on blue bold]hello[/] [red on #ffffff]world[/]",
    "[black on green bold]hello[/]",
    "[white on green bold]hello[/]",
    "[black on green]hello[/]",
    "[white on green]hello[/]",
    "[#ffffff on green] HELLO [/]",
    "[#ffffff on green bold] HELLO [/]",
];

#[derive(Parser, Debug)]
#[command(name = "richprint", version, about = "Print [style]markup[/] as styled terminal text")]
pub struct Cli {
    /// Append debug logs to this file
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Render each argument and print it on its own line
    Render {
        /// Echo the raw input and escaped output to stderr
        #[arg(short, long)]
        debug: bool,

        #[arg(required = true)]
        text: Vec<String>,
    },
    /// Print how long ago a Unix timestamp was
    Ago {
        #[arg(allow_hyphen_values = true)]
        epoch: i64,

        /// Reference time instead of the current clock
        #[arg(long, allow_hyphen_values = true)]
        now: Option<i64>,
    },
    /// Print a set of sample markup lines
    Demo {
        #[arg(short, long)]
        debug: bool,
    },
}

/// Execute `cli`, writing output to `out` and debug echoes to `diag`.
pub fn run<W: Write, D: Write>(cli: Cli, mut out: W, diag: D) -> Result<()> {
    if let Some(path) = &cli.log_file {
        log_init::init_logger(path)?;
        log::debug!("richprint: logging to {}", path.display());
    }

    match cli.command {
        Command::Render { debug, text } => {
            let printer = Printer::new(out, diag).with_debug(debug);
            print_lines(printer, text.iter().map(String::as_str))
        }
        Command::Demo { debug } => {
            let printer = Printer::new(out, diag).with_debug(debug);
            print_lines(printer, DEMO.iter().copied())
        }
        Command::Ago { epoch, now } => {
            let phrase = match now {
                Some(now) => time_ago(epoch, now),
                None => time_ago_from_now(epoch),
            };
            writeln!(out, "{}", phrase)?;
            out.flush()?;
            Ok(())
        }
    }
}

fn print_lines<'a, W: Write, D: Write>(
    mut printer: Printer<W, D>,
    lines: impl Iterator<Item = &'a str>,
) -> Result<()> {
    for line in lines {
        printer.print(line)?;
    }
    Ok(())
}
