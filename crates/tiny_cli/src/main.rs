//! tiny: The tinyscript command-line scanner.
//!
//! Usage:
//!   tiny [options] [script]
//!
//! With a script, prints its tokens and exits non-zero if scanning reported
//! any error. Without one, starts an interactive prompt that scans each line
//! as it is entered.

mod driver;

use clap::Parser as ClapParser;
use driver::{CliError, Driver, OutputFormat, EXIT_OK, EXIT_USAGE};
use std::io;
use std::path::Path;
use std::process;

#[derive(ClapParser, Debug)]
#[command(name = "tiny", about = "tinyscript - print the tokens of a script", version)]
struct Cli {
    /// Script to scan. Starts an interactive prompt when omitted.
    #[arg(value_name = "SCRIPT")]
    scripts: Vec<String>,

    /// Token output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Never color diagnostics, even on a terminal.
    #[arg(long = "no-color")]
    no_color: bool,
}

// ANSI color codes
const RED: &str = "\x1b[31m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

fn main() {
    let cli = Cli::parse();

    if cli.scripts.len() > 1 {
        println!("Usage: tiny [script]");
        process::exit(EXIT_USAGE);
    }

    let use_color = !cli.no_color && atty_is_terminal();
    let result = {
        let mut driver = Driver::new(io::stdout().lock(), io::stderr().lock(), cli.format, use_color);
        match cli.scripts.first() {
            Some(script) => driver.run_file(Path::new(script)),
            None => driver.run_prompt(io::stdin().lock()).map(|()| EXIT_OK),
        }
    };

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            print_error(&e, use_color);
            process::exit(e.exit_code());
        }
    }
}

fn print_error(error: &CliError, use_color: bool) {
    eprintln!("{}", format_error(error, use_color));
}

fn format_error(error: &CliError, use_color: bool) -> String {
    if use_color {
        format!("{}{}error{}: {}", BOLD, RED, RESET, error)
    } else {
        format!("error: {}", error)
    }
}

fn atty_is_terminal() -> bool {
    // On Unix, check if stderr is a terminal
    #[cfg(unix)]
    {
        unsafe { libc::isatty(2) != 0 }
    }
    #[cfg(not(unix))]
    {
        true // Assume terminal on other platforms
    }
}
