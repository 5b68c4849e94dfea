/// Declaration Lines - lists function and class declarations
///
/// The main entry point. It parses the command line, scans the Python
/// sources of the current directory and writes `lines.txt`.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use colored::Colorize;
use log::{debug, LevelFilter};

use decl_lines::app::{self, RunOutcome};
use decl_lines::ScanConfig;

/// Command line argument structure
#[derive(Parser, Debug)]
#[command(
    name = "decl_lines",
    version,
    about = "Lists the functions and classes of the Python files in the current directory",
    long_about = "Scans every .py file in the current directory and writes lines.txt with:
- a header line per file
- one line per function or class declaration, with its line number
- a blank line closing each file"
)]
struct Args {
    /// Include parameter lists and base classes
    #[arg(short = 'v', long = "verbose", action = ArgAction::SetTrue)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    setup_logging();

    let config = ScanConfig::for_invocation(args.verbose);
    debug!("Configuration: {:?}", config);

    let cwd = std::env::current_dir().context("Failed to determine the current directory")?;

    match app::run(&cwd, &config)? {
        RunOutcome::NoFiles => println!("{}", "No files to parse".yellow()),
        RunOutcome::Written { path, .. } => debug!("Report written to {}", path.display()),
    }

    Ok(())
}

/// Set up logging on stderr
fn setup_logging() {
    let mut builder = env_logger::Builder::new();

    builder.filter_level(LevelFilter::Warn);
    builder.parse_default_env();

    builder.format(|buf, record| {
        use chrono::Local;
        use std::io::Write;
        writeln!(
            buf,
            "{} - {} - {} - {}",
            Local::now().format("%Y-%m-%d %H:%M:%S"),
            record.level(),
            record.target(),
            record.args()
        )
    });

    builder.target(env_logger::Target::Stderr);

    builder.init();
}
