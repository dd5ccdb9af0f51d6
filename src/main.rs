use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use colored::Colorize;
use ppcheck::{Harness, HarnessConfig};

/// Run preprocessor fixtures and check their output against `<fixture>.check`
#[derive(Parser)]
#[command(name = "ppcheck")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Directory holding the fixtures and their .check files
    #[arg(long, default_value = "tests/tc_data")]
    fixtures: PathBuf,

    /// Echo every token to stdout as it is produced
    #[arg(long, default_value_t = false)]
    debug: bool,

    /// Fixture file names, relative to the fixture directory
    #[arg(required = true)]
    names: Vec<String>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_default_env().init();
    let cli = Cli::parse();

    let mut harness = Harness::new(HarnessConfig::with_fixture_dir(cli.fixtures));
    let mut failed = 0;
    for name in &cli.names {
        match harness.verify(name, cli.debug) {
            Ok(()) => println!("{} {}", "ok".green(), name),
            Err(err) => {
                failed += 1;
                println!("{} {}: {}", "FAILED".red().bold(), name, err);
            }
        }
    }
    if failed > 0 {
        println!("{} of {} fixtures failed", failed, cli.names.len());
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
