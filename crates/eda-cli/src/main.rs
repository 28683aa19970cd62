//! EDA generator CLI.

use clap::Parser;

use eda_cli::cli::{Cli, Command};
use eda_cli::commands::{run_convert, run_inspect};
use eda_cli::logging::{LogConfig, init_logging};
use eda_cli::summary::{print_convert_summary, print_inspect_summary};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = LogConfig::from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match &cli.command {
        Command::Convert(args) => match run_convert(args) {
            Ok(result) => {
                print_convert_summary(&result);
                0
            }
            Err(error) => {
                tracing::error!(error = %format!("{error:#}"), "conversion failed");
                eprintln!("error: {error:#}");
                1
            }
        },
        Command::Inspect(args) => match run_inspect(args) {
            Ok(result) => {
                print_inspect_summary(&result);
                0
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
    };
    std::process::exit(exit_code);
}
