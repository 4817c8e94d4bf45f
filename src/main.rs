use std::process::ExitCode;

use clap::Parser;
use coursekit::cli::{Cli, execute};
use coursekit_config::{DashboardConfig, LogConfig};
use coursekit_observability::init_logging;
use dotenvy::dotenv;

fn main() -> ExitCode {
    dotenv().ok();
    init_logging(&LogConfig::from_env());

    let cli = Cli::parse();

    match execute(cli.command, &DashboardConfig::from_env()) {
        Ok(output) => {
            println!("{}", output.body);
            if output.success {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(e) => {
            eprintln!("❌ Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
