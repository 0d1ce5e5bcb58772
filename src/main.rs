use std::process::ExitCode;

use clap::Parser;
use formsmith::cli::{load_config, run, Cli};
use formsmith::logging::init_tracing;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut stdout = std::io::stdout().lock();
    let result = load_config(&cli).and_then(|config| {
        if let Err(err) = init_tracing(&config) {
            eprintln!("Warning: Failed to open log file: {err}");
        }
        run(cli, &config, &mut stdout)
    });
    match result {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(1)
        }
    }
}
