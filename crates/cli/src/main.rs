use std::io;
use std::process::ExitCode;

use clap::Parser;
use playbill_cli::Config;

fn main() -> ExitCode {
    let config = Config::parse();
    playbill_observability::init_with(config.log_format);

    let stdout = io::stdout();
    match playbill_cli::run(&config, &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("statement run failed: {e:#}");
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
