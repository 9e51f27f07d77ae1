use std::io::{stdin, stdout, BufRead, Write};
use std::process::ExitCode;

use color_print::ceprintln;
use config::Config;
use inventory::Inventory;
use shell::Shell;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod config;
mod error;
mod inventory;
mod shell;
mod storage;

/// Seeds the inventory from the legacy file and runs a session over it.
/// Returns whatever the session held when it ended.
fn run<R, W>(config: Config, input: R, output: W) -> error::Result<Inventory> where R: BufRead, W: Write {
    /* There is no session to recover into yet, so an import failure is
     * returned before anything is read from the console. */
    let inventory = storage::import_legacy(&config.legacy_file).map_err(|e| error::Error::LegacyImport {
        path: config.legacy_file.clone(),
        source: Box::new(e),
    })?;

    let mut shell = Shell::new(config, inventory, input, output);
    shell.start()?;
    Ok(shell.into_inventory())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    match run(Config::new(), stdin().lock(), stdout().lock()) {
        Ok(inventory) => {
            info!(records = inventory.len(), "exiting");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "fatal");
            ceprintln!("<red>error</red>: {}", e);
            ExitCode::FAILURE
        }
    }
}
