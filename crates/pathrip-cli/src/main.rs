//! `pathrip` entry point: wires the real environment and filesystem into the
//! evaluate handler.

use std::io;

use anyhow::Result;
use clap::Parser;
use tracing::debug;

use pathrip_cli::{Cli, handlers, logging};
use pathrip_core::{SystemEnv, SystemFs};

fn main() -> Result<()> {
    // Load environment variables before clap reads its `env` fallbacks
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    logging::init_tracing(cli.verbose)?;

    let env = SystemEnv;
    let fs = SystemFs::native(&env, &cli.evaluator_config());
    debug!(policy = ?fs.policy(), "executable policy");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match handlers::execute(&cli, &env, &fs, &mut out) {
        Ok(outcome) => {
            debug!(?outcome, "done");
            Ok(())
        }
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(err.exit_code());
        }
    }
}
