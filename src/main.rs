/**
 * @file main.rs
 * @author Krisna Pranav
 * @version 0.1
 * @date 2023-05-11
 *
 * @copyright Copyright (c) 2023 Krisna Pranav, NanoBlocksDevelopers
 *
*/

use clap::Parser;
use treecse::cli::{self, Args};

fn main() -> miette::Result<()> {
    let args = Args::parse();

    cli::init_logger(args.log_level())?;

    let summary = cli::execute(&args)?;

    log::info!(
        "done: {} processed, {} failed",
        summary.processed,
        summary.failed
    );

    Ok(())
}
