//! scripwatch CLI Application
//!
//! Command-line front end for the BSE corporate filings digest.

mod args;
mod cli;
mod renderer;

use anyhow::Result;
use args::Args;
use clap::Parser;
use cli::Cli;
use log::info;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let cli = Cli::for_today(args)?;

    info!("scripwatch started");

    cli.run().await
}
