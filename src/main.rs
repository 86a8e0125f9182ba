use anyhow::Result;
use clap::Parser;

use tictactoe::{app, cli, logging};

fn main() -> Result<()> {
    let args = cli::Args::parse();
    logging::init(&args.log_file, &args.log_level)?;
    app::run(&args)
}
