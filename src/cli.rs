//! Command-line options.

use std::path::PathBuf;

use clap::Parser;

use crate::ui::LayoutPref;
use crate::DEFAULT_LOG_FILE;

/// Two-player local tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe", version, about, long_about = None)]
pub struct Args {
    /// Board layout; `auto` picks compact on small terminals
    #[arg(long, value_enum, default_value_t = LayoutPref::Auto)]
    pub layout: LayoutPref,

    /// File that receives the log output
    #[arg(long, default_value = DEFAULT_LOG_FILE)]
    pub log_file: PathBuf,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Do not capture the mouse (cells can then only be picked from the keyboard)
    #[arg(long)]
    pub no_mouse: bool,
}
