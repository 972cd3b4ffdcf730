//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, ValueEnum, ValueHint};

use crate::application::services::BuildMode;

/// Build a mansion of rooms as a binary tree and explore it left/right until a dead end
#[derive(Parser, Debug)]
#[command(name = "mansion")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// How to build the mansion (asked interactively when omitted)
    #[arg(short, long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Print the mansion map before exploring
    #[arg(long)]
    pub map: bool,

    /// Print the visited rooms after exploring
    #[arg(long)]
    pub trail: bool,

    /// Config file (default: $XDG_CONFIG_HOME/mansion/mansion.toml)
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Print the effective settings as TOML and exit
    #[arg(long)]
    pub print_config: bool,

    /// Debug logging to stderr, repeat for more (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub debug: u8,

    /// Generate shell completions and exit
    #[arg(long = "generate", value_enum)]
    pub generator: Option<clap_complete::Shell>,
}

/// Build mode as accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// Fixed seven-room sample mansion
    Sample,
    /// Enter every room interactively
    Manual,
}

impl From<ModeArg> for BuildMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Sample => BuildMode::Sample,
            ModeArg::Manual => BuildMode::Manual,
        }
    }
}
