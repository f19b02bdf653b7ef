use std::path::PathBuf;

use clap::Parser;

/// Interactive library catalog
#[derive(Parser, Debug)]
#[command(name = "libris")]
#[command(about = "Manage books, users and loans from a text menu.", long_about = None)]
pub struct CommandLine {
    /// Directory holding base.toml and <env>.toml (overrides LIBRIS_CONFIG_DIR)
    #[arg(long = "config-dir")]
    pub config_dir: Option<PathBuf>,

    /// Configuration overlay to load: local, staging or production (overrides LIBRIS_ENV)
    #[arg(long = "env")]
    pub env: Option<String>,

    /// Start with an empty catalog
    #[arg(long = "no-seed")]
    pub no_seed: bool,

    /// Print one JSON object per action instead of the text menu
    #[arg(long = "json")]
    pub json: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
