//! CLI command definitions

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "bylines")]
#[command(about = "Query authors, magazines and articles from a seed file", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Seed file (default: $BYLINES_SEED, then bylines.toml upward from cwd)
    #[arg(short, long, value_name = "PATH", global = true)]
    pub seed: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load the seed file and print entity counts
    Check,

    /// List authors with their article counts
    Authors,

    /// Show one author's articles, magazines and topic areas
    Author {
        /// Exact author name
        name: String,
    },

    /// List magazines with category and article counts
    Magazines,

    /// Show one magazine's titles and contributors
    Magazine {
        /// Exact magazine name
        name: String,
    },

    /// Show the magazine with the most articles
    TopPublisher,
}
