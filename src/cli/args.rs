use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "coursetree", version, about = "Prerequisite graph visualizer")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render the seed graph
    Show {
        /// Seed file (.toml or .json) instead of the built-in curriculum
        #[arg(long, value_name = "FILE")]
        seed: Option<PathBuf>,
        /// Disable colored output
        #[arg(long)]
        plain: bool,
    },
    /// Apply a sequence of clicks, then render the result
    Click {
        /// Node ids, clicked in order
        #[arg(value_name = "ID", required = true)]
        ids: Vec<String>,
        #[arg(long, value_name = "FILE")]
        seed: Option<PathBuf>,
        #[arg(long)]
        plain: bool,
        /// Print each click's status transition
        #[arg(long, short)]
        verbose: bool,
    },
    /// Interactive simulation session reading commands from stdin
    Sim {
        #[arg(long, value_name = "FILE")]
        seed: Option<PathBuf>,
        #[arg(long)]
        plain: bool,
    },
}
