//! Command dispatch extracted from the binary to keep main small.

use anyhow::Result;

use super::args::Commands;
use super::{handlers, session};
use crate::exit::TreeExit;

/// Executes the parsed command.
///
/// # Errors
/// Returns error if the command handler fails.
pub fn execute(command: Commands) -> Result<TreeExit> {
    match command {
        Commands::Show { seed, plain } => handlers::handle_show(seed, plain),
        Commands::Click {
            ids,
            seed,
            plain,
            verbose,
        } => handlers::handle_click(&ids, seed, plain, verbose),
        Commands::Sim { seed, plain } => session::run(seed, plain),
    }
}
