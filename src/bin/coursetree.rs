use clap::Parser;
use colored::Colorize;
use coursetree_core::cli::{self, Cli};
use coursetree_core::exit::TreeExit;

fn main() -> TreeExit {
    let cli = Cli::parse();

    let result = if let Some(cmd) = cli.command {
        cli::dispatch::execute(cmd)
    } else {
        use clap::CommandFactory;
        let _ = Cli::command().print_help();
        Ok(TreeExit::Success)
    };

    match result {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("{} {e}", "Error:".red());
            TreeExit::Error
        }
    }
}
