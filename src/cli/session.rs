// src/cli/session.rs
//! Interactive simulation session.
//!
//! Plays the role of the UI host: reads commands from stdin, mutates the
//! store, and re-renders the node list after every mutation.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;
use colored::Colorize;

use crate::cli::handlers::{load_seed, plain_output};
use crate::config::Config;
use crate::exit::TreeExit;
use crate::render;
use crate::store::GraphStore;

const HELP: &str = "\
commands:
  click <id>   advance a node's status and propagate
  reset        restore the original seed
  mode         toggle simulation mode
  show         render the graph
  help         this message
  quit         exit";

pub fn run(seed_path: Option<PathBuf>, plain: bool) -> Result<TreeExit> {
    let config = Config::load();
    let mut store = GraphStore::new(load_seed(seed_path.as_deref(), &config)?);
    store.set_simulation(config.simulation_enabled());
    let plain = plain_output(plain, &config);

    render::print_graph(store.nodes(), plain);
    println!("{HELP}");

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }

        if !handle_line(line.trim(), &mut store, plain) {
            break;
        }
    }

    Ok(TreeExit::Success)
}

/// Handles one command line. Returns false to end the session.
fn handle_line(line: &str, store: &mut GraphStore, plain: bool) -> bool {
    let mut parts = line.split_whitespace();
    match parts.next() {
        None => {}
        Some("click") => match parts.next() {
            Some(id) => {
                if !store.simulation() {
                    println!("{}", "simulation mode is off (use `mode`)".yellow());
                }
                store.apply_click(id);
                render::print_graph(store.nodes(), plain);
            }
            None => println!("usage: click <id>"),
        },
        Some("reset") => {
            store.reset();
            render::print_graph(store.nodes(), plain);
        }
        Some("mode") => {
            store.toggle_simulation();
            let state = if store.simulation() { "on" } else { "off" };
            println!("simulation mode: {state}");
        }
        Some("show") => render::print_graph(store.nodes(), plain),
        Some("help") => println!("{HELP}"),
        Some("quit" | "exit" | "q") => return false,
        Some(other) => println!("unknown command: {other} (try `help`)"),
    }
    true
}
