// tapefix-compile: Print the alignment machine for a pair of strings.
//
// Usage:
//   tapefix-compile [OPTIONS] ORIGINAL CORRECTED

use clap::Parser;
use tapefix_cli::{fatal, init_logging};
use tapefix_machine::{DotWriter, Topology, compile_with};

/// Print the alignment machine between two strings as DOT or JSON
#[derive(Debug, Parser)]
#[command(name = "tapefix-compile", version, about, long_about = None)]
struct Cli {
    /// The string as typed
    original: String,

    /// The corrected string
    corrected: String,

    /// State layout: per-position or bucketed
    #[arg(short, long, default_value_t)]
    topology: Topology,

    /// Print the graph as JSON instead of DOT
    #[arg(long)]
    json: bool,

    /// Name of the DOT digraph
    #[arg(long, default_value = "turing_machine")]
    name: String,

    /// Lay the DOT graph out left to right
    #[arg(long)]
    left_to_right: bool,
}

fn main() {
    init_logging();
    let cli = Cli::parse();
    let graph = compile_with(&cli.original, &cli.corrected, cli.topology);

    if cli.json {
        match serde_json::to_string_pretty(&graph) {
            Ok(json) => println!("{json}"),
            Err(e) => fatal(&format!("failed to encode graph: {e}")),
        }
        return;
    }

    let mut writer = DotWriter::new(cli.name);
    if cli.left_to_right {
        writer = writer.left_to_right();
    }
    print!("{}", writer.write(&graph));
}
