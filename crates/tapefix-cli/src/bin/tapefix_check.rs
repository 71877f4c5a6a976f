// tapefix-check: Correct text and render the alignment machine for it.
//
// Prints {"message": ..., "graph_path": ...} as JSON, or just the message
// with --plain. Text comes from the arguments, or stdin when none are given.
//
// Usage:
//   tapefix-check [OPTIONS] [TEXT]...

use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::Parser;
use serde::Serialize;
use tapefix_cli::{DictArgs, fatal, init_logging};
use tapefix_machine::Topology;
use tapefix_spell::{Checker, CheckerOptions, GraphvizRenderer, ImageFormat};

/// Correct text and render the alignment machine for it
#[derive(Debug, Parser)]
#[command(name = "tapefix-check", version, about, long_about = None)]
struct Cli {
    /// Text to check; several arguments are joined with spaces
    text: Vec<String>,

    #[command(flatten)]
    dict: DictArgs,

    /// Directory for rendered diagrams
    #[arg(short, long, env = "TAPEFIX_OUTPUT_DIR", default_value = "static")]
    output_dir: PathBuf,

    /// Diagram format: dot, png, svg or pdf
    #[arg(short, long, default_value_t)]
    format: ImageFormat,

    /// State layout: per-position or bucketed
    #[arg(short, long, default_value_t)]
    topology: Topology,

    /// Graphviz layout program
    #[arg(long, env = "TAPEFIX_DOT", default_value = "dot")]
    dot_program: String,

    /// Print only the status message
    #[arg(long)]
    plain: bool,
}

#[derive(Serialize)]
struct Output<'a> {
    message: &'a str,
    graph_path: &'a Path,
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    let text = if cli.text.is_empty() {
        let mut input = String::new();
        if let Err(e) = io::stdin().read_to_string(&mut input) {
            fatal(&format!("failed to read stdin: {e}"));
        }
        strip_line_ending(input)
    } else {
        cli.text.join(" ")
    };

    let corrector = cli.dict.load().unwrap_or_else(|e| fatal(&e));
    let options = CheckerOptions {
        output_dir: cli.output_dir,
        format: cli.format,
        topology: cli.topology,
    };
    let checker = Checker::new(corrector, GraphvizRenderer::new(cli.dot_program), options);
    let response = checker.check(&text).unwrap_or_else(|e| fatal(&e.to_string()));

    if cli.plain {
        println!("{}", response.message);
        return;
    }
    let output = Output {
        message: &response.message,
        graph_path: &response.graph_path,
    };
    match serde_json::to_string_pretty(&output) {
        Ok(json) => println!("{json}"),
        Err(e) => fatal(&format!("failed to encode response: {e}")),
    }
}

fn strip_line_ending(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    text
}
