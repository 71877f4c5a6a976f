// tapefix-suggest: Print ranked spelling suggestions.
//
// Known words are printed as `word (correct)`. Words come from the
// arguments, or from stdin (one per line) when none are given.
//
// Usage:
//   tapefix-suggest [-d DICT_PATH] [-n N] [WORD]...

use std::io::{self, BufRead, BufWriter, Write};

use clap::Parser;
use tapefix_cli::{DictArgs, fatal, init_logging};
use tapefix_spell::DictionaryCorrector;

/// Print ranked spelling suggestions for words
#[derive(Debug, Parser)]
#[command(name = "tapefix-suggest", version, about, long_about = None)]
struct Cli {
    /// Words to look up
    words: Vec<String>,

    #[command(flatten)]
    dict: DictArgs,

    /// Maximum number of suggestions per word
    #[arg(short = 'n', long = "max-suggestions", default_value_t = 5)]
    max_suggestions: usize,
}

fn main() {
    init_logging();
    let cli = Cli::parse();
    let corrector = cli.dict.load().unwrap_or_else(|e| fatal(&e));

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    if cli.words.is_empty() {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(l) => l,
                Err(e) => fatal(&format!("failed to read stdin: {e}")),
            };
            let word = line.trim();
            if word.is_empty() {
                continue;
            }
            suggest_word(&corrector, word, cli.max_suggestions, &mut out);
        }
    } else {
        for word in &cli.words {
            suggest_word(&corrector, word, cli.max_suggestions, &mut out);
        }
    }
    if let Err(e) = out.flush() {
        fatal(&format!("failed to write output: {e}"));
    }
}

fn suggest_word(corrector: &DictionaryCorrector, word: &str, max: usize, out: &mut impl Write) {
    if corrector.lexicon().knows(word) {
        let _ = writeln!(out, "{word} (correct)");
        return;
    }
    let suggestions = corrector.suggest(word, max);
    if suggestions.is_empty() {
        let _ = writeln!(out, "{word}: (no suggestions)");
    } else {
        let _ = writeln!(out, "{word}:");
        for s in &suggestions {
            let _ = writeln!(out, "  {s}");
        }
    }
}
