// tapefix-cli: shared utilities for CLI tools.

use std::path::{Path, PathBuf};
use std::process;

use clap::Args;
use tapefix_spell::{DictionaryCorrector, Lexicon};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

/// Lexicon file name looked for inside dictionary directories.
pub const WORDS_FILE: &str = "words.txt";

/// Environment variable naming a lexicon file or a directory holding one.
pub const DICT_PATH_ENV: &str = "TAPEFIX_DICT_PATH";

/// Dictionary selection shared by every tool.
#[derive(Debug, Clone, Default, Args)]
pub struct DictArgs {
    /// Lexicon file, or directory containing words.txt
    #[arg(short = 'd', long = "dict-path", value_name = "PATH")]
    pub dict_path: Option<PathBuf>,
}

impl DictArgs {
    pub fn load(&self) -> Result<DictionaryCorrector, String> {
        load_corrector(self.dict_path.as_deref())
    }
}

/// Find a lexicon and build a corrector over it.
///
/// Search order:
/// 1. `dict_path` argument (if provided; must exist)
/// 2. `TAPEFIX_DICT_PATH` environment variable
/// 3. `~/.tapefix/words.txt`
/// 4. `words.txt` in the current working directory
/// 5. The built-in English lexicon
pub fn load_corrector(dict_path: Option<&Path>) -> Result<DictionaryCorrector, String> {
    if let Some(path) = dict_path {
        let file = resolve_lexicon(path)
            .ok_or_else(|| format!("no lexicon found at {}", path.display()))?;
        return read_lexicon(&file).map(DictionaryCorrector::new);
    }

    let env_path = std::env::var_os(DICT_PATH_ENV).map(PathBuf::from);
    if let Some(path) = &env_path {
        if resolve_lexicon(path).is_none() {
            warn!(path = %path.display(), "{DICT_PATH_ENV} does not name a lexicon");
        }
    }
    let cwd = std::env::current_dir().ok();
    for candidate in build_search_paths(env_path, home_dir(), cwd) {
        if let Some(file) = resolve_lexicon(&candidate) {
            return read_lexicon(&file).map(DictionaryCorrector::new);
        }
    }

    debug!("using built-in lexicon");
    Ok(DictionaryCorrector::builtin())
}

/// Build the list of places to search, most specific first.
fn build_search_paths(
    env_path: Option<PathBuf>,
    home: Option<PathBuf>,
    cwd: Option<PathBuf>,
) -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Some(p) = env_path {
        paths.push(p);
    }
    if let Some(home) = home {
        paths.push(home.join(".tapefix").join(WORDS_FILE));
    }
    if let Some(cwd) = cwd {
        paths.push(cwd.join(WORDS_FILE));
    }
    paths
}

/// A lexicon file itself, or `words.txt` inside a directory.
fn resolve_lexicon(path: &Path) -> Option<PathBuf> {
    if path.is_file() {
        return Some(path.to_path_buf());
    }
    let inner = path.join(WORDS_FILE);
    inner.is_file().then_some(inner)
}

fn read_lexicon(path: &Path) -> Result<Lexicon, String> {
    debug!(path = %path.display(), "loading lexicon");
    Lexicon::from_path(path).map_err(|e| e.to_string())
}

/// Get the user's home directory.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME").map(PathBuf::from)
}

/// Send `tracing` output to stderr, filtered by `RUST_LOG` (default `warn`).
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}
