// Turning a compiled graph into an artifact on disk

use std::ffi::OsString;
use std::fmt;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};
use std::str::FromStr;
use std::thread;

use serde::{Deserialize, Serialize};
use tapefix_machine::{DotWriter, Graph};
use tempfile::NamedTempFile;
use tracing::debug;

/// Output format of a rendered diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    /// The DOT source itself. Needs no Graphviz installation.
    Dot,
    #[default]
    Png,
    Svg,
    Pdf,
}

impl ImageFormat {
    /// File extension, which is also the Graphviz `-T` output type.
    pub fn extension(self) -> &'static str {
        match self {
            ImageFormat::Dot => "dot",
            ImageFormat::Png => "png",
            ImageFormat::Svg => "svg",
            ImageFormat::Pdf => "pdf",
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Error returned when parsing an unknown format name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown image format '{0}' (expected dot, png, svg or pdf)")]
pub struct UnknownFormat(pub String);

impl FromStr for ImageFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dot" | "gv" => Ok(ImageFormat::Dot),
            "png" => Ok(ImageFormat::Png),
            "svg" => Ok(ImageFormat::Svg),
            "pdf" => Ok(ImageFormat::Pdf),
            _ => Err(UnknownFormat(s.to_string())),
        }
    }
}

/// Error type for rendering.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("graphviz exited with {status}: {stderr}")]
    Graphviz { status: ExitStatus, stderr: String },
    #[error("failed to move rendered file to {path}: {source}")]
    Persist {
        path: PathBuf,
        #[source]
        source: tempfile::PersistError,
    },
}

/// Writes a graph to `stem.<ext>` and returns the path written.
pub trait Renderer {
    fn render(&self, graph: &Graph, stem: &Path, format: ImageFormat)
        -> Result<PathBuf, RenderError>;
}

/// Renders through the Graphviz command-line tools.
///
/// The artifact is produced in a temporary file next to its destination
/// and moved into place once complete, so readers never see a partial file.
#[derive(Debug, Clone)]
pub struct GraphvizRenderer {
    program: String,
}

impl Default for GraphvizRenderer {
    fn default() -> Self {
        Self {
            program: "dot".to_string(),
        }
    }
}

impl GraphvizRenderer {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Pipe `dot` through the layout program into `out`.
    fn run(&self, dot: &str, format: ImageFormat, out: &NamedTempFile) -> Result<(), RenderError> {
        let stdout = out.reopen().map_err(|source| RenderError::Io {
            path: out.path().to_path_buf(),
            source,
        })?;
        let spawn_err = |source| RenderError::Spawn {
            program: self.program.clone(),
            source,
        };
        let mut child = Command::new(&self.program)
            .arg(format!("-T{}", format.extension()))
            .stdin(Stdio::piped())
            .stdout(Stdio::from(stdout))
            .stderr(Stdio::piped())
            .spawn()
            .map_err(spawn_err)?;
        // stdin is fed from its own thread while stderr drains here, so a
        // chatty program cannot fill one pipe while we block on the other.
        // A program that dies early closes its stdin; its exit status is
        // the more useful error, so check that first.
        let stdin = child.stdin.take();
        let (written, output) = thread::scope(|scope| {
            let writer = scope.spawn(move || match stdin {
                Some(mut stdin) => stdin.write_all(dot.as_bytes()),
                None => Ok(()),
            });
            let output = child.wait_with_output();
            let written = writer
                .join()
                .unwrap_or_else(|_| Err(io::Error::other("stdin writer panicked")));
            (written, output)
        });
        let output = output.map_err(spawn_err)?;
        if !output.status.success() {
            return Err(RenderError::Graphviz {
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        written.map_err(spawn_err)
    }
}

impl Renderer for GraphvizRenderer {
    fn render(
        &self,
        graph: &Graph,
        stem: &Path,
        format: ImageFormat,
    ) -> Result<PathBuf, RenderError> {
        let path = artifact_path(stem, format);
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let dot = DotWriter::default().write(graph);

        let mut tmp = NamedTempFile::new_in(dir).map_err(|source| RenderError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        match format {
            ImageFormat::Dot => tmp
                .write_all(dot.as_bytes())
                .map_err(|source| RenderError::Io {
                    path: tmp.path().to_path_buf(),
                    source,
                })?,
            _ => self.run(&dot, format, &tmp)?,
        }
        tmp.persist(&path).map_err(|source| RenderError::Persist {
            path: path.clone(),
            source,
        })?;
        debug!(path = %path.display(), %format, "graph rendered");
        Ok(path)
    }
}

/// `stem` with `.<ext>` appended. The stem's own dots are left alone.
pub fn artifact_path(stem: &Path, format: ImageFormat) -> PathBuf {
    let mut name = OsString::from(stem.as_os_str());
    name.push(".");
    name.push(format.extension());
    PathBuf::from(name)
}
