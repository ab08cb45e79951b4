use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};

use thiserror::Error;
use tracing::{debug, info};

/// Error type for external rendering.
#[derive(Error, Debug)]
pub enum RenderError {
    /// The renderer program could not be started.
    #[error("failed to start {program}: {source}")]
    Spawn {
        /// Program that failed to launch.
        program: String,
        /// Underlying IO error.
        source: std::io::Error,
    },
    /// Feeding the description to the renderer or collecting its output failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// The renderer exited unsuccessfully.
    #[error("{program} exited with {status}: {stderr}")]
    Failed {
        /// Program that failed.
        program: String,
        /// Exit status reported by the OS.
        status: ExitStatus,
        /// Captured standard error, trimmed.
        stderr: String,
    },
}

/// Turns a DOT description into an image file.
pub trait Renderer {
    /// Renders `description` to `output`.
    fn render(&self, description: &str, output: &Path) -> Result<(), RenderError>;
}

/// Renderer that does nothing and always succeeds.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopRenderer;

impl Renderer for NoopRenderer {
    fn render(&self, _description: &str, output: &Path) -> Result<(), RenderError> {
        debug!(output = %output.display(), "render.noop");
        Ok(())
    }
}

/// Renders through a Graphviz-compatible program (`<program> -T<format> -o <output>`),
/// passing the description on stdin.
#[derive(Clone, Debug)]
pub struct GraphvizRenderer {
    program: String,
    format: String,
}

impl Default for GraphvizRenderer {
    fn default() -> Self {
        Self::new("dot", "png")
    }
}

impl GraphvizRenderer {
    /// Creates a renderer invoking `program` with output `format`.
    pub fn new(program: impl Into<String>, format: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            format: format.into(),
        }
    }

    /// Program name or path.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Output format passed as `-T<format>`; also the image file extension.
    pub fn format(&self) -> &str {
        &self.format
    }

    /// Image path next to `dot_path` with this renderer's extension.
    pub fn image_path_for(&self, dot_path: &Path) -> PathBuf {
        dot_path.with_extension(&self.format)
    }
}

impl Renderer for GraphvizRenderer {
    fn render(&self, description: &str, output: &Path) -> Result<(), RenderError> {
        let mut child = Command::new(&self.program)
            .arg(format!("-T{}", self.format))
            .arg("-o")
            .arg(output)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| RenderError::Spawn {
                program: self.program.clone(),
                source,
            })?;
        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(description.as_bytes())?;
        }
        let result = child.wait_with_output()?;
        if !result.status.success() {
            return Err(RenderError::Failed {
                program: self.program.clone(),
                status: result.status,
                stderr: String::from_utf8_lossy(&result.stderr).trim().to_string(),
            });
        }
        info!(program = %self.program, output = %output.display(), "render.completed");
        Ok(())
    }
}
