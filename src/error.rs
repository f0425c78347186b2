use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for mesh import and export.
#[derive(Debug, Error)]
pub enum MeshError {
    #[error("file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("{}:{line}: {message}", path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        message: String,
    },

    #[error("{}:{line}: {cell} {id} references unknown vertex {vertex}", path.display())]
    InvalidReference {
        path: PathBuf,
        line: usize,
        cell: &'static str,
        id: u32,
        vertex: u32,
    },

    #[error("property `{label}` has {got} values, expected {expected}")]
    PropertySize {
        label: String,
        expected: usize,
        got: usize,
    },

    #[error("segment {segment} references node {node}, but only {nodes} nodes exist")]
    DanglingNode {
        segment: usize,
        node: u32,
        nodes: usize,
    },

    #[error("no cells in {}", path.display())]
    EmptyFile { path: PathBuf },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl MeshError {
    /// Creates a `Parse` error for the given file and 1-based line.
    #[must_use]
    pub fn parse(path: impl Into<PathBuf>, line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            path: path.into(),
            line,
            message: message.into(),
        }
    }
}

/// Convenience type alias for results using [`MeshError`].
pub type Result<T> = std::result::Result<T, MeshError>;
