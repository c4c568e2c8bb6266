use std::path::PathBuf;

/// Errors that stop a command before any scanning happens.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("shader source is required: use a positional path, `-` for stdin, or -e/--source")]
    MissingSource,

    #[error("shader source cannot be empty")]
    EmptyInput,

    #[error("failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to read stdin: {0}")]
    Stdin(std::io::Error),

    #[error("failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),
}
