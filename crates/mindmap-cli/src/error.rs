use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;

/// Fatal failures of a mindmap run. Nothing here is retried.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The layout engine binary could not be started
    #[error("layout engine '{engine}' is not available: {source}")]
    EngineUnavailable {
        engine: String,
        #[source]
        source: io::Error,
    },

    /// The engine ran but rejected the graph description
    #[error("layout engine '{engine}' failed ({status}): {stderr}")]
    EngineFailed {
        engine: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("unsupported output format '{0}'")]
    UnsupportedFormat(String),

    /// Input text is not valid UTF-8
    #[error("{} is not valid UTF-8 text", .path.display())]
    Encoding { path: PathBuf },

    #[error(transparent)]
    Io(#[from] io::Error),
}
