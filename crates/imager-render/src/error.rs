//! Rendering error types.

use std::process::ExitStatus;
use std::time::Duration;

/// Error returned when a drawing could not be rendered.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// Rendering did not finish within the time budget.
    #[error("rendering timed out after {}ms", .0.as_millis())]
    Timeout(Duration),
    /// The renderer produced more bytes than allowed.
    #[error("rendered output exceeds {limit} bytes")]
    OutputTooLarge {
        /// Configured ceiling in bytes.
        limit: usize,
    },
    /// The renderer process could not be started.
    #[error("failed to start renderer: {0}")]
    Spawn(#[source] std::io::Error),
    /// The renderer process exited unsuccessfully.
    #[error("renderer exited with {status}: {stderr}")]
    Failed {
        status: ExitStatus,
        /// Trimmed, truncated stderr output.
        stderr: String,
    },
    /// I/O error while talking to the renderer.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
