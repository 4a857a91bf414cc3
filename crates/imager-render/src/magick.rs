//! ImageMagick-backed [`Renderer`].

use std::path::{Path, PathBuf};
use std::process::Stdio;

use imager_identicon::DrawingDescriptor;
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::Command;

use crate::mvg::magick_args;
use crate::{RenderError, RenderLimits, Renderer};

/// Longest stderr excerpt kept in [`RenderError::Failed`].
const MAX_STDERR_CHARS: usize = 512;

/// Renders drawings by running the ImageMagick command-line tool.
///
/// The process writes PNG bytes to stdout. It is killed when the timeout
/// elapses or when its output grows past the byte ceiling.
#[derive(Debug, Clone)]
pub struct MagickRenderer {
    program: PathBuf,
    limits: RenderLimits,
}

impl MagickRenderer {
    /// Create a renderer for the given `magick` (or `convert`) executable.
    #[must_use]
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            limits: RenderLimits::default(),
        }
    }

    /// Set time and output limits.
    #[must_use]
    pub fn with_limits(mut self, limits: RenderLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Path of the executable.
    #[must_use]
    pub fn program(&self) -> &Path {
        &self.program
    }

    async fn run(&self, descriptor: &DrawingDescriptor) -> Result<Vec<u8>, RenderError> {
        let mut child = Command::new(&self.program)
            .args(magick_args(descriptor))
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(RenderError::Spawn)?;

        // Drained on its own task so a chatty stderr cannot stall stdout.
        let stderr_task = tokio::spawn(read_limited(child.stderr.take(), usize::MAX));

        let limit = self.limits.max_output_bytes;
        let output = read_limited(child.stdout.take(), limit).await?;
        if output.len() > limit {
            return Err(RenderError::OutputTooLarge { limit });
        }

        let status = child.wait().await?;
        if !status.success() {
            let errors = stderr_task
                .await
                .ok()
                .and_then(Result::ok)
                .unwrap_or_default();
            let stderr: String = String::from_utf8_lossy(&errors)
                .trim()
                .chars()
                .take(MAX_STDERR_CHARS)
                .collect();
            return Err(RenderError::Failed { status, stderr });
        }

        Ok(output)
    }
}

/// Read at most `limit + 1` bytes so callers can detect overflow.
async fn read_limited<R>(reader: Option<R>, limit: usize) -> std::io::Result<Vec<u8>>
where
    R: AsyncRead + Unpin,
{
    let mut buf = Vec::new();
    if let Some(reader) = reader {
        let cap = u64::try_from(limit).unwrap_or(u64::MAX).saturating_add(1);
        reader.take(cap).read_to_end(&mut buf).await?;
    }
    Ok(buf)
}

impl Renderer for MagickRenderer {
    async fn render(&self, descriptor: &DrawingDescriptor) -> Result<Vec<u8>, RenderError> {
        tracing::debug!(
            program = %self.program.display(),
            output_size = descriptor.output_size,
            ops = descriptor.ops.len(),
            "Running ImageMagick"
        );

        let timeout = self.limits.timeout;
        tokio::time::timeout(timeout, self.run(descriptor))
            .await
            .map_err(|_| RenderError::Timeout(timeout))?
    }
}
