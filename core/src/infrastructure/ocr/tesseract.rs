use std::path::PathBuf;
use std::process::Stdio;

use tokio::{io::AsyncWriteExt, process::Command};

use crate::domain::{
    common::entities::app_errors::CoreError,
    meal_planning::{ports::OcrEngine, value_objects::ReceiptImage},
};

/// Runs the `tesseract` binary, streaming the image over stdin.
#[derive(Debug, Clone)]
pub struct TesseractOcr {
    binary: PathBuf,
    language: String,
}

impl TesseractOcr {
    pub fn new(binary: PathBuf, language: String) -> Self {
        Self { binary, language }
    }
}

impl OcrEngine for TesseractOcr {
    async fn extract_text(&self, image: &ReceiptImage) -> Result<String, CoreError> {
        let mut child = Command::new(&self.binary)
            .args(["stdin", "stdout", "-l", self.language.as_str()])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| {
                tracing::error!("Failed to start {}: {}", self.binary.display(), e);
                CoreError::OcrFailure(format!(
                    "failed to start {}: {}",
                    self.binary.display(),
                    e
                ))
            })?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| CoreError::OcrFailure("tesseract stdin unavailable".to_string()))?;

        let write = async move {
            stdin.write_all(&image.data).await?;
            stdin.shutdown().await
        };
        let (written, output) = tokio::join!(write, child.wait_with_output());

        let output = output.map_err(|e| CoreError::OcrFailure(e.to_string()))?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            tracing::error!("tesseract exited with {}: {}", output.status, stderr);
            return Err(CoreError::OcrFailure(format!(
                "tesseract exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }
        // tesseract may stop reading early once it has decoded the header
        if let Err(e) = written {
            tracing::debug!("tesseract closed stdin early: {}", e);
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
