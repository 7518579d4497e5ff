// ABOUTME: Best-effort image OCR via the tesseract engine
// ABOUTME: No confidence threshold and no retry; engine failures surface as OcrFailed

use std::process::Stdio;

use tokio::process::Command;
use tracing::debug;

use crate::error::{IngestError, IngestResult};

/// Run optical character recognition over an uploaded image and return the
/// recognized text. The image bytes are staged in a scratch directory that
/// is removed when extraction finishes.
pub async fn image_to_text(bytes: &[u8]) -> IngestResult<String> {
    let scratch = tempfile::tempdir()?;
    let input_path = scratch.path().join("upload.img");
    tokio::fs::write(&input_path, bytes).await?;

    debug!("Running tesseract over {} byte image", bytes.len());
    let output = Command::new("tesseract")
        .arg(&input_path)
        .arg("stdout")
        .stdin(Stdio::null())
        .output()
        .await
        .map_err(|e| IngestError::OcrFailed(format!("failed to launch tesseract: {e}")))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(IngestError::OcrFailed(stderr.trim().to_string()));
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
