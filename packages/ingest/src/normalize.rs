// ABOUTME: Converts any accepted input modality into a single plain-text string
// ABOUTME: Audio is staged under the upload scratch dir before transcription

use std::env;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::artifact::{NamedUpload, UploadedArtifact};
use crate::audio::Transcriber;
use crate::error::{IngestError, IngestResult};
use crate::{ocr, pdf};

/// Normalizes every accepted input modality to plain text. Stateless across
/// requests; the upload dir is shared scratch storage.
pub struct InputNormalizer {
    transcriber: Transcriber,
    upload_dir: PathBuf,
}

impl InputNormalizer {
    pub fn new(transcriber: Transcriber, upload_dir: impl Into<PathBuf>) -> Self {
        Self {
            transcriber,
            upload_dir: upload_dir.into(),
        }
    }

    /// Build from process environment and make sure the scratch dir exists.
    pub fn from_env() -> IngestResult<Self> {
        let upload_dir = env::var(fincrew_config::FINCREW_UPLOAD_DIR)
            .unwrap_or_else(|_| fincrew_config::DEFAULT_UPLOAD_DIR.to_string());
        std::fs::create_dir_all(&upload_dir)?;
        Ok(Self::new(Transcriber::from_env(), upload_dir))
    }

    /// Convert one artifact into plain text, consuming it.
    pub async fn normalize(&self, artifact: UploadedArtifact) -> IngestResult<String> {
        match artifact {
            UploadedArtifact::PlainText(text) => Ok(text),
            UploadedArtifact::Document(upload) => self.normalize_document(upload),
            UploadedArtifact::Image(upload) => ocr::image_to_text(&upload.bytes).await,
            UploadedArtifact::Audio(upload) => self.normalize_audio(upload).await,
        }
    }

    /// PDFs get page-by-page extraction; anything else is read as UTF-8 text.
    fn normalize_document(&self, upload: NamedUpload) -> IngestResult<String> {
        if upload.filename.to_lowercase().ends_with(".pdf") {
            pdf::extract_text(&upload.bytes)
        } else {
            Ok(String::from_utf8(upload.bytes)?)
        }
    }

    /// Audio is written to the scratch dir first, matching how uploads are
    /// handed to the speech engine. The scratch copy is deleted after a
    /// successful transcription and kept on failure for inspection.
    async fn normalize_audio(&self, upload: NamedUpload) -> IngestResult<String> {
        let filename = sanitize_filename(&upload.filename);
        let scratch_path = self.upload_dir.join(&filename);

        tokio::fs::write(&scratch_path, &upload.bytes).await?;
        debug!("Staged audio upload at {}", scratch_path.display());

        let result = self.transcriber.transcribe(&scratch_path).await;
        match &result {
            Ok(_) => remove_scratch(&scratch_path).await,
            Err(e) => warn!(
                "Transcription failed ({}), keeping scratch file {}",
                e,
                scratch_path.display()
            ),
        }
        result
    }
}

async fn remove_scratch(path: &Path) {
    if let Err(e) = tokio::fs::remove_file(path).await {
        warn!("Failed to remove scratch file {}: {}", path.display(), e);
    }
}

/// Strip path components and anything outside [A-Za-z0-9._-] so uploads
/// cannot escape the scratch dir.
pub fn sanitize_filename(filename: &str) -> String {
    let base = filename
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(filename);
    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect();
    let trimmed = cleaned.trim_matches('.').to_string();
    if trimmed.is_empty() {
        "upload.bin".to_string()
    } else {
        trimmed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifact::SubmittedInput;
    use pretty_assertions::assert_eq;

    fn normalizer(dir: &tempfile::TempDir) -> InputNormalizer {
        InputNormalizer::new(
            Transcriber::with_endpoint("http://127.0.0.1:9", None),
            dir.path(),
        )
    }

    #[tokio::test]
    async fn test_plain_text_passes_through_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let artifact = SubmittedInput::text("as typed").into_artifact();
        let text = normalizer(&dir).normalize(artifact).await.unwrap();
        assert_eq!(text, "as typed");
    }

    #[tokio::test]
    async fn test_generic_file_decodes_as_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let artifact = UploadedArtifact::Document(NamedUpload {
            filename: "notes.txt".to_string(),
            bytes: "ledger says ok".as_bytes().to_vec(),
        });
        let text = normalizer(&dir).normalize(artifact).await.unwrap();
        assert_eq!(text, "ledger says ok");
    }

    #[tokio::test]
    async fn test_invalid_utf8_is_a_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let artifact = UploadedArtifact::Document(NamedUpload {
            filename: "notes.txt".to_string(),
            bytes: vec![0xff, 0xfe, 0x00, 0x41],
        });
        let err = normalizer(&dir).normalize(artifact).await.unwrap_err();
        assert!(matches!(err, IngestError::Decode(_)));
    }

    #[tokio::test]
    async fn test_pdf_extension_routes_to_pdf_extraction() {
        let dir = tempfile::tempdir().unwrap();
        let artifact = UploadedArtifact::Document(NamedUpload {
            filename: "Report.PDF".to_string(),
            bytes: b"definitely not a pdf".to_vec(),
        });
        let err = normalizer(&dir).normalize(artifact).await.unwrap_err();
        assert!(matches!(err, IngestError::Pdf(_)));
    }

    #[test]
    fn test_sanitize_filename_strips_paths() {
        assert_eq!(sanitize_filename("../../etc/passwd"), "passwd");
        assert_eq!(sanitize_filename("dir\\clip.wav"), "clip.wav");
        assert_eq!(sanitize_filename("voice memo.mp3"), "voice_memo.mp3");
        assert_eq!(sanitize_filename(""), "upload.bin");
    }
}
