// ABOUTME: Uploaded artifact types and effective-input priority resolution
// ABOUTME: Fixed priority order: audio > image > generic document > typed text

/// One uploaded file, as received from a form field.
#[derive(Debug, Clone)]
pub struct NamedUpload {
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl NamedUpload {
    /// Browsers submit empty file fields as zero-length parts with no name.
    pub fn is_present(&self) -> bool {
        !self.filename.is_empty() && !self.bytes.is_empty()
    }
}

/// The single input source a request resolves to, consumed exactly once by
/// the normalizer.
#[derive(Debug, Clone)]
pub enum UploadedArtifact {
    Audio(NamedUpload),
    Image(NamedUpload),
    Document(NamedUpload),
    PlainText(String),
}

impl UploadedArtifact {
    pub fn kind(&self) -> &'static str {
        match self {
            UploadedArtifact::Audio(_) => "audio",
            UploadedArtifact::Image(_) => "image",
            UploadedArtifact::Document(_) => "document",
            UploadedArtifact::PlainText(_) => "plain_text",
        }
    }
}

/// Everything a submission may carry before priority resolution.
#[derive(Debug, Clone, Default)]
pub struct SubmittedInput {
    pub typed_text: String,
    pub audio: Option<NamedUpload>,
    pub image: Option<NamedUpload>,
    pub document: Option<NamedUpload>,
}

impl SubmittedInput {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            typed_text: text.into(),
            ..Self::default()
        }
    }

    /// Resolve the effective input for this submission. Attached artifacts
    /// take precedence over typed text, in fixed order.
    pub fn into_artifact(self) -> UploadedArtifact {
        if let Some(audio) = self.audio.filter(NamedUpload::is_present) {
            return UploadedArtifact::Audio(audio);
        }
        if let Some(image) = self.image.filter(NamedUpload::is_present) {
            return UploadedArtifact::Image(image);
        }
        if let Some(document) = self.document.filter(NamedUpload::is_present) {
            return UploadedArtifact::Document(document);
        }
        UploadedArtifact::PlainText(self.typed_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upload(name: &str) -> NamedUpload {
        NamedUpload {
            filename: name.to_string(),
            bytes: vec![1, 2, 3],
        }
    }

    #[test]
    fn test_typed_text_when_nothing_attached() {
        let artifact = SubmittedInput::text("hello").into_artifact();
        match artifact {
            UploadedArtifact::PlainText(text) => assert_eq!(text, "hello"),
            other => panic!("expected plain text, got {}", other.kind()),
        }
    }

    #[test]
    fn test_image_beats_typed_text() {
        let input = SubmittedInput {
            typed_text: "hello".to_string(),
            image: Some(upload("receipt.png")),
            ..Default::default()
        };
        assert_eq!(input.into_artifact().kind(), "image");
    }

    #[test]
    fn test_audio_beats_image_and_document() {
        let input = SubmittedInput {
            typed_text: "hello".to_string(),
            audio: Some(upload("memo.wav")),
            image: Some(upload("receipt.png")),
            document: Some(upload("report.pdf")),
        };
        assert_eq!(input.into_artifact().kind(), "audio");
    }

    #[test]
    fn test_image_beats_document() {
        let input = SubmittedInput {
            typed_text: String::new(),
            image: Some(upload("receipt.png")),
            document: Some(upload("report.pdf")),
            ..Default::default()
        };
        assert_eq!(input.into_artifact().kind(), "image");
    }

    #[test]
    fn test_empty_upload_fields_are_ignored() {
        let input = SubmittedInput {
            typed_text: "fallback".to_string(),
            audio: Some(NamedUpload {
                filename: String::new(),
                bytes: Vec::new(),
            }),
            ..Default::default()
        };
        assert_eq!(input.into_artifact().kind(), "plain_text");
    }
}
