// ABOUTME: Error taxonomy for input normalization
// ABOUTME: Distinguishes unrecognized speech (recoverable) from hard decode failures

use thiserror::Error;

#[derive(Error, Debug)]
pub enum IngestError {
    #[error("Could not decode uploaded file as UTF-8: {0}")]
    Decode(#[from] std::string::FromUtf8Error),

    #[error("Failed to extract PDF text: {0}")]
    Pdf(String),

    #[error("OCR engine failed: {0}")]
    OcrFailed(String),

    #[error("Speech could not be transcribed: {0}")]
    UnrecognizedSpeech(String),

    #[error("Transcription service error: {0}")]
    TranscriptionFailed(String),

    #[error("Transcription request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type IngestResult<T> = std::result::Result<T, IngestError>;
