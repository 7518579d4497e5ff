// ABOUTME: Multi-modal input normalization for Fincrew
// ABOUTME: Converts typed text, PDFs, images and audio clips to plain text

pub mod artifact;
pub mod audio;
pub mod error;
pub mod normalize;
pub mod ocr;
pub mod pdf;

pub use artifact::{NamedUpload, SubmittedInput, UploadedArtifact};
pub use audio::Transcriber;
pub use error::{IngestError, IngestResult};
pub use normalize::{sanitize_filename, InputNormalizer};
