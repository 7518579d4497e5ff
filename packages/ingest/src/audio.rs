// ABOUTME: Whole-clip audio transcription against a remote speech-to-text endpoint
// ABOUTME: One multipart POST per clip; no chunking, no streaming, no partial results

use std::env;
use std::path::Path;
use std::time::Duration;

use reqwest::multipart;
use serde::Deserialize;
use tracing::{debug, info};

use crate::error::{IngestError, IngestResult};

const DEFAULT_TRANSCRIBE_MODEL: &str = "whisper-1";

#[derive(Debug, Deserialize)]
struct TranscriptionResponse {
    text: String,
}

/// Client for the remote speech-to-text endpoint.
pub struct Transcriber {
    client: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
    model: String,
}

impl Transcriber {
    fn create_client() -> reqwest::Client {
        reqwest::Client::builder()
            .timeout(Duration::from_secs(120))
            .connect_timeout(Duration::from_secs(10))
            .build()
            .expect("Failed to build HTTP client")
    }

    /// Endpoint comes from FINCREW_TRANSCRIBE_URL, credential from
    /// OPENROUTER_API_KEY; both fall back to built-in defaults.
    pub fn from_env() -> Self {
        let endpoint = env::var(fincrew_config::FINCREW_TRANSCRIBE_URL)
            .unwrap_or_else(|_| fincrew_config::DEFAULT_TRANSCRIBE_URL.to_string());
        let api_key = env::var(fincrew_config::OPENROUTER_API_KEY)
            .ok()
            .filter(|key| !key.is_empty());

        Self {
            client: Self::create_client(),
            endpoint,
            api_key,
            model: DEFAULT_TRANSCRIBE_MODEL.to_string(),
        }
    }

    pub fn with_endpoint(endpoint: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            client: Self::create_client(),
            endpoint: endpoint.into(),
            api_key,
            model: DEFAULT_TRANSCRIBE_MODEL.to_string(),
        }
    }

    /// Transcribe one audio clip as a single utterance.
    ///
    /// A clip the service cannot parse (client-side rejection or an empty
    /// transcript) is an `UnrecognizedSpeech` failure; callers degrade the
    /// effective input to the empty string instead of failing the request.
    pub async fn transcribe(&self, path: &Path) -> IngestResult<String> {
        let bytes = tokio::fs::read(path).await?;
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "clip.wav".to_string());

        debug!("Transcribing {} ({} bytes)", filename, bytes.len());

        let part = multipart::Part::bytes(bytes)
            .file_name(filename)
            .mime_str("application/octet-stream")?;
        let form = multipart::Form::new()
            .text("model", self.model.clone())
            .part("file", part);

        let mut request = self.client.post(&self.endpoint).multipart(form);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await?;
        let status = response.status();

        if status.is_client_error() {
            let body = response.text().await.unwrap_or_default();
            return Err(IngestError::UnrecognizedSpeech(format!("{status}: {body}")));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(IngestError::TranscriptionFailed(format!("{status}: {body}")));
        }

        let payload: TranscriptionResponse = response
            .json()
            .await
            .map_err(|e| IngestError::UnrecognizedSpeech(e.to_string()))?;

        let text = payload.text.trim().to_string();
        if text.is_empty() {
            return Err(IngestError::UnrecognizedSpeech(
                "service returned an empty transcript".to_string(),
            ));
        }

        info!("Transcribed clip to {} chars", text.len());
        Ok(text)
    }
}
