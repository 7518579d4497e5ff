// ABOUTME: HTTP request handlers for the form dispatcher
// ABOUTME: GET renders the empty form, POST resolves input priority and runs the pipeline

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};
use axum::Json;
use tracing::{info, warn};

use fincrew_ingest::{NamedUpload, SubmittedInput};

use crate::form::render_page;
use crate::{pipeline, AppState};

/// Render the empty form
pub async fn render_form(State(state): State<AppState>) -> Html<String> {
    Html(render_page(&state.registry, None))
}

/// Liveness probe
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(serde_json::json!({"status": "ok"})))
}

/// Accept one submission and re-render the page with the result region
/// populated. A malformed body gets a message, not a 500.
pub async fn submit(State(state): State<AppState>, multipart: Multipart) -> Html<String> {
    let (agent_id, input) = match read_submission(multipart).await {
        Ok(parts) => parts,
        Err(message) => {
            warn!("Rejected form submission: {}", message);
            return Html(render_page(&state.registry, Some(&message)));
        }
    };

    info!("Form submission for agent '{}'", agent_id);
    let outcome = pipeline::run(&state, &agent_id, input).await;
    Html(render_page(&state.registry, Some(outcome.message())))
}

/// Collect the form fields. Upload fields are optional; empty file inputs
/// arrive as parts with no filename and are treated as absent.
async fn read_submission(mut multipart: Multipart) -> Result<(String, SubmittedInput), String> {
    let mut agent_id = String::new();
    let mut input = SubmittedInput::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| format!("Could not read form data: {e}"))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "agent" => {
                agent_id = field
                    .text()
                    .await
                    .map_err(|e| format!("Could not read agent field: {e}"))?;
            }
            "user_input" => {
                input.typed_text = field
                    .text()
                    .await
                    .map_err(|e| format!("Could not read text field: {e}"))?;
            }
            "audio_file" | "image_file" | "text_file" => {
                let filename = field.file_name().unwrap_or_default().to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| format!("Could not read upload '{name}': {e}"))?
                    .to_vec();
                let upload = NamedUpload { filename, bytes };
                match name.as_str() {
                    "audio_file" => input.audio = Some(upload),
                    "image_file" => input.image = Some(upload),
                    _ => input.document = Some(upload),
                }
            }
            other => warn!("Ignoring unknown form field '{}'", other),
        }
    }

    Ok((agent_id, input))
}
