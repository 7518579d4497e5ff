// ABOUTME: The normalize -> build -> complete pipeline shared by form submissions
// ABOUTME: Every failure is recovered here into a user-visible message string

use tracing::{error, warn};

use fincrew_agents::PromptBuilder;
use fincrew_ai::CompletionRequest;
use fincrew_ingest::{IngestError, SubmittedInput};

use crate::AppState;

/// The rendered outcome of one submission.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Reply(String),
    Error(String),
}

impl Outcome {
    pub fn message(&self) -> &str {
        match self {
            Outcome::Reply(text) | Outcome::Error(text) => text,
        }
    }
}

/// Run one submission through the full pipeline. Nothing here is fatal to
/// the server; all errors come back as `Outcome::Error` messages.
pub async fn run(state: &AppState, agent_id: &str, input: SubmittedInput) -> Outcome {
    let artifact = input.into_artifact();

    let normalized = match state.normalizer.normalize(artifact).await {
        Ok(text) => text,
        // Unintelligible audio degrades to empty input instead of failing
        // the request.
        Err(IngestError::UnrecognizedSpeech(detail)) => {
            warn!("Speech not recognized ({}), continuing with empty input", detail);
            String::new()
        }
        Err(e) => {
            error!("Input normalization failed: {}", e);
            return Outcome::Error(format!("Could not read the uploaded input: {e}"));
        }
    };

    let built = PromptBuilder::new(&state.registry).build(agent_id, &normalized);

    let request = CompletionRequest {
        model: &built.profile.model,
        system_instruction: built.system_instruction,
        user_prompt: &built.user_prompt,
        temperature: built.profile.temperature,
        max_tokens: built.profile.max_tokens,
    };

    match state.client.complete(request).await {
        Ok(reply) => Outcome::Reply(reply),
        Err(e) => {
            error!("Completion failed: {}", e);
            Outcome::Error(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fincrew_agents::AgentRegistry;
    use fincrew_ai::CompletionClient;
    use fincrew_ingest::{InputNormalizer, Transcriber};
    use wiremock::matchers::{body_partial_json, method};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn state_for(server_uri: &str, api_key: Option<String>, dir: &tempfile::TempDir) -> AppState {
        AppState::new(
            AgentRegistry::new().unwrap(),
            InputNormalizer::new(Transcriber::with_endpoint("http://127.0.0.1:9", None), dir.path()),
            CompletionClient::with_endpoint(server_uri.to_string(), api_key),
        )
    }

    #[tokio::test]
    async fn test_credit_flow_end_to_end() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_partial_json(serde_json::json!({"model": "openai/gpt-4"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "choices": [{"message": {"content": "Risk: Moderate. Approve partial, limit 500."}}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let dir = tempfile::tempdir().unwrap();
        let state = state_for(&server.uri(), Some("test-key".to_string()), &dir);

        let outcome = run(
            &state,
            "credit",
            SubmittedInput::text("Income 2000, no collateral"),
        )
        .await;

        assert_eq!(
            outcome,
            Outcome::Reply("Risk: Moderate. Approve partial, limit 500.".to_string())
        );
    }

    #[tokio::test]
    async fn test_missing_credential_is_a_user_visible_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let dir = tempfile::tempdir().unwrap();
        let state = state_for(&server.uri(), None, &dir);

        let outcome = run(&state, "credit", SubmittedInput::text("anything")).await;
        match outcome {
            Outcome::Error(message) => assert!(message.contains("No API key configured")),
            other => panic!("expected error outcome, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_remote_rejection_surfaces_status_and_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
            .mount(&server)
            .await;

        let dir = tempfile::tempdir().unwrap();
        let state = state_for(&server.uri(), Some("test-key".to_string()), &dir);

        let outcome = run(&state, "support", SubmittedInput::text("ticket text")).await;
        match outcome {
            Outcome::Error(message) => {
                assert!(message.contains("500"));
                assert!(message.contains("upstream exploded"));
            }
            other => panic!("expected error outcome, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_unknown_agent_still_completes() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_partial_json(serde_json::json!({
                "messages": [
                    {"role": "system", "content": "You are a helpful assistant. Respond helpfully and accurately."},
                    {"role": "user", "content": "free-form question"}
                ]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "choices": [{"message": {"content": "an answer"}}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let dir = tempfile::tempdir().unwrap();
        let state = state_for(&server.uri(), Some("test-key".to_string()), &dir);

        let outcome = run(&state, "mystery", SubmittedInput::text("free-form question")).await;
        assert_eq!(outcome, Outcome::Reply("an answer".to_string()));
    }
}
