// ABOUTME: Agent profile registry and prompt building
// ABOUTME: JSON-backed configuration for task personas with in-memory lookup

pub mod prompt;
pub mod registry;

pub use prompt::{BuiltPrompt, PromptBuilder, CANDIDATE_MARKER};
pub use registry::{AgentError, AgentProfile, AgentRegistry};
