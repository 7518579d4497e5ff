// ABOUTME: AI service integration for Fincrew
// ABOUTME: Chat completion client and failure classification

pub mod service;

pub use service::{CompletionClient, CompletionError, CompletionRequest, CompletionResult};
