// ABOUTME: Environment variable name constants
// ABOUTME: Centralized definitions of all environment variable names used across Fincrew

// Credentials
pub const OPENROUTER_API_KEY: &str = "OPENROUTER_API_KEY";

// Endpoint Overrides
pub const FINCREW_COMPLETIONS_URL: &str = "FINCREW_COMPLETIONS_URL";
pub const FINCREW_TRANSCRIBE_URL: &str = "FINCREW_TRANSCRIBE_URL";

// Server Configuration
pub const PORT: &str = "PORT";
pub const FINCREW_CORS_ORIGIN: &str = "FINCREW_CORS_ORIGIN";

// Upload Scratch Storage
pub const FINCREW_UPLOAD_DIR: &str = "FINCREW_UPLOAD_DIR";

// Defaults
pub const DEFAULT_COMPLETIONS_URL: &str = "https://openrouter.ai/api/v1/chat/completions";
pub const DEFAULT_TRANSCRIBE_URL: &str = "https://api.openai.com/v1/audio/transcriptions";
pub const DEFAULT_PORT: u16 = 4001;
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:5173";
pub const DEFAULT_UPLOAD_DIR: &str = "uploads";
