// ABOUTME: Agent profile registry loaded from embedded JSON configuration
// ABOUTME: Immutable after construction; unknown agent ids resolve to a default profile

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AgentError {
    #[error("Failed to load agents config: {0}")]
    LoadError(String),
    #[error("Invalid agent configuration: {0}")]
    InvalidConfig(String),
}

type Result<T> = std::result::Result<T, AgentError>;

/// A named task persona: fixed role instruction plus sampling parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentProfile {
    pub id: String,
    pub name: String,
    pub model: String,
    pub system_instruction: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

#[derive(Debug, Serialize, Deserialize)]
struct AgentsConfig {
    version: String,
    agents: Vec<AgentProfile>,
}

pub struct AgentRegistry {
    profiles: HashMap<String, AgentProfile>,
    default_profile: AgentProfile,
}

impl AgentRegistry {
    /// Create a new AgentRegistry by loading profiles from the embedded config
    pub fn new() -> Result<Self> {
        let config_json = include_str!("../config/agents.json");
        let config: AgentsConfig = serde_json::from_str(config_json)
            .map_err(|e| AgentError::LoadError(e.to_string()))?;

        let mut profiles = HashMap::new();
        for profile in config.agents {
            if !(0.0..=1.0).contains(&profile.temperature) {
                return Err(AgentError::InvalidConfig(format!(
                    "Agent '{}' has temperature {} outside [0, 1]",
                    profile.id, profile.temperature
                )));
            }
            if profile.max_tokens == 0 {
                return Err(AgentError::InvalidConfig(format!(
                    "Agent '{}' has zero max_tokens",
                    profile.id
                )));
            }
            profiles.insert(profile.id.clone(), profile);
        }

        Ok(Self {
            profiles,
            default_profile: AgentProfile {
                id: "default".to_string(),
                name: "General Assistant".to_string(),
                model: "openai/gpt-4".to_string(),
                system_instruction: "You are a helpful assistant. Respond helpfully and accurately."
                    .to_string(),
                temperature: 0.5,
                max_tokens: 300,
            },
        })
    }

    /// Get a profile by ID
    pub fn get(&self, id: &str) -> Option<&AgentProfile> {
        self.profiles.get(id)
    }

    /// Resolve an agent id to its profile, falling back to the default profile
    pub fn resolve(&self, id: &str) -> &AgentProfile {
        self.profiles.get(id).unwrap_or(&self.default_profile)
    }

    /// The fallback profile used for unknown agent ids
    pub fn default_profile(&self) -> &AgentProfile {
        &self.default_profile
    }

    /// List all registered profiles
    pub fn list(&self) -> Vec<&AgentProfile> {
        self.profiles.values().collect()
    }

    /// Check if an agent exists
    pub fn exists(&self, id: &str) -> bool {
        self.profiles.contains_key(id)
    }
}

impl Default for AgentRegistry {
    fn default() -> Self {
        Self::new().expect("Failed to load agent registry")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_agents() {
        let registry = AgentRegistry::new().unwrap();
        assert!(!registry.profiles.is_empty());
    }

    #[test]
    fn test_get_agent() {
        let registry = AgentRegistry::new().unwrap();
        let credit = registry.get("credit");
        assert!(credit.is_some());
        assert_eq!(credit.unwrap().name, "Credit Advisor");
    }

    #[test]
    fn test_list_agents() {
        let registry = AgentRegistry::new().unwrap();
        let agents = registry.list();
        assert_eq!(agents.len(), 15);
    }

    #[test]
    fn test_resolve_known() {
        let registry = AgentRegistry::new().unwrap();
        let profile = registry.resolve("payment");
        assert_eq!(profile.id, "payment");
        assert_eq!(profile.temperature, 0.4);
        assert_eq!(profile.max_tokens, 500);
    }

    #[test]
    fn test_resolve_unknown_falls_back_to_default() {
        let registry = AgentRegistry::new().unwrap();
        let profile = registry.resolve("no-such-agent");
        assert_eq!(profile.id, "default");
        assert!(profile.system_instruction.contains("helpful"));
    }

    #[test]
    fn test_all_profiles_use_sane_sampling_params() {
        let registry = AgentRegistry::new().unwrap();
        for profile in registry.list() {
            assert!((0.0..=1.0).contains(&profile.temperature), "{}", profile.id);
            assert!(profile.max_tokens > 0, "{}", profile.id);
        }
    }
}
