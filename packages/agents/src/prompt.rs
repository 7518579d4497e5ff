// ABOUTME: Prompt building against the agent registry
// ABOUTME: Interpolates normalized input into fixed per-agent task templates

use crate::registry::{AgentProfile, AgentRegistry};

/// Marker separating the job description from the candidate section in
/// hiring-agent input. Case-sensitive; first occurrence wins.
pub const CANDIDATE_MARKER: &str = "---CANDIDATE---";

/// A fully built two-message prompt ready for the completion endpoint.
#[derive(Debug, Clone)]
pub struct BuiltPrompt<'a> {
    pub profile: &'a AgentProfile,
    pub system_instruction: &'a str,
    pub user_prompt: String,
}

pub struct PromptBuilder<'a> {
    registry: &'a AgentRegistry,
}

impl<'a> PromptBuilder<'a> {
    pub fn new(registry: &'a AgentRegistry) -> Self {
        Self { registry }
    }

    /// Build the final prompt for an agent id. Unknown ids fall back to the
    /// default profile and pass the input through unchanged.
    pub fn build(&self, agent_id: &str, normalized_text: &str) -> BuiltPrompt<'a> {
        let profile = self.registry.resolve(agent_id);
        let user_prompt = if self.registry.exists(agent_id) {
            render_template(&profile.id, normalized_text)
        } else {
            normalized_text.to_string()
        };

        BuiltPrompt {
            profile,
            system_instruction: &profile.system_instruction,
            user_prompt,
        }
    }
}

fn render_template(agent_id: &str, text: &str) -> String {
    match agent_id {
        "fintech" => format!(
            "Analyze market trends and financial data related to: {text}. Provide 5 key insights."
        ),
        "support" => format!(
            "Summarize this customer support chat:\n{text}\nInclude issue, sentiment, action taken, and summary."
        ),
        "payment" => format!(
            "Analyze the following payment records and detect failed, duplicate or refund-needed transactions:\n{text}"
        ),
        "credit" => format!(
            "Analyze the following credit applicant profile and provide:\n\
             - Risk level (Low / Moderate / High)\n\
             - Lending decision (Approve / Partial / Decline)\n\
             - Recommended loan amount\n\
             - Rationale considering financial inclusion\n\n{text}"
        ),
        "faq" => format!(
            "Answer the following customer question using known FAQ-style responses:\n{text}"
        ),
        "sales" => format!(
            "Respond to this sales lead persuasively but politely and propose the next step:\n{text}"
        ),
        "hiring" => {
            let (job, candidate) = split_hiring_input(text);
            format!(
                "Score the candidate against the job description as Strong Fit, Moderate Fit, or Poor Fit, \
                 with 2-3 justifying bullet points.\n\nJob Description:\n{job}\n\nCandidate:\n{candidate}"
            )
        }
        "regulatory" => format!(
            "Review the following material and identify legal or policy risks in the financial domain:\n{text}"
        ),
        "portfolio" => format!(
            "Suggest an optimal investment strategy and allocation for the following profile:\n{text}"
        ),
        "onboarding" => format!(
            "Help this new customer get started, explaining relevant features and resolving their questions:\n{text}"
        ),
        "monitor" => format!(
            "Review the following transaction activity and flag unusual, failed or duplicate entries:\n{text}"
        ),
        "reporter" => format!(
            "Generate an executive summary from the following financial or customer data:\n{text}"
        ),
        "leadgen" => format!(
            "Qualify the following potential client and propose a suitable offer:\n{text}"
        ),
        "fraud" => format!(
            "Inspect the following input for fraud signals or abuse patterns:\n{text}"
        ),
        "closer" => format!(
            "Guide this customer through account closure empathetically and resolve their final concerns:\n{text}"
        ),
        _ => text.to_string(),
    }
}

/// Split hiring input on the candidate marker. A missing marker leaves the
/// candidate section empty rather than erroring.
fn split_hiring_input(text: &str) -> (&str, &str) {
    match text.split_once(CANDIDATE_MARKER) {
        Some((job, candidate)) => (job.trim(), candidate.trim()),
        None => (text.trim(), ""),
    }
}
