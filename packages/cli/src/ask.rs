// ABOUTME: Interactive one-shot dispatcher: stdin until a blank line, one completion, exit
// ABOUTME: Errors become printed messages; the process exits cleanly either way

use std::io::{self, BufRead, Write};

use colored::Colorize;

use fincrew_agents::{AgentRegistry, PromptBuilder};
use fincrew_ai::{CompletionClient, CompletionRequest};

pub async fn run(agent_id: &str) -> anyhow::Result<()> {
    let registry = AgentRegistry::new()?;
    let client = CompletionClient::from_env();

    let profile = registry.resolve(agent_id);
    println!(
        "{} {}",
        "Agent:".bold(),
        format!("{} ({})", profile.name, profile.id)
    );
    println!("Paste your input. Press Enter twice to submit:\n");
    io::stdout().flush()?;

    let text = read_until_blank_line()?;
    if text.trim().is_empty() {
        println!("{}", "No input provided.".yellow());
        return Ok(());
    }

    let built = PromptBuilder::new(&registry).build(agent_id, &text);
    println!("\n{}", "Analyzing...".dimmed());

    let request = CompletionRequest {
        model: &built.profile.model,
        system_instruction: built.system_instruction,
        user_prompt: &built.user_prompt,
        temperature: built.profile.temperature,
        max_tokens: built.profile.max_tokens,
    };

    match client.complete(request).await {
        Ok(reply) => {
            println!("\n=== {} ===\n", built.profile.name);
            println!("{reply}");
        }
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
        }
    }

    Ok(())
}

/// Read stdin line by line; the first blank line terminates entry, so no
/// trailing blank lines reach the pipeline.
fn read_until_blank_line() -> io::Result<String> {
    let stdin = io::stdin();
    let mut lines = Vec::new();
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            break;
        }
        lines.push(line);
    }
    Ok(lines.join("\n"))
}

pub fn list_agents() -> anyhow::Result<()> {
    let registry = AgentRegistry::new()?;
    let mut profiles = registry.list();
    profiles.sort_by(|a, b| a.id.cmp(&b.id));

    println!("{}", "Available agents:".bold());
    for profile in profiles {
        println!(
            "  {:<12} {} (model {}, temp {}, max {} tokens)",
            profile.id.bold(),
            profile.name,
            profile.model,
            profile.temperature,
            profile.max_tokens
        );
    }
    Ok(())
}
