use anyhow::Result;

use crate::options::parse_options;
use crate::provider::{CompletionRequest, Provider};

pub mod steps;
pub mod structures;

use self::steps::Step;

/// Shared system prompt: the whole methodology rides along on every stage
/// request so the model knows where the current step sits.
pub const BASE_SYSTEM: &str = r#"You are a joke-writing assistant. You follow a step-by-step process:
1) Clarify the absurdity.
2) State the point plainly.
3) Choose a humorous premise.
4) Apply a structure.
5) Find a twist by thinking oppositely.
6) Set the tone.
7) Polish wording for brevity and specificity.
Return only the requested output for the current step.
"#;

/// Join non-blank lines into a single prompt body.
pub fn join_context(lines: &[&str]) -> String {
    lines
        .iter()
        .filter(|line| !line.trim().is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join("\n")
}

/// Build the stage prompt and request one round of candidates at the
/// stage's temperature. Returns the exact prompt sent together with the
/// parsed options, which may be empty — regeneration is the caller's call.
pub async fn step_options(
    provider: &dyn Provider,
    model: &str,
    voice: &str,
    seed: &str,
    prior: &str,
    step: &Step,
    debug: bool,
) -> Result<(String, Vec<String>)> {
    let prompt = (step.prompt_builder)(seed, voice, prior);
    let req = CompletionRequest {
        model: model.to_string(),
        system: BASE_SYSTEM.to_string(),
        user: prompt.clone(),
        temperature: step.temperature,
    };
    let raw = provider.complete(&req, debug).await?;
    Ok((prompt, parse_options(&raw, step.option_count)))
}
