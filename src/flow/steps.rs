use super::join_context;
use super::structures::STRUCTURES;

/// One named point in the joke-construction pipeline. The builder sees only
/// the immutable seed, the current voice, and the previous stage's choice,
/// which keeps the pipeline a strict linear chain.
pub struct Step {
    pub name: &'static str,
    pub description: &'static str,
    pub prompt_builder: fn(&str, &str, &str) -> String,
    pub option_count: usize,
    pub temperature: f32,
}

pub static STEPS: [Step; 7] = [
    Step {
        name: "Point",
        description: "State the absurdity in plain language.",
        prompt_builder: point_prompt,
        option_count: 3,
        temperature: 0.8,
    },
    Step {
        name: "Premise",
        description: "Choose a humorous premise.",
        prompt_builder: premise_prompt,
        option_count: 3,
        temperature: 0.8,
    },
    Step {
        name: "Structure",
        description: "Pick a structure from suggestions.",
        prompt_builder: structure_prompt,
        option_count: 3,
        temperature: 0.4,
    },
    Step {
        name: "Draft",
        description: "Create a first draft with the chosen structure.",
        prompt_builder: draft_prompt,
        option_count: 3,
        temperature: 0.8,
    },
    Step {
        name: "Twist",
        description: "Find an oppositional twist.",
        prompt_builder: twist_prompt,
        option_count: 3,
        temperature: 0.8,
    },
    Step {
        name: "Tone",
        description: "Tune the emotional attitude.",
        prompt_builder: tone_prompt,
        option_count: 3,
        temperature: 0.8,
    },
    Step {
        name: "Polish",
        description: "Polish for brevity and specificity.",
        prompt_builder: polish_prompt,
        option_count: 3,
        temperature: 0.6,
    },
];

fn point_prompt(seed: &str, voice: &str, _prior: &str) -> String {
    join_context(&[
        &format!("Absurdity seed: {seed}"),
        &format!("Voice: {voice}"),
        "Task: State the point plainly in one sentence.",
        "Return a JSON array of 3 short options.",
    ])
}

fn premise_prompt(seed: &str, voice: &str, prior: &str) -> String {
    join_context(&[
        &format!("Absurdity seed: {seed}"),
        &format!("Plain point: {prior}"),
        &format!("Voice: {voice}"),
        "Task: Propose a humorous premise that leads the audience to the point.",
        "Return a JSON array of 3 options.",
    ])
}

fn structure_prompt(seed: &str, voice: &str, prior: &str) -> String {
    let structures = STRUCTURES
        .iter()
        .map(|s| format!("- {}: {}", s.name, s.summary))
        .collect::<Vec<_>>()
        .join("\n");
    join_context(&[
        &format!("Absurdity seed: {seed}"),
        &format!("Premise: {prior}"),
        &format!("Voice: {voice}"),
        "Available structures:",
        &structures,
        "Task: Suggest 3 structure choices from the list that best fit.",
        "Return a JSON array of the structure names only.",
    ])
}

fn draft_prompt(seed: &str, voice: &str, prior: &str) -> String {
    join_context(&[
        &format!("Absurdity seed: {seed}"),
        &format!("Structure: {prior}"),
        &format!("Voice: {voice}"),
        "Task: Write a first-draft joke using the structure.",
        "Return a JSON array of 3 draft jokes.",
    ])
}

fn twist_prompt(_seed: &str, voice: &str, prior: &str) -> String {
    join_context(&[
        &format!("Draft joke: {prior}"),
        &format!("Voice: {voice}"),
        "Task: Think oppositely and propose a twist that adds another layer.",
        "Return a JSON array of 3 revised jokes with twists.",
    ])
}

fn tone_prompt(_seed: &str, voice: &str, prior: &str) -> String {
    join_context(&[
        &format!("Joke draft: {prior}"),
        &format!("Voice: {voice}"),
        "Task: Adjust the emotional attitude to cue the audience properly.",
        "Return a JSON array of 3 tone variants.",
    ])
}

fn polish_prompt(_seed: &str, voice: &str, prior: &str) -> String {
    join_context(&[
        &format!("Joke draft: {prior}"),
        &format!("Voice: {voice}"),
        "Task: Polish for brevity, clarity, and specificity.",
        "Return a JSON array of 3 polished options.",
    ])
}
