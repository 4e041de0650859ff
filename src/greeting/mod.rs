use std::io::{BufRead, Write};

use anyhow::Result;

use crate::provider::{CompletionRequest, Provider};
use crate::ux;

pub static GENRES: [&str; 4] = [
    "noir detective",
    "romantic comedy",
    "science fiction",
    "western",
];

/// Present the fixed genre list once, then loop until the human picks one
/// by 1-based number or exact (case-insensitive) name. `None` means the
/// input stream closed before a pick.
pub fn choose_genre<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<Option<String>> {
    writeln!(out, "Choose a film genre for your greeting:")?;
    for (idx, genre) in GENRES.iter().enumerate() {
        writeln!(out, "{}. {}", idx + 1, genre)?;
    }

    loop {
        let Some(choice) = ux::read_line(input, out, "Enter a number or genre name: ")? else {
            return Ok(None);
        };
        if !choice.is_empty() && choice.chars().all(|c| c.is_ascii_digit()) {
            if let Ok(n) = choice.parse::<usize>() {
                if (1..=GENRES.len()).contains(&n) {
                    return Ok(Some(GENRES[n - 1].to_string()));
                }
            }
        }
        let lowered = choice.to_lowercase();
        if let Some(genre) = GENRES.iter().find(|g| g.to_lowercase() == lowered) {
            return Ok(Some(genre.to_string()));
        }
        writeln!(out, "Please enter a valid option number or genre name.")?;
    }
}

/// One completion for the chosen genre. No system prompt and no sampling
/// override beyond the chat default.
pub async fn create_greeting(
    provider: &dyn Provider,
    model: &str,
    genre: &str,
    debug: bool,
) -> Result<String> {
    let req = CompletionRequest {
        model: model.to_string(),
        system: String::new(),
        user: format!("Give me a one-sentence {genre} greeting."),
        temperature: 1.0,
    };
    provider.complete(&req, debug).await
}
