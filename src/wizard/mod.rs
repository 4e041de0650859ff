use std::io::{BufRead, Write};

use anyhow::Result;
use colored::Colorize;

use crate::flow::{self, steps::STEPS};
use crate::provider::Provider;
use crate::session::{SessionRecord, StepRecord};
use crate::ux;

/// How a wizard run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Completed,
    QuitEarly,
}

/// One human command at the option prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// 0-based index into the offered options.
    Select(usize),
    Regenerate,
    Voice,
    Edit,
    Back,
    Quit,
    Invalid,
}

/// Interpret one line of input against `option_count` offered options.
/// Empty input defaults to the first option.
pub fn parse_command(raw: &str, option_count: usize) -> Command {
    let input = raw.trim().to_lowercase();
    if input.is_empty() {
        return Command::Select(0);
    }
    match input.as_str() {
        "r" => return Command::Regenerate,
        "v" => return Command::Voice,
        "e" => return Command::Edit,
        "b" => return Command::Back,
        "q" => return Command::Quit,
        _ => {}
    }
    if input.chars().all(|c| c.is_ascii_digit()) {
        if let Ok(n) = input.parse::<usize>() {
            if (1..=option_count).contains(&n) {
                return Command::Select(n - 1);
            }
        }
    }
    Command::Invalid
}

/// Explicit wizard position: the stage index plus the previous stage's
/// chosen string. `index == session.steps.len()` holds between commands.
#[derive(Debug, Clone, Default)]
pub struct StepCursor {
    pub index: usize,
    pub prior: String,
}

impl StepCursor {
    /// Record a selection and move to the next stage.
    pub fn advance(&mut self, session: &mut SessionRecord, record: StepRecord) {
        self.prior = record.choice.clone();
        session.steps.push(record);
        self.index += 1;
    }

    /// Drop the last record and step back one stage, restoring `prior` to
    /// the remaining last choice (or empty). Returns false at the first
    /// stage, where back is a no-op.
    pub fn retreat(&mut self, session: &mut SessionRecord) -> bool {
        if self.index == 0 || session.steps.is_empty() {
            return false;
        }
        session.steps.pop();
        self.index -= 1;
        self.prior = session
            .steps
            .last()
            .map(|s| s.choice.clone())
            .unwrap_or_default();
        true
    }
}

/// Knobs the binary passes through to the interactive loop.
pub struct WizardOptions {
    pub model: String,
    pub progress: bool,
    pub debug: bool,
}

/// Drive the ordered stages interactively. Commands come from `input`,
/// rendering goes to `out`. Gateway transport errors propagate; an empty
/// option list only counts a regeneration and retries the same stage, with
/// no upper bound — the human is expected to intervene.
pub async fn run<R: BufRead, W: Write>(
    provider: &dyn Provider,
    session: &mut SessionRecord,
    input: &mut R,
    out: &mut W,
    opts: &WizardOptions,
) -> Result<Outcome> {
    let mut cursor = StepCursor::default();

    while cursor.index < STEPS.len() {
        let step = &STEPS[cursor.index];
        let mut regen_count: u32 = 0;

        'stage: loop {
            writeln!(out, "\nStep: {}", step.name.bold())?;
            writeln!(out, "{}", step.description)?;

            let spinner = ux::gateway_spinner(opts.progress);
            let fetched = flow::step_options(
                provider,
                &opts.model,
                &session.voice,
                &session.absurdity,
                &cursor.prior,
                step,
                opts.debug,
            )
            .await;
            if let Some(pb) = spinner {
                pb.finish_and_clear();
            }
            let (prompt, options) = fetched?;

            if options.is_empty() {
                writeln!(out, "{}", "No options received; trying again.".yellow())?;
                regen_count += 1;
                continue;
            }
            ux::render_options(out, &options)?;

            let label = format!(
                "Choose [1-{}], r=regen, e=edit, v=voice, b=back, q=quit (default 1): ",
                options.len()
            );
            let line = match ux::read_line(input, out, &label)? {
                Some(line) => line,
                // stdin closed mid-session: same exit path as an explicit quit
                None => return Ok(Outcome::QuitEarly),
            };

            match parse_command(&line, options.len()) {
                Command::Invalid => {
                    writeln!(out, "{}", "Invalid choice.".yellow())?;
                }
                Command::Regenerate => {
                    regen_count += 1;
                }
                Command::Voice => {
                    let voice =
                        ux::prompt_text(input, out, "Adjust voice (leave empty to keep): ", true)?;
                    if !voice.is_empty() {
                        session.voice = voice;
                    }
                    regen_count += 1;
                }
                Command::Back => {
                    if cursor.retreat(session) {
                        break 'stage;
                    }
                    writeln!(out, "{}", "Already at the first step.".yellow())?;
                }
                Command::Quit => return Ok(Outcome::QuitEarly),
                Command::Edit => {
                    let edited = ux::prompt_text(input, out, "Enter your version: ", false)?;
                    cursor.advance(
                        session,
                        StepRecord {
                            name: step.name.to_string(),
                            prompt,
                            options: vec![edited.clone()],
                            choice: edited,
                            notes: String::new(),
                            regen_count,
                        },
                    );
                    break 'stage;
                }
                Command::Select(idx) => {
                    let choice = options[idx].clone();
                    cursor.advance(
                        session,
                        StepRecord {
                            name: step.name.to_string(),
                            prompt,
                            options,
                            choice,
                            notes: String::new(),
                            regen_count,
                        },
                    );
                    break 'stage;
                }
            }
        }
    }

    session.final_joke = Some(cursor.prior.clone());
    Ok(Outcome::Completed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::CompletionRequest;
    use async_trait::async_trait;
    use std::io::Cursor;

    struct CannedProvider(&'static str);

    #[async_trait]
    impl Provider for CannedProvider {
        async fn complete(&self, _req: &CompletionRequest, _debug: bool) -> Result<String> {
            Ok(self.0.to_string())
        }
    }

    fn opts() -> WizardOptions {
        WizardOptions {
            model: "gpt-5.2".into(),
            progress: false,
            debug: false,
        }
    }

    fn record(name: &str, choice: &str) -> StepRecord {
        StepRecord {
            name: name.into(),
            prompt: String::new(),
            options: vec![choice.to_string()],
            choice: choice.to_string(),
            notes: String::new(),
            regen_count: 0,
        }
    }

    #[test]
    fn empty_input_defaults_to_the_first_option() {
        assert_eq!(parse_command("", 3), Command::Select(0));
        assert_eq!(parse_command("   ", 3), Command::Select(0));
    }

    #[test]
    fn letter_commands_parse_case_insensitively() {
        assert_eq!(parse_command(" R ", 3), Command::Regenerate);
        assert_eq!(parse_command("V", 3), Command::Voice);
        assert_eq!(parse_command("e", 3), Command::Edit);
        assert_eq!(parse_command("B", 3), Command::Back);
        assert_eq!(parse_command("q", 3), Command::Quit);
    }

    #[test]
    fn numbers_select_only_in_range() {
        assert_eq!(parse_command("2", 3), Command::Select(1));
        assert_eq!(parse_command("0", 3), Command::Invalid);
        assert_eq!(parse_command("4", 3), Command::Invalid);
        assert_eq!(parse_command("+1", 3), Command::Invalid);
        assert_eq!(parse_command("x", 3), Command::Invalid);
    }

    #[test]
    fn back_at_the_first_stage_is_a_no_op() {
        let mut session = SessionRecord::new("m", "v", "seed");
        let mut cursor = StepCursor::default();
        assert!(!cursor.retreat(&mut session));
        assert_eq!(cursor.index, 0);
        assert!(session.steps.is_empty());
    }

    #[test]
    fn back_restores_the_previous_choice() {
        let mut session = SessionRecord::new("m", "v", "seed");
        let mut cursor = StepCursor::default();
        cursor.advance(&mut session, record("Point", "first"));
        cursor.advance(&mut session, record("Premise", "second"));
        assert_eq!(cursor.prior, "second");

        assert!(cursor.retreat(&mut session));
        assert_eq!(cursor.index, 1);
        assert_eq!(cursor.prior, "first");

        assert!(cursor.retreat(&mut session));
        assert_eq!(cursor.index, 0);
        assert_eq!(cursor.prior, "");
        assert!(session.steps.is_empty());
    }

    #[tokio::test]
    async fn quitting_early_leaves_no_final_joke() {
        let provider = CannedProvider(r#"["alpha", "beta", "gamma"]"#);
        let mut session = SessionRecord::new("gpt-5.2", "dry", "a cat who files taxes");
        let mut input = Cursor::new("1\nq\n");
        let mut out = Vec::new();

        let outcome = run(&provider, &mut session, &mut input, &mut out, &opts())
            .await
            .unwrap();
        assert_eq!(outcome, Outcome::QuitEarly);
        assert_eq!(session.steps.len(), 1);
        assert!(session.steps.len() < STEPS.len());
        assert!(session.final_joke.is_none());
    }

    #[tokio::test]
    async fn seven_selections_complete_the_session() {
        let provider = CannedProvider(r#"["alpha", "beta", "gamma"]"#);
        let mut session = SessionRecord::new("gpt-5.2", "dry", "a cat who files taxes");
        let mut input = Cursor::new("1\n".repeat(STEPS.len()));
        let mut out = Vec::new();

        let outcome = run(&provider, &mut session, &mut input, &mut out, &opts())
            .await
            .unwrap();
        assert_eq!(outcome, Outcome::Completed);
        assert_eq!(session.steps.len(), STEPS.len());
        assert_eq!(session.final_joke.as_deref(), Some("alpha"));
        assert_eq!(
            session.final_joke.as_deref(),
            session.steps.last().map(|s| s.choice.as_str())
        );
    }

    #[tokio::test]
    async fn edit_makes_the_typed_text_the_sole_option_and_choice() {
        let provider = CannedProvider(r#"["alpha", "beta", "gamma"]"#);
        let mut session = SessionRecord::new("gpt-5.2", "dry", "seed");
        let mut input = Cursor::new("e\nmy own point\nq\n");
        let mut out = Vec::new();

        let outcome = run(&provider, &mut session, &mut input, &mut out, &opts())
            .await
            .unwrap();
        assert_eq!(outcome, Outcome::QuitEarly);
        assert_eq!(session.steps.len(), 1);
        assert_eq!(session.steps[0].options, vec!["my own point"]);
        assert_eq!(session.steps[0].choice, "my own point");
    }

    #[tokio::test]
    async fn voice_command_mutates_the_session_and_counts_a_regen() {
        let provider = CannedProvider(r#"["alpha", "beta", "gamma"]"#);
        let mut session = SessionRecord::new("gpt-5.2", "dry", "seed");
        let mut input = Cursor::new("v\njaded\n1\nq\n");
        let mut out = Vec::new();

        run(&provider, &mut session, &mut input, &mut out, &opts())
            .await
            .unwrap();
        assert_eq!(session.voice, "jaded");
        assert_eq!(session.steps[0].regen_count, 1);
    }

    struct FlakyProvider {
        calls: std::sync::atomic::AtomicUsize,
    }

    #[async_trait]
    impl Provider for FlakyProvider {
        async fn complete(&self, _req: &CompletionRequest, _debug: bool) -> Result<String> {
            let n = self
                .calls
                .fetch_add(1, std::sync::atomic::Ordering::SeqCst);
            if n == 0 {
                Ok(String::new())
            } else {
                Ok(r#"["alpha", "beta", "gamma"]"#.to_string())
            }
        }
    }

    #[tokio::test]
    async fn empty_gateway_output_regenerates_without_consulting_the_human() {
        let provider = FlakyProvider {
            calls: std::sync::atomic::AtomicUsize::new(0),
        };
        let mut session = SessionRecord::new("gpt-5.2", "dry", "seed");
        let mut input = Cursor::new("1\nq\n");
        let mut out = Vec::new();

        run(&provider, &mut session, &mut input, &mut out, &opts())
            .await
            .unwrap();
        // The empty first round was retried automatically and counted as a
        // regeneration on the eventually recorded step.
        assert_eq!(session.steps.len(), 1);
        assert_eq!(session.steps[0].regen_count, 1);
        let rendered = String::from_utf8(out).unwrap();
        assert!(rendered.contains("No options received; trying again."));
    }
}
