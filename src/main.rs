use std::io;
use std::path::PathBuf;

use clap::Parser;

use joke_farm::cli;
use joke_farm::config::{self, Config};
use joke_farm::errors::FarmError;
use joke_farm::provider;
use joke_farm::session::{self, SessionRecord};
use joke_farm::ux;
use joke_farm::wizard::{self, Outcome, WizardOptions};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = cli::Args::parse();
    let cfg = Config::load(args.config.as_deref())?;

    let model = args.model.clone().unwrap_or_else(|| cfg.model.clone());
    let timeout_secs = args.timeout_secs.unwrap_or(cfg.timeout_secs);

    // Credential is resolved up front so a missing key is reported before
    // any prompt or request.
    let api_key = config::resolve_api_key().ok_or(FarmError::MissingApiKey)?;
    let provider = provider::make_provider(api_key, timeout_secs);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();

    println!("Joke Farming Wizard");
    println!("--------------------");
    let absurdity = ux::prompt_text(
        &mut input,
        &mut out,
        "Absurdity seed (what's funny about it?): ",
        false,
    )?;
    let voice = ux::prompt_text(
        &mut input,
        &mut out,
        "Voice/persona (e.g., dry, jaded, bright): ",
        false,
    )?;

    let mut session = SessionRecord::new(&model, &voice, &absurdity);
    let opts = WizardOptions {
        model,
        progress: !args.no_progress,
        debug: args.debug,
    };

    let outcome = wizard::run(provider.as_ref(), &mut session, &mut input, &mut out, &opts).await?;

    match outcome {
        Outcome::Completed => {
            println!("\nFinal Joke");
            println!("----------");
            println!("{}", session.final_joke.as_deref().unwrap_or(""));
        }
        Outcome::QuitEarly => {
            println!("Exiting early. Session will be saved if enabled.");
        }
    }

    if !args.no_save {
        let path = args
            .session_out
            .as_ref()
            .map(PathBuf::from)
            .unwrap_or_else(|| session::default_session_path(&cfg.sessions_dir));
        session.save(&path)?;
        println!("Session saved to {}", path.display());
    }

    Ok(())
}
