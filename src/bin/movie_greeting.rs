use std::io;

use clap::Parser;

use joke_farm::config::{self, DEFAULT_MODEL};
use joke_farm::errors::FarmError;
use joke_farm::greeting;
use joke_farm::provider;

#[derive(Parser, Debug)]
#[command(
    name = "movie-greeting",
    version,
    about = "One-sentence movie-genre greeting generator"
)]
struct Args {
    #[arg(long, default_value = DEFAULT_MODEL)]
    model: String,

    #[arg(long, default_value_t = 120)]
    timeout_secs: u64,

    #[arg(long, default_value_t = false)]
    debug: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();

    let Some(genre) = greeting::choose_genre(&mut input, &mut out)? else {
        return Ok(());
    };

    let Some(api_key) = config::resolve_api_key() else {
        eprintln!("{}", FarmError::MissingApiKey);
        return Ok(());
    };
    let provider = provider::make_provider(api_key, args.timeout_secs);

    match greeting::create_greeting(provider.as_ref(), &args.model, &genre, args.debug).await {
        Ok(text) => println!("{text}"),
        Err(err) => eprintln!("{err}"),
    }

    Ok(())
}
