use thiserror::Error;

#[derive(Error, Debug)]
pub enum FarmError {
    #[error("OPENAI_API_KEY is missing. Set it in your shell or add OPENAI_API_KEY=... to .env")] MissingApiKey,
    #[error("provider error: {0}")] Provider(String),
}
