use fs_err as fs;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_MODEL: &str = "gpt-5.2";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub model: String,
    pub sessions_dir: String,
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.into(),
            sessions_dir: "sessions".into(),
            timeout_secs: 120,
        }
    }
}

impl Config {
    /// Load overrides from a TOML file; missing keys keep their defaults.
    pub fn load(path: Option<&str>) -> anyhow::Result<Self> {
        match path {
            None => Ok(Self::default()),
            Some(p) => {
                let text = fs::read_to_string(p)?;
                Ok(toml::from_str(&text)?)
            }
        }
    }
}

/// Resolve the API credential: process environment first, then the first
/// non-empty `OPENAI_API_KEY=` assignment in `./.env`, quotes stripped.
/// The key goes straight to the provider; nothing is written back into the
/// environment.
pub fn resolve_api_key() -> Option<String> {
    if let Ok(key) = std::env::var("OPENAI_API_KEY") {
        if !key.is_empty() {
            return Some(key);
        }
    }

    let env_file = Path::new(".env");
    if !env_file.is_file() {
        return None;
    }
    let text = fs::read_to_string(env_file).ok()?;
    key_from_env_text(&text)
}

fn key_from_env_text(text: &str) -> Option<String> {
    for raw_line in text.lines() {
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((name, value)) = line.split_once('=') else {
            continue;
        };
        if name.trim() != "OPENAI_API_KEY" {
            continue;
        }
        let value = value.trim().trim_matches(|c| c == '"' || c == '\'');
        if !value.is_empty() {
            return Some(value.to_string());
        }
    }
    None
}
