use chrono::{DateTime, Local};
use fs_err as fs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// One completed stage: the exact prompt sent, everything offered, and what
/// the human settled on. Immutable once appended; "back" pops it whole.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepRecord {
    pub name: String,
    pub prompt: String,
    pub options: Vec<String>,
    pub choice: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub regen_count: u32,
}

/// Full record of one wizard run. Written at most once per run, never read
/// back by the tool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionRecord {
    pub id: Uuid,
    pub started_at: DateTime<Local>,
    pub model: String,
    pub voice: String,
    pub absurdity: String,
    pub steps: Vec<StepRecord>,
    pub final_joke: Option<String>,
}

impl SessionRecord {
    pub fn new(model: &str, voice: &str, absurdity: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            started_at: Local::now(),
            model: model.to_string(),
            voice: voice.to_string(),
            absurdity: absurdity.to_string(),
            steps: Vec::new(),
            final_joke: None,
        }
    }

    /// Serialize to pretty JSON at `path`, creating parent directories and
    /// overwriting any existing file. Failures are fatal to the run.
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}

/// Timestamp-derived location under the sessions directory.
pub fn default_session_path(dir: &str) -> PathBuf {
    let stamp = Local::now().format("%Y%m%d-%H%M%S");
    Path::new(dir).join(format!("joke-session-{stamp}.json"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_creates_directories_and_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("session.json");

        let mut session = SessionRecord::new("gpt-5.2", "dry", "a cat who files taxes");
        session.steps.push(StepRecord {
            name: "Point".into(),
            prompt: "the prompt".into(),
            options: vec!["a".into(), "b".into()],
            choice: "a".into(),
            notes: String::new(),
            regen_count: 2,
        });
        session.save(&path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let parsed: SessionRecord = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed.id, session.id);
        assert_eq!(parsed.absurdity, "a cat who files taxes");
        assert_eq!(parsed.steps.len(), 1);
        assert_eq!(parsed.steps[0].regen_count, 2);
        assert!(parsed.final_joke.is_none());
    }

    #[test]
    fn save_overwrites_an_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        let session = SessionRecord::new("gpt-5.2", "dry", "seed");
        session.save(&path).unwrap();
        session.save(&path).unwrap();
        let parsed: SessionRecord =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(parsed.id, session.id);
    }

    #[test]
    fn default_path_is_timestamp_derived() {
        let path = default_session_path("sessions");
        assert_eq!(path.parent(), Some(Path::new("sessions")));
        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("joke-session-"));
        assert!(name.ends_with(".json"));
        // joke-session-YYYYmmdd-HHMMSS.json
        assert_eq!(name.len(), "joke-session-".len() + 15 + ".json".len());
    }
}
