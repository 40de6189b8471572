//! Persisted session records.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::grading::GradeReport;
use crate::session::QuizSession;

/// The saved outcome of one graded playthrough.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionRecord {
    /// Unique record identifier.
    pub id: Uuid,
    /// When the session was graded.
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub quiz_id: Option<String>,
    pub quiz_title: String,
    /// Name of the data source the quiz was loaded from.
    #[serde(default)]
    pub source: Option<String>,
    /// Chosen post-shuffle indices, `None` where unanswered.
    pub answers: Vec<Option<usize>>,
    pub grade: GradeReport,
}

impl SessionRecord {
    /// Capture a graded session.
    pub fn from_session(session: &QuizSession, grade: GradeReport, source: Option<&str>) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            quiz_id: session.quiz().id.clone(),
            quiz_title: session.quiz().title.clone(),
            source: source.map(str::to_string),
            answers: session.answers().to_vec(),
            grade,
        }
    }

    /// Save the record as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize record")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write record to {}", path.display()))?;
        Ok(())
    }

    /// Load a record from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read record from {}", path.display()))?;
        let record: SessionRecord =
            serde_json::from_str(&content).context("failed to parse record JSON")?;
        Ok(record)
    }

    /// Default file name: `result-<timestamp>-<short id>`.
    pub fn file_stem(&self) -> String {
        let id = self.id.simple().to_string();
        format!(
            "result-{}-{}",
            self.created_at.format("%Y-%m-%dT%H%M%S"),
            &id[..8]
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RawQuiz;
    use crate::session::Finish;
    use serde_json::json;

    fn graded_session() -> (QuizSession, GradeReport) {
        let raw: RawQuiz = serde_json::from_value(json!({
            "id": 12,
            "nome": "Saved quiz",
            "perguntas": [
                {"pergunta": "?", "alternativas": ["a", "b"], "respostaCorreta": 0}
            ]
        }))
        .unwrap();
        let mut session = QuizSession::with_seed(raw, 1).unwrap();
        let pos = session.current_question().correct_index;
        session.select_answer(pos).unwrap();
        match session.finish(false) {
            Finish::Graded(report) => (session, report),
            other => panic!("expected graded, got {other:?}"),
        }
    }

    #[test]
    fn record_captures_session() {
        let (session, grade) = graded_session();
        let record = SessionRecord::from_session(&session, grade, Some("file"));
        assert_eq!(record.quiz_id.as_deref(), Some("12"));
        assert_eq!(record.quiz_title, "Saved quiz");
        assert_eq!(record.source.as_deref(), Some("file"));
        assert_eq!(record.grade.score_percent, 100);
        assert!(record.file_stem().starts_with("result-"));
    }

    #[test]
    fn records_from_the_same_second_get_distinct_stems() {
        let (session, grade) = graded_session();
        let first = SessionRecord::from_session(&session, grade.clone(), None);
        let mut second = SessionRecord::from_session(&session, grade, None);
        second.created_at = first.created_at;

        assert_ne!(first.file_stem(), second.file_stem());
        assert!(first
            .file_stem()
            .ends_with(&first.id.simple().to_string()[..8]));
    }

    #[test]
    fn json_roundtrip() {
        let (session, grade) = graded_session();
        let record = SessionRecord::from_session(&session, grade, None);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("record.json");

        record.save_json(&path).unwrap();
        let loaded = SessionRecord::load_json(&path).unwrap();

        assert_eq!(loaded.id, record.id);
        assert_eq!(loaded.answers, record.answers);
        assert_eq!(loaded.grade, record.grade);
    }

    #[test]
    fn load_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(SessionRecord::load_json(&dir.path().join("nope.json")).is_err());
    }
}
