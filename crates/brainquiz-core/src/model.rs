//! Core data model types for brainquiz.
//!
//! Raw shapes mirror what the backend and local fallback files send; canonical
//! shapes are what a session plays. Conversion between the two lives in
//! [`crate::normalize`].

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Default per-question time limit, in seconds.
pub const DEFAULT_TIME_LIMIT_SECS: u32 = 30;

/// Title used when a quiz carries neither `titulo` nor `nome`.
pub const UNTITLED_QUIZ: &str = "Untitled quiz";

/// Unvalidated quiz JSON as received from any data source.
///
/// `perguntas` stays as raw JSON so that a missing or non-list value surfaces
/// as a validation error instead of a decode error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawQuiz {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub titulo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nome: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub perguntas: Option<Value>,
}

impl RawQuiz {
    /// Parse a raw quiz from a JSON string.
    pub fn from_json(content: &str) -> serde_json::Result<Self> {
        serde_json::from_str(content)
    }

    /// The quiz id as a string, if present. Numeric ids are stringified.
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().and_then(id_to_string)
    }

    /// Best-effort title without applying the placeholder.
    pub fn display_title(&self) -> Option<&str> {
        first_non_empty(self.titulo.as_deref(), self.nome.as_deref())
    }

    /// Number of entries in `perguntas` when it is a list.
    pub fn question_count(&self) -> usize {
        match &self.perguntas {
            Some(Value::Array(items)) => items.len(),
            _ => 0,
        }
    }
}

/// One question as received, with both historical field-name variants.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawQuestion {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pergunta: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub texto: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternativas: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opcoes: Option<Vec<String>>,
    #[serde(
        default,
        rename = "respostaCorreta",
        skip_serializing_if = "Option::is_none"
    )]
    pub resposta_correta: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resposta_certa: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explicacao: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tempo: Option<Value>,
}

impl RawQuestion {
    /// Question text: the first non-empty of `pergunta` and `texto`.
    pub fn text(&self) -> Option<&str> {
        first_non_empty(self.pergunta.as_deref(), self.texto.as_deref())
    }

    /// Choice list: `alternativas` wins whenever present, even if empty.
    pub fn choices(&self) -> Option<&[String]> {
        self.alternativas
            .as_deref()
            .or(self.opcoes.as_deref())
    }

    /// Correct-answer index: `respostaCorreta` wins whenever present.
    pub fn correct_answer(&self) -> Option<i64> {
        self.resposta_correta.or(self.resposta_certa)
    }

    /// Time limit in seconds. Anything but a positive integer falls back to the default.
    pub fn time_limit_secs(&self) -> u32 {
        self.tempo
            .as_ref()
            .and_then(Value::as_u64)
            .and_then(|secs| u32::try_from(secs).ok())
            .filter(|&secs| secs > 0)
            .unwrap_or(DEFAULT_TIME_LIMIT_SECS)
    }
}

/// A canonical, shuffled question ready to be played.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: String,
    pub text: String,
    /// Choices in display (post-shuffle) order.
    pub choices: Vec<String>,
    /// Post-shuffle position of the correct choice.
    pub correct_index: usize,
    #[serde(default)]
    pub explanation: String,
    pub time_limit_secs: u32,
    /// For each displayed position, the index it held before shuffling.
    pub choice_original_index: Vec<usize>,
}

impl Question {
    /// Text of the correct choice.
    pub fn correct_text(&self) -> &str {
        &self.choices[self.correct_index]
    }

    /// Pre-shuffle index of the correct choice.
    pub fn original_correct_index(&self) -> usize {
        self.choice_original_index[self.correct_index]
    }

    /// Post-shuffle position of the choice that was at `original` before shuffling.
    pub fn position_of_original(&self, original: usize) -> Option<usize> {
        self.choice_original_index
            .iter()
            .position(|&index| index == original)
    }
}

/// A normalized quiz. Immutable for the duration of one playthrough.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quiz {
    #[serde(default)]
    pub id: Option<String>,
    pub title: String,
    pub questions: Vec<Question>,
}

impl Quiz {
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

/// Dashboard listing entry, built from whatever the backend returns per quiz.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizSummary {
    #[serde(default)]
    pub id: Option<String>,
    pub title: String,
    pub question_count: usize,
}

impl From<&RawQuiz> for QuizSummary {
    fn from(raw: &RawQuiz) -> Self {
        Self {
            id: raw.id_string(),
            title: raw.display_title().unwrap_or(UNTITLED_QUIZ).to_string(),
            question_count: raw.question_count(),
        }
    }
}

pub(crate) fn id_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn first_non_empty<'a>(first: Option<&'a str>, second: Option<&'a str>) -> Option<&'a str> {
    first
        .filter(|s| !s.is_empty())
        .or_else(|| second.filter(|s| !s.is_empty()))
}
