//! Quiz ingestion: validation, normalization and choice shuffling.
//!
//! Validation always runs before anything is normalized or shuffled, so an
//! invalid raw quiz never produces a partial [`Quiz`].

use std::path::Path;

use anyhow::{Context, Result};
use rand::Rng;
use serde_json::Value;

use crate::error::ValidationError;
use crate::model::{id_to_string, Question, Quiz, RawQuestion, RawQuiz, UNTITLED_QUIZ};

/// Check a raw quiz and decode its questions.
///
/// Returns the decoded questions in order when every one of them is playable.
pub fn validate(raw: &RawQuiz) -> Result<Vec<RawQuestion>, ValidationError> {
    let items = match &raw.perguntas {
        None | Some(Value::Null) => return Err(ValidationError::MissingQuestions),
        Some(Value::Array(items)) => items,
        Some(_) => return Err(ValidationError::QuestionsNotAList),
    };
    if items.is_empty() {
        return Err(ValidationError::NoQuestions);
    }

    let mut questions = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let number = index + 1;
        let question: RawQuestion = serde_json::from_value(item.clone()).map_err(|e| {
            ValidationError::MalformedQuestion {
                number,
                reason: e.to_string(),
            }
        })?;

        if question.text().is_none() {
            return Err(ValidationError::MissingText { number });
        }

        let choices = question.choices().map_or(0, <[String]>::len);
        if choices < 2 {
            return Err(ValidationError::TooFewChoices {
                number,
                found: choices,
            });
        }

        let correct = question
            .correct_answer()
            .ok_or(ValidationError::MissingCorrectAnswer { number })?;
        if correct < 0 || correct >= choices as i64 {
            return Err(ValidationError::CorrectAnswerOutOfRange {
                number,
                index: correct,
                choices,
            });
        }

        questions.push(question);
    }

    Ok(questions)
}

/// Validate, normalize and shuffle a raw quiz.
///
/// Every call draws a fresh, independent shuffle from `rng`.
pub fn normalize<R: Rng + ?Sized>(raw: &RawQuiz, rng: &mut R) -> Result<Quiz, ValidationError> {
    let raw_questions = validate(raw)?;

    let questions = raw_questions
        .into_iter()
        .enumerate()
        .map(|(index, question)| normalize_question(index, question, rng))
        .collect();

    Ok(Quiz {
        id: raw.id_string(),
        title: raw.display_title().unwrap_or(UNTITLED_QUIZ).to_string(),
        questions,
    })
}

/// Canonicalize one already-validated question and shuffle its choices.
fn normalize_question<R: Rng + ?Sized>(index: usize, raw: RawQuestion, rng: &mut R) -> Question {
    let text = raw.text().unwrap_or_default().to_string();
    let original_choices = raw.choices().map(<[String]>::to_vec).unwrap_or_default();
    // validate() has already bounded this to [0, choices).
    let original_correct = raw.correct_answer().unwrap_or_default() as usize;

    let (choices, choice_original_index) = shuffle_choices(&original_choices, rng);
    let correct_index = choice_original_index
        .iter()
        .position(|&original| original == original_correct)
        .unwrap_or_default();

    let time_limit_secs = raw.time_limit_secs();

    Question {
        id: raw
            .id
            .as_ref()
            .and_then(id_to_string)
            .unwrap_or_else(|| format!("question_{index}")),
        text,
        choices,
        correct_index,
        explanation: raw.explicacao.unwrap_or_default(),
        time_limit_secs,
        choice_original_index,
    }
}

/// Fisher–Yates shuffle of a choice list.
///
/// Walks from the last index down to 1, swapping each slot with a uniformly
/// chosen slot at or before it. Returns the shuffled choices together with the
/// permutation: `order[k]` is the original index of the choice now at `k`.
pub fn shuffle_choices<R: Rng + ?Sized>(
    choices: &[String],
    rng: &mut R,
) -> (Vec<String>, Vec<usize>) {
    let mut order: Vec<usize> = (0..choices.len()).collect();
    for i in (1..order.len()).rev() {
        let j = rng.random_range(0..=i);
        order.swap(i, j);
    }
    let shuffled = order.iter().map(|&k| choices[k].clone()).collect();
    (shuffled, order)
}

/// Parse quiz JSON that is either a bare quiz or wrapped as `{ "quiz": … }`.
pub fn parse_raw_quiz(content: &str) -> Result<RawQuiz> {
    let value: Value = serde_json::from_str(content).context("failed to parse quiz JSON")?;
    let value = match value {
        Value::Object(mut map) if map.contains_key("quiz") && !map.contains_key("perguntas") => {
            map.remove("quiz").unwrap_or(Value::Null)
        }
        other => other,
    };
    let raw = serde_json::from_value(value).context("quiz JSON is not an object")?;
    Ok(raw)
}

/// Read a raw quiz from a JSON file.
pub fn load_quiz_file(path: &Path) -> Result<RawQuiz> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read quiz file: {}", path.display()))?;
    parse_raw_quiz(&content).with_context(|| format!("invalid quiz file: {}", path.display()))
}
