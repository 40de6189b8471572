//! Scoring of a playthrough.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::Quiz;

/// Chosen-choice text reported for a question that was never answered.
pub const NOT_ANSWERED: &str = "Not answered";

/// Aggregate and per-question outcome of a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradeReport {
    pub correct_count: usize,
    pub total: usize,
    pub score_percent: u32,
    pub details: Vec<GradeDetail>,
}

/// One row of a [`GradeReport`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradeDetail {
    pub question_text: String,
    pub chosen_text: String,
    pub correct_text: String,
    pub is_correct: bool,
    #[serde(default)]
    pub explanation: String,
}

impl GradeReport {
    pub fn tier(&self) -> PerformanceTier {
        PerformanceTier::from_percent(self.score_percent)
    }

    pub fn unanswered_count(&self) -> usize {
        self.details
            .iter()
            .filter(|d| d.chosen_text == NOT_ANSWERED)
            .count()
    }
}

/// Grade a set of answers against a quiz.
///
/// `answers[i]` is the chosen post-shuffle index for question `i`. Missing
/// trailing entries count as unanswered.
pub fn grade(quiz: &Quiz, answers: &[Option<usize>]) -> GradeReport {
    let details: Vec<GradeDetail> = quiz
        .questions
        .iter()
        .enumerate()
        .map(|(i, question)| {
            let chosen = answers.get(i).copied().flatten();
            let chosen_text = chosen
                .and_then(|c| question.choices.get(c))
                .map_or_else(|| NOT_ANSWERED.to_string(), Clone::clone);
            GradeDetail {
                question_text: question.text.clone(),
                chosen_text,
                correct_text: question.correct_text().to_string(),
                is_correct: chosen == Some(question.correct_index),
                explanation: question.explanation.clone(),
            }
        })
        .collect();

    let correct_count = details.iter().filter(|d| d.is_correct).count();
    let total = details.len();

    GradeReport {
        correct_count,
        total,
        score_percent: score_percent(correct_count, total),
        details,
    }
}

/// `round(correct / total * 100)` with halves rounded up. Zero when `total` is zero.
pub fn score_percent(correct: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    let scaled = (correct * 100 + total / 2) / total;
    u32::try_from(scaled).unwrap_or(u32::MAX)
}

/// Coarse performance band shown alongside the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PerformanceTier {
    Excellent,
    Good,
    KeepStudying,
}

impl PerformanceTier {
    pub fn from_percent(percent: u32) -> Self {
        if percent >= 80 {
            PerformanceTier::Excellent
        } else if percent >= 60 {
            PerformanceTier::Good
        } else {
            PerformanceTier::KeepStudying
        }
    }

    /// Display colour used by the HTML report.
    pub fn color(self) -> &'static str {
        match self {
            PerformanceTier::Excellent => "#22c55e",
            PerformanceTier::Good => "#fbbf24",
            PerformanceTier::KeepStudying => "#ef4444",
        }
    }
}

impl fmt::Display for PerformanceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PerformanceTier::Excellent => write!(f, "Excellent!"),
            PerformanceTier::Good => write!(f, "Good job!"),
            PerformanceTier::KeepStudying => write!(f, "Keep studying!"),
        }
    }
}
