//! Engine error types.
//!
//! Question numbers in messages are 1-based, matching what a player sees.

use thiserror::Error;

/// A raw quiz was rejected before any session was created.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationError {
    #[error("quiz has no `perguntas` field")]
    MissingQuestions,

    #[error("quiz `perguntas` is not a list")]
    QuestionsNotAList,

    #[error("quiz has no questions")]
    NoQuestions,

    #[error("question {number}: malformed entry: {reason}")]
    MalformedQuestion { number: usize, reason: String },

    #[error("question {number}: missing text")]
    MissingText { number: usize },

    #[error("question {number}: needs at least 2 choices, found {found}")]
    TooFewChoices { number: usize, found: usize },

    #[error("question {number}: missing correct answer")]
    MissingCorrectAnswer { number: usize },

    #[error("question {number}: correct answer {index} is out of range for {choices} choices")]
    CorrectAnswerOutOfRange {
        number: usize,
        index: i64,
        choices: usize,
    },
}

/// A session operation was rejected without mutating state.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("no quiz loaded")]
    NoQuizLoaded,

    #[error("choice {choice} is out of range for {choices} choices")]
    ChoiceOutOfRange { choice: usize, choices: usize },
}

/// Any error surfaced by the quiz engine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QuizError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Session(#[from] SessionError),
}
