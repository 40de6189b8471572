//! One playthrough of a quiz: position, recorded answers and retry.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::{SessionError, ValidationError};
use crate::grading::{grade, GradeReport};
use crate::model::{Question, Quiz, RawQuiz};
use crate::normalize::normalize;

/// Outcome of asking a session to finish.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Finish {
    /// Some questions are unanswered and completion was not forced.
    /// Holds their 1-based numbers.
    Unanswered(Vec<usize>),
    Graded(GradeReport),
}

/// Aggregated view of session progress, useful for a UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionProgress {
    /// 1-based position of the current question.
    pub position: usize,
    pub total: usize,
    pub answered: usize,
    pub is_first: bool,
    pub is_last: bool,
    pub current_answered: bool,
}

/// State of one playthrough.
///
/// Keeps the raw quiz it was built from so that [`QuizSession::retry`] can
/// produce a fresh shuffle.
#[derive(Debug, Clone)]
pub struct QuizSession {
    raw: RawQuiz,
    quiz: Quiz,
    current: usize,
    answers: Vec<Option<usize>>,
    finished: bool,
    rng: StdRng,
}

impl QuizSession {
    /// Validate and shuffle `raw` with a randomly seeded generator.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` when the raw quiz is not playable.
    pub fn new(raw: RawQuiz) -> Result<Self, ValidationError> {
        Self::with_rng(raw, StdRng::from_rng(&mut rand::rng()))
    }

    /// Like [`QuizSession::new`] but reproducible for a given seed.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` when the raw quiz is not playable.
    pub fn with_seed(raw: RawQuiz, seed: u64) -> Result<Self, ValidationError> {
        Self::with_rng(raw, StdRng::seed_from_u64(seed))
    }

    fn with_rng(raw: RawQuiz, mut rng: StdRng) -> Result<Self, ValidationError> {
        let quiz = normalize(&raw, &mut rng)?;
        let answers = vec![None; quiz.len()];
        tracing::debug!(title = %quiz.title, questions = quiz.len(), "session created");
        Ok(Self {
            raw,
            quiz,
            current: 0,
            answers,
            finished: false,
            rng,
        })
    }

    pub fn quiz(&self) -> &Quiz {
        &self.quiz
    }

    pub fn raw(&self) -> &RawQuiz {
        &self.raw
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_question(&self) -> &Question {
        &self.quiz.questions[self.current]
    }

    /// Recorded answers, indexed by question. `None` means not yet answered.
    pub fn answers(&self) -> &[Option<usize>] {
        &self.answers
    }

    pub fn answer_for(&self, question: usize) -> Option<usize> {
        self.answers.get(question).copied().flatten()
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    fn last_index(&self) -> usize {
        self.quiz.len() - 1
    }

    /// Move to the next question. No-op on the last one.
    pub fn go_next(&mut self) {
        if self.current < self.last_index() {
            self.current += 1;
        }
    }

    /// Move to the previous question. No-op on the first one.
    pub fn go_previous(&mut self) {
        if self.current > 0 {
            self.current -= 1;
        }
    }

    /// Record `choice` (a post-shuffle index) for the current question,
    /// replacing any earlier answer.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::ChoiceOutOfRange` without touching state when
    /// `choice` is not a valid position.
    pub fn select_answer(&mut self, choice: usize) -> Result<(), SessionError> {
        let choices = self.current_question().choices.len();
        if choice >= choices {
            return Err(SessionError::ChoiceOutOfRange { choice, choices });
        }
        self.answers[self.current] = Some(choice);
        Ok(())
    }

    /// 1-based numbers of questions that have no recorded answer.
    pub fn unanswered(&self) -> Vec<usize> {
        self.answers
            .iter()
            .enumerate()
            .filter(|(_, answer)| answer.is_none())
            .map(|(i, _)| i + 1)
            .collect()
    }

    pub fn progress(&self) -> SessionProgress {
        SessionProgress {
            position: self.current + 1,
            total: self.quiz.len(),
            answered: self.answers.iter().filter(|a| a.is_some()).count(),
            is_first: self.current == 0,
            is_last: self.current == self.last_index(),
            current_answered: self.answers[self.current].is_some(),
        }
    }

    /// Finish the playthrough.
    ///
    /// Without `force`, a session with unanswered questions is not graded and
    /// the caller gets their numbers back so it can warn and ask again.
    pub fn finish(&mut self, force: bool) -> Finish {
        let unanswered = self.unanswered();
        if !unanswered.is_empty() && !force {
            return Finish::Unanswered(unanswered);
        }
        self.finished = true;
        let report = self.grade();
        tracing::info!(
            title = %self.quiz.title,
            correct = report.correct_count,
            total = report.total,
            percent = report.score_percent,
            "quiz finished"
        );
        Finish::Graded(report)
    }

    /// Grade the current answers. Pure: does not end the session.
    pub fn grade(&self) -> GradeReport {
        grade(&self.quiz, &self.answers)
    }

    /// Discard answers and position, and reshuffle from the original raw quiz.
    pub fn retry(&mut self) {
        match normalize(&self.raw, &mut self.rng) {
            Ok(quiz) => self.quiz = quiz,
            // The raw quiz was valid when the session was built and is never mutated.
            Err(e) => tracing::error!("reshuffle failed, keeping previous order: {e}"),
        }
        self.current = 0;
        self.answers = vec![None; self.quiz.len()];
        self.finished = false;
        tracing::debug!(title = %self.quiz.title, "session reset for retry");
    }
}
