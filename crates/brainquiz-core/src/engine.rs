//! The quiz engine: an explicitly constructed controller owning at most one
//! session at a time.
//!
//! A presentation layer binds its input events to these methods; nothing here
//! renders or reads input.

use crate::error::{QuizError, SessionError};
use crate::grading::GradeReport;
use crate::loader::LoadReport;
use crate::model::{Question, RawQuiz};
use crate::session::{Finish, QuizSession, SessionProgress};

#[derive(Debug, Default)]
pub struct QuizEngine {
    session: Option<QuizSession>,
    load_report: Option<LoadReport>,
    seed: Option<u64>,
}

impl QuizEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a fixed seed for every shuffle this engine performs.
    #[must_use]
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Validate and load a raw quiz, replacing any current session.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Validation` and leaves the engine untouched when the
    /// quiz is not playable.
    pub fn load(&mut self, raw: RawQuiz) -> Result<&QuizSession, QuizError> {
        let session = match self.seed {
            Some(seed) => QuizSession::with_seed(raw, seed)?,
            None => QuizSession::new(raw)?,
        };
        self.load_report = None;
        Ok(self.session.insert(session))
    }

    /// Adopt a session produced by a [`crate::loader::SourceChain`].
    ///
    /// The session keeps its own RNG; the engine seed only applies to [`Self::load`].
    pub fn adopt(&mut self, session: QuizSession, report: LoadReport) -> &QuizSession {
        self.load_report = Some(report);
        self.session.insert(session)
    }

    /// End the current session without grading.
    pub fn exit(&mut self) -> Option<QuizSession> {
        self.load_report = None;
        self.session.take()
    }

    pub fn session(&self) -> Option<&QuizSession> {
        self.session.as_ref()
    }

    pub fn load_report(&self) -> Option<&LoadReport> {
        self.load_report.as_ref()
    }

    fn active(&self) -> Result<&QuizSession, SessionError> {
        self.session.as_ref().ok_or(SessionError::NoQuizLoaded)
    }

    fn active_mut(&mut self) -> Result<&mut QuizSession, SessionError> {
        self.session.as_mut().ok_or(SessionError::NoQuizLoaded)
    }

    pub fn current_question(&self) -> Result<&Question, SessionError> {
        Ok(self.active()?.current_question())
    }

    pub fn progress(&self) -> Result<SessionProgress, SessionError> {
        Ok(self.active()?.progress())
    }

    pub fn go_next(&mut self) -> Result<usize, SessionError> {
        let session = self.active_mut()?;
        session.go_next();
        Ok(session.current_index())
    }

    pub fn go_previous(&mut self) -> Result<usize, SessionError> {
        let session = self.active_mut()?;
        session.go_previous();
        Ok(session.current_index())
    }

    pub fn select_answer(&mut self, choice: usize) -> Result<(), SessionError> {
        self.active_mut()?.select_answer(choice)
    }

    pub fn finish(&mut self, force: bool) -> Result<Finish, SessionError> {
        Ok(self.active_mut()?.finish(force))
    }

    pub fn grade(&self) -> Result<GradeReport, SessionError> {
        Ok(self.active()?.grade())
    }

    pub fn retry(&mut self) -> Result<(), SessionError> {
        self.active_mut()?.retry();
        Ok(())
    }
}
