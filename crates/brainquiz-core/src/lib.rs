//! brainquiz-core: Quiz session engine.
//!
//! Validates and normalizes raw quiz JSON, shuffles choices while keeping the
//! mapping back to their original positions, drives navigation and answer
//! recording, and grades a playthrough.

pub mod engine;
pub mod error;
pub mod grading;
pub mod loader;
pub mod model;
pub mod normalize;
pub mod report;
pub mod session;
pub mod traits;

pub use engine::QuizEngine;
pub use error::{QuizError, SessionError, ValidationError};
pub use grading::{GradeDetail, GradeReport, PerformanceTier};
pub use loader::{LoadError, LoadReport, SourceChain};
pub use model::{Question, Quiz, QuizSummary, RawQuestion, RawQuiz};
pub use session::{Finish, QuizSession, SessionProgress};
pub use traits::QuizSource;
