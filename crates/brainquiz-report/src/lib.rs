//! brainquiz-report: Rendering of graded sessions.

pub mod html;

pub use html::{generate_html, write_html_report};
