//! The `brainquiz report` command.

use std::path::PathBuf;

use anyhow::Result;

use brainquiz_core::report::SessionRecord;
use brainquiz_report::write_html_report;

pub fn execute(input: PathBuf, output: Option<PathBuf>) -> Result<()> {
    let record = SessionRecord::load_json(&input)?;
    let output = output.unwrap_or_else(|| input.with_extension("html"));

    write_html_report(&record, &output)?;
    println!(
        "{}: {}% ({}/{})",
        record.quiz_title, record.grade.score_percent, record.grade.correct_count, record.grade.total
    );
    println!("HTML report: {}", output.display());
    Ok(())
}
