//! The `brainquiz list` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use brainquiz_core::QuizSummary;
use brainquiz_sources::config::load_config_from;
use brainquiz_sources::{list_with_fallback, QuizListKind};

pub async fn execute(kind: QuizListKind, config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let client = config.api_client()?;
    let listing = list_with_fallback(client.as_ref(), &config.cache(), kind).await;

    if listing.quizzes.is_empty() {
        println!("No {kind} quizzes found.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["ID", "Title", "Questions"]);
    for quiz in &listing.quizzes {
        let summary = QuizSummary::from(quiz);
        table.add_row(vec![
            Cell::new(summary.id.as_deref().unwrap_or("-")),
            Cell::new(&summary.title),
            Cell::new(summary.question_count),
        ]);
    }
    println!("{table}");

    if listing.from_cache {
        println!("(from local cache)");
    }
    Ok(())
}
