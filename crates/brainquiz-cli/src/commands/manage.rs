//! Dashboard actions: `archive`, `delete`, `restore`, `purge`, `empty-trash`.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;

use brainquiz_sources::config::load_config_from;
use brainquiz_sources::{QuizAction, SourceError};

pub async fn execute(action: QuizAction, yes: bool, config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let client = config.api_client()?.ok_or(SourceError::NotConfigured)?;

    if !yes {
        let stdin = std::io::stdin();
        let stdout = std::io::stdout();
        if !confirm(&action, stdin.lock(), stdout.lock())? {
            println!("Cancelled.");
            return Ok(());
        }
    }

    client.quiz_action(&action).await?;

    let cache = config.cache();
    for &kind in action.affected_listings() {
        if let Err(e) = cache.clear_listing(kind).await {
            tracing::warn!("failed to drop cached {kind} listing: {e:#}");
        }
    }

    println!("Done: {action}.");
    Ok(())
}

fn confirm<R: BufRead, W: Write>(action: &QuizAction, mut input: R, mut out: W) -> Result<bool> {
    let warning = match action {
        QuizAction::Purge(_) | QuizAction::EmptyTrash | QuizAction::Delete(_) => {
            " This cannot be undone."
        }
        QuizAction::Archive(_) | QuizAction::Restore(_) => "",
    };
    write!(out, "Really {action}?{warning} [y/N] ")?;
    out.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(matches!(line.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
}
