//! The `brainquiz validate` command.

use std::path::{Path, PathBuf};

use anyhow::Result;

use brainquiz_core::normalize::{load_quiz_file, validate};

pub fn execute(path: PathBuf) -> Result<()> {
    let files = if path.is_dir() {
        let mut files: Vec<PathBuf> = std::fs::read_dir(&path)?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|p| p.extension().is_some_and(|ext| ext == "json"))
            .collect();
        files.sort();
        anyhow::ensure!(!files.is_empty(), "no quiz files in {}", path.display());
        files
    } else {
        vec![path]
    };

    let single = files.len() == 1;
    let mut invalid = 0;

    for file in &files {
        match check_file(file) {
            Ok(summary) => println!("{summary}"),
            Err(e) if single => return Err(e),
            Err(e) => {
                println!("{}: INVALID: {e:#}", file.display());
                invalid += 1;
            }
        }
    }

    if invalid > 0 {
        anyhow::bail!("{invalid} of {} quiz file(s) invalid", files.len());
    }
    println!("All quizzes valid.");
    Ok(())
}

fn check_file(file: &Path) -> Result<String> {
    let raw = load_quiz_file(file)?;
    let questions = validate(&raw)?;
    Ok(format!(
        "Quiz: {} ({} questions)",
        raw.display_title()
            .unwrap_or(brainquiz_core::model::UNTITLED_QUIZ),
        questions.len()
    ))
}
