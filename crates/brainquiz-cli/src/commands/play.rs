//! The `brainquiz play` command.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use comfy_table::{Cell, Color, Table};

use brainquiz_core::grading::GradeReport;
use brainquiz_core::report::SessionRecord;
use brainquiz_core::{Finish, QuizEngine, SessionError};
use brainquiz_report::write_html_report;
use brainquiz_sources::config::{build_chain, load_config_from, LoadRequest};
use brainquiz_sources::ResultSubmission;

pub struct PlayOptions {
    pub id: Option<String>,
    pub file: Option<PathBuf>,
    pub seed: Option<u64>,
    pub force: bool,
    pub html: bool,
    pub submit: bool,
    pub config: Option<PathBuf>,
}

/// One line of player input.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Action {
    /// 0-based choice position.
    Choose(usize),
    Next,
    Previous,
    Finish,
    Retry,
    Quit,
    Help,
    Unknown(String),
}

fn parse_action(line: &str) -> Action {
    let line = line.trim();
    match line.to_ascii_lowercase().as_str() {
        "n" | "next" => Action::Next,
        "p" | "prev" | "previous" => Action::Previous,
        "f" | "finish" => Action::Finish,
        "r" | "retry" => Action::Retry,
        "q" | "quit" | "exit" => Action::Quit,
        "?" | "h" | "help" => Action::Help,
        other => match other.parse::<usize>() {
            Ok(n) if n >= 1 => Action::Choose(n - 1),
            _ => Action::Unknown(line.to_string()),
        },
    }
}

const HELP: &str = "Keys: 1..n choose, n next, p previous, f finish, r retry, q quit";

pub async fn execute(options: PlayOptions) -> Result<()> {
    let config = load_config_from(options.config.as_deref())?;
    let request = LoadRequest {
        quiz_id: options.id.clone(),
        file: options.file.clone(),
        seed: options.seed,
    };
    let chain = build_chain(&config, &request)?;

    let (session, load_report) = chain.load().await?;
    let source = load_report.source.clone();
    println!(
        "Loaded \"{}\" from {} ({} questions)",
        session.quiz().title,
        source,
        session.quiz().len()
    );

    if source != "cache" {
        if let Err(e) = config.cache().store_quiz(session.raw()).await {
            tracing::warn!("failed to cache quiz: {e:#}");
        }
    }

    let mut engine = QuizEngine::new();
    engine.adopt(session, load_report);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let records = play_loop(
        &mut engine,
        stdin.lock(),
        stdout.lock(),
        options.force,
        Some(source.as_str()),
    )?;

    if records.is_empty() {
        return Ok(());
    }

    std::fs::create_dir_all(&config.output_dir).with_context(|| {
        format!(
            "failed to create output dir {}",
            config.output_dir.display()
        )
    })?;

    for record in &records {
        let stem = record.file_stem();

        let path = config.output_dir.join(format!("{stem}.json"));
        record.save_json(&path)?;
        eprintln!("Result saved to: {}", path.display());

        if options.html {
            let path = config.output_dir.join(format!("{stem}.html"));
            write_html_report(record, &path)?;
            eprintln!("HTML report: {}", path.display());
        }
    }

    if options.submit {
        match config.api_client()? {
            Some(client) => {
                for record in &records {
                    if let Err(e) = client.submit_result(&ResultSubmission::from(record)).await {
                        tracing::error!("failed to submit result: {e}");
                    }
                }
            }
            None => eprintln!("No API configured; result not submitted."),
        }
    }

    Ok(())
}

/// Drive a loaded engine from line-based input until the player quits.
///
/// Returns one record per graded attempt.
fn play_loop<R: BufRead, W: Write>(
    engine: &mut QuizEngine,
    mut input: R,
    mut out: W,
    force: bool,
    source: Option<&str>,
) -> Result<Vec<SessionRecord>> {
    let mut records = Vec::new();
    let mut confirm_finish = false;
    let mut graded = false;
    let mut line = String::new();

    writeln!(out, "{HELP}")?;
    render_question(engine, &mut out)?;

    loop {
        write!(out, "> ")?;
        out.flush()?;

        line.clear();
        let read = match input.read_line(&mut line) {
            Ok(read) => read,
            Err(e) if !records.is_empty() => {
                tracing::warn!("input failed, keeping graded attempts: {e}");
                break;
            }
            Err(e) => return Err(e.into()),
        };
        if read == 0 {
            break;
        }
        let action = parse_action(&line);

        if graded {
            match action {
                Action::Retry => {
                    engine.retry()?;
                    graded = false;
                    writeln!(out, "\nRetrying with reshuffled choices.")?;
                    render_question(engine, &mut out)?;
                }
                Action::Quit => break,
                _ => writeln!(out, "Type r to retry or q to quit.")?,
            }
            continue;
        }

        let confirming = std::mem::take(&mut confirm_finish);
        match action {
            Action::Choose(choice) => match engine.select_answer(choice) {
                Ok(()) => render_question(engine, &mut out)?,
                Err(SessionError::ChoiceOutOfRange { choices, .. }) => {
                    writeln!(out, "Choose a number between 1 and {choices}.")?
                }
                Err(e) => return Err(e.into()),
            },
            Action::Next => {
                if engine.progress()?.is_last {
                    writeln!(out, "This is the last question; type f to finish.")?;
                } else {
                    engine.go_next()?;
                    render_question(engine, &mut out)?;
                }
            }
            Action::Previous => {
                if engine.progress()?.is_first {
                    writeln!(out, "This is the first question.")?;
                } else {
                    engine.go_previous()?;
                    render_question(engine, &mut out)?;
                }
            }
            Action::Finish => match engine.finish(force || confirming)? {
                Finish::Unanswered(numbers) => {
                    let list = numbers
                        .iter()
                        .map(ToString::to_string)
                        .collect::<Vec<_>>()
                        .join(", ");
                    writeln!(
                        out,
                        "Unanswered questions: {list}. Type f again to finish anyway."
                    )?;
                    confirm_finish = true;
                }
                Finish::Graded(report) => {
                    print_summary(&report, &mut out)?;
                    if let Some(session) = engine.session() {
                        records.push(SessionRecord::from_session(session, report, source));
                    }
                    graded = true;
                    writeln!(out, "Type r to retry or q to quit.")?;
                }
            },
            Action::Quit => {
                if records.is_empty() {
                    writeln!(out, "Quiz abandoned.")?;
                }
                break;
            }
            Action::Retry => writeln!(out, "Finish the quiz before retrying.")?,
            Action::Help => writeln!(out, "{HELP}")?,
            Action::Unknown(text) => writeln!(out, "Unknown input '{text}'. {HELP}")?,
        }
    }

    engine.exit();
    Ok(records)
}

fn render_question<W: Write>(engine: &QuizEngine, out: &mut W) -> Result<()> {
    let progress = engine.progress()?;
    let question = engine.current_question()?;
    let chosen = engine
        .session()
        .and_then(|s| s.answer_for(s.current_index()));

    writeln!(
        out,
        "\nQuestion {}/{} ({} answered, {}s): {}",
        progress.position, progress.total, progress.answered, question.time_limit_secs, question.text
    )?;
    for (i, choice) in question.choices.iter().enumerate() {
        let marker = if chosen == Some(i) { "*" } else { " " };
        writeln!(out, " {marker}{}) {choice}", i + 1)?;
    }
    Ok(())
}

fn print_summary<W: Write>(report: &GradeReport, out: &mut W) -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["#", "Question", "Your answer", "Correct answer", "Result"]);

    for (i, detail) in report.details.iter().enumerate() {
        let result = if detail.is_correct {
            Cell::new("correct").fg(Color::Green)
        } else {
            Cell::new("wrong").fg(Color::Red)
        };
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(&detail.question_text),
            Cell::new(&detail.chosen_text),
            Cell::new(&detail.correct_text),
            result,
        ]);
    }

    writeln!(out, "\n{table}")?;
    writeln!(
        out,
        "Score: {}% ({}/{}) {}",
        report.score_percent,
        report.correct_count,
        report.total,
        report.tier()
    )?;
    for (i, detail) in report.details.iter().enumerate() {
        if !detail.is_correct && !detail.explanation.is_empty() {
            writeln!(out, "  {}. {}", i + 1, detail.explanation)?;
        }
    }
    Ok(())
}
