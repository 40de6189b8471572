//! CLI integration tests using assert_cmd.

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn brainquiz() -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("brainquiz").unwrap();
    cmd.env_remove("BRAINQUIZ_API_URL")
        .env_remove("BRAINQUIZ_TOKEN");
    cmd
}

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../../quizzes")
        .join(name)
}

/// Write a config that keeps cache and results inside `dir`.
fn local_config(dir: &Path) -> PathBuf {
    let path = dir.join("brainquiz.toml");
    let content = format!(
        "cache_dir = {:?}\noutput_dir = {:?}\nsources = [\"file\", \"cache\"]\n",
        dir.join("cache").display().to_string(),
        dir.join("results").display().to_string(),
    );
    std::fs::write(&path, content).unwrap();
    path
}

fn saved_records(dir: &Path) -> Vec<PathBuf> {
    let results = dir.join("results");
    if !results.exists() {
        return vec![];
    }
    std::fs::read_dir(results)
        .unwrap()
        .map(|e| e.unwrap().path())
        .filter(|p| p.extension().is_some_and(|ext| ext == "json"))
        .collect()
}

#[test]
fn validate_valid_quiz() {
    brainquiz()
        .arg("validate")
        .arg("--file")
        .arg("../../quizzes/capitals.json")
        .assert()
        .success()
        .stdout(predicate::str::contains("Quiz: World capitals (3 questions)"))
        .stdout(predicate::str::contains("All quizzes valid"));
}

#[test]
fn validate_legacy_field_names() {
    brainquiz()
        .arg("validate")
        .arg("--file")
        .arg("../../quizzes/legacy-fields.json")
        .assert()
        .success()
        .stdout(predicate::str::contains("Quiz: Legacy quiz (2 questions)"));
}

#[test]
fn validate_reports_first_problem() {
    brainquiz()
        .arg("validate")
        .arg("--file")
        .arg("../../quizzes/invalid-answer.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "question 2: correct answer 5 is out of range for 3 choices",
        ));
}

#[test]
fn validate_directory_counts_invalid_files() {
    brainquiz()
        .arg("validate")
        .arg("--file")
        .arg("../../quizzes")
        .assert()
        .failure()
        .stdout(predicate::str::contains("World capitals"))
        .stdout(predicate::str::contains("INVALID"))
        .stderr(predicate::str::contains("1 of 3 quiz file(s) invalid"));
}

#[test]
fn validate_nonexistent_file() {
    brainquiz()
        .arg("validate")
        .arg("--file")
        .arg("nonexistent.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn init_creates_files() {
    let dir = TempDir::new().unwrap();

    brainquiz()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created brainquiz.toml"))
        .stdout(predicate::str::contains("Created quizzes/example.json"));

    assert!(dir.path().join("brainquiz.toml").exists());

    brainquiz()
        .current_dir(dir.path())
        .arg("validate")
        .arg("--file")
        .arg("quizzes/example.json")
        .assert()
        .success();
}

#[test]
fn init_skips_existing() {
    let dir = TempDir::new().unwrap();

    brainquiz()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();

    brainquiz()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn play_confirms_unanswered_and_saves_record() {
    let dir = TempDir::new().unwrap();
    let config = local_config(dir.path());

    brainquiz()
        .arg("play")
        .arg("--config")
        .arg(&config)
        .arg("--file")
        .arg(fixture("capitals.json"))
        .arg("--seed")
        .arg("7")
        .arg("--html")
        .write_stdin("f\nf\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Loaded \"World capitals\" from file (3 questions)",
        ))
        .stdout(predicate::str::contains("Unanswered questions: 1, 2, 3"))
        .stdout(predicate::str::contains("Score: 0% (0/3) Keep studying!"));

    let records = saved_records(dir.path());
    assert_eq!(records.len(), 1);
    assert!(records[0].with_extension("html").exists());

    let record: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&records[0]).unwrap()).unwrap();
    assert_eq!(record["quiz_id"], "101");
    assert_eq!(record["source"], "file");
    assert_eq!(record["grade"]["total"], 3);

    assert!(dir.path().join("cache/current-quiz.json").exists());
}

#[test]
fn play_falls_back_to_cached_quiz() {
    let dir = TempDir::new().unwrap();
    let config = local_config(dir.path());

    brainquiz()
        .arg("play")
        .arg("--config")
        .arg(&config)
        .arg("--file")
        .arg(fixture("legacy-fields.json"))
        .write_stdin("q\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Quiz abandoned."));

    brainquiz()
        .arg("play")
        .arg("--config")
        .arg(&config)
        .arg("--force")
        .write_stdin("2\nf\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Loaded \"Legacy quiz\" from cache (2 questions)",
        ))
        .stdout(predicate::str::contains("Score:"));

    assert_eq!(saved_records(dir.path()).len(), 1);
}

#[test]
fn play_without_any_quiz_fails() {
    let dir = TempDir::new().unwrap();
    let config = local_config(dir.path());

    brainquiz()
        .arg("play")
        .arg("--config")
        .arg(&config)
        .write_stdin("q\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no quiz found after trying cache"));
}

#[test]
fn play_rejects_invalid_quiz_file() {
    let dir = TempDir::new().unwrap();
    let config = local_config(dir.path());

    brainquiz()
        .arg("play")
        .arg("--config")
        .arg(&config)
        .arg("--file")
        .arg(fixture("invalid-answer.json"))
        .write_stdin("q\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("file (invalid quiz: question 2"));
}

#[test]
fn report_renders_saved_record() {
    let dir = TempDir::new().unwrap();
    let config = local_config(dir.path());

    brainquiz()
        .arg("play")
        .arg("--config")
        .arg(&config)
        .arg("--file")
        .arg(fixture("capitals.json"))
        .arg("--force")
        .write_stdin("1\nf\nq\n")
        .assert()
        .success();

    let records = saved_records(dir.path());
    assert_eq!(records.len(), 1);
    let output = dir.path().join("page.html");

    brainquiz()
        .arg("report")
        .arg("--input")
        .arg(&records[0])
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("World capitals"));

    let html = std::fs::read_to_string(&output).unwrap();
    assert!(html.contains("What is the capital of Japan?"));
}

#[test]
fn list_without_backend_uses_empty_cache() {
    let dir = TempDir::new().unwrap();
    let config = local_config(dir.path());

    brainquiz()
        .arg("list")
        .arg("--config")
        .arg(&config)
        .arg("--kind")
        .arg("archived")
        .assert()
        .success()
        .stdout(predicate::str::contains("No archived quizzes found."));
}

#[test]
fn list_rejects_unknown_kind() {
    brainquiz()
        .arg("list")
        .arg("--kind")
        .arg("pdfs")
        .assert()
        .failure();
}

#[test]
fn whoami_without_backend_fails() {
    let dir = TempDir::new().unwrap();
    let config = local_config(dir.path());

    brainquiz()
        .arg("whoami")
        .arg("--config")
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("no API configured"));
}

#[test]
fn help_output() {
    brainquiz()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Terminal quiz player"));
}

#[test]
fn version_output() {
    brainquiz()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("brainquiz"));
}
