//! The `brainquiz init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    if std::path::Path::new("brainquiz.toml").exists() {
        println!("brainquiz.toml already exists, skipping.");
    } else {
        std::fs::write("brainquiz.toml", SAMPLE_CONFIG)?;
        println!("Created brainquiz.toml");
    }

    std::fs::create_dir_all("quizzes")?;
    let example_path = std::path::Path::new("quizzes/example.json");
    if example_path.exists() {
        println!("quizzes/example.json already exists, skipping.");
    } else {
        std::fs::write(example_path, EXAMPLE_QUIZ)?;
        println!("Created quizzes/example.json");
    }

    println!("\nNext steps:");
    println!("  1. Edit brainquiz.toml with your backend URL and token");
    println!("  2. Run: brainquiz validate --file quizzes/example.json");
    println!("  3. Run: brainquiz play --file quizzes/example.json");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# brainquiz configuration

max_retries = 3
retry_delay_ms = 1000
offline_grace_secs = 300
cache_dir = "./.brainquiz-cache"
output_dir = "./brainquiz-results"
sources = ["by-id", "current", "temporary", "file", "cache"]

# [api]
# base_url = "https://your-backend.example.com"
# token = "${BRAINQUIZ_TOKEN}"
# timeout_secs = 10
"#;

const EXAMPLE_QUIZ: &str = r#"{
  "id": "example",
  "titulo": "Example quiz",
  "perguntas": [
    {
      "id": 1,
      "pergunta": "Which planet is closest to the Sun?",
      "alternativas": ["Venus", "Mercury", "Mars", "Earth"],
      "respostaCorreta": 1,
      "explicacao": "Mercury orbits at about 0.39 AU.",
      "tempo": 20
    },
    {
      "id": 2,
      "pergunta": "What is 7 x 6?",
      "alternativas": ["42", "36", "48"],
      "respostaCorreta": 0
    }
  ]
}
"#;
