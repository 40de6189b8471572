//! HTML report generator.
//!
//! Produces a self-contained HTML file with all CSS inlined.

use anyhow::{Context, Result};
use std::path::Path;

use brainquiz_core::grading::PerformanceTier;
use brainquiz_core::report::SessionRecord;

/// Escape a string for safe HTML insertion.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Generate an HTML page from a session record.
pub fn generate_html(record: &SessionRecord) -> String {
    let grade = &record.grade;
    let tier = grade.tier();
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!(
        "<title>brainquiz result: {}</title>\n",
        html_escape(&record.quiz_title)
    ));
    html.push_str("<style>\n");
    html.push_str(CSS);
    html.push_str("</style>\n");
    html.push_str("</head>\n<body>\n");

    html.push_str("<header>\n");
    html.push_str(&format!("<h1>{}</h1>\n", html_escape(&record.quiz_title)));
    html.push_str(&format!(
        "<p class=\"meta\">{} questions | source: {} | {}</p>\n",
        grade.total,
        html_escape(record.source.as_deref().unwrap_or("unknown")),
        record.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    html.push_str("</header>\n");

    // Score
    html.push_str("<section class=\"score\">\n");
    html.push_str(&format!(
        "<p class=\"percent\" style=\"color: {}\">{}%</p>\n",
        tier.color(),
        grade.score_percent
    ));
    html.push_str(&format!(
        "<p class=\"tier\">{}</p>\n<p>{} of {} correct",
        tier, grade.correct_count, grade.total
    ));
    let unanswered = grade.unanswered_count();
    if unanswered > 0 {
        html.push_str(&format!(", {unanswered} not answered"));
    }
    html.push_str("</p>\n");
    html.push_str(&score_bar(grade.score_percent, tier));
    html.push_str("</section>\n");

    // Per-question detail
    html.push_str("<section class=\"details\">\n");
    html.push_str("<h2>Questions</h2>\n");
    html.push_str("<ol>\n");
    for detail in &grade.details {
        let class = if detail.is_correct { "pass" } else { "fail" };
        html.push_str(&format!("<li class=\"{class}\">\n"));
        html.push_str(&format!(
            "<p class=\"question\">{}</p>\n",
            html_escape(&detail.question_text)
        ));
        html.push_str(&format!(
            "<p>Your answer: <strong>{}</strong></p>\n",
            html_escape(&detail.chosen_text)
        ));
        if !detail.is_correct {
            html.push_str(&format!(
                "<p>Correct answer: <strong>{}</strong></p>\n",
                html_escape(&detail.correct_text)
            ));
        }
        if !detail.explanation.is_empty() {
            html.push_str(&format!(
                "<p class=\"explanation\">{}</p>\n",
                html_escape(&detail.explanation)
            ));
        }
        html.push_str("</li>\n");
    }
    html.push_str("</ol>\n");
    html.push_str("</section>\n");

    // Raw JSON
    html.push_str("<section class=\"raw-data\">\n");
    html.push_str("<details>\n<summary>Raw JSON Data</summary>\n");
    html.push_str("<pre><code>");
    html.push_str(&html_escape(
        &serde_json::to_string_pretty(record).unwrap_or_default(),
    ));
    html.push_str("</code></pre>\n");
    html.push_str("</details>\n</section>\n");

    html.push_str("</body>\n</html>");
    html
}

/// Write an HTML page for a session record to a file.
pub fn write_html_report(record: &SessionRecord, path: &Path) -> Result<()> {
    let html = generate_html(record);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, html)
        .with_context(|| format!("failed to write report to {}", path.display()))?;
    Ok(())
}

fn score_bar(percent: u32, tier: PerformanceTier) -> String {
    let bar_height = 24;
    let max_width = 400;
    let width = percent.min(100) as usize * max_width / 100;

    format!(
        "<svg width=\"{max_width}\" height=\"{bar_height}\" xmlns=\"http://www.w3.org/2000/svg\">\n  \
         <rect x=\"0\" y=\"0\" width=\"{max_width}\" height=\"{bar_height}\" fill=\"var(--border)\" rx=\"4\"/>\n  \
         <rect x=\"0\" y=\"0\" width=\"{width}\" height=\"{bar_height}\" fill=\"{}\" rx=\"4\"/>\n\
         </svg>\n",
        tier.color()
    )
}

const CSS: &str = r#"
:root { --bg: #fff; --fg: #1a1a1a; --border: #e5e7eb; --pass: #dcfce7; --fail: #fde2e2; }
@media (prefers-color-scheme: dark) {
  :root { --bg: #111827; --fg: #f9fafb; --border: #374151; --pass: #064e3b; --fail: #7f1d1d; }
}
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif; margin: 0 auto; max-width: 48rem; padding: 2rem; background: var(--bg); color: var(--fg); }
h1, h2 { margin-top: 2rem; }
.meta { color: #6b7280; }
.percent { font-size: 3rem; font-weight: bold; margin: 0; }
.tier { font-size: 1.25rem; margin: 0.25rem 0; }
ol { padding-left: 1.5rem; }
li { border: 1px solid var(--border); border-radius: 8px; padding: 0.5rem 1rem; margin: 0.75rem 0; }
.pass { background: var(--pass); }
.fail { background: var(--fail); }
.question { font-weight: bold; }
.explanation { font-style: italic; }
pre { overflow-x: auto; padding: 1rem; background: var(--border); border-radius: 8px; }
code { font-family: 'JetBrains Mono', 'Fira Code', monospace; font-size: 0.85rem; }
details { margin: 1rem 0; }
summary { cursor: pointer; font-weight: bold; }
svg { margin: 1rem 0; }
"#;
