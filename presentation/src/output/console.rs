//! Console output formatter for question sets

use colored::Colorize;
use scraper::Html;
use thinker_application::{ConnectionReport, QuestionPanel};
use thinker_domain::QuestionSet;

pub const PANEL_TITLE: &str = "Critical Thinking Questions";

/// Formats questions and reports for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Bulleted question list
    pub fn format_questions(questions: &QuestionSet) -> String {
        let mut output = String::new();
        for question in questions {
            output.push_str(&format!(
                "  {} {}\n",
                "•".green(),
                Self::indent_continuation(&Self::plain_text(question))
            ));
        }
        if questions.is_fallback() {
            output.push_str(&format!(
                "\n{}\n",
                "Could not generate questions for this page; showing general questions.".dimmed()
            ));
        }
        output
    }

    /// `{"questions": [...], "fallback": bool}`
    pub fn format_json(questions: &QuestionSet) -> String {
        serde_json::to_string_pretty(questions).unwrap_or_else(|_| "{}".to_string())
    }

    /// Full panel view: header, questions, remaining regenerations, error
    pub fn format_panel(panel: &QuestionPanel) -> String {
        let mut output = String::new();

        output.push_str(&Self::header(PANEL_TITLE));
        output.push('\n');

        if let Some(error) = panel.error() {
            output.push_str(&format!("{} {}\n", "Error:".red().bold(), error));
            output.push_str(&format!(
                "{}\n\n",
                "Type /retry to try again.".yellow()
            ));
        }

        match panel.questions() {
            Some(questions) => output.push_str(&Self::format_questions(questions)),
            None => output.push_str(&format!("  {}\n", "No questions yet.".dimmed())),
        }

        output.push_str(&format!("\n{}\n", panel.remaining_message().dimmed()));
        output.push_str(&Self::footer());
        output
    }

    /// Connection check result
    pub fn format_report(report: &ConnectionReport) -> String {
        let mut output = if report.success {
            format!("{} {}\n", "v".green(), report.message)
        } else {
            format!("{} {}\n", "x".red(), report.message)
        };
        if let Some(reply) = &report.reply {
            output.push_str(&format!("  {} {}\n", "Reply:".dimmed(), reply));
        }
        output
    }

    /// Text content of an HTML fragment (list items may carry inline markup)
    pub fn plain_text(fragment: &str) -> String {
        if !fragment.contains('<') {
            return fragment.to_string();
        }
        Html::parse_fragment(fragment)
            .root_element()
            .text()
            .collect::<String>()
            .trim()
            .to_string()
    }

    fn header(title: &str) -> String {
        let line = "─".repeat(48);
        format!("{}\n{}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn footer() -> String {
        format!("{}\n", "─".repeat(48).cyan())
    }

    /// Indent wrapped lines of a multi-line entry under its bullet
    fn indent_continuation(text: &str) -> String {
        text.lines().collect::<Vec<_>>().join("\n    ")
    }
}
