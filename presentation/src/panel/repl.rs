//! REPL (Read-Eval-Print Loop) for the interactive question panel
//!
//! Commands are read one at a time and each request completes before the
//! next prompt, so a second request can't start while one is loading.

use crate::config::PanelConfig;
use crate::output::console::ConsoleFormatter;
use colored::Colorize;
use reedline::{DefaultPrompt, DefaultPromptSegment, FileBackedHistory, Reedline, Signal};
use thinker_application::{PanelOutcome, QuestionPanel, QuestionSource};
use tracing::warn;

const HISTORY_CAPACITY: usize = 100;

/// A panel command typed at the prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelCommand {
    Regenerate,
    Retry,
    Help,
    Quit,
    Unknown(String),
}

impl PanelCommand {
    /// Parse a trimmed, non-empty input line
    pub fn parse(line: &str) -> Self {
        match line {
            "/regenerate" | "/r" => PanelCommand::Regenerate,
            "/retry" => PanelCommand::Retry,
            "/help" | "/h" | "/?" => PanelCommand::Help,
            "/quit" | "/exit" | "/q" => PanelCommand::Quit,
            other => PanelCommand::Unknown(other.to_string()),
        }
    }
}

/// Interactive question panel
pub struct PanelRepl<'a> {
    source: &'a dyn QuestionSource,
    panel: QuestionPanel,
    config: PanelConfig,
    title: Option<String>,
}

impl<'a> PanelRepl<'a> {
    pub fn new(source: &'a dyn QuestionSource, max_regenerations: u32) -> Self {
        Self {
            source,
            panel: QuestionPanel::new(max_regenerations),
            config: PanelConfig::default(),
            title: None,
        }
    }

    pub fn with_config(mut self, config: PanelConfig) -> Self {
        self.config = config;
        self
    }

    /// Page title shown in the welcome banner
    pub fn with_title(mut self, title: Option<String>) -> Self {
        self.title = title;
        self
    }

    pub fn panel(&self) -> &QuestionPanel {
        &self.panel
    }

    /// Run the interactive panel until `/quit` or EOF
    pub async fn run(&mut self) -> std::io::Result<()> {
        let mut line_editor = self.line_editor();
        let prompt = DefaultPrompt::new(
            DefaultPromptSegment::Basic("panel".to_string()),
            DefaultPromptSegment::Empty,
        );

        self.print_welcome();
        self.panel.open(self.source).await;
        self.render();

        loop {
            match line_editor.read_line(&prompt)? {
                Signal::Success(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    if self.handle_command(PanelCommand::parse(line)).await {
                        break;
                    }
                }
                Signal::CtrlC => {
                    println!("^C");
                    continue;
                }
                Signal::CtrlD => {
                    println!("Bye!");
                    break;
                }
            }
        }

        Ok(())
    }

    fn line_editor(&self) -> Reedline {
        let editor = Reedline::create();
        let Some(path) = &self.config.history_file else {
            return editor;
        };
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        match FileBackedHistory::with_file(HISTORY_CAPACITY, path.clone()) {
            Ok(history) => editor.with_history(Box::new(history)),
            Err(e) => {
                warn!("Could not open panel history {}: {}", path.display(), e);
                editor
            }
        }
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│      Critical Thinker - Question Panel      │");
        println!("╰─────────────────────────────────────────────╯");
        if let Some(title) = &self.title {
            println!();
            println!("Article: {}", title.bold());
        }
        println!();
        Self::print_help();
    }

    fn print_help() {
        println!("Commands:");
        println!("  /regenerate, /r  - Generate different questions");
        println!("  /retry           - Retry after an API error");
        println!("  /help            - Show this help");
        println!("  /quit            - Exit the panel");
        println!();
    }

    fn render(&self) {
        println!();
        print!("{}", ConsoleFormatter::format_panel(&self.panel));
        println!();
    }

    /// Handle one command. Returns true if the panel should close.
    async fn handle_command(&mut self, command: PanelCommand) -> bool {
        match command {
            PanelCommand::Quit => {
                println!("Bye!");
                return true;
            }
            PanelCommand::Help => Self::print_help(),
            PanelCommand::Regenerate => {
                let outcome = self.panel.regenerate(self.source).await;
                self.report(outcome);
            }
            PanelCommand::Retry => {
                let outcome = self.panel.retry(self.source).await;
                self.report(outcome);
            }
            PanelCommand::Unknown(cmd) => {
                println!("Unknown command: {}", cmd);
                println!("Type /help for available commands");
            }
        }
        false
    }

    fn report(&self, outcome: PanelOutcome) {
        match outcome {
            PanelOutcome::Updated | PanelOutcome::Failed => self.render(),
            PanelOutcome::LimitReached => {
                println!("{}", self.panel.remaining_message().yellow());
            }
            PanelOutcome::NothingToRetry => println!("Nothing to retry."),
            PanelOutcome::AlreadyOpen => {}
        }
    }
}
