//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for generated questions
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputArg {
    /// Bulleted terminal output
    Text,
    /// `{"questions": [...]}`
    Json,
    /// The page with the question panel injected
    Html,
}

impl From<OutputArg> for thinker_domain::OutputFormat {
    fn from(arg: OutputArg) -> Self {
        match arg {
            OutputArg::Text => thinker_domain::OutputFormat::Text,
            OutputArg::Json => thinker_domain::OutputFormat::Json,
            OutputArg::Html => thinker_domain::OutputFormat::Html,
        }
    }
}

/// CLI arguments for critical-thinker
#[derive(Parser, Debug)]
#[command(name = "critical-thinker")]
#[command(author, version, about = "Critical-thinking questions for the article you are reading")]
#[command(long_about = r#"
Critical Thinker reads an article page, sends its text to an
OpenAI-compatible chat API (DeepSeek by default) and shows three short
questions that challenge the article.

SOURCE is an http(s) URL, a path to a saved HTML page, or - for stdin.

Configuration files are loaded from (in priority order):
1. CRITICAL_THINKER_<SECTION>__<KEY>    Environment variables
2. --config <path>                      Explicit config file
3. ./critical-thinker.toml              Project-level config
4. ~/.config/critical-thinker/config.toml   Global config

Example:
  critical-thinker ask https://medium.com/@someone/some-post
  critical-thinker ask saved.html -o html --out annotated.html
  critical-thinker panel saved.html
  critical-thinker key set sk-...
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate questions once and print them
    Ask {
        /// URL, HTML file, or - for stdin
        source: String,

        /// Output format (defaults to [output].format)
        #[arg(short, long, value_enum)]
        output: Option<OutputArg>,

        /// Write output to a file instead of stdout
        #[arg(long, value_name = "PATH")]
        out: Option<PathBuf>,
    },

    /// Open the interactive question panel
    Panel {
        /// URL, HTML file, or - for stdin
        source: String,
    },

    /// Manage the stored API key
    Key {
        #[command(subcommand)]
        action: KeyAction,
    },

    /// Send a short request to verify the API key
    Check,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Store an API key
    Set { key: String },
    /// Remove the stored API key
    Clear,
    /// Show whether a key is stored
    Status,
    /// Store the bundled default key and test it
    Restore,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_ask() {
        let cli = Cli::parse_from([
            "critical-thinker",
            "-vv",
            "ask",
            "page.html",
            "-o",
            "json",
            "--out",
            "q.json",
        ]);
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Some(Command::Ask { source, output, out }) => {
                assert_eq!(source, "page.html");
                assert_eq!(output, Some(OutputArg::Json));
                assert_eq!(out, Some(PathBuf::from("q.json")));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_key_set() {
        let cli = Cli::parse_from(["critical-thinker", "key", "set", "sk-abc", "-q"]);
        assert!(cli.quiet);
        assert!(matches!(
            cli.command,
            Some(Command::Key { action: KeyAction::Set { ref key } }) if key == "sk-abc"
        ));
    }

    #[test]
    fn test_show_config_without_command() {
        let cli = Cli::parse_from(["critical-thinker", "--show-config"]);
        assert!(cli.show_config);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_output_arg_into_domain() {
        assert_eq!(
            thinker_domain::OutputFormat::from(OutputArg::Html),
            thinker_domain::OutputFormat::Html
        );
    }
}
