//! CLI entrypoint for Critical Thinker
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::{CommandFactory, Parser};
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use thinker_application::{
    CheckConnectionUseCase, DiagnosticsSink, FetchQuestionsUseCase, KeyStore, LlmGateway,
    NoDiagnostics, NoProgress, ProgressNotifier, QuestionPanel,
};
use thinker_domain::{OutputFormat, Severity};
use thinker_infrastructure::{
    ConfigLoader, DocumentLoader, DocumentSource, FileConfig, FileKeyValueStore, HtmlDocument,
    JsonlDiagnostics, LoadedDocument, OpenAiGateway, inject_root_container,
};
use thinker_presentation::{
    Cli, Command, ConsoleFormatter, KeyAction, PanelConfig, PanelHtml, PanelRepl,
    ProgressReporter, SimpleProgress,
};
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    let _log_guard = init_logging(cli.verbose, config.logging.file.as_deref())?;
    info!("Starting Critical Thinker");

    check_config(&config)?;
    if !config.output.color {
        colored::control::set_override(false);
    }

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    // === Dependency Injection ===
    let app = App::build(&config)?;
    let progress: Box<dyn ProgressNotifier> = if cli.quiet {
        Box::new(NoProgress)
    } else if std::io::stderr().is_terminal() {
        Box::new(ProgressReporter::new())
    } else {
        Box::new(SimpleProgress)
    };

    match command {
        Command::Ask {
            source,
            output,
            out,
        } => {
            let format = output.map(Into::into).unwrap_or(config.output.format);
            let loaded = app.load(&source).await?;
            let document = HtmlDocument::parse(&loaded.html);
            let rendered = match format {
                OutputFormat::Text | OutputFormat::Json => {
                    let questions = app
                        .questions
                        .execute_with_progress(&document, None, progress.as_ref())
                        .await;
                    if format == OutputFormat::Json {
                        ConsoleFormatter::format_json(&questions)
                    } else {
                        ConsoleFormatter::format_questions(&questions)
                    }
                }
                OutputFormat::Html => {
                    let source = app.questions.for_document(&document, progress.as_ref());
                    let mut panel = QuestionPanel::new(app.questions.config().max_regenerations);
                    panel.open(&source).await;
                    inject_root_container(&loaded.html, &PanelHtml::render(&panel))
                }
            };
            write_output(&rendered, out.as_deref())?;
        }

        Command::Panel { source } => {
            let loaded = app.load(&source).await?;
            let document = HtmlDocument::parse(&loaded.html);
            let source = app.questions.for_document(&document, progress.as_ref());
            let panel_config = PanelConfig {
                show_progress: !cli.quiet,
                ..PanelConfig::default()
            };
            PanelRepl::new(&source, app.questions.config().max_regenerations)
                .with_config(panel_config)
                .with_title(document.title())
                .run()
                .await?;
        }

        Command::Key { action } => match action {
            KeyAction::Set { key } => {
                app.key_store.set(&key).await?;
                if app.key_store.is_persistent() {
                    println!("API key saved.");
                } else {
                    println!("No key storage available; the bundled key stays in use.");
                }
            }
            KeyAction::Clear => {
                app.key_store.clear().await?;
                println!("API key cleared.");
            }
            KeyAction::Status => {
                match &app.storage_path {
                    Some(path) => println!("Storage: {}", path.display()),
                    None => println!("Storage: unavailable"),
                }
                if app.key_store.is_persistent() && app.key_store.exists().await {
                    println!("A stored API key is in use.");
                } else {
                    println!("No stored API key; the bundled key is in use.");
                }
            }
            KeyAction::Restore => {
                let report = app.check.restore_bundled_key().await;
                print!("{}", ConsoleFormatter::format_report(&report));
                if !report.success {
                    bail!("API connection check failed");
                }
            }
        },

        Command::Check => {
            let report = app.check.execute().await;
            print!("{}", ConsoleFormatter::format_report(&report));
            if !report.success {
                bail!("API connection check failed");
            }
        }
    }

    Ok(())
}

/// Wired use cases and adapters for one run
struct App {
    questions: FetchQuestionsUseCase,
    check: CheckConnectionUseCase,
    key_store: Arc<KeyStore>,
    loader: DocumentLoader,
    storage_path: Option<PathBuf>,
}

impl App {
    fn build(config: &FileConfig) -> Result<Self> {
        let storage_path = config
            .credential
            .storage_file
            .clone()
            .or_else(ConfigLoader::default_storage_path);
        let bundled = config.credential.to_bundled_credential();
        let key_store = Arc::new(match &storage_path {
            Some(path) => KeyStore::new(Arc::new(FileKeyValueStore::new(path)), bundled),
            None => {
                warn!("No data directory found; API key changes will not persist");
                KeyStore::without_store(bundled)
            }
        });

        let diagnostics: Arc<dyn DiagnosticsSink> = match &config.logging.diagnostics_file {
            Some(path) => match JsonlDiagnostics::open(path) {
                Some(sink) => Arc::new(sink),
                None => Arc::new(NoDiagnostics),
            },
            None => Arc::new(NoDiagnostics),
        };

        let timeout = config.api.timeout_seconds.map(Duration::from_secs);
        let gateway: Arc<dyn LlmGateway> = Arc::new(
            OpenAiGateway::new(&config.api.endpoint, timeout)
                .context("Failed to create API client")?,
        );

        let questions = FetchQuestionsUseCase::new(
            gateway.clone(),
            key_store.clone(),
            config.generation_config(),
        )
        .with_diagnostics(diagnostics.clone());
        let check = CheckConnectionUseCase::new(gateway, key_store.clone(), &config.api.model)
            .with_diagnostics(diagnostics);

        Ok(Self {
            questions,
            check,
            key_store,
            loader: DocumentLoader::new(config.document.allowed_hosts.clone()),
            storage_path,
        })
    }

    async fn load(&self, source: &str) -> Result<LoadedDocument> {
        Ok(self.loader.load(DocumentSource::parse(source)).await?)
    }
}

/// Install the stderr subscriber, plus a file writer when configured.
fn init_logging(verbose: u8, file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    let (file_layer, guard) = match file {
        Some(path) => {
            let dir = path.parent().filter(|p| !p.as_os_str().is_empty());
            let dir = dir.unwrap_or_else(|| Path::new("."));
            let name = path
                .file_name()
                .with_context(|| format!("Invalid log file path: {}", path.display()))?;
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
            let (writer, guard) =
                tracing_appender::non_blocking(tracing_appender::rolling::never(dir, name));
            let layer = fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(file_layer)
        .init();

    Ok(guard)
}

/// Print config warnings; stop on errors.
fn check_config(config: &FileConfig) -> Result<()> {
    let issues = config.validate();
    for issue in issues.iter().filter(|i| i.severity == Severity::Warning) {
        eprintln!("warning: {}", issue.message);
    }
    let errors: Vec<_> = issues.iter().filter(|i| i.is_error()).collect();
    if !errors.is_empty() {
        for issue in &errors {
            eprintln!("error: {}", issue.message);
        }
        bail!("Invalid configuration ({} error(s))", errors.len());
    }
    Ok(())
}

fn write_output(rendered: &str, out: Option<&Path>) -> Result<()> {
    match out {
        Some(path) => {
            std::fs::write(path, rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote {}", path.display());
        }
        None => {
            print!("{}", rendered);
            if !rendered.ends_with('\n') {
                println!();
            }
        }
    }
    Ok(())
}
