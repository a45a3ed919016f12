//! Progress notification port
//!
//! Defines the interface for reporting progress while questions are generated.

/// One step of a generation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationStep {
    Extract,
    Credential,
    Request,
    Parse,
}

impl GenerationStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            GenerationStep::Extract => "extract",
            GenerationStep::Credential => "credential",
            GenerationStep::Request => "request",
            GenerationStep::Parse => "parse",
        }
    }

    /// Human-readable label for progress displays.
    pub fn label(&self) -> &'static str {
        match self {
            GenerationStep::Extract => "Reading article",
            GenerationStep::Credential => "Loading API key",
            GenerationStep::Request => "Generating questions",
            GenerationStep::Parse => "Parsing answer",
        }
    }
}

/// Callback for progress updates during generation
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (spinner, plain log lines, etc.)
pub trait ProgressNotifier: Send + Sync {
    /// Called when a step starts
    fn on_step_start(&self, step: GenerationStep);

    /// Called when a step finishes
    fn on_step_complete(&self, step: GenerationStep, success: bool);

    /// Called once the request has produced its final question set
    fn on_finished(&self, _fallback: bool) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_step_start(&self, _step: GenerationStep) {}
    fn on_step_complete(&self, _step: GenerationStep, _success: bool) {}
}
