//! Progress reporting for question generation

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;
use thinker_application::{GenerationStep, ProgressNotifier};

/// Spinner on stderr that names the current step
pub struct ProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_step_start(&self, step: GenerationStep) {
        let Ok(mut guard) = self.spinner.lock() else {
            return;
        };
        let spinner = guard.get_or_insert_with(|| {
            let pb = ProgressBar::new_spinner();
            pb.set_style(Self::spinner_style());
            pb.enable_steady_tick(Duration::from_millis(100));
            pb
        });
        spinner.set_message(format!("{}...", step.label()));
    }

    fn on_step_complete(&self, step: GenerationStep, success: bool) {
        if success {
            return;
        }
        if let Ok(guard) = self.spinner.lock()
            && let Some(pb) = guard.as_ref()
        {
            pb.set_message(format!("{} {}", "x".red(), step.label()));
        }
    }

    fn on_finished(&self, _fallback: bool) {
        if let Ok(mut guard) = self.spinner.lock()
            && let Some(pb) = guard.take()
        {
            pb.finish_and_clear();
        }
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl ProgressNotifier for SimpleProgress {
    fn on_step_start(&self, step: GenerationStep) {
        eprintln!("{} {}", "->".cyan(), step.label());
    }

    fn on_step_complete(&self, step: GenerationStep, success: bool) {
        if !success {
            eprintln!("  {} {} failed", "x".red(), step.label());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_lifecycle() {
        let reporter = ProgressReporter::new();
        reporter.on_step_start(GenerationStep::Extract);
        reporter.on_step_complete(GenerationStep::Extract, true);
        reporter.on_step_start(GenerationStep::Request);
        assert!(reporter.spinner.lock().unwrap().is_some());

        reporter.on_finished(false);
        assert!(reporter.spinner.lock().unwrap().is_none());
    }
}
