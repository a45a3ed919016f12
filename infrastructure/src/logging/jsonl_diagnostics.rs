//! Failure diagnostics as JSON Lines.
//!
//! A failed generation or connection check becomes one line:
//!
//! ```text
//! {"type":"generation_failed","timestamp":"2025-01-01T00:00:00.000Z","kind":"gateway",...}
//! ```
//!
//! Object payloads are flattened next to `type` and `timestamp`; anything
//! else lands under `data`.

use chrono::{SecondsFormat, Utc};
use serde_json::{Map, Value};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use thinker_application::{DiagnosticEvent, DiagnosticsSink};
use tracing::{debug, warn};

/// Appends diagnostic events to a `.jsonl` file.
pub struct JsonlDiagnostics {
    file: Mutex<File>,
    path: PathBuf,
}

impl JsonlDiagnostics {
    /// Open `path` for appending, creating it and its directory.
    ///
    /// Diagnostics are optional, so a path that can't be opened only logs
    /// a warning and yields `None`.
    pub fn open(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();
        let opened = path
            .parent()
            .filter(|dir| !dir.as_os_str().is_empty())
            .map_or(Ok(()), std::fs::create_dir_all)
            .and_then(|()| OpenOptions::new().create(true).append(true).open(path));

        match opened {
            Ok(file) => {
                debug!("Recording diagnostics to {}", path.display());
                Some(Self {
                    file: Mutex::new(file),
                    path: path.to_path_buf(),
                })
            }
            Err(e) => {
                warn!("Diagnostics disabled, cannot open {}: {}", path.display(), e);
                None
            }
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Build the JSON object written for one event.
fn to_record(event: DiagnosticEvent, timestamp: String) -> Value {
    let mut record = Map::new();
    record.insert("type".into(), Value::from(event.event_type));
    record.insert("timestamp".into(), Value::from(timestamp));
    match event.payload {
        Value::Object(fields) => {
            for (key, value) in fields {
                record.entry(key).or_insert(value);
            }
        }
        Value::Null => {}
        other => {
            record.insert("data".into(), other);
        }
    }
    Value::Object(record)
}

impl DiagnosticsSink for JsonlDiagnostics {
    fn record(&self, event: DiagnosticEvent) {
        let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
        let mut line = to_record(event, timestamp).to_string();
        line.push('\n');

        // Whole line in a single write
        let Ok(mut file) = self.file.lock() else {
            return;
        };
        if let Err(e) = file.write_all(line.as_bytes()) {
            warn!("Failed to write diagnostics to {}: {}", self.path.display(), e);
        }
    }
}
