#![deny(unsafe_code)]
#![deny(missing_docs)]

//! crates/test-support/src/lib.rs
//!
//! Shared test doubles for the semantic logging workspace.
//!
//! The backends here record what the catalog layer asks and writes so tests
//! can assert on enablement queries, channels and exact rendered lines.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use catalog::{Backend, BackendLevel};

/// One line received by a [`ScriptedBackend`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordedWrite {
    /// Channel the line was written to.
    pub level: BackendLevel,
    /// The rendered line.
    pub message: String,
}

/// Backend with per-channel switches that records every write.
#[derive(Debug, Default)]
pub struct ScriptedBackend {
    enabled: [AtomicBool; 5],
    queries: AtomicUsize,
    writes: Mutex<Vec<RecordedWrite>>,
}

fn slot(level: BackendLevel) -> usize {
    level as usize
}

impl ScriptedBackend {
    /// A backend with every channel disabled.
    #[must_use]
    pub fn disabled() -> Self {
        Self::default()
    }

    /// A backend with every channel enabled.
    #[must_use]
    pub fn enabled() -> Self {
        Self::enabling(&BackendLevel::ALL)
    }

    /// A backend with exactly `levels` enabled.
    #[must_use]
    pub fn enabling(levels: &[BackendLevel]) -> Self {
        let backend = Self::default();
        for level in levels {
            backend.set_enabled(*level, true);
        }
        backend
    }

    /// A backend enabling `threshold` and every less verbose channel.
    #[must_use]
    pub fn at_least(threshold: BackendLevel) -> Self {
        let levels: Vec<_> = BackendLevel::ALL
            .into_iter()
            .filter(|level| *level >= threshold)
            .collect();
        Self::enabling(&levels)
    }

    /// Flips one channel; later calls observe the new state.
    pub fn set_enabled(&self, level: BackendLevel, enabled: bool) {
        self.enabled[slot(level)].store(enabled, Ordering::SeqCst);
    }

    /// Number of enablement queries received.
    pub fn queries(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }

    /// Every write so far, oldest first.
    pub fn writes(&self) -> Vec<RecordedWrite> {
        self.writes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Only the rendered lines, oldest first.
    pub fn lines(&self) -> Vec<String> {
        self.writes().into_iter().map(|write| write.message).collect()
    }
}

impl Backend for ScriptedBackend {
    fn is_enabled(&self, level: BackendLevel) -> bool {
        self.queries.fetch_add(1, Ordering::SeqCst);
        self.enabled[slot(level)].load(Ordering::SeqCst)
    }

    fn log(&self, level: BackendLevel, message: &str) -> io::Result<()> {
        self.writes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(RecordedWrite {
                level,
                message: message.to_owned(),
            });
        Ok(())
    }
}

/// Backend that accepts every level and fails every write.
#[derive(Debug)]
pub struct FailingBackend {
    kind: io::ErrorKind,
    attempts: AtomicUsize,
}

impl FailingBackend {
    /// Fails with an error of `kind`.
    #[must_use]
    pub const fn new(kind: io::ErrorKind) -> Self {
        Self {
            kind,
            attempts: AtomicUsize::new(0),
        }
    }

    /// Number of writes attempted.
    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

impl Backend for FailingBackend {
    fn is_enabled(&self, _level: BackendLevel) -> bool {
        true
    }

    fn log(&self, _level: BackendLevel, _message: &str) -> io::Result<()> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(io::Error::new(self.kind, "scripted backend failure"))
    }
}

/// A value that counts how often it is formatted.
///
/// Clones share the counter.
#[derive(Clone, Debug)]
pub struct CountingValue {
    text: &'static str,
    calls: Arc<AtomicUsize>,
}

impl CountingValue {
    /// A value rendering as `text`.
    #[must_use]
    pub fn new(text: &'static str) -> Self {
        Self {
            text,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// How many times the value was formatted.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl fmt::Display for CountingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.calls.fetch_add(1, Ordering::SeqCst);
        f.write_str(self.text)
    }
}

/// Creates an empty temporary log file, removed on drop.
pub fn temp_log_file() -> io::Result<tempfile::NamedTempFile> {
    tempfile::Builder::new()
        .prefix("semlog-")
        .suffix(".log")
        .tempfile()
}

/// Reads a log file written by a test.
pub fn read_log(path: &Path) -> io::Result<String> {
    fs::read_to_string(path)
}
