//! crates/logging/src/capture.rs
//! Thread-local threshold and line collection for tests and embedding.
//!
//! [`CaptureBackend`] answers enablement from a per-thread
//! [`LevelThreshold`] and appends every written line to a per-thread buffer
//! that [`drain_events`] empties. Each test thread therefore sees only its
//! own lines.

use std::borrow::Cow;
use std::cell::{Cell, RefCell};
use std::io;

use catalog::{Backend, BackendLevel, Catalog, DeclarationError, catalog_with};

use crate::config::LevelThreshold;

thread_local! {
    static THRESHOLD: Cell<LevelThreshold> = const { Cell::new(LevelThreshold::Trace) };
    #[allow(clippy::missing_const_for_thread_local)]
    static EVENTS: RefCell<Vec<CapturedLine>> = RefCell::new(Vec::new());
}

/// A line written through a [`CaptureBackend`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CapturedLine {
    /// Channel the line was written to.
    pub level: BackendLevel,
    /// Name of the logger that wrote it.
    pub logger: String,
    /// The rendered line.
    pub message: String,
}

/// Sets the threshold for the current thread.
///
/// Threads start with [`LevelThreshold::Trace`], capturing everything.
pub fn init(threshold: LevelThreshold) {
    THRESHOLD.with(|t| t.set(threshold));
}

/// The current thread's threshold.
pub fn threshold() -> LevelThreshold {
    THRESHOLD.with(Cell::get)
}

/// Drains all lines captured on the current thread, oldest first.
pub fn drain_events() -> Vec<CapturedLine> {
    EVENTS.with(|e| e.borrow_mut().drain(..).collect())
}

/// Backend that records lines in thread-local storage.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CaptureBackend {
    logger: Cow<'static, str>,
}

impl CaptureBackend {
    /// A backend tagging captured lines with `logger`.
    #[must_use]
    pub fn new<N>(logger: N) -> Self
    where
        N: Into<Cow<'static, str>>,
    {
        Self {
            logger: logger.into(),
        }
    }

    /// Name attached to captured lines.
    #[must_use]
    pub fn logger(&self) -> &str {
        &self.logger
    }
}

impl Backend for CaptureBackend {
    fn is_enabled(&self, level: BackendLevel) -> bool {
        threshold().allows(level)
    }

    fn log(&self, level: BackendLevel, message: &str) -> io::Result<()> {
        EVENTS.with(|e| {
            e.borrow_mut().push(CapturedLine {
                level,
                logger: self.logger.to_string(),
                message: message.to_owned(),
            });
        });
        Ok(())
    }
}

/// Builds catalog `C` on a capture backend named after the catalog.
///
/// # Errors
///
/// Returns the [`DeclarationError`] raised while validating `C`.
pub fn catalog<C>() -> Result<C, DeclarationError>
where
    C: Catalog<Backend = CaptureBackend>,
{
    catalog_with(CaptureBackend::new(C::NAME))
}
