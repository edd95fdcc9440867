use std::borrow::Cow;
use std::fmt;
use std::sync::Mutex;

use logging::LevelThreshold;

mod constructors;
mod writing;

/// Catalog backend that writes `LEVEL logger - line` records to a writer.
///
/// The writer sits behind a [`Mutex`] together with a scratch buffer that is
/// reused for every line, so the sink serves callers on several threads and
/// never interleaves two lines. Channels below the configured
/// [`LevelThreshold`] report as disabled. Every record ends with a newline,
/// one physical line per catalog call.
///
/// # Examples
///
/// ```
/// use catalog::{Backend, BackendLevel};
/// use logging_sink::MessageSink;
///
/// let sink = MessageSink::new("pump", Vec::new());
/// assert!(!sink.is_enabled(BackendLevel::Info));
/// sink.log(BackendLevel::Warn, "pressure value=9")?;
///
/// assert_eq!(sink.into_inner(), b"WARN pump - pressure value=9\n".to_vec());
/// # Ok::<(), std::io::Error>(())
/// ```
pub struct MessageSink<W> {
    name: Cow<'static, str>,
    state: Mutex<State<W>>,
    threshold: LevelThreshold,
}

struct State<W> {
    writer: W,
    scratch: String,
}

impl<W> MessageSink<W> {
    /// Logger name written into every record.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the current [`LevelThreshold`].
    #[must_use]
    pub const fn threshold(&self) -> LevelThreshold {
        self.threshold
    }

    /// Updates the threshold used for subsequent enablement queries.
    pub fn set_threshold(&mut self, threshold: LevelThreshold) {
        self.threshold = threshold;
    }
}

impl<W> fmt::Debug for MessageSink<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessageSink")
            .field("name", &self.name)
            .field("threshold", &self.threshold)
            .finish_non_exhaustive()
    }
}
