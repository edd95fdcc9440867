use std::borrow::Cow;
use std::sync::{Mutex, PoisonError};

use logging::{LevelThreshold, SinkConfig};

use super::{MessageSink, State};

impl<W> MessageSink<W> {
    /// Creates a sink with the default [`SinkConfig`].
    #[must_use]
    pub fn new<N>(name: N, writer: W) -> Self
    where
        N: Into<Cow<'static, str>>,
    {
        Self::with_config(name, writer, SinkConfig::default())
    }

    /// Creates a sink enabling channels at or above `threshold`.
    #[must_use]
    pub fn with_threshold<N>(name: N, writer: W, threshold: LevelThreshold) -> Self
    where
        N: Into<Cow<'static, str>>,
    {
        Self::with_config(name, writer, SinkConfig::with_threshold(threshold))
    }

    /// Creates a sink from an explicit [`SinkConfig`].
    #[must_use]
    pub fn with_config<N>(name: N, writer: W, config: SinkConfig) -> Self
    where
        N: Into<Cow<'static, str>>,
    {
        Self {
            name: name.into(),
            state: Mutex::new(State {
                writer,
                scratch: String::new(),
            }),
            threshold: config.threshold,
        }
    }

    /// The configuration currently in effect.
    #[must_use]
    pub const fn config(&self) -> SinkConfig {
        SinkConfig::with_threshold(self.threshold)
    }

    /// Consumes the sink and returns the wrapped writer.
    ///
    /// A writer whose lock was poisoned by a panicking caller is returned
    /// as is.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.state
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
            .writer
    }

    /// Consumes the sink and returns the writer and its configuration.
    #[must_use]
    pub fn into_parts(self) -> (W, SinkConfig) {
        let config = self.config();
        (self.into_inner(), config)
    }

    /// Mutable access to the writer.
    pub fn get_mut(&mut self) -> &mut W {
        &mut self
            .state
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner)
            .writer
    }
}

impl<W> Default for MessageSink<W>
where
    W: Default,
{
    fn default() -> Self {
        Self::new("default", W::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_uses_default_config() {
        let sink = MessageSink::new("pump", Vec::<u8>::new());
        assert_eq!(sink.name(), "pump");
        assert_eq!(sink.config(), SinkConfig::default());
    }

    #[test]
    fn with_threshold_sets_the_threshold() {
        let sink = MessageSink::with_threshold("pump", Vec::<u8>::new(), LevelThreshold::Trace);
        assert_eq!(sink.threshold(), LevelThreshold::Trace);
        assert_eq!(sink.config().threshold, LevelThreshold::Trace);
    }

    #[test]
    fn into_parts_returns_writer_and_config() {
        let config = SinkConfig::with_threshold(LevelThreshold::Debug);
        let sink = MessageSink::with_config("pump", vec![1u8], config);
        let (writer, returned) = sink.into_parts();
        assert_eq!(writer, [1]);
        assert_eq!(returned, config);
    }

    #[test]
    fn get_mut_reaches_the_writer() {
        let mut sink = MessageSink::new("pump", Vec::<u8>::new());
        sink.get_mut().extend_from_slice(b"seed");
        assert_eq!(sink.into_inner(), b"seed");
    }
}
