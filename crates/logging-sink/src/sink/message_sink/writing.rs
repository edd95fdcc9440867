use std::io::{self, Write};
use std::sync::PoisonError;

use catalog::{Backend, BackendLevel};

use super::MessageSink;

impl<W> MessageSink<W>
where
    W: Write,
{
    /// Writes one newline-terminated record.
    ///
    /// The threshold is not consulted; callers that bypass the catalog layer
    /// decide for themselves what to write.
    pub fn write_line(&self, level: BackendLevel, line: &str) -> io::Result<()> {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        let state = &mut *state;

        state.scratch.clear();
        state.scratch.push_str(level.as_str());
        state.scratch.push(' ');
        state.scratch.push_str(&self.name);
        state.scratch.push_str(" - ");
        state.scratch.push_str(line);
        state.scratch.push('\n');

        state.writer.write_all(state.scratch.as_bytes())
    }

    /// Flushes the underlying writer.
    pub fn flush(&self) -> io::Result<()> {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .writer
            .flush()
    }
}

impl<W> Backend for MessageSink<W>
where
    W: Write,
{
    fn is_enabled(&self, level: BackendLevel) -> bool {
        self.threshold.allows(level)
    }

    fn log(&self, level: BackendLevel, message: &str) -> io::Result<()> {
        self.write_line(level, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use logging::LevelThreshold;

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn records_carry_level_and_name() {
        let sink = MessageSink::new("pump", Vec::<u8>::new());
        sink.write_line(BackendLevel::Error, "jammed")
            .expect("write succeeds");
        sink.write_line(BackendLevel::Info, "started rpm=1200")
            .expect("write succeeds");

        assert_eq!(
            String::from_utf8(sink.into_inner()).expect("utf8"),
            "ERROR pump - jammed\nINFO pump - started rpm=1200\n"
        );
    }

    #[test]
    fn enablement_follows_threshold() {
        let mut sink = MessageSink::with_threshold("pump", Vec::<u8>::new(), LevelThreshold::Error);
        assert!(!sink.is_enabled(BackendLevel::Warn));
        assert!(sink.is_enabled(BackendLevel::Error));

        sink.set_threshold(LevelThreshold::Trace);
        assert!(sink.is_enabled(BackendLevel::Trace));
    }

    #[test]
    fn writer_errors_propagate() {
        let sink = MessageSink::new("pump", BrokenPipe);
        let err = sink
            .log(BackendLevel::Error, "jammed")
            .expect_err("writer fails");
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
