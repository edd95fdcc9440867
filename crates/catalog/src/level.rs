//! crates/catalog/src/level.rs
//! Severity tags attached to catalog operations and the backend channels they map to.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::backend::Backend;

/// Severity declared for a catalog operation.
///
/// The five ordinary levels form a strict chain. [`Severity::Audit`] and
/// [`Severity::Fatal`] rank alongside [`Severity::Error`] but carry their own
/// enablement rules, see [`is_enabled`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum Severity {
    /// Fine grained tracing.
    Trace,
    /// Diagnostics useful while developing.
    Debug,
    /// Normal operational events.
    Info,
    /// Something unexpected that the application recovered from.
    Warn,
    /// A failure.
    Error,
    /// Security or compliance relevant events.
    Audit,
    /// Unrecoverable failures. Always emitted.
    Fatal,
}

impl Severity {
    /// Alias used by catalog declarations.
    pub const TRACE: Self = Self::Trace;
    /// Alias used by catalog declarations.
    pub const DEBUG: Self = Self::Debug;
    /// Alias used by catalog declarations.
    pub const INFO: Self = Self::Info;
    /// Alias used by catalog declarations.
    pub const WARN: Self = Self::Warn;
    /// Alias used by catalog declarations.
    pub const ERROR: Self = Self::Error;
    /// Alias used by catalog declarations.
    pub const AUDIT: Self = Self::Audit;
    /// Alias used by catalog declarations.
    pub const FATAL: Self = Self::Fatal;

    /// Every severity, lowest rank first.
    pub const ALL: [Self; 7] = [
        Self::Trace,
        Self::Debug,
        Self::Info,
        Self::Warn,
        Self::Error,
        Self::Audit,
        Self::Fatal,
    ];

    /// Position in the severity preorder.
    ///
    /// `Error`, `Audit` and `Fatal` share the top rank.
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Trace => 0,
            Self::Debug => 1,
            Self::Info => 2,
            Self::Warn => 3,
            Self::Error | Self::Audit | Self::Fatal => 4,
        }
    }

    /// Returns `true` when `self` ranks at or above `other`.
    #[must_use]
    pub const fn is_at_least(self, other: Self) -> bool {
        self.rank() >= other.rank()
    }

    /// Backend channel that receives lines of this severity.
    ///
    /// Backends have no audit or fatal channel, so both degrade to
    /// [`BackendLevel::Error`].
    #[must_use]
    pub const fn backend_level(self) -> BackendLevel {
        match self {
            Self::Trace => BackendLevel::Trace,
            Self::Debug => BackendLevel::Debug,
            Self::Info => BackendLevel::Info,
            Self::Warn => BackendLevel::Warn,
            Self::Error | Self::Audit | Self::Fatal => BackendLevel::Error,
        }
    }

    /// Upper-case name of the severity.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "TRACE",
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
            Self::Audit => "AUDIT",
            Self::Fatal => "FATAL",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a level name is not recognised.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("unknown log level '{name}'")]
pub struct ParseLevelError {
    name: String,
}

impl ParseLevelError {
    pub(crate) fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
        }
    }

    /// The rejected input.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl FromStr for Severity {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|severity| severity.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseLevelError::new(s))
    }
}

/// Channels every backend logger exposes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum BackendLevel {
    /// Trace channel.
    Trace,
    /// Debug channel.
    Debug,
    /// Info channel.
    Info,
    /// Warn channel.
    Warn,
    /// Error channel.
    Error,
}

impl BackendLevel {
    /// Every channel, most verbose first.
    pub const ALL: [Self; 5] = [
        Self::Trace,
        Self::Debug,
        Self::Info,
        Self::Warn,
        Self::Error,
    ];

    /// Upper-case name of the channel.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "TRACE",
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
        }
    }
}

impl fmt::Display for BackendLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BackendLevel {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseLevelError::new(s))
    }
}

/// Reports whether `severity` is currently enabled on `backend`.
///
/// Fatal never consults the backend. Audit follows the error channel.
pub fn is_enabled<B>(severity: Severity, backend: &B) -> bool
where
    B: Backend + ?Sized,
{
    match severity {
        Severity::Fatal => true,
        other => backend.is_enabled(other.backend_level()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::io;

    struct Switches {
        enabled: [bool; 5],
        queries: Cell<usize>,
    }

    impl Switches {
        fn only(level: BackendLevel) -> Self {
            let mut enabled = [false; 5];
            enabled[level as usize] = true;
            Self {
                enabled,
                queries: Cell::new(0),
            }
        }

        fn none() -> Self {
            Self {
                enabled: [false; 5],
                queries: Cell::new(0),
            }
        }
    }

    impl Backend for Switches {
        fn is_enabled(&self, level: BackendLevel) -> bool {
            self.queries.set(self.queries.get() + 1);
            self.enabled[level as usize]
        }

        fn log(&self, _level: BackendLevel, _message: &str) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn ranks_follow_declared_chain() {
        assert!(Severity::Debug.is_at_least(Severity::Trace));
        assert!(Severity::Warn.is_at_least(Severity::Info));
        assert!(!Severity::Info.is_at_least(Severity::Warn));
        assert!(Severity::Audit.is_at_least(Severity::Error));
        assert!(Severity::Error.is_at_least(Severity::Fatal));
        assert_eq!(Severity::Fatal.rank(), Severity::Audit.rank());
    }

    #[test]
    fn backend_level_mapping_is_lossy_at_the_top() {
        assert_eq!(Severity::Trace.backend_level(), BackendLevel::Trace);
        assert_eq!(Severity::Debug.backend_level(), BackendLevel::Debug);
        assert_eq!(Severity::Info.backend_level(), BackendLevel::Info);
        assert_eq!(Severity::Warn.backend_level(), BackendLevel::Warn);
        assert_eq!(Severity::Error.backend_level(), BackendLevel::Error);
        assert_eq!(Severity::Audit.backend_level(), BackendLevel::Error);
        assert_eq!(Severity::Fatal.backend_level(), BackendLevel::Error);
    }

    #[test]
    fn each_severity_follows_its_own_channel() {
        for severity in Severity::ALL {
            let channel = severity.backend_level();
            for level in BackendLevel::ALL {
                let backend = Switches::only(level);
                let expected = severity == Severity::Fatal || level == channel;
                assert_eq!(
                    is_enabled(severity, &backend),
                    expected,
                    "{severity} with only {level} enabled"
                );
            }
        }
    }

    #[test]
    fn fatal_skips_the_backend_query() {
        let backend = Switches::none();
        assert!(is_enabled(Severity::Fatal, &backend));
        assert_eq!(backend.queries.get(), 0);
    }

    #[test]
    fn audit_is_disabled_with_error_channel_off() {
        let backend = Switches::only(BackendLevel::Warn);
        assert!(!is_enabled(Severity::Audit, &backend));
        assert!(!is_enabled(Severity::Error, &backend));
    }

    #[test]
    fn names_parse_case_insensitively() {
        assert_eq!("audit".parse::<Severity>(), Ok(Severity::Audit));
        assert_eq!("FATAL".parse::<Severity>(), Ok(Severity::Fatal));
        assert_eq!("Warn".parse::<BackendLevel>(), Ok(BackendLevel::Warn));

        let err = "verbose".parse::<Severity>().unwrap_err();
        assert_eq!(err.name(), "verbose");
        assert_eq!(err.to_string(), "unknown log level 'verbose'");
    }

    #[test]
    fn display_uses_upper_case_names() {
        assert_eq!(Severity::Info.to_string(), "INFO");
        assert_eq!(BackendLevel::Error.to_string(), "ERROR");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_uses_level_names() {
        assert_eq!(
            serde_json::to_string(&Severity::Audit).expect("serialise"),
            "\"AUDIT\""
        );
        assert_eq!(
            serde_json::to_string(&BackendLevel::Warn).expect("serialise"),
            "\"warn\""
        );
        let parsed: Severity = serde_json::from_str("\"FATAL\"").expect("deserialise");
        assert_eq!(parsed, Severity::Fatal);
    }
}
