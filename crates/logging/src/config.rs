//! crates/logging/src/config.rs
//! Threshold configuration shared by the bundled backends.

use std::fmt;
use std::str::FromStr;

use catalog::BackendLevel;
use thiserror::Error;

/// Least severe backend channel a backend lets through.
///
/// Variants are ordered from quietest to most verbose, so
/// `LevelThreshold::Warn < LevelThreshold::Debug`.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LevelThreshold {
    /// Nothing is enabled. Fatal lines are still written.
    Off,
    /// Only the error channel.
    Error,
    /// Warnings and errors.
    #[default]
    Warn,
    /// Informational lines and above.
    Info,
    /// Debug lines and above.
    Debug,
    /// Every channel.
    Trace,
}

impl LevelThreshold {
    /// Every threshold, quietest first.
    pub const ALL: [Self; 6] = [
        Self::Off,
        Self::Error,
        Self::Warn,
        Self::Info,
        Self::Debug,
        Self::Trace,
    ];

    /// Most verbose channel that is still enabled, if any.
    #[must_use]
    pub const fn max_level(self) -> Option<BackendLevel> {
        match self {
            Self::Off => None,
            Self::Error => Some(BackendLevel::Error),
            Self::Warn => Some(BackendLevel::Warn),
            Self::Info => Some(BackendLevel::Info),
            Self::Debug => Some(BackendLevel::Debug),
            Self::Trace => Some(BackendLevel::Trace),
        }
    }

    /// Returns `true` when lines on `level` pass the threshold.
    #[must_use]
    pub fn allows(self, level: BackendLevel) -> bool {
        self.max_level().is_some_and(|max| level >= max)
    }

    /// Lower-case name, as accepted by [`FromStr`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

impl fmt::Display for LevelThreshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a threshold name is not recognised.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("unknown log threshold '{input}', expected one of off, error, warn, info, debug, trace")]
pub struct ParseThresholdError {
    input: String,
}

impl ParseThresholdError {
    /// The rejected input.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl FromStr for LevelThreshold {
    type Err = ParseThresholdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|threshold| threshold.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseThresholdError {
                input: s.to_owned(),
            })
    }
}

/// Settings for a writer-backed sink.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SinkConfig {
    /// Channels below this threshold are reported as disabled.
    pub threshold: LevelThreshold,
}

impl SinkConfig {
    /// Configuration with `threshold`.
    #[must_use]
    pub const fn with_threshold(threshold: LevelThreshold) -> Self {
        Self { threshold }
    }
}
