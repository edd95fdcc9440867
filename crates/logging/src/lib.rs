#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` provides the ready-made backends catalog loggers write to and
//! the threshold configuration those backends share.
//!
//! # Design
//!
//! - [`LevelThreshold`] is the single knob deciding which backend channels
//!   are enabled. [`SinkConfig`] carries it for writer sinks and parses from
//!   configuration files with the `serde` feature.
//! - [`capture`] keeps a threshold and the written lines in thread-local
//!   storage. Tests drive catalogs through [`capture::CaptureBackend`] and
//!   inspect [`capture::drain_events`].
//! - With the `tracing` feature (on by default) [`TracingBackend`] forwards
//!   lines to the tracing dispatcher, [`catalog()`] and [`catalog_for`] build
//!   catalogs on it, and [`init_tracing`] installs a fmt subscriber.
//!
//! # Invariants
//!
//! - A backend built on a [`LevelThreshold`] enables a channel exactly when
//!   [`LevelThreshold::allows`] says so.
//! - Captured lines never leak between threads.
//!
//! # Errors
//!
//! Threshold parsing fails with [`ParseThresholdError`]. Catalog factories
//! return [`catalog::DeclarationError`]. Installing a global subscriber twice
//! is reported by [`init_tracing`] instead of panicking.
//!
//! # Examples
//!
//! ```
//! use logging::{LevelThreshold, capture};
//!
//! catalog::catalog! {
//!     pub struct DeviceCatalog {
//!         TRACE fn measurement(sensor: &str, temperatur: i32);
//!         WARN fn temp_too_high as "tempTooHigh"(sensor: &str, temperature: i32);
//!     }
//! }
//!
//! capture::init(LevelThreshold::Warn);
//! let device: DeviceCatalog<capture::CaptureBackend> = capture::catalog()?;
//! device.measurement("room", 54)?;
//! device.temp_too_high("room", 54)?;
//!
//! let lines = capture::drain_events();
//! assert_eq!(lines.len(), 1);
//! assert_eq!(lines[0].logger, "DeviceCatalog");
//! assert_eq!(lines[0].message, "tempTooHigh sensor=room temperature=54");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod capture;
mod config;
#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use config::{LevelThreshold, ParseThresholdError, SinkConfig};

#[cfg(feature = "tracing")]
pub use tracing_bridge::{
    TRACING_TARGET, TracingBackend, catalog, catalog_for, init_tracing, init_tracing_with_filter,
    tracing_level,
};
