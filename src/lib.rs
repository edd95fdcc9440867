#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `semantic-logging` bundles the workspace crates behind one dependency.
//! Applications declare what they log as a catalog of typed operations and
//! call those operations like methods; every call renders a single
//! `operation key=value ...` line and hands it to a leveled backend.
//!
//! - Core types, re-exported at the root: severities, escaping, rendering,
//!   the [`catalog!`] macro and runtime-registered catalogs.
//! - `logging`: threshold configuration, the thread-local capture backend
//!   and, with the `tracing` feature, the tracing backend.
//! - `logging_sink`: a backend writing `LEVEL logger - line` records to
//!   any [`std::io::Write`].
//!
//! # Examples
//!
//! ```
//! use semantic_logging::Catalog;
//! use semantic_logging::logging_sink::{LevelThreshold, MessageSink, SinkConfig};
//!
//! semantic_logging::catalog! {
//!     /// Events raised by temperature sensors.
//!     pub struct DeviceCatalog {
//!         TRACE fn measurement(sensor: &str, temperatur: i32);
//!         INFO fn comparing(sensor: &str, temperatur: i32, max_temperature as "maxTemperature": i32);
//!         WARN fn temp_too_high as "tempTooHigh"(sensor: &str, temperature: i32);
//!         ERROR fn fire(sensor: &str, location: &str);
//!     }
//! }
//!
//! let config = SinkConfig::with_threshold(LevelThreshold::Warn);
//! let device: DeviceCatalog<MessageSink<Vec<u8>>> =
//!     semantic_logging::logging_sink::catalog_with_config(Vec::new(), config)?;
//!
//! device.measurement("room", 54)?;
//! device.temp_too_high("room", 54)?;
//!
//! let output = device.into_backend().into_inner();
//! assert_eq!(output, b"WARN DeviceCatalog - tempTooHigh sensor=room temperature=54\n");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use logging;
pub use logging_sink;

pub use catalog::{
    Backend, BackendLevel, Catalog, CatalogBuilder, CatalogDefinition, CatalogError,
    CatalogLogger, DeclarationError, DynamicCatalog, RenderError, Result, Severity, Value,
    catalog, catalog_named, catalog_with,
};
