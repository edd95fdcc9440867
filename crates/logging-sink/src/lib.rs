#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/logging-sink/src/lib.rs
//!
//! # Overview
//!
//! `logging-sink` provides [`MessageSink`], a catalog backend that writes
//! each rendered line to an [`std::io::Write`] implementor as
//! `LEVEL logger - line`.
//!
//! # Design
//!
//! The sink keeps the writer and a reusable scratch buffer behind a
//! [`std::sync::Mutex`], so a single sink can serve catalogs on several
//! threads through a shared reference or an [`std::sync::Arc`]. Enablement
//! comes from the [`LevelThreshold`] carried by a [`SinkConfig`].
//!
//! # Invariants
//!
//! - Each line reaches the writer through a single `write_all` call, so
//!   concurrent writers never interleave within a line.
//! - Every record ends with a newline: one catalog call, one physical line.
//!
//! # Errors
//!
//! All write operations surface [`std::io::Error`] values originating from
//! the underlying writer. Catalog calls wrap them in
//! [`catalog::CatalogError::Backend`].
//!
//! # Examples
//!
//! ```
//! use catalog::Catalog;
//! use logging_sink::{LevelThreshold, MessageSink, SinkConfig};
//!
//! catalog::catalog! {
//!     pub struct DeviceCatalog {
//!         INFO fn comparing(sensor: &str, temperatur: i32, max_temperature as "maxTemperature": i32);
//!         ERROR fn fire(sensor: &str, location: &str);
//!     }
//! }
//!
//! let config = SinkConfig::with_threshold(LevelThreshold::Info);
//! let device: DeviceCatalog<MessageSink<Vec<u8>>> =
//!     logging_sink::catalog_with_config(Vec::new(), config)?;
//! device.comparing("room", 25, 23)?;
//! device.fire("room", "Floor 4,\toffice 45\n")?;
//!
//! let output = String::from_utf8(device.into_backend().into_inner())?;
//! assert_eq!(
//!     output,
//!     "INFO DeviceCatalog - comparing sensor=room temperatur=25 maxTemperature=23\n\
//!      ERROR DeviceCatalog - fire sensor=room location=\"Floor 4,\\toffice 45\\n\"\n"
//! );
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod sink;

pub use logging::{LevelThreshold, SinkConfig};
pub use sink::{MessageSink, catalog, catalog_with_config};
