#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `catalog` turns calls on declared log operations into single-line
//! `operation key=value ...` messages and hands them to a leveled backend.
//! Application code declares what it logs once, as a catalog of operations
//! each carrying a [`Severity`] and ordered parameter names, and then calls
//! those operations like ordinary methods.
//!
//! # Design
//!
//! - [`Severity`] tags operations; [`is_enabled`] maps it onto the five
//!   [`BackendLevel`] channels a [`Backend`] exposes.
//! - [`OperationDescriptor`] is the validated template of one operation.
//!   [`CatalogDefinition`] groups them.
//! - [`render_line`] formats an [`Invocation`], escaping every value with
//!   [`escape`] rules.
//! - [`CatalogLogger`] checks enablement, renders and dispatches.
//! - The [`catalog!`] macro generates a typed struct per catalog;
//!   [`DynamicCatalog`] offers the same through a runtime lookup table.
//!
//! # Invariants
//!
//! - A disabled severity never formats an argument and never writes.
//! - [`Severity::Fatal`] is always enabled.
//! - Audit and fatal lines are written to the error channel.
//! - Parameters appear in declaration order, separated by one space, with no
//!   trailing separator.
//!
//! # Errors
//!
//! Declarations are validated when a catalog is built and fail with
//! [`DeclarationError`]. Calls fail with [`RenderError`] for absent or
//! mismatched arguments and with [`CatalogError::Backend`] when the backend
//! write fails; the latter carries the backend's [`std::io::Error`] untouched.
//!
//! # Examples
//!
//! ```
//! use catalog::{Backend, BackendLevel, Catalog};
//! use std::io;
//!
//! catalog::catalog! {
//!     pub struct DeviceCatalog {
//!         ERROR fn fire(sensor: &str, location: &str);
//!     }
//! }
//!
//! struct Stderr;
//!
//! impl Backend for Stderr {
//!     fn is_enabled(&self, level: BackendLevel) -> bool {
//!         level >= BackendLevel::Warn
//!     }
//!
//!     fn log(&self, level: BackendLevel, message: &str) -> io::Result<()> {
//!         eprintln!("{level} {message}");
//!         Ok(())
//!     }
//! }
//!
//! let device = DeviceCatalog::new(Stderr)?;
//! device.fire("room", "Floor 4,\toffice 45\n")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod backend;
mod descriptor;
mod error;
mod escape;
mod level;
mod logger;
mod macros;
mod registry;
mod render;
mod value;

pub use crate::backend::Backend;
pub use crate::descriptor::{OperationDescriptor, is_identifier};
pub use crate::error::{CatalogError, DeclarationError, RenderError, Result};
pub use crate::escape::{Escaper, escape, escape_display_into, needs_quoting};
pub use crate::level::{BackendLevel, ParseLevelError, Severity, is_enabled};
pub use crate::logger::CatalogLogger;
pub use crate::registry::{
    Catalog, CatalogBuilder, CatalogDefinition, DynamicCatalog, catalog_named, catalog_with,
};
pub use crate::render::{Invocation, render_line};
pub use crate::value::Value;
