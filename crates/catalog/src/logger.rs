//! crates/catalog/src/logger.rs
//! Enablement check, rendering and dispatch for a single catalog.

use std::borrow::Cow;

use crate::backend::Backend;
use crate::descriptor::OperationDescriptor;
use crate::error::{RenderError, Result};
use crate::level::{self, Severity};
use crate::render::{Invocation, render_line};
use crate::value::Value;

/// Fronts a [`Backend`] on behalf of one catalog.
///
/// The logger holds no mutable state; whether a line is emitted depends only
/// on the backend's answer at call time.
#[derive(Clone, Debug)]
pub struct CatalogLogger<B> {
    name: Cow<'static, str>,
    backend: B,
}

impl<B> CatalogLogger<B> {
    /// Creates a logger for the catalog called `name`.
    pub fn new<N>(name: N, backend: B) -> Self
    where
        N: Into<Cow<'static, str>>,
    {
        Self {
            name: name.into(),
            backend,
        }
    }

    /// Name of the catalog this logger serves.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Borrows the backend.
    #[must_use]
    pub const fn backend(&self) -> &B {
        &self.backend
    }

    /// Consumes the logger and returns the backend.
    #[must_use]
    pub fn into_backend(self) -> B {
        self.backend
    }
}

impl<B> CatalogLogger<B>
where
    B: Backend,
{
    /// Reports whether lines of `severity` would currently be emitted.
    pub fn is_enabled(&self, severity: Severity) -> bool {
        level::is_enabled(severity, &self.backend)
    }

    /// Renders `invocation` if its severity is enabled.
    ///
    /// Returns `Ok(None)` for a disabled severity without touching any
    /// argument.
    pub fn render(&self, invocation: &Invocation<'_>) -> Result<Option<String>, RenderError> {
        if !self.is_enabled(invocation.severity()) {
            return Ok(None);
        }
        render_line(invocation).map(Some)
    }

    /// Renders `invocation` and writes it to the backend.
    ///
    /// Returns `Ok(true)` when a line was written and `Ok(false)` when the
    /// severity was disabled. Backend failures are returned unchanged as
    /// [`CatalogError::Backend`](crate::CatalogError::Backend).
    pub fn dispatch(&self, invocation: &Invocation<'_>) -> Result<bool> {
        let Some(line) = self.render(invocation)? else {
            return Ok(false);
        };
        self.backend
            .log(invocation.severity().backend_level(), &line)?;
        Ok(true)
    }

    /// Shorthand for [`dispatch`](Self::dispatch) with a fresh [`Invocation`].
    pub fn log(&self, descriptor: &OperationDescriptor, arguments: &[Value<'_>]) -> Result<bool> {
        self.dispatch(&Invocation::new(descriptor, arguments))
    }
}
