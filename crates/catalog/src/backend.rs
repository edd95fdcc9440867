//! crates/catalog/src/backend.rs
//! The leveled logger that rendered lines are handed to.

use std::io;
use std::rc::Rc;
use std::sync::Arc;

use crate::level::BackendLevel;

/// A leveled logging backend.
///
/// The catalog layer asks [`is_enabled`](Self::is_enabled) before rendering
/// anything and calls [`log`](Self::log) at most once per invocation.
/// Enablement is queried on every call and may change between calls.
/// Implementations take `&self`; any buffering or locking is their concern.
pub trait Backend {
    /// Reports whether `level` is currently enabled.
    fn is_enabled(&self, level: BackendLevel) -> bool;

    /// Writes a rendered line at `level`.
    ///
    /// Errors are propagated to the caller untouched.
    fn log(&self, level: BackendLevel, message: &str) -> io::Result<()>;
}

impl<B> Backend for &B
where
    B: Backend + ?Sized,
{
    fn is_enabled(&self, level: BackendLevel) -> bool {
        (**self).is_enabled(level)
    }

    fn log(&self, level: BackendLevel, message: &str) -> io::Result<()> {
        (**self).log(level, message)
    }
}

impl<B> Backend for Box<B>
where
    B: Backend + ?Sized,
{
    fn is_enabled(&self, level: BackendLevel) -> bool {
        (**self).is_enabled(level)
    }

    fn log(&self, level: BackendLevel, message: &str) -> io::Result<()> {
        (**self).log(level, message)
    }
}

impl<B> Backend for Arc<B>
where
    B: Backend + ?Sized,
{
    fn is_enabled(&self, level: BackendLevel) -> bool {
        (**self).is_enabled(level)
    }

    fn log(&self, level: BackendLevel, message: &str) -> io::Result<()> {
        (**self).log(level, message)
    }
}

impl<B> Backend for Rc<B>
where
    B: Backend + ?Sized,
{
    fn is_enabled(&self, level: BackendLevel) -> bool {
        (**self).is_enabled(level)
    }

    fn log(&self, level: BackendLevel, message: &str) -> io::Result<()> {
        (**self).log(level, message)
    }
}
