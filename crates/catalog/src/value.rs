//! crates/catalog/src/value.rs
//! Borrowed argument values handed to the renderer.

use std::fmt;

/// One argument of an invocation.
///
/// Values borrow their source and are only formatted once the renderer has
/// decided the line will be emitted. An [`absent`](Self::absent) value is
/// rejected at render time instead of being printed as a blank token.
#[derive(Clone, Copy)]
pub struct Value<'a> {
    inner: Option<&'a dyn fmt::Display>,
}

impl<'a> Value<'a> {
    /// Wraps anything with a textual representation.
    pub fn display<T>(value: &'a T) -> Self
    where
        T: fmt::Display,
    {
        Self {
            inner: Some(value as &dyn fmt::Display),
        }
    }

    /// A value that is missing.
    #[must_use]
    pub const fn absent() -> Self {
        Self { inner: None }
    }

    /// Wraps an optional value; `None` becomes [`absent`](Self::absent).
    pub fn optional<T>(value: Option<&'a T>) -> Self
    where
        T: fmt::Display,
    {
        Self {
            inner: value.map(|value| value as &dyn fmt::Display),
        }
    }

    /// Returns `true` for an absent value.
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        self.inner.is_none()
    }

    pub(crate) const fn as_display(&self) -> Option<&'a dyn fmt::Display> {
        self.inner
    }
}

impl fmt::Debug for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Formatting the inner value here would defeat the lazy rendering.
        match self.inner {
            Some(_) => f.write_str("Value(..)"),
            None => f.write_str("Value(absent)"),
        }
    }
}

impl<'a, T> From<&'a T> for Value<'a>
where
    T: fmt::Display,
{
    fn from(value: &'a T) -> Self {
        Self::display(value)
    }
}
