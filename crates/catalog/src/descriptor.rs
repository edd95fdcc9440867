//! crates/catalog/src/descriptor.rs
//! Validated templates for catalog operations.

use std::borrow::Cow;

use crate::error::DeclarationError;
use crate::level::Severity;

/// Returns `true` when `name` can be written into a line without escaping.
///
/// Names start with an ASCII letter or `_` and continue with ASCII
/// alphanumerics, `_`, `.` or `-`.
#[must_use]
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
}

/// A named, leveled operation with ordered parameter names.
///
/// Descriptors are built once per declared operation and never change. The
/// constructor rejects names that would corrupt the rendered line, so every
/// descriptor in circulation renders safely.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OperationDescriptor {
    name: Cow<'static, str>,
    severity: Severity,
    parameters: Vec<Cow<'static, str>>,
}

impl OperationDescriptor {
    /// Declares an operation.
    ///
    /// ```
    /// use catalog::{OperationDescriptor, Severity};
    ///
    /// let comparing = OperationDescriptor::new(
    ///     "comparing",
    ///     Severity::Info,
    ///     ["sensor", "temperatur", "maxTemperature"],
    /// )?;
    /// assert_eq!(comparing.arity(), 3);
    ///
    /// let clash = OperationDescriptor::new("fire", Severity::Error, ["sensor", "sensor"]);
    /// assert!(clash.is_err());
    /// # Ok::<(), catalog::DeclarationError>(())
    /// ```
    pub fn new<N, I, P>(
        name: N,
        severity: Severity,
        parameters: I,
    ) -> Result<Self, DeclarationError>
    where
        N: Into<Cow<'static, str>>,
        I: IntoIterator<Item = P>,
        P: Into<Cow<'static, str>>,
    {
        let name = name.into();
        if !is_identifier(&name) {
            return Err(DeclarationError::InvalidOperationName {
                name: name.into_owned(),
            });
        }

        let mut declared: Vec<Cow<'static, str>> = Vec::new();
        for parameter in parameters {
            let parameter = parameter.into();
            if !is_identifier(&parameter) {
                return Err(DeclarationError::InvalidParameterName {
                    operation: name.into_owned(),
                    parameter: parameter.into_owned(),
                });
            }
            if declared.iter().any(|existing| *existing == parameter) {
                return Err(DeclarationError::DuplicateParameter {
                    operation: name.into_owned(),
                    parameter: parameter.into_owned(),
                });
            }
            declared.push(parameter);
        }

        Ok(Self {
            name,
            severity,
            parameters: declared,
        })
    }

    /// Operation name, written verbatim at the start of the line.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared severity.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        self.severity
    }

    /// Parameter names in declaration order.
    pub fn parameters(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.parameters.iter().map(AsRef::as_ref)
    }

    /// Number of declared parameters.
    #[must_use]
    pub fn arity(&self) -> usize {
        self.parameters.len()
    }
}
