//! crates/catalog/src/render.rs
//! Assembles `operation key=value ...` lines from invocations.

use crate::descriptor::OperationDescriptor;
use crate::error::RenderError;
use crate::escape::escape_display_into;
use crate::level::Severity;
use crate::value::Value;

/// One call to a declared operation.
///
/// Invocations are built per call and consumed by rendering. They borrow
/// both the descriptor and the argument values.
#[derive(Clone, Copy, Debug)]
pub struct Invocation<'a> {
    descriptor: &'a OperationDescriptor,
    arguments: &'a [Value<'a>],
}

impl<'a> Invocation<'a> {
    /// Pairs a descriptor with its arguments.
    ///
    /// The argument count is checked when the line is rendered.
    #[must_use]
    pub const fn new(descriptor: &'a OperationDescriptor, arguments: &'a [Value<'a>]) -> Self {
        Self {
            descriptor,
            arguments,
        }
    }

    /// The operation being invoked.
    #[must_use]
    pub const fn descriptor(&self) -> &'a OperationDescriptor {
        self.descriptor
    }

    /// Severity declared by the operation.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        self.descriptor.severity()
    }

    /// Arguments in parameter order.
    #[must_use]
    pub const fn arguments(&self) -> &'a [Value<'a>] {
        self.arguments
    }
}

/// Renders `invocation` without consulting any backend.
///
/// The line is the operation name followed by ` name=value` for every
/// parameter in declaration order, with each value escaped.
///
/// ```
/// use catalog::{Invocation, OperationDescriptor, Severity, Value, render_line};
///
/// let op = OperationDescriptor::new("tempTooHigh", Severity::Warn, ["sensor", "temperature"])?;
/// let line = render_line(&Invocation::new(&op, &[Value::display(&"room"), Value::display(&25)]))?;
/// assert_eq!(line, "tempTooHigh sensor=room temperature=25");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn render_line(invocation: &Invocation<'_>) -> Result<String, RenderError> {
    let descriptor = invocation.descriptor;
    let arguments = invocation.arguments;

    if arguments.len() != descriptor.arity() {
        return Err(RenderError::ArityMismatch {
            operation: descriptor.name().to_owned(),
            expected: descriptor.arity(),
            actual: arguments.len(),
        });
    }

    // Reject absent values before formatting anything.
    if let Some(parameter) = descriptor
        .parameters()
        .zip(arguments)
        .find_map(|(parameter, value)| value.is_absent().then_some(parameter))
    {
        return Err(RenderError::MissingValue {
            operation: descriptor.name().to_owned(),
            parameter: parameter.to_owned(),
        });
    }

    let mut line = String::with_capacity(line_capacity(descriptor));
    line.push_str(descriptor.name());

    for (parameter, value) in descriptor.parameters().zip(arguments) {
        line.push(' ');
        line.push_str(parameter);
        line.push('=');
        if let Some(display) = value.as_display() {
            escape_display_into(&mut line, display).map_err(|_| RenderError::Format {
                operation: descriptor.name().to_owned(),
                parameter: parameter.to_owned(),
            })?;
        }
    }

    Ok(line)
}

fn line_capacity(descriptor: &OperationDescriptor) -> usize {
    // name, then " key=" plus a short value guess per parameter
    descriptor.name().len()
        + descriptor
            .parameters()
            .map(|parameter| parameter.len() + 2 + 8)
            .sum::<usize>()
}
