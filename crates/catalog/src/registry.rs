//! crates/catalog/src/registry.rs
//! Catalog definitions, the runtime registration table and catalog factories.

use std::borrow::Cow;

use crate::backend::Backend;
use crate::descriptor::OperationDescriptor;
use crate::error::{DeclarationError, RenderError, Result};
use crate::level::Severity;
use crate::logger::CatalogLogger;
use crate::value::Value;

/// The validated set of operations a catalog declares.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogDefinition {
    name: Cow<'static, str>,
    operations: Vec<OperationDescriptor>,
}

impl CatalogDefinition {
    /// Groups `operations` under `name`.
    ///
    /// Fails on an empty name or when two operations share a name.
    pub fn new<N, I>(name: N, operations: I) -> Result<Self, DeclarationError>
    where
        N: Into<Cow<'static, str>>,
        I: IntoIterator<Item = OperationDescriptor>,
    {
        let name = name.into();
        if name.is_empty() {
            return Err(DeclarationError::EmptyCatalogName);
        }

        let mut declared: Vec<OperationDescriptor> = Vec::new();
        for operation in operations {
            if declared.iter().any(|existing| existing.name() == operation.name()) {
                return Err(DeclarationError::DuplicateOperation {
                    catalog: name.into_owned(),
                    operation: operation.name().to_owned(),
                });
            }
            declared.push(operation);
        }

        Ok(Self {
            name,
            operations: declared,
        })
    }

    /// Catalog name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Looks up an operation by its rendered name.
    #[must_use]
    pub fn operation(&self, name: &str) -> Option<&OperationDescriptor> {
        self.operations.iter().find(|operation| operation.name() == name)
    }

    /// Operations in declaration order.
    pub fn operations(&self) -> impl ExactSizeIterator<Item = &OperationDescriptor> + '_ {
        self.operations.iter()
    }

    /// Number of declared operations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    /// Returns `true` when the catalog declares nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }
}

/// Collects operation declarations for a [`CatalogDefinition`].
///
/// The first invalid declaration is remembered and reported by
/// [`build`](Self::build), so chains stay readable.
///
/// ```
/// use catalog::{CatalogBuilder, Severity};
///
/// let definition = CatalogBuilder::new("DeviceCatalog")
///     .operation("measurement", Severity::Trace, ["sensor", "temperatur"])
///     .operation("fire", Severity::Error, ["sensor", "location"])
///     .build()?;
/// assert_eq!(definition.len(), 2);
/// # Ok::<(), catalog::DeclarationError>(())
/// ```
#[derive(Debug)]
#[must_use = "a builder does nothing until `build` is called"]
pub struct CatalogBuilder {
    name: Cow<'static, str>,
    operations: Vec<OperationDescriptor>,
    error: Option<DeclarationError>,
}

impl CatalogBuilder {
    /// Starts a catalog called `name`.
    pub fn new<N>(name: N) -> Self
    where
        N: Into<Cow<'static, str>>,
    {
        Self {
            name: name.into(),
            operations: Vec::new(),
            error: None,
        }
    }

    /// Declares one operation.
    pub fn operation<N, I, P>(mut self, name: N, severity: Severity, parameters: I) -> Self
    where
        N: Into<Cow<'static, str>>,
        I: IntoIterator<Item = P>,
        P: Into<Cow<'static, str>>,
    {
        if self.error.is_none() {
            match OperationDescriptor::new(name, severity, parameters) {
                Ok(operation) => self.operations.push(operation),
                Err(err) => self.error = Some(err),
            }
        }
        self
    }

    /// Validates the declarations and produces the definition.
    pub fn build(self) -> Result<CatalogDefinition, DeclarationError> {
        if let Some(err) = self.error {
            return Err(err);
        }
        CatalogDefinition::new(self.name, self.operations)
    }
}

/// A catalog whose operations are looked up by name at call time.
#[derive(Clone, Debug)]
pub struct DynamicCatalog<B> {
    definition: CatalogDefinition,
    logger: CatalogLogger<B>,
}

impl<B> DynamicCatalog<B>
where
    B: Backend,
{
    /// Binds `definition` to `backend`; the logger takes the catalog's name.
    pub fn new(definition: CatalogDefinition, backend: B) -> Self {
        let logger = CatalogLogger::new(definition.name.clone(), backend);
        Self { definition, logger }
    }

    /// The operations this catalog accepts.
    #[must_use]
    pub const fn definition(&self) -> &CatalogDefinition {
        &self.definition
    }

    /// The logger doing the dispatch.
    #[must_use]
    pub const fn logger(&self) -> &CatalogLogger<B> {
        &self.logger
    }

    /// Invokes `operation` with `arguments` in parameter order.
    ///
    /// ```
    /// use catalog::{Backend, BackendLevel, CatalogBuilder, DynamicCatalog, Severity, Value};
    /// use std::io;
    ///
    /// struct Stdout;
    ///
    /// impl Backend for Stdout {
    ///     fn is_enabled(&self, _level: BackendLevel) -> bool {
    ///         true
    ///     }
    ///
    ///     fn log(&self, level: BackendLevel, message: &str) -> io::Result<()> {
    ///         println!("{level} {message}");
    ///         Ok(())
    ///     }
    /// }
    ///
    /// let definition = CatalogBuilder::new("DeviceCatalog")
    ///     .operation("tempTooHigh", Severity::Warn, ["sensor", "temperature"])
    ///     .build()?;
    /// let catalog = DynamicCatalog::new(definition, Stdout);
    /// assert!(catalog.invoke("tempTooHigh", &[Value::display(&"room"), Value::display(&25)])?);
    /// assert!(catalog.invoke("unknown", &[]).is_err());
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn invoke(&self, operation: &str, arguments: &[Value<'_>]) -> Result<bool> {
        let descriptor =
            self.definition
                .operation(operation)
                .ok_or_else(|| RenderError::UnknownOperation {
                    catalog: self.definition.name().to_owned(),
                    operation: operation.to_owned(),
                })?;
        self.logger.log(descriptor, arguments)
    }
}

/// A typed catalog, usually generated by [`catalog!`](crate::catalog!).
pub trait Catalog: Sized {
    /// Backend the catalog writes to.
    type Backend: Backend;

    /// Default logger name, the catalog's type name for generated catalogs.
    const NAME: &'static str;

    /// Builds the catalog around `logger`, validating every operation.
    fn from_logger(logger: CatalogLogger<Self::Backend>) -> Result<Self, DeclarationError>;

    /// The declared operations.
    fn definition(&self) -> &CatalogDefinition;

    /// The logger doing the dispatch.
    fn logger(&self) -> &CatalogLogger<Self::Backend>;

    /// Consumes the catalog and returns its backend.
    fn into_backend(self) -> Self::Backend;

    /// Builds the catalog on `backend`, named after the catalog itself.
    ///
    /// # Errors
    ///
    /// Returns the first invalid operation declaration.
    fn new(backend: Self::Backend) -> Result<Self, DeclarationError> {
        catalog_with(backend)
    }

    /// Builds the catalog on `backend` under the logger name `name`.
    ///
    /// # Errors
    ///
    /// Fails on an empty name or an invalid operation declaration.
    fn named<N>(name: N, backend: Self::Backend) -> Result<Self, DeclarationError>
    where
        N: Into<Cow<'static, str>>,
    {
        catalog_named(name, backend)
    }
}

/// Builds catalog `C` on `backend`, named after the catalog itself.
pub fn catalog_with<C>(backend: C::Backend) -> Result<C, DeclarationError>
where
    C: Catalog,
{
    catalog_named(C::NAME, backend)
}

/// Builds catalog `C` on `backend` under an explicit logger name.
pub fn catalog_named<C, N>(name: N, backend: C::Backend) -> Result<C, DeclarationError>
where
    C: Catalog,
    N: Into<Cow<'static, str>>,
{
    let name = name.into();
    if name.is_empty() {
        return Err(DeclarationError::EmptyCatalogName);
    }
    C::from_logger(CatalogLogger::new(name, backend))
}
