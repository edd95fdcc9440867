//! crates/logging/src/tracing_bridge.rs
//! Bridge between catalog loggers and the tracing crate.
//!
//! [`TracingBackend`] turns every rendered catalog line into a `tracing`
//! event so catalogs integrate with whatever subscriber the application
//! installs.
//!
//! # Architecture
//!
//! - Enablement is answered by `tracing::enabled!` for the
//!   [`TRACING_TARGET`] target at the mapped level.
//! - Lines are emitted with `tracing::event!` under the same target, with the
//!   logger name in a `catalog` field and the rendered line as the message.
//!
//! # Usage
//!
//! ```
//! use logging::LevelThreshold;
//!
//! catalog::catalog! {
//!     pub struct DeviceCatalog {
//!         WARN fn temp_too_high as "tempTooHigh"(sensor: &str, temperature: i32);
//!     }
//! }
//!
//! let _ = logging::init_tracing(LevelThreshold::Info);
//! let device: DeviceCatalog<logging::TracingBackend> = logging::catalog()?;
//! device.temp_too_high("room", 25)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::borrow::Cow;
use std::io;

use catalog::{Backend, BackendLevel, Catalog, DeclarationError, catalog_named, catalog_with};
use tracing::Level;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::layer::{Layer, SubscriberExt};
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};

use crate::config::LevelThreshold;

/// Target attached to every event emitted by [`TracingBackend`].
pub const TRACING_TARGET: &str = "semantic_logging";

/// Backend that forwards catalog lines to the current tracing dispatcher.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TracingBackend {
    name: Cow<'static, str>,
}

impl TracingBackend {
    /// A backend tagging events with the catalog name `name`.
    #[must_use]
    pub fn new<N>(name: N) -> Self
    where
        N: Into<Cow<'static, str>>,
    {
        Self { name: name.into() }
    }

    /// Value of the `catalog` field on emitted events.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Tracing level matching a backend channel.
#[must_use]
pub const fn tracing_level(level: BackendLevel) -> Level {
    match level {
        BackendLevel::Trace => Level::TRACE,
        BackendLevel::Debug => Level::DEBUG,
        BackendLevel::Info => Level::INFO,
        BackendLevel::Warn => Level::WARN,
        BackendLevel::Error => Level::ERROR,
    }
}

impl Backend for TracingBackend {
    fn is_enabled(&self, level: BackendLevel) -> bool {
        // Callsite metadata must be static, hence one arm per level.
        match level {
            BackendLevel::Trace => tracing::enabled!(target: TRACING_TARGET, Level::TRACE),
            BackendLevel::Debug => tracing::enabled!(target: TRACING_TARGET, Level::DEBUG),
            BackendLevel::Info => tracing::enabled!(target: TRACING_TARGET, Level::INFO),
            BackendLevel::Warn => tracing::enabled!(target: TRACING_TARGET, Level::WARN),
            BackendLevel::Error => tracing::enabled!(target: TRACING_TARGET, Level::ERROR),
        }
    }

    fn log(&self, level: BackendLevel, message: &str) -> io::Result<()> {
        let catalog = self.name();
        match level {
            BackendLevel::Trace => {
                tracing::event!(target: TRACING_TARGET, Level::TRACE, catalog, "{}", message);
            }
            BackendLevel::Debug => {
                tracing::event!(target: TRACING_TARGET, Level::DEBUG, catalog, "{}", message);
            }
            BackendLevel::Info => {
                tracing::event!(target: TRACING_TARGET, Level::INFO, catalog, "{}", message);
            }
            BackendLevel::Warn => {
                tracing::event!(target: TRACING_TARGET, Level::WARN, catalog, "{}", message);
            }
            BackendLevel::Error => {
                tracing::event!(target: TRACING_TARGET, Level::ERROR, catalog, "{}", message);
            }
        }
        Ok(())
    }
}

impl From<LevelThreshold> for LevelFilter {
    fn from(threshold: LevelThreshold) -> Self {
        match threshold {
            LevelThreshold::Off => Self::OFF,
            LevelThreshold::Error => Self::ERROR,
            LevelThreshold::Warn => Self::WARN,
            LevelThreshold::Info => Self::INFO,
            LevelThreshold::Debug => Self::DEBUG,
            LevelThreshold::Trace => Self::TRACE,
        }
    }
}

/// Builds catalog `C` on a tracing backend named after the catalog.
///
/// # Errors
///
/// Returns the [`DeclarationError`] raised while validating `C`.
pub fn catalog<C>() -> Result<C, DeclarationError>
where
    C: Catalog<Backend = TracingBackend>,
{
    catalog_with(TracingBackend::new(C::NAME))
}

/// Builds catalog `C` on a tracing backend under the logger name `name`.
///
/// # Errors
///
/// Fails on an empty name or when `C` declares an invalid operation.
pub fn catalog_for<C, N>(name: N) -> Result<C, DeclarationError>
where
    C: Catalog<Backend = TracingBackend>,
    N: Into<Cow<'static, str>>,
{
    let name = name.into();
    catalog_named(name.clone(), TracingBackend::new(name))
}

/// Installs a global fmt subscriber filtered at `threshold`.
///
/// `RUST_LOG` directives, when set, take precedence over the threshold.
///
/// # Errors
///
/// Fails when a global subscriber is already installed.
pub fn init_tracing(threshold: LevelThreshold) -> Result<(), TryInitError> {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from(threshold).into())
        .from_env_lossy();
    init_tracing_with_filter(filter)
}

/// Installs a global fmt subscriber behind a caller supplied filter layer.
///
/// # Errors
///
/// Fails when a global subscriber is already installed.
pub fn init_tracing_with_filter<F>(filter: F) -> Result<(), TryInitError>
where
    F: Layer<tracing_subscriber::Registry> + Send + Sync + 'static,
{
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .try_init()
}
