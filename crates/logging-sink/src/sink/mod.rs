mod message_sink;

pub use message_sink::MessageSink;

use std::io::Write;

use catalog::{Catalog, DeclarationError, catalog_with};
use logging::SinkConfig;

/// Builds catalog `C` on a sink over `writer`, named after the catalog.
///
/// # Errors
///
/// Returns the [`DeclarationError`] raised while validating `C`.
pub fn catalog<C, W>(writer: W) -> Result<C, DeclarationError>
where
    C: Catalog<Backend = MessageSink<W>>,
    W: Write,
{
    catalog_with_config(writer, SinkConfig::default())
}

/// Builds catalog `C` on a sink over `writer` using `config`.
///
/// # Errors
///
/// Returns the [`DeclarationError`] raised while validating `C`.
pub fn catalog_with_config<C, W>(writer: W, config: SinkConfig) -> Result<C, DeclarationError>
where
    C: Catalog<Backend = MessageSink<W>>,
    W: Write,
{
    catalog_with(MessageSink::with_config(C::NAME, writer, config))
}
