//! crates/catalog/src/macros.rs
//! The `catalog!` declaration macro.

/// Declares a typed catalog.
///
/// Each entry names a severity, an operation and its parameters. The macro
/// generates a struct generic over its [`Backend`](crate::Backend) with one
/// method per operation, plus a [`Catalog`](crate::Catalog) implementation.
/// Operation and parameter names are rendered as written; append
/// `as "wireName"` to render a different name than the Rust identifier.
///
/// Every generated method returns [`Result<bool>`](crate::Result): `Ok(true)`
/// when a line was written, `Ok(false)` when the severity is disabled.
///
/// Construction and `into_backend` come from the [`Catalog`](crate::Catalog)
/// trait, so operations may take any name, `new` included. An operation that
/// shadows a trait method leaves it reachable as `Catalog::new(backend)`.
///
/// ```
/// use catalog::{Backend, BackendLevel, Catalog};
/// use std::cell::RefCell;
/// use std::io;
///
/// catalog::catalog! {
///     /// Events raised by temperature sensors.
///     pub struct DeviceCatalog {
///         TRACE fn measurement(sensor: &str, temperatur: i32);
///         INFO fn comparing(sensor: &str, temperatur: i32, max_temperature as "maxTemperature": i32);
///         WARN fn temp_too_high as "tempTooHigh"(sensor: &str, temperature: i32);
///         ERROR fn fire(sensor: &str, location: &str);
///     }
/// }
///
/// #[derive(Default)]
/// struct Lines(RefCell<Vec<String>>);
///
/// impl Backend for Lines {
///     fn is_enabled(&self, level: BackendLevel) -> bool {
///         level >= BackendLevel::Info
///     }
///
///     fn log(&self, _level: BackendLevel, message: &str) -> io::Result<()> {
///         self.0.borrow_mut().push(message.to_owned());
///         Ok(())
///     }
/// }
///
/// let device = DeviceCatalog::new(Lines::default())?;
/// assert!(!device.measurement("room", 25)?);
/// assert!(device.comparing("room", 25, 23)?);
/// assert!(device.temp_too_high("room", 25)?);
///
/// let lines = device.into_backend().0.into_inner();
/// assert_eq!(lines, [
///     "comparing sensor=room temperatur=25 maxTemperature=23",
///     "tempTooHigh sensor=room temperature=25",
/// ]);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[macro_export]
macro_rules! catalog {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$op_meta:meta])*
                $severity:ident fn $op:ident $(as $op_rename:literal)? (
                    $( $param:ident $(as $param_rename:literal)? : $ty:ty ),* $(,)?
                );
            )*
        }
    ) => {
        $(#[$meta])*
        $vis struct $name<B> {
            __logger: $crate::CatalogLogger<B>,
            __definition: $crate::CatalogDefinition,
            $( $op: $crate::OperationDescriptor, )*
        }

        impl<B> $name<B>
        where
            B: $crate::Backend,
        {
            $(
                $(#[$op_meta])*
                #[allow(dead_code)]
                $vis fn $op(&self, $( $param: $ty ),*) -> $crate::Result<bool> {
                    self.__logger.log(&self.$op, &[$( $crate::Value::display(&$param) ),*])
                }
            )*
        }

        impl<B> $crate::Catalog for $name<B>
        where
            B: $crate::Backend,
        {
            type Backend = B;

            const NAME: &'static str = ::std::stringify!($name);

            fn from_logger(
                __logger: $crate::CatalogLogger<B>,
            ) -> ::std::result::Result<Self, $crate::DeclarationError> {
                $(
                    let $op = $crate::OperationDescriptor::new(
                        $crate::__catalog_wire_name!($op $(, $op_rename)?),
                        $crate::Severity::$severity,
                        {
                            let parameters: &[&'static str] = &[
                                $( $crate::__catalog_wire_name!($param $(, $param_rename)?) ),*
                            ];
                            parameters.iter().copied()
                        },
                    )?;
                )*
                let __definition = $crate::CatalogDefinition::new(
                    <Self as $crate::Catalog>::NAME,
                    ::std::vec![$( ::std::clone::Clone::clone(&$op) ),*],
                )?;
                ::std::result::Result::Ok(Self {
                    __logger,
                    __definition,
                    $( $op, )*
                })
            }

            fn definition(&self) -> &$crate::CatalogDefinition {
                &self.__definition
            }

            fn logger(&self) -> &$crate::CatalogLogger<B> {
                &self.__logger
            }

            fn into_backend(self) -> B {
                self.__logger.into_backend()
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __catalog_wire_name {
    ($ident:ident) => {
        ::std::stringify!($ident)
    };
    ($ident:ident, $rename:literal) => {
        $rename
    };
}
