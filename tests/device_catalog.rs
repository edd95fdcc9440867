//! End-to-end tests for the temperature sensor catalog.
//!
//! The same sequence of sensor events is driven through every bundled
//! backend, through a runtime-registered catalog, and through randomised
//! enablement configurations.

use proptest::prelude::*;
use semantic_logging::logging::capture::{self, CaptureBackend};
use semantic_logging::logging::LevelThreshold;
use semantic_logging::logging_sink::{MessageSink, SinkConfig};
use semantic_logging::{
    BackendLevel, Catalog, CatalogBuilder, CatalogError, DynamicCatalog, RenderError, Severity,
    Value,
};
use test_support::{RecordedWrite, ScriptedBackend};

semantic_logging::catalog! {
    /// Events raised by temperature sensors.
    pub struct DeviceCatalog {
        TRACE fn measurement(sensor: &str, temperatur: i32);
        INFO fn comparing(sensor: &str, temperatur: i32, max_temperature as "maxTemperature": i32);
        WARN fn temp_too_high as "tempTooHigh"(sensor: &str, temperature: i32);
        ERROR fn fire(sensor: &str, location: &str);
    }
}

const EXPECTED: [(BackendLevel, &str); 6] = [
    (BackendLevel::Trace, "measurement sensor=room temperatur=25"),
    (
        BackendLevel::Info,
        "comparing sensor=room temperatur=25 maxTemperature=23",
    ),
    (BackendLevel::Warn, "tempTooHigh sensor=room temperature=25"),
    (BackendLevel::Trace, "measurement sensor=room temperatur=54"),
    (
        BackendLevel::Info,
        "comparing sensor=room temperatur=54 maxTemperature=23",
    ),
    (
        BackendLevel::Error,
        r#"fire sensor=room location="Floor 4,\toffice 45\n""#,
    ),
];

/// The monitoring loop: two readings, the second one catching fire.
fn run_scenario<B>(device: &DeviceCatalog<B>) -> semantic_logging::Result<()>
where
    B: semantic_logging::Backend,
{
    const MAX_TEMPERATURE: i32 = 23;
    for temperature in [25, 54] {
        device.measurement("room", temperature)?;
        device.comparing("room", temperature, MAX_TEMPERATURE)?;
        if temperature > 50 {
            device.fire("room", "Floor 4,\toffice 45\n")?;
        } else if temperature > MAX_TEMPERATURE {
            device.temp_too_high("room", temperature)?;
        }
    }
    Ok(())
}

// ============================================================================
// Backends
// ============================================================================

#[test]
fn scripted_backend_sees_every_line_in_order() {
    let backend = ScriptedBackend::enabled();
    let device = DeviceCatalog::new(&backend).expect("valid catalog");
    run_scenario(&device).expect("scenario");

    let expected: Vec<_> = EXPECTED
        .iter()
        .map(|(level, message)| RecordedWrite {
            level: *level,
            message: (*message).to_owned(),
        })
        .collect();
    assert_eq!(backend.writes(), expected);
}

#[test]
fn capture_backend_filters_by_threshold() {
    capture::init(LevelThreshold::Info);
    capture::drain_events();

    let device: DeviceCatalog<CaptureBackend> = capture::catalog().expect("valid catalog");
    run_scenario(&device).expect("scenario");

    let messages: Vec<_> = capture::drain_events()
        .into_iter()
        .map(|line| line.message)
        .collect();
    let expected: Vec<_> = EXPECTED
        .iter()
        .filter(|(level, _)| *level >= BackendLevel::Info)
        .map(|(_, message)| (*message).to_owned())
        .collect();
    assert_eq!(messages, expected);
}

#[test]
fn message_sink_prefixes_level_and_logger() {
    let config = SinkConfig::with_threshold(LevelThreshold::Trace);
    let device: DeviceCatalog<MessageSink<Vec<u8>>> =
        semantic_logging::logging_sink::catalog_with_config(Vec::new(), config)
            .expect("valid catalog");
    run_scenario(&device).expect("scenario");

    let output = String::from_utf8(device.into_backend().into_inner()).expect("utf8");
    let expected: String = EXPECTED
        .iter()
        .map(|(level, message)| format!("{level} DeviceCatalog - {message}\n"))
        .collect();
    assert_eq!(output, expected);
}

#[test]
fn root_factories_sit_beside_the_macro() {
    let backend = ScriptedBackend::enabled();
    let device: DeviceCatalog<&ScriptedBackend> =
        semantic_logging::catalog_with(&backend).expect("valid catalog");
    device.fire("room", "lab").expect("fire");

    let named: DeviceCatalog<&ScriptedBackend> =
        semantic_logging::catalog_named("sensors.kitchen", &backend).expect("valid catalog");
    assert_eq!(named.logger().name(), "sensors.kitchen");
    assert_eq!(backend.lines(), ["fire sensor=room location=lab"]);
}

// ============================================================================
// Runtime Registration
// ============================================================================

#[test]
fn dynamic_catalog_matches_the_generated_one() {
    let backend = ScriptedBackend::enabled();
    let definition = CatalogBuilder::new("DeviceCatalog")
        .operation("measurement", Severity::Trace, ["sensor", "temperatur"])
        .operation(
            "comparing",
            Severity::Info,
            ["sensor", "temperatur", "maxTemperature"],
        )
        .operation("tempTooHigh", Severity::Warn, ["sensor", "temperature"])
        .operation("fire", Severity::Error, ["sensor", "location"])
        .build()
        .expect("valid definition");

    let generated = DeviceCatalog::new(ScriptedBackend::disabled()).expect("valid catalog");
    assert_eq!(&definition, generated.definition());

    let device = DynamicCatalog::new(definition, &backend);
    device
        .invoke("tempTooHigh", &[Value::display(&"room"), Value::display(&25)])
        .expect("tempTooHigh");
    assert_eq!(backend.lines(), [EXPECTED[2].1]);

    let err = device.invoke("explode", &[]).expect_err("unknown operation");
    assert!(matches!(
        err,
        CatalogError::Render(RenderError::UnknownOperation { .. })
    ));

    let err = device
        .invoke("fire", &[Value::display(&"room")])
        .expect_err("arity mismatch");
    assert!(matches!(
        err,
        CatalogError::Render(RenderError::ArityMismatch {
            expected: 2,
            actual: 1,
            ..
        })
    ));

    let err = device
        .invoke("fire", &[Value::display(&"room"), Value::absent()])
        .expect_err("absent value");
    assert!(matches!(err, CatalogError::Render(RenderError::MissingValue { .. })));
}

// ============================================================================
// Randomised Enablement
// ============================================================================

proptest! {
    #[test]
    fn writes_match_the_enablement_oracle(mask in 0u8..32) {
        let enabled: Vec<BackendLevel> = BackendLevel::ALL
            .into_iter()
            .enumerate()
            .filter(|(bit, _)| mask & (1 << bit) != 0)
            .map(|(_, level)| level)
            .collect();

        let backend = ScriptedBackend::enabling(&enabled);
        let device = DeviceCatalog::new(&backend).expect("valid catalog");
        run_scenario(&device).expect("scenario");

        let expected: Vec<String> = EXPECTED
            .iter()
            .filter(|(level, _)| enabled.contains(level))
            .map(|(_, message)| (*message).to_owned())
            .collect();
        prop_assert_eq!(backend.lines(), expected);
        prop_assert_eq!(backend.queries(), EXPECTED.len());
    }
}
