// File: crates/gpxchart-core/tests/units.rs
// Purpose: Unit registry conversions and the length/altitude/speed label formats.

use gpxchart_core::units::{ONE_MILE, ONE_NAUTICAL_MILE};
use gpxchart_core::{UnitRegistry, UnitType};

#[test]
fn every_symbol_converts_back() {
    let reg = UnitRegistry::new();
    let symbols: Vec<String> = reg.symbols().map(str::to_string).collect();
    assert!(symbols.len() >= 11, "registry too small: {symbols:?}");
    for symbol in symbols {
        let factor = reg.factor(&symbol).expect("listed symbol resolves");
        let got = reg.convert_from_base(2.5 * factor, &symbol);
        assert!((got - 2.5).abs() < 1e-9, "{symbol}: {got}");
    }
    assert_eq!(reg.convert_from_base(1234.0, "furlong"), 0.0);
}

#[test]
fn metric_lengths() {
    let reg = UnitRegistry::new();
    let f = |m: f64| reg.format_length(m, UnitType::Metric);
    assert_eq!(f(0.0), "0m");
    assert_eq!(f(999.0), "999m");
    assert_eq!(f(1500.0), "1.5km");
    assert_eq!(f(12_340.0), "12.34km");
    assert_eq!(f(50_000.0), "50km");
    assert_eq!(f(123_456.0), "123.5km");
}

#[test]
fn mile_lengths() {
    let reg = UnitRegistry::new();
    assert_eq!(reg.format_length(ONE_MILE, UnitType::Imperial), "1mi");
    assert_eq!(reg.format_length(2.25 * ONE_MILE, UnitType::Imperial), "2.25mi");
    assert_eq!(reg.format_length(12.5 * ONE_MILE, UnitType::Imperial), "12.5mi");
    assert_eq!(reg.format_length(10.0 * ONE_NAUTICAL_MILE, UnitType::Nautical), "10NM");
    assert_eq!(reg.format_length(0.5 * ONE_NAUTICAL_MILE, UnitType::Nautical), "0.5NM");
}

#[test]
fn altitudes() {
    let reg = UnitRegistry::new();
    assert_eq!(reg.format_altitude(1234.4, UnitType::Metric), "1234m");
    assert_eq!(reg.format_altitude(-12.0, UnitType::Metric), "-12m");
    assert_eq!(reg.format_altitude(304.8, UnitType::Imperial), "1000ft");
    assert_eq!(reg.format_altitude(304.8, UnitType::Nautical), "1000ft");
    assert_eq!(reg.format_altitude(25_000.0, UnitType::Metric), "n/a");
    assert_eq!(reg.format_altitude(-20_001.0, UnitType::Imperial), "n/a");
}

#[test]
fn speeds() {
    let reg = UnitRegistry::new();
    assert_eq!(reg.format_speed(10.0, UnitType::Metric, true), "36kmh");
    assert_eq!(reg.format_speed(1.0, UnitType::Metric, false), "3.60kmh");
    assert_eq!(reg.format_speed(10.0, UnitType::Metric, false), "36.0kmh");
    assert_eq!(reg.format_speed(ONE_MILE / 3600.0 * 20.0, UnitType::Imperial, true), "20mph");
    assert_eq!(reg.format_speed(ONE_NAUTICAL_MILE / 3600.0 * 7.0, UnitType::Nautical, false), "7.00kn");
    assert_eq!(reg.format_speed(0.0, UnitType::Metric, true), "n/a");
    assert_eq!(reg.format_speed(-3.0, UnitType::Imperial, false), "n/a");
}

#[test]
fn unit_type_parsing() {
    assert_eq!("Imperial".parse::<UnitType>(), Ok(UnitType::Imperial));
    assert_eq!(" n ".parse::<UnitType>(), Ok(UnitType::Nautical));
    assert_eq!("m".parse::<UnitType>(), Ok(UnitType::Metric));
    assert!("parsecs".parse::<UnitType>().is_err());
    assert_eq!(UnitType::default(), UnitType::Metric);
    assert_eq!(UnitType::Nautical.to_string(), "nautical");
}
