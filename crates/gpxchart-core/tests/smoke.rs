// File: crates/gpxchart-core/tests/smoke.rs
// Purpose: End-to-end chart rendering through the service to PNG and SVG bytes.

mod common;

use common::{rolling, service};
use gpxchart_core::{AxisFormat, ChartError, ChartParams, ChartService, OutputFormat, RecordingSurface, Track, UnitType};

#[test]
fn elevation_chart_png() {
    let svc = service();
    let bytes = svc
        .elevation_chart(ChartParams::default(), &rolling(200), OutputFormat::Png)
        .expect("render should succeed");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");

    let out = std::path::PathBuf::from("target/test_out/elevation.png");
    std::fs::create_dir_all(out.parent().unwrap()).unwrap();
    std::fs::write(&out, &bytes).expect("write png");
}

#[test]
fn every_chart_type_as_svg() {
    let svc = service();
    let track = rolling(300);
    let params = || ChartParams::new(600, 150).with_unit(UnitType::Imperial);
    for bytes in [
        svc.elevation_chart(params(), &track, OutputFormat::Svg),
        svc.speed_chart(params(), &track, OutputFormat::Svg),
        svc.steepness_chart(params(), &track, OutputFormat::Svg),
    ] {
        let svg = String::from_utf8(bytes.expect("svg render")).expect("utf-8 svg");
        assert!(svg.contains("<svg"), "not an svg document");
    }
}

#[test]
fn prepared_params_render_on_any_surface() {
    let svc = service();
    let params = svc.prepare_steepness(ChartParams::default(), &rolling(200));
    assert!(matches!(params.x_axis.format, AxisFormat::Length(UnitType::Metric)));
    assert!(matches!(params.y_axis.format, AxisFormat::Steepness));
    let (lo, hi) = params.y_bounds.expect("steepness pins its y range");
    assert!(lo < 0.0 && hi > 0.0 && lo == -hi);

    let mut surface = RecordingSurface::new();
    let summary = svc.render(params, &mut surface);
    assert!(!summary.invalid);
    assert_eq!(surface.areas().len(), 2);
    assert!(surface.texts().iter().any(|t| t.ends_with('°')));
}

#[test]
fn empty_track_still_renders() {
    let svc = service();
    let empty = Track::default();
    let png = svc.speed_chart(ChartParams::default(), &empty, OutputFormat::Png).expect("fallback png");
    assert!(png.starts_with(&[137, 80, 78, 71]));
    let svg = svc.steepness_chart(ChartParams::default(), &empty, OutputFormat::Svg).expect("fallback svg");
    assert!(!svg.is_empty());
}

#[test]
fn output_format_parsing() {
    assert_eq!("PNG".parse::<OutputFormat>().unwrap(), OutputFormat::Png);
    assert_eq!(".svg".parse::<OutputFormat>().unwrap(), OutputFormat::Svg);
    assert_eq!(OutputFormat::from_path("out/chart.Svg").unwrap(), OutputFormat::Svg);
    assert!(matches!("gif".parse::<OutputFormat>(), Err(ChartError::UnsupportedOutput(s)) if s == "gif"));
    assert!(OutputFormat::from_path("chart").is_err());
    assert_eq!(OutputFormat::Png.to_string(), "png");
}

#[test]
fn missing_font_dirs_are_reported() {
    let err = ChartService::new(&["/nonexistent/gpxchart/a", "/nonexistent/gpxchart/b"]).unwrap_err();
    match err {
        ChartError::NoFontDir(dirs) => assert_eq!(dirs.len(), 2),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn font_dir_resolves_once() {
    let a = service();
    let b = ChartService::new(&["/nonexistent/gpxchart", env!("CARGO_MANIFEST_DIR")]).expect("second dir exists");
    assert!(std::ptr::eq(a.fonts(), b.fonts()));
}

#[test]
fn concurrent_renders() {
    let svc = service();
    let track = rolling(150);
    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let svc = svc.clone();
                let track = &track;
                s.spawn(move || {
                    let format = if i % 2 == 0 { OutputFormat::Png } else { OutputFormat::Svg };
                    svc.elevation_chart(ChartParams::default(), track, format)
                })
            })
            .collect();
        for h in handles {
            let bytes = h.join().expect("render thread").expect("render");
            assert!(!bytes.is_empty());
        }
    });
}
