// File: crates/demo/src/main.rs
// Summary: Demo loads a CSV track and renders elevation, speed and steepness charts to PNG and SVG.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use gpxchart_core::{ChartParams, ChartService, OutputFormat, Theme, Track, TrackPoint, TrackSegment, UnitType};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Usage: gpxchart-demo [track.csv] [metric|imperial|nautical] [theme]
    let mut args = std::env::args().skip(1);
    let raw = args.next().unwrap_or_else(|| "crates/demo/data/sample_track.csv".to_string());
    let unit = match args.next() {
        Some(u) => u.parse::<UnitType>().map_err(anyhow::Error::msg)?,
        None => UnitType::default(),
    };
    let theme = args.next().map(|name| gpxchart_core::theme::find(&name)).unwrap_or_default();

    let path = Path::new(&raw);
    let track = load_track_csv(path).with_context(|| format!("failed to load CSV '{}'", path.display()))?;
    tracing::info!(
        file = %path.display(),
        segments = track.segments.len(),
        points = track.points_count(),
        "loaded track"
    );
    if track.points_count() == 0 {
        anyhow::bail!("no points loaded; check headers/delimiter.");
    }

    let font_dirs = [PathBuf::from("fonts"), PathBuf::from(env!("CARGO_MANIFEST_DIR"))];
    let service = ChartService::new(&font_dirs).context("resolving font directory")?;
    let params = || ChartParams::default().with_unit(unit).with_theme(theme);

    for format in [OutputFormat::Png, OutputFormat::Svg] {
        let charts = [
            ("elevation", service.elevation_chart(params(), &track, format)),
            ("speed", service.speed_chart(params(), &track, format)),
            ("steepness", service.steepness_chart(params(), &track, format)),
        ];
        for (kind, bytes) in charts {
            let bytes = bytes.with_context(|| format!("rendering {kind} chart as {format}"))?;
            let out = out_name_with(path, kind, format)?;
            std::fs::write(&out, &bytes).with_context(|| format!("writing {}", out.display()))?;
            tracing::info!(out = %out.display(), bytes = bytes.len(), "wrote chart");
        }
    }

    Ok(())
}

/// Produce output file name like target/out/<stem>_<kind>.<ext>, creating the directory.
fn out_name_with(input: &Path, kind: &str, format: OutputFormat) -> Result<PathBuf> {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("track");
    let mut out = PathBuf::from("target/out");
    std::fs::create_dir_all(&out).with_context(|| format!("creating {}", out.display()))?;
    out.push(format!("{stem}_{kind}.{}", format.extension()));
    Ok(out)
}

/// Load `lat,lon[,ele][,time][,segment]` rows. A change in the segment column
/// starts a new segment; rows with unparsable coordinates are skipped.
fn load_track_csv(path: &Path) -> Result<Track> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.to_lowercase())
        .collect::<Vec<_>>();
    tracing::debug!(?headers, "csv headers");

    let idx = |names: &[&str]| headers.iter().position(|h| names.contains(&h.as_str()));
    let i_lat = idx(&["lat", "latitude"]).context("missing lat column")?;
    let i_lon = idx(&["lon", "lng", "longitude"]).context("missing lon column")?;
    let i_ele = idx(&["ele", "elevation", "alt", "altitude"]);
    let i_time = idx(&["time", "timestamp", "datetime"]);
    let i_seg = idx(&["segment", "seg"]);

    let mut segments: Vec<TrackSegment> = Vec::new();
    let mut current_seg: Option<String> = None;
    let mut skipped = 0usize;

    for rec in rdr.records() {
        let rec = rec?;
        let num = |i: usize| rec.get(i).and_then(|s| s.parse::<f64>().ok());
        let (Some(lat), Some(lon)) = (num(i_lat), num(i_lon)) else {
            skipped += 1;
            continue;
        };

        let mut pt = TrackPoint::new(lat, lon);
        if let Some(ele) = i_ele.and_then(num) {
            pt = pt.with_elevation(ele);
        }
        if let Some(ts) = i_time.and_then(|i| rec.get(i)).and_then(parse_time) {
            pt = pt.with_timestamp(ts);
        }

        let seg = i_seg.and_then(|i| rec.get(i)).map(str::to_string);
        if segments.is_empty() || seg != current_seg {
            segments.push(TrackSegment::default());
            current_seg = seg;
        }
        if let Some(last) = segments.last_mut() {
            last.points.push(pt);
        }
    }

    if skipped > 0 {
        tracing::warn!(skipped, "rows without usable coordinates");
    }
    Ok(Track::new(segments))
}

/// RFC 3339 or epoch seconds/milliseconds.
fn parse_time(s: &str) -> Option<DateTime<Utc>> {
    if s.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    let n = s.parse::<i64>().ok()?;
    if n > 10_i64.pow(12) {
        DateTime::from_timestamp_millis(n)
    } else {
        DateTime::from_timestamp(n, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_name_uses_stem_kind_and_extension() {
        let out = out_name_with(Path::new("data/ride.csv"), "speed", OutputFormat::Svg).expect("out dir");
        assert_eq!(out, PathBuf::from("target/out/ride_speed.svg"));
        assert!(Path::new("target/out").is_dir());
    }

    #[test]
    fn parse_time_accepts_rfc3339_and_epochs() {
        let want = DateTime::parse_from_rfc3339("2024-05-01T08:00:00Z").unwrap().with_timezone(&Utc);
        assert_eq!(parse_time("2024-05-01T08:00:00Z"), Some(want));
        assert_eq!(parse_time(&want.timestamp().to_string()), Some(want));
        assert_eq!(parse_time(&want.timestamp_millis().to_string()), Some(want));
        assert_eq!(parse_time(""), None);
        assert_eq!(parse_time("yesterday"), None);
    }
}
