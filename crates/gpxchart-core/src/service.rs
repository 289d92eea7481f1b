// File: crates/gpxchart-core/src/service.rs
// Summary: Chart service: sampling + axis preparation per chart type, rendering, PNG/SVG encoding.

use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};
use skia_safe as skia;

use crate::autoscale;
use crate::chart::{ChartParams, ChartRenderer, RenderSummary};
use crate::error::{ChartError, Result};
use crate::font::FontSource;
use crate::logging::{ErrorLogger, TracingLogger};
use crate::sampler;
use crate::surface::{SkiaSurface, Surface};
use crate::text::TextShaper;
use crate::track::Track;
use crate::units::UnitRegistry;

/// Encoded output kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    /// Raster image (PNG bytes).
    Png,
    /// Vector drawing (SVG markup).
    Svg,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Svg => "svg",
        }
    }

    /// Pick the format from a file name's extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or_default();
        ext.parse()
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for OutputFormat {
    type Err = ChartError;

    /// Accepts `png`/`svg` with or without a leading dot, any case.
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let bare = trimmed.strip_prefix('.').unwrap_or(trimmed);
        if bare.eq_ignore_ascii_case("png") {
            Ok(OutputFormat::Png)
        } else if bare.eq_ignore_ascii_case("svg") {
            Ok(OutputFormat::Svg)
        } else {
            Err(ChartError::UnsupportedOutput(s.to_string()))
        }
    }
}

/// Entry point for rendering elevation, speed and steepness charts.
///
/// Cheap to clone and safe to share between threads; each call works on
/// its own [`ChartParams`].
#[derive(Clone)]
pub struct ChartService {
    fonts: Arc<FontSource>,
    units: Arc<UnitRegistry>,
    logger: Arc<dyn ErrorLogger>,
}

impl fmt::Debug for ChartService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChartService").field("fonts", &self.fonts).finish_non_exhaustive()
    }
}

impl ChartService {
    /// Build a service using the first existing directory of `font_dirs`.
    pub fn new<P: AsRef<Path>>(font_dirs: &[P]) -> Result<Self> {
        let fonts = FontSource::resolve(font_dirs)?;
        tracing::debug!(dir = %fonts.dir().display(), "chart service ready");
        Ok(Self {
            fonts,
            units: Arc::new(UnitRegistry::new()),
            logger: Arc::new(TracingLogger),
        })
    }

    /// Send degenerate-data diagnostics to `logger` instead of `tracing`.
    pub fn with_logger(mut self, logger: Arc<dyn ErrorLogger>) -> Self {
        self.logger = logger;
        self
    }

    pub fn units(&self) -> &UnitRegistry {
        &self.units
    }

    pub fn fonts(&self) -> &FontSource {
        &self.fonts
    }

    pub fn prepare_elevation(&self, mut params: ChartParams, track: &Track) -> ChartParams {
        let series = sampler::elevation(track);
        tracing::debug!(points = series.len(), min = series.min, max = series.max, "elevation series");
        params.points = series.points;
        autoscale::prepare_length_axis(&mut params.x_axis, series.distance, params.unit);
        autoscale::prepare_elevation_axis(&mut params.y_axis, series.min, series.max, params.unit);
        params
    }

    pub fn prepare_speed(&self, mut params: ChartParams, track: &Track) -> ChartParams {
        let series = sampler::speed(track);
        tracing::debug!(points = series.len(), min = series.min, max = series.max, "speed series");
        params.points = series.points;
        autoscale::prepare_length_axis(&mut params.x_axis, series.distance, params.unit);
        autoscale::prepare_speed_axis(&mut params.y_axis, series.min, series.max, params.unit);
        params
    }

    /// Steepness charts pin the Y range to the sampler's symmetric scale.
    pub fn prepare_steepness(&self, mut params: ChartParams, track: &Track) -> ChartParams {
        let series = sampler::steepness(track);
        tracing::debug!(points = series.len(), scale = series.max, "steepness series");
        params.y_bounds = Some((series.min, series.max));
        params.points = series.points;
        autoscale::prepare_length_axis(&mut params.x_axis, series.distance, params.unit);
        autoscale::prepare_steepness_axis(&mut params.y_axis, series.max);
        params
    }

    pub fn elevation_chart(&self, params: ChartParams, track: &Track, output: OutputFormat) -> Result<Vec<u8>> {
        self.chart(self.prepare_elevation(params, track), output)
    }

    pub fn speed_chart(&self, params: ChartParams, track: &Track, output: OutputFormat) -> Result<Vec<u8>> {
        self.chart(self.prepare_speed(params, track), output)
    }

    pub fn steepness_chart(&self, params: ChartParams, track: &Track, output: OutputFormat) -> Result<Vec<u8>> {
        self.chart(self.prepare_steepness(params, track), output)
    }

    /// Draw prepared params onto any surface.
    pub fn render<S: Surface + ?Sized>(&self, params: ChartParams, surface: &mut S) -> RenderSummary {
        ChartRenderer::new(&self.units, self.logger.as_ref()).render(params, surface)
    }

    /// Render prepared params and encode them.
    pub fn chart(&self, params: ChartParams, output: OutputFormat) -> Result<Vec<u8>> {
        let shaper = TextShaper::new(&self.fonts);
        match output {
            OutputFormat::Png => self.encode_png(params, &shaper),
            OutputFormat::Svg => self.encode_svg(params, &shaper),
        }
    }

    fn encode_png(&self, params: ChartParams, shaper: &TextShaper) -> Result<Vec<u8>> {
        let (width, height) = (params.width, params.height);
        let mut surface = skia::surfaces::raster_n32_premul((width, height))
            .ok_or(ChartError::Surface { width, height })?;
        {
            let mut target = SkiaSurface::new(surface.canvas(), shaper);
            self.render(params, &mut target);
        }

        let info = skia::ImageInfo::new(
            (width, height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let row_bytes = width as usize * 4;
        let mut pixels = vec![0u8; row_bytes * height as usize];
        if !surface.read_pixels(&info, &mut pixels, row_bytes, (0, 0)) {
            return Err(ChartError::ReadPixels);
        }

        let mut out = Vec::new();
        PngEncoder::new(&mut out)
            .write_image(&pixels, width as u32, height as u32, ExtendedColorType::Rgba8)
            .map_err(|source| ChartError::Encode { format: "png", source })?;
        Ok(out)
    }

    fn encode_svg(&self, params: ChartParams, shaper: &TextShaper) -> Result<Vec<u8>> {
        let canvas = skia::svg::Canvas::new(skia::Rect::from_iwh(params.width, params.height), None);
        {
            let mut target = SkiaSurface::new(&canvas, shaper);
            self.render(params, &mut target);
        }
        let data = canvas.end();
        if data.is_empty() {
            return Err(ChartError::EmptySvg);
        }
        Ok(data.as_bytes().to_vec())
    }
}
