// File: crates/plot-core/src/chart.rs
// Summary: Chart model, the plot pipeline (sample, autoscale), and the
// headless Skia raster pipeline (PNG / RGBA) with centered axes, the
// function polyline, and the pointer-tracked focus marker.

use anyhow::Result;
use skia_safe as skia;

use plot_expr::ExprError;

use crate::axis::{Axis, RangeError};
use crate::geometry::RectI32;
use crate::hover::nearest_sample;
use crate::sample::{finite_extent, sample_series, Sample, SampleSeries, SAMPLE_STEP};
use crate::scale::LinearScale;
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::ticks;
use crate::types::{Insets, HEIGHT, WIDTH};

/// Stroke width of the function line.
const LINE_STROKE_WIDTH: f32 = 1.5;
/// Focus marker radius.
const FOCUS_RADIUS: f32 = 4.5;
/// Tick mark length, in pixels.
const TICK_LEN: f32 = 6.0;
/// Label font size.
const LABEL_SIZE: f32 = 12.0;

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    pub draw_labels: bool,
    /// Pointer position in surface pixels. `Some` draws the focus marker,
    /// its readout box, and a floating tooltip for the nearest sample;
    /// `None` is the pointer-leave state.
    pub focus: Option<(f32, f32)>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::light(),
            draw_labels: true,
            focus: None,
        }
    }
}

/// Failures of the plot pipeline. Rendering itself reports I/O and surface
/// problems separately through `anyhow`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PlotError {
    #[error("invalid function: {0}")]
    Expr(#[from] ExprError),
    #[error("invalid range: {0}")]
    Range(#[from] RangeError),
    #[error("x range produced no samples")]
    EmptyDomain,
}

pub struct Chart {
    pub samples: SampleSeries,
    pub x_axis: Axis,
    pub y_axis: Axis,
}

impl Chart {
    pub fn new() -> Self {
        Self {
            samples: Vec::new(),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
        }
    }

    /// Compile `source` as an expression of `x` and sample it across the
    /// x-axis domain. On error the chart keeps its axes and stays empty —
    /// callers render the axes-only chart and report.
    pub fn plot_expression(&mut self, source: &str) -> Result<(), PlotError> {
        let expr = plot_expr::compile(source)?;
        self.plot_fn(|x| expr.eval(x))
    }

    /// Sample an arbitrary function at [`SAMPLE_STEP`] spacing over the
    /// x-axis domain, then re-derive the y-axis domain from the finite
    /// data extent, rounded outward to tick-aligned bounds. The seeded
    /// y range stands when no sample is finite.
    pub fn plot_fn(&mut self, f: impl Fn(f64) -> f64) -> Result<(), PlotError> {
        let series = sample_series(f, self.x_axis.min, self.x_axis.max, SAMPLE_STEP);
        if series.is_empty() {
            return Err(PlotError::EmptyDomain);
        }
        if let Some((lo, hi)) = finite_extent(&series) {
            let (lo, hi) = ticks::nice_domain(lo, hi, ticks::DEFAULT_TICK_COUNT);
            self.y_axis.min = lo;
            self.y_axis.max = hi;
        }
        self.samples = series;
        Ok(())
    }

    /// Render to a PNG file, creating parent directories as needed.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }

    /// Render to in-memory PNG bytes.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = make_surface(opts)?;
        self.draw(surface.canvas(), opts);
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render to a raw RGBA8 buffer: `(pixels, width, height, stride)`.
    /// This is the path windowed frontends blit from.
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, i32, i32, usize)> {
        let mut surface = make_surface(opts)?;
        self.draw(surface.canvas(), opts);

        let (w, h) = (opts.width, opts.height);
        let row_bytes = w as usize * 4;
        let info = skia::ImageInfo::new(
            (w, h),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Premul,
            None,
        );
        let mut pixels = vec![0u8; row_bytes * h as usize];
        if !surface.read_pixels(&info, &mut pixels, row_bytes, (0, 0)) {
            anyhow::bail!("reading surface pixels failed");
        }
        Ok((pixels, w, h, row_bytes))
    }

    fn draw(&self, canvas: &skia::Canvas, opts: &RenderOptions) {
        let theme = &opts.theme;
        canvas.clear(theme.background);

        let plot = RectI32::from_ltrb(
            opts.insets.left as i32,
            opts.insets.top as i32,
            opts.width - opts.insets.right as i32,
            opts.height - opts.insets.bottom as i32,
        );
        if plot.width() <= 0 || plot.height() <= 0 {
            return;
        }

        // scales are rebuilt per pass; nothing outlives the render
        let x_scale = LinearScale::new(
            (self.x_axis.min, self.x_axis.max),
            (plot.left as f32, plot.right as f32),
        );
        let y_scale = LinearScale::new(
            (self.y_axis.min, self.y_axis.max),
            (plot.bottom as f32, plot.top as f32),
        );

        let shaper = opts.draw_labels.then(TextShaper::new);

        draw_axes(
            canvas,
            plot,
            &self.x_axis,
            &self.y_axis,
            &x_scale,
            &y_scale,
            theme,
            shaper.as_ref(),
        );
        draw_series(canvas, &self.samples, &x_scale, &y_scale, theme);
        if let Some((px, py)) = opts.focus {
            draw_focus(
                canvas,
                &self.samples,
                plot,
                &x_scale,
                &y_scale,
                theme,
                shaper.as_ref(),
                px,
                py,
            );
        }
    }
}

fn make_surface(opts: &RenderOptions) -> Result<skia::Surface> {
    skia::surfaces::raster_n32_premul((opts.width, opts.height))
        .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))
}

// ---- helpers ----------------------------------------------------------------

/// Axes cross at the center of the plot area, not at data zero: the x axis
/// runs along the vertical midpoint, the y axis along the horizontal one.
#[allow(clippy::too_many_arguments)]
fn draw_axes(
    canvas: &skia::Canvas,
    plot: RectI32,
    x_axis: &Axis,
    y_axis: &Axis,
    x_scale: &LinearScale,
    y_scale: &LinearScale,
    theme: &Theme,
    shaper: Option<&TextShaper>,
) {
    let mut axis_paint = skia::Paint::default();
    axis_paint.set_color(theme.axis_line);
    axis_paint.set_anti_alias(true);
    axis_paint.set_stroke_width(1.0);

    let mut tick_paint = skia::Paint::default();
    tick_paint.set_color(theme.tick);
    tick_paint.set_anti_alias(true);
    tick_paint.set_stroke_width(1.0);

    let mid_y = plot.mid_y() as f32;
    let mid_x = plot.mid_x() as f32;

    canvas.draw_line(
        (plot.left as f32, mid_y),
        (plot.right as f32, mid_y),
        &axis_paint,
    );
    canvas.draw_line(
        (mid_x, plot.top as f32),
        (mid_x, plot.bottom as f32),
        &axis_paint,
    );

    let x_ticks = ticks::ticks(x_axis.min, x_axis.max, ticks::DEFAULT_TICK_COUNT);
    let x_places = places_for(x_axis.min, x_axis.max);
    for &t in &x_ticks {
        let px = x_scale.to_px(t);
        canvas.draw_line((px, mid_y), (px, mid_y + TICK_LEN), &tick_paint);
        if let Some(shaper) = shaper {
            shaper.draw_centered(
                canvas,
                &format!("{t:.x_places$}"),
                px,
                mid_y + TICK_LEN + LABEL_SIZE,
                LABEL_SIZE,
                theme.axis_label,
            );
        }
    }

    let y_ticks = ticks::ticks(y_axis.min, y_axis.max, ticks::DEFAULT_TICK_COUNT);
    let y_places = places_for(y_axis.min, y_axis.max);
    for &t in &y_ticks {
        let py = y_scale.to_px(t);
        canvas.draw_line((mid_x - TICK_LEN, py), (mid_x, py), &tick_paint);
        if let Some(shaper) = shaper {
            shaper.draw_right(
                canvas,
                &format!("{t:.y_places$}"),
                mid_x - TICK_LEN - 4.0,
                py + LABEL_SIZE * 0.35,
                LABEL_SIZE,
                theme.axis_label,
            );
        }
    }

    if let Some(shaper) = shaper {
        shaper.draw_left(
            canvas,
            &x_axis.label,
            plot.right as f32 - 12.0,
            mid_y - 8.0,
            LABEL_SIZE,
            theme.axis_label,
        );
        shaper.draw_left(
            canvas,
            &y_axis.label,
            mid_x + 8.0,
            plot.top as f32 + LABEL_SIZE,
            LABEL_SIZE,
            theme.axis_label,
        );
    }
}

fn places_for(min: f64, max: f64) -> usize {
    let step = ticks::tick_increment(min, max, ticks::DEFAULT_TICK_COUNT as f64);
    let actual = if step > 0.0 { step } else { -1.0 / step };
    ticks::decimal_places(actual)
}

/// One continuous polyline through consecutive samples; runs of non-finite
/// y break the path into finite segments.
fn draw_series(
    canvas: &skia::Canvas,
    samples: &[Sample],
    x_scale: &LinearScale,
    y_scale: &LinearScale,
    theme: &Theme,
) {
    if samples.len() < 2 {
        return;
    }

    let mut path = skia::Path::new();
    let mut pen_down = false;
    for s in samples {
        if s.y.is_finite() {
            let p = (x_scale.to_px(s.x), y_scale.to_px(s.y));
            if pen_down {
                path.line_to(p);
            } else {
                path.move_to(p);
                pen_down = true;
            }
        } else {
            pen_down = false;
        }
    }

    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(LINE_STROKE_WIDTH);
    stroke.set_color(theme.line_stroke);

    canvas.draw_path(&path, &stroke);
}

/// Focus marker + readout box at the sample nearest the pointer, and a
/// floating tooltip trailing the pointer itself.
#[allow(clippy::too_many_arguments)]
fn draw_focus(
    canvas: &skia::Canvas,
    samples: &[Sample],
    plot: RectI32,
    x_scale: &LinearScale,
    y_scale: &LinearScale,
    theme: &Theme,
    shaper: Option<&TextShaper>,
    px: f32,
    py: f32,
) {
    // the hover overlay only spans the plot area
    if !plot.contains(px, py) {
        return;
    }
    let Some(s) = nearest_sample(samples, x_scale.from_px(px)) else {
        return;
    };
    if !s.y.is_finite() {
        return;
    }

    let fx = x_scale.to_px(s.x);
    let fy = y_scale.to_px(s.y);

    let mut marker = skia::Paint::default();
    marker.set_anti_alias(true);
    marker.set_style(skia::paint::Style::Fill);
    marker.set_color(theme.focus);
    canvas.draw_circle((fx, fy), FOCUS_RADIUS, &marker);

    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_style(skia::paint::Style::Fill);
    fill.set_color(theme.tooltip_fill);

    // readout box anchored to the focus point
    let readout_box = skia::Rect::from_xywh(fx + 10.0, fy - 22.0, 100.0, 40.0);
    canvas.draw_rrect(skia::RRect::new_rect_xy(readout_box, 4.0, 4.0), &fill);
    if let Some(shaper) = shaper {
        shaper.draw_left(
            canvas,
            &crate::hover::readout(s),
            fx + 18.0,
            fy - 2.0,
            LABEL_SIZE,
            theme.tooltip_text,
        );
    }

    // floating tooltip trailing the pointer
    let tip = skia::Rect::from_xywh(px + 5.0, py - 28.0, 88.0, 36.0);
    canvas.draw_rrect(skia::RRect::new_rect_xy(tip, 4.0, 4.0), &fill);
    if let Some(shaper) = shaper {
        shaper.draw_left(
            canvas,
            &format!("x: {:.2}", s.x),
            px + 13.0,
            py - 13.0,
            LABEL_SIZE,
            theme.tooltip_text,
        );
        shaper.draw_left(
            canvas,
            &format!("y: {:.2}", s.y),
            px + 13.0,
            py + 2.0,
            LABEL_SIZE,
            theme.tooltip_text,
        );
    }
}
