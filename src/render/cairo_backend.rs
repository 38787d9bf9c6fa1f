use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;

use crate::error::{ChartError, ChartResult};
use crate::render::{
    Color, DrawCommand, LinePrimitive, LineStrokeStyle, RectPrimitive, RenderFrame, Renderer,
    TextAlign, TextPrimitive,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub lines_drawn: usize,
    pub rects_filled: usize,
    pub rects_stroked: usize,
    pub texts_drawn: usize,
}

/// Optional extension trait for renderers that can draw into an external Cairo
/// context (for example a GTK `DrawingArea` callback).
pub trait CairoContextRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()>;
}

/// Cairo + Pango + PangoCairo renderer backend.
///
/// Frame coordinates are floats; this backend snaps them to the device pixel
/// grid so one-pixel strokes stay crisp.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    font_family: String,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> ChartResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(ChartError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            font_family: "Sans".to_owned(),
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    /// Recreates the offscreen surface when the chart is resized.
    pub fn resize(&mut self, width: i32, height: i32) -> ChartResult<()> {
        if width == self.surface.width() && height == self.surface.height() {
            return Ok(());
        }
        let resized = Self::new(width, height)?;
        self.surface = resized.surface;
        Ok(())
    }

    pub fn set_font_family(&mut self, family: impl Into<String>) {
        self.font_family = family.into();
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    /// Writes the offscreen surface as PNG.
    pub fn write_png(&self, writer: &mut impl std::io::Write) -> ChartResult<()> {
        self.surface
            .write_to_png(writer)
            .map_err(|err| ChartError::Render(format!("failed to write png: {err}")))
    }

    fn render_with_context(&mut self, context: &Context, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        let mut stats = CairoRenderStats::default();

        for command in &frame.commands {
            match command {
                DrawCommand::Clear(color) => {
                    apply_color(context, *color);
                    context
                        .paint()
                        .map_err(|err| map_backend_error("failed to clear surface", err))?;
                }
                DrawCommand::Line(line) => {
                    stroke_line(context, *line)?;
                    stats.lines_drawn += 1;
                }
                DrawCommand::FillRect(rect) => {
                    apply_color(context, rect.color);
                    let (x, y, width, height) = snap_fill(*rect);
                    context.rectangle(x, y, width, height);
                    context
                        .fill()
                        .map_err(|err| map_backend_error("failed to fill rectangle", err))?;
                    stats.rects_filled += 1;
                }
                DrawCommand::StrokeRect(rect) => {
                    apply_color(context, rect.color);
                    context.set_dash(&[], 0.0);
                    context.set_line_width(rect.stroke_width);
                    let (x, y, width, height) = snap_fill(*rect);
                    context.rectangle(x + 0.5, y + 0.5, (width - 1.0).max(0.0), (height - 1.0).max(0.0));
                    context
                        .stroke()
                        .map_err(|err| map_backend_error("failed to stroke rectangle", err))?;
                    stats.rects_stroked += 1;
                }
                DrawCommand::Text(text) => {
                    self.show_text(context, text);
                    stats.texts_drawn += 1;
                }
            }
        }

        self.last_stats = stats;
        Ok(())
    }

    fn show_text(&self, context: &Context, text: &TextPrimitive) {
        let layout = pangocairo::functions::create_layout(context);
        let font_description =
            FontDescription::from_string(&format!("{} {}px", self.font_family, text.font_size_px));
        layout.set_font_description(Some(&font_description));
        layout.set_text(&text.text);

        let (text_width, text_height) = layout.pixel_size();
        let (text_width, text_height) = (f64::from(text_width), f64::from(text_height));
        let rect = text.rect;
        let x = match text.align {
            TextAlign::Left => rect.left,
            TextAlign::Center => rect.left + (rect.width() - text_width) / 2.0,
            TextAlign::Right => rect.right - text_width,
        };
        let y = rect.top + (rect.height() - text_height) / 2.0;

        apply_color(context, text.color);
        context.move_to(x.round(), y.round());
        pangocairo::functions::show_layout(context, &layout);
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.render_with_context(&context, frame)
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()> {
        self.render_with_context(context, frame)
    }
}

fn stroke_line(context: &Context, line: LinePrimitive) -> ChartResult<()> {
    apply_color(context, line.color);
    context.set_line_width(line.stroke_width);
    match line.stroke_style {
        LineStrokeStyle::Solid => context.set_dash(&[], 0.0),
        LineStrokeStyle::Dashed { on, off } => context.set_dash(&[on, off], 0.0),
    }

    let (mut x1, mut y1, mut x2, mut y2) = (line.x1, line.y1, line.x2, line.y2);
    if line.is_vertical() {
        x1 = snap_stroke(x1);
        x2 = x1;
    }
    if line.is_horizontal() {
        y1 = snap_stroke(y1);
        y2 = y1;
    }
    context.move_to(x1, y1);
    context.line_to(x2, y2);
    context
        .stroke()
        .map_err(|err| map_backend_error("failed to stroke line", err))
}

/// Centres a one-pixel stroke on a device pixel.
fn snap_stroke(coordinate: f64) -> f64 {
    coordinate.floor() + 0.5
}

fn snap_fill(rect: RectPrimitive) -> (f64, f64, f64, f64) {
    let left = rect.x.round();
    let top = rect.y.round();
    let right = (rect.x + rect.width).round();
    let bottom = (rect.y + rect.height).round();
    (left, top, (right - left).max(1.0), (bottom - top).max(1.0))
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::Render(format!("{prefix}: {err}"))
}
