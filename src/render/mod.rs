mod frame;
mod null_renderer;
mod primitives;

pub use frame::{CursorShape, DrawCommand, RenderFrame};
pub use null_renderer::NullRenderer;
pub use primitives::{
    Color, LinePrimitive, LineStrokeStyle, RectPrimitive, TextAlign, TextPrimitive,
};

use crate::error::ChartResult;

/// Primitive drawing capability the chart paints onto.
///
/// The chart core only issues these calls and never reads pixels back.
pub trait DrawSurface {
    fn clear(&mut self, color: Color);
    fn draw_line(&mut self, line: LinePrimitive);
    fn fill_rect(&mut self, rect: RectPrimitive);
    fn draw_rect(&mut self, rect: RectPrimitive);
    fn draw_text(&mut self, text: TextPrimitive);

    /// Cursor glyph request for the current pass. Surfaces without a pointer ignore it.
    fn set_cursor(&mut self, _cursor: CursorShape) {}
}

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized `RenderFrame` so drawing code stays
/// isolated from chart domain and interaction logic.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoContextRenderer, CairoRenderStats, CairoRenderer};
