use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, DrawSurface, LinePrimitive, RectPrimitive, TextPrimitive};

/// Cursor glyph the host should show over the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorShape {
    #[default]
    Default,
    Crosshair,
}

/// One primitive draw call, in emission order.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Color),
    Line(LinePrimitive),
    FillRect(RectPrimitive),
    StrokeRect(RectPrimitive),
    Text(TextPrimitive),
}

/// Backend-agnostic recording of one full paint pass.
///
/// Commands keep their emission order because later commands occlude earlier
/// ones (label boxes are filled over tick labels).
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub commands: Vec<DrawCommand>,
    pub cursor: CursorShape,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            commands: Vec::new(),
            cursor: CursorShape::Default,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn lines(&self) -> impl Iterator<Item = &LinePrimitive> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Line(line) => Some(line),
            _ => None,
        })
    }

    pub fn filled_rects(&self) -> impl Iterator<Item = &RectPrimitive> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::FillRect(rect) => Some(rect),
            _ => None,
        })
    }

    pub fn stroked_rects(&self) -> impl Iterator<Item = &RectPrimitive> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::StrokeRect(rect) => Some(rect),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &TextPrimitive> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Text(text) => Some(text),
            _ => None,
        })
    }

    /// Finds the first text whose content, ignoring padding, equals `text`.
    #[must_use]
    pub fn find_text(&self, text: &str) -> Option<&TextPrimitive> {
        self.texts().find(|primitive| primitive.text.trim_end() == text)
    }

    /// Replays the recorded commands onto another surface.
    pub fn replay(&self, surface: &mut impl DrawSurface) {
        for command in &self.commands {
            match command {
                DrawCommand::Clear(color) => surface.clear(*color),
                DrawCommand::Line(line) => surface.draw_line(*line),
                DrawCommand::FillRect(rect) => surface.fill_rect(*rect),
                DrawCommand::StrokeRect(rect) => surface.draw_rect(*rect),
                DrawCommand::Text(text) => surface.draw_text(text.clone()),
            }
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for command in &self.commands {
            match command {
                DrawCommand::Clear(color) => color.validate()?,
                DrawCommand::Line(line) => line.validate()?,
                DrawCommand::FillRect(rect) | DrawCommand::StrokeRect(rect) => rect.validate()?,
                DrawCommand::Text(text) => text.validate()?,
            }
        }

        Ok(())
    }
}

impl DrawSurface for RenderFrame {
    fn clear(&mut self, color: Color) {
        self.commands.push(DrawCommand::Clear(color));
    }

    fn draw_line(&mut self, line: LinePrimitive) {
        self.commands.push(DrawCommand::Line(line));
    }

    fn fill_rect(&mut self, rect: RectPrimitive) {
        self.commands.push(DrawCommand::FillRect(rect));
    }

    fn draw_rect(&mut self, rect: RectPrimitive) {
        self.commands.push(DrawCommand::StrokeRect(rect));
    }

    fn draw_text(&mut self, text: TextPrimitive) {
        self.commands.push(DrawCommand::Text(text));
    }

    fn set_cursor(&mut self, cursor: CursorShape) {
        self.cursor = cursor;
    }
}
