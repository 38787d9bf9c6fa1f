use tracing::trace;

use crate::core::Series;
use crate::error::ChartResult;
use crate::interaction::{InteractionOptions, InteractionState};
use crate::render::{DrawSurface, RenderFrame, Renderer};

use super::crosshair::{HoveredCandle, hovered_candle};
use super::overlay_renderer::paint_chart;
use super::selection::{SelectionSummary, selection_summary};
use super::{ChartConfig, ChartLayout, ChartState, ChartStyle, ViewportState};

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

/// Main orchestration facade consumed by host applications.
///
/// `ChartEngine` owns the chart state and a renderer. Input goes through
/// [`ChartEngine::handle_event`], paint passes through [`ChartEngine::render`]
/// or [`ChartEngine::paint_into`].
pub struct ChartEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) state: ChartState,
}

impl<R: Renderer> ChartEngine<R> {
    pub fn new(renderer: R, config: ChartConfig) -> ChartResult<Self> {
        Self::with_style(renderer, config, ChartStyle::default())
    }

    pub fn with_style(renderer: R, config: ChartConfig, style: ChartStyle) -> ChartResult<Self> {
        Ok(Self {
            renderer,
            state: ChartState::new(config, style)?,
        })
    }

    #[must_use]
    pub fn state(&self) -> &ChartState {
        &self.state
    }

    #[must_use]
    pub fn config(&self) -> &ChartConfig {
        &self.state.config
    }

    #[must_use]
    pub fn style(&self) -> &ChartStyle {
        &self.state.style
    }

    pub fn set_style(&mut self, style: ChartStyle) -> ChartResult<()> {
        style.validate()?;
        self.state.style = style;
        Ok(())
    }

    #[must_use]
    pub fn series(&self) -> &Series {
        &self.state.series
    }

    #[must_use]
    pub fn layout(&self) -> &ChartLayout {
        &self.state.layout
    }

    /// Viewport as of the last paint pass.
    #[must_use]
    pub fn viewport_state(&self) -> &ViewportState {
        self.state.viewport_state()
    }

    /// Number of bounds recomputations so far; coalesced events count once.
    #[must_use]
    pub fn recompute_count(&self) -> u64 {
        self.state.viewport.recompute_count()
    }

    #[must_use]
    pub fn interaction(&self) -> InteractionState {
        self.state.interaction
    }

    #[must_use]
    pub fn interaction_options(&self) -> InteractionOptions {
        self.state.config.interaction
    }

    #[must_use]
    pub fn selection(&self) -> Option<SelectionSummary> {
        selection_summary(&self.state)
    }

    #[must_use]
    pub fn hovered_candle(&self) -> Option<HoveredCandle> {
        hovered_candle(&self.state)
    }

    /// Brings the viewport up to date without painting.
    pub fn refresh_viewport(&mut self) -> bool {
        self.state.viewport.ensure_bounds(&self.state.series)
    }

    /// Paints one full frame directly onto `surface`.
    pub fn paint_into(&mut self, surface: &mut impl DrawSurface) {
        self.refresh_viewport();
        paint_chart(&self.state, surface);
    }

    /// Records one full frame.
    pub fn build_frame(&mut self) -> RenderFrame {
        let mut frame = RenderFrame::new(self.state.config.viewport);
        self.paint_into(&mut frame);
        trace!(commands = frame.commands.len(), "frame built");
        frame
    }

    pub fn render(&mut self) -> ChartResult<()> {
        let frame = self.build_frame();
        self.renderer.render(&frame)
    }

    /// Renders the frame into an external cairo context.
    ///
    /// This path is used by GTK draw callbacks while keeping the renderer
    /// implementation decoupled from GTK-specific APIs.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(&mut self, context: &cairo::Context) -> ChartResult<()>
    where
        R: CairoContextRenderer,
    {
        let frame = self.build_frame();
        self.renderer.render_on_cairo_context(context, &frame)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
