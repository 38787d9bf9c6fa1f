use tracing::debug;

use crate::error::ChartResult;
use crate::interaction::{ChartEvent, InteractionOptions};
use crate::render::Renderer;

use super::input_router::{StateDelta, dispatch};
use super::{ChartEngine, ZoomDirection};

impl<R: Renderer> ChartEngine<R> {
    /// Routes one input event. Returns whether the chart needs a repaint.
    pub fn handle_event(&mut self, event: ChartEvent) -> ChartResult<bool> {
        let delta = dispatch(
            &self.state.interaction,
            self.state.config.interaction,
            &self.state.layout,
            &event,
        );
        self.apply(delta)?;
        Ok(delta.repaint)
    }

    /// Applies a routed delta to the chart state.
    pub fn apply(&mut self, delta: StateDelta) -> ChartResult<()> {
        if let Some(viewport) = delta.resize {
            self.state.resize(viewport)?;
        }
        if let Some(interaction) = delta.interaction {
            self.state.interaction = interaction;
        }
        if let Some(direction) = delta.zoom {
            self.zoom(direction);
        }
        if let Some(fraction) = delta.scroll_to_fraction {
            let len = self.state.series.len();
            self.state.viewport.scroll_to_fraction(fraction, len);
        }
        Ok(())
    }

    /// One zoom step. Returns whether the candle width changed.
    pub fn zoom(&mut self, direction: ZoomDirection) -> bool {
        self.state.viewport.on_zoom_change(direction)
    }

    /// Scrolls so the window ends `offset_from_end` candles before the newest.
    pub fn scroll_to(&mut self, offset_from_end: usize) {
        self.state.viewport.scroll_to(offset_from_end);
    }

    pub fn set_interaction_options(&mut self, options: InteractionOptions) {
        debug!(
            show_labels_with_mouse = options.show_labels_with_mouse,
            select_area_with_mouse = options.select_area_with_mouse,
            "set interaction options"
        );
        self.state.config.interaction = options;
        if !options.select_area_with_mouse {
            self.state.interaction.clear_selection();
        }
    }

    pub fn set_show_labels_with_mouse(&mut self, enabled: bool) {
        self.set_interaction_options(InteractionOptions {
            show_labels_with_mouse: enabled,
            ..self.state.config.interaction
        });
    }

    pub fn set_select_area_with_mouse(&mut self, enabled: bool) {
        self.set_interaction_options(InteractionOptions {
            select_area_with_mouse: enabled,
            ..self.state.config.interaction
        });
    }
}
