use tracing::debug;

use crate::core::{AxisMapper, Series, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::interaction::InteractionState;

use super::{ChartConfig, ChartLayout, ChartStyle, ViewportController, ViewportState};

/// Everything one chart instance knows, passed explicitly to every paint and
/// input operation.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartState {
    pub config: ChartConfig,
    pub style: ChartStyle,
    pub series: Series,
    pub viewport: ViewportController,
    pub interaction: InteractionState,
    pub layout: ChartLayout,
}

impl ChartState {
    pub fn new(config: ChartConfig, style: ChartStyle) -> ChartResult<Self> {
        config.validate()?;
        style.validate()?;

        let layout = ChartLayout::compute(config.viewport, &config);
        let mut viewport = ViewportController::new(config.candles);
        viewport.on_resize(layout.plot_width());
        Ok(Self {
            config,
            style,
            series: Series::new(),
            viewport,
            interaction: InteractionState::default(),
            layout,
        })
    }

    /// Recomputes the layout for a new surface size and marks bounds dirty.
    pub fn resize(&mut self, viewport: Viewport) -> ChartResult<()> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        self.config.viewport = viewport;
        self.layout = ChartLayout::compute(viewport, &self.config);
        self.viewport.on_resize(self.layout.plot_width());
        debug!(
            width = viewport.width,
            height = viewport.height,
            plot_width = self.layout.plot_width(),
            "chart resized"
        );
        Ok(())
    }

    #[must_use]
    pub fn viewport_state(&self) -> &ViewportState {
        self.viewport.state()
    }

    /// Candle index offset, one candle step per unit.
    ///
    /// Offset `-k` lands on the body centre of the candle drawn in slot `k`
    /// from the right edge.
    #[must_use]
    pub fn x_mapper(&self) -> AxisMapper {
        let viewport = self.viewport_state();
        let step = viewport.candle_step();
        let bounds = viewport.x_bounds;
        let newest_centre =
            self.layout.main.right - step - f64::from(viewport.candle_width) / 2.0;
        AxisMapper::horizontal(newest_centre - bounds.span() * step, newest_centre, bounds)
    }

    #[must_use]
    pub fn price_mapper(&self) -> AxisMapper {
        let main = self.layout.main;
        AxisMapper::vertical(main.top, main.bottom, self.viewport_state().y_bounds)
    }

    #[must_use]
    pub fn volume_mapper(&self) -> Option<AxisMapper> {
        let bounds = self.viewport_state().volume_bounds;
        self.layout
            .volume
            .map(|band| AxisMapper::vertical(band.top, band.bottom, bounds))
    }

    /// The strip is reserved whenever enabled but only drawn while part of
    /// the series is scrolled out of view.
    #[must_use]
    pub fn is_scrollbar_active(&self) -> bool {
        self.layout.scrollbar.is_some() && self.viewport_state().visible_count < self.series.len()
    }
}
