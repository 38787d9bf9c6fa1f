use crate::core::{PixelPoint, PixelRect, Viewport};

use super::ChartConfig;

/// Region of the surface a pointer position falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitRegion {
    MainPlot,
    VolumePlot,
    Scrollbar,
    Outside,
}

/// Pixel rectangles of every chart region for one surface size.
///
/// Top to bottom: main plot, optional volume band, X label row, optional
/// scrollbar strip. Y labels live right of `main`/`volume`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartLayout {
    pub surface: PixelRect,
    pub main: PixelRect,
    pub volume: Option<PixelRect>,
    /// Y of the bottom axis line: below the volume band when it is enabled.
    pub plot_bottom: f64,
    pub scrollbar: Option<PixelRect>,
}

impl ChartLayout {
    #[must_use]
    pub fn compute(viewport: Viewport, config: &ChartConfig) -> Self {
        let axis = config.axis;
        let surface = PixelRect::from_size(viewport);
        let left = axis.left_border_px.min(surface.right);
        let top = axis.top_border_px.min(surface.bottom);
        let right = (surface.right - axis.right_border_px).max(left);

        let scrollbar_height = if config.show_scrollbar {
            config.scrollbar_height_px
        } else {
            0.0
        };
        let plot_bottom = (surface.bottom - axis.bottom_border_px - scrollbar_height).max(top);

        let volume_height = if config.show_volume {
            config.volume_panel_height_px
        } else {
            0.0
        };
        let main_bottom = (plot_bottom - volume_height).max(top);
        let main = PixelRect::new(left, top, right, main_bottom);
        let volume = config
            .show_volume
            .then(|| PixelRect::new(left, main_bottom, right, plot_bottom));
        let scrollbar = config.show_scrollbar.then(|| {
            PixelRect::new(
                left,
                (surface.bottom - scrollbar_height).max(top),
                right,
                surface.bottom,
            )
        });

        Self {
            surface,
            main,
            volume,
            plot_bottom,
            scrollbar,
        }
    }

    /// Width available to candles, shared by the main plot and volume band.
    #[must_use]
    pub fn plot_width(&self) -> f64 {
        self.main.width()
    }

    #[must_use]
    pub fn hit_test(&self, point: PixelPoint) -> HitRegion {
        if self.scrollbar.is_some_and(|strip| strip.contains(point)) {
            HitRegion::Scrollbar
        } else if self.main.contains(point) {
            HitRegion::MainPlot
        } else if self.volume.is_some_and(|band| band.contains(point)) {
            HitRegion::VolumePlot
        } else {
            HitRegion::Outside
        }
    }
}
