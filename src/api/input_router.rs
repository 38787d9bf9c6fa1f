use tracing::trace;

use crate::core::{PixelPoint, Viewport};
use crate::interaction::{
    ChartEvent, InteractionOptions, InteractionState, PointerButton, WheelDirection,
};

use super::minimap::strip_fraction;
use super::{ChartLayout, HitRegion, ZoomDirection};

/// State changes requested by one input event.
///
/// Produced by [`dispatch`] without touching the chart; the engine applies it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StateDelta {
    /// Replacement interaction snapshot, when it changed.
    pub interaction: Option<InteractionState>,
    pub zoom: Option<ZoomDirection>,
    pub resize: Option<Viewport>,
    /// Centre the window at this fraction of the series, newest end = `0.0`.
    pub scroll_to_fraction: Option<f64>,
    pub repaint: bool,
}

impl StateDelta {
    fn interaction(next: InteractionState, repaint: bool) -> Self {
        Self {
            interaction: Some(next),
            repaint,
            ..Self::default()
        }
    }
}

/// Maps one input event onto the state changes it causes.
#[must_use]
pub fn dispatch(
    current: &InteractionState,
    options: InteractionOptions,
    layout: &ChartLayout,
    event: &ChartEvent,
) -> StateDelta {
    let mut next = *current;
    let delta = match *event {
        ChartEvent::PointerMoved { x, y } => {
            let point = PixelPoint::new(x, y);
            next.on_pointer_move(point);
            let scroll_to_fraction = next
                .is_scrollbar_drag()
                .then_some(layout.scrollbar)
                .flatten()
                .map(|strip| strip_fraction(strip, x));
            let repaint = options.show_labels_with_mouse
                || (options.select_area_with_mouse && next.is_pressed())
                || scroll_to_fraction.is_some();
            StateDelta {
                scroll_to_fraction,
                ..StateDelta::interaction(next, repaint)
            }
        }
        ChartEvent::PointerEntered => {
            next.on_pointer_enter();
            StateDelta::interaction(next, options.show_labels_with_mouse)
        }
        ChartEvent::PointerLeft => {
            next.on_pointer_leave();
            StateDelta::interaction(next, options.show_labels_with_mouse)
        }
        ChartEvent::ButtonPressed {
            x,
            y,
            button: PointerButton::Left,
        } => {
            let point = PixelPoint::new(x, y);
            match (layout.hit_test(point), layout.scrollbar) {
                (HitRegion::Scrollbar, Some(strip)) => {
                    next.on_scrollbar_drag_start(point);
                    StateDelta {
                        scroll_to_fraction: Some(strip_fraction(strip, x)),
                        ..StateDelta::interaction(next, true)
                    }
                }
                _ if options.select_area_with_mouse => {
                    next.on_selection_start(point);
                    StateDelta::interaction(next, true)
                }
                _ => StateDelta::default(),
            }
        }
        ChartEvent::ButtonPressed {
            button: PointerButton::Right,
            ..
        } if options.select_area_with_mouse => {
            next.clear_selection();
            StateDelta::interaction(next, true)
        }
        ChartEvent::ButtonReleased {
            x,
            y,
            button: PointerButton::Left,
        } => {
            let point = PixelPoint::new(x, y);
            if next.is_scrollbar_drag() {
                next.on_scrollbar_drag_end();
                StateDelta::interaction(next, false)
            } else if next.is_pressed() {
                next.on_pointer_move(point);
                next.on_selection_end(point);
                StateDelta::interaction(next, true)
            } else {
                StateDelta::default()
            }
        }
        ChartEvent::ButtonPressed { .. } | ChartEvent::ButtonReleased { .. } => {
            StateDelta::default()
        }
        ChartEvent::Wheel { direction } => StateDelta {
            zoom: Some(match direction {
                WheelDirection::Up => ZoomDirection::In,
                WheelDirection::Down => ZoomDirection::Out,
            }),
            repaint: true,
            ..StateDelta::default()
        },
        ChartEvent::Resized { width, height } => StateDelta {
            resize: Some(Viewport::new(width, height)),
            repaint: true,
            ..StateDelta::default()
        },
    };
    trace!(?event, repaint = delta.repaint, "dispatch chart event");
    delta
}
