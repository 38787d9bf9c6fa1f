use serde::{Deserialize, Serialize};

use crate::core::PixelPoint;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerButton {
    Left,
    Right,
    Middle,
    Other(u16),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WheelDirection {
    Up,
    Down,
}

/// Discrete input delivered by the host toolkit, in widget pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChartEvent {
    PointerMoved { x: f64, y: f64 },
    PointerEntered,
    PointerLeft,
    ButtonPressed { x: f64, y: f64, button: PointerButton },
    ButtonReleased { x: f64, y: f64, button: PointerButton },
    Wheel { direction: WheelDirection },
    Resized { width: u32, height: u32 },
}

/// Which pointer-driven overlays are enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionOptions {
    /// Crosshair guide lines with value labels following the pointer.
    pub show_labels_with_mouse: bool,
    /// Drag-to-select rectangle with delta readout.
    pub select_area_with_mouse: bool,
}

impl Default for InteractionOptions {
    fn default() -> Self {
        Self {
            show_labels_with_mouse: true,
            select_area_with_mouse: true,
        }
    }
}

/// Transient pointer snapshot read by the overlay renderer.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InteractionState {
    pointer: Option<PixelPoint>,
    press: Option<PixelPoint>,
    release: Option<PixelPoint>,
    pressed: bool,
    entered: bool,
    scrollbar_drag: bool,
}

impl InteractionState {
    #[must_use]
    pub fn pointer(self) -> Option<PixelPoint> {
        self.pointer
    }

    #[must_use]
    pub fn press_position(self) -> Option<PixelPoint> {
        self.press
    }

    #[must_use]
    pub fn release_position(self) -> Option<PixelPoint> {
        self.release
    }

    #[must_use]
    pub fn is_pressed(self) -> bool {
        self.pressed
    }

    #[must_use]
    pub fn is_entered(self) -> bool {
        self.entered
    }

    #[must_use]
    pub fn is_scrollbar_drag(self) -> bool {
        self.scrollbar_drag
    }

    /// Second selection anchor: the live pointer while dragging, the release
    /// position once the button is up.
    #[must_use]
    pub fn selection_end(self) -> Option<PixelPoint> {
        if self.pressed {
            self.pointer
        } else {
            self.release
        }
    }

    pub fn on_pointer_move(&mut self, point: PixelPoint) {
        self.pointer = Some(point);
    }

    pub fn on_pointer_enter(&mut self) {
        self.entered = true;
    }

    pub fn on_pointer_leave(&mut self) {
        self.entered = false;
    }

    pub fn on_selection_start(&mut self, point: PixelPoint) {
        self.pressed = true;
        self.press = Some(point);
        self.release = None;
        self.pointer = Some(point);
    }

    pub fn on_selection_end(&mut self, point: PixelPoint) {
        self.pressed = false;
        self.release = Some(point);
    }

    /// Drops both selection anchors.
    pub fn clear_selection(&mut self) {
        self.pressed = false;
        self.press = None;
        self.release = None;
    }

    pub fn on_scrollbar_drag_start(&mut self, point: PixelPoint) {
        self.scrollbar_drag = true;
        self.pointer = Some(point);
    }

    pub fn on_scrollbar_drag_end(&mut self) {
        self.scrollbar_drag = false;
    }
}
