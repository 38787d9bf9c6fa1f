//! GTK4 embedding: a `DrawingArea` whose input controllers feed `ChartEvent`s
//! into a shared engine and whose draw callback paints through Cairo.

use std::cell::RefCell;
use std::rc::Rc;

use gtk4 as gtk;
use gtk4::prelude::*;
use tracing::warn;

use crate::api::ChartEngine;
use crate::core::Viewport;
use crate::interaction::{ChartEvent, PointerButton, WheelDirection};
use crate::render::{CairoContextRenderer, CairoRenderer, CursorShape};

pub type SharedEngine = Rc<RefCell<ChartEngine<CairoRenderer>>>;

/// Chart widget: a drawing area wired to one engine.
pub struct GtkChartView {
    drawing_area: gtk::DrawingArea,
    engine: SharedEngine,
}

impl GtkChartView {
    #[must_use]
    pub fn new(engine: ChartEngine<CairoRenderer>) -> Self {
        let viewport = engine.config().viewport;
        let engine = Rc::new(RefCell::new(engine));
        let drawing_area = gtk::DrawingArea::new();
        drawing_area.set_content_width(viewport.width as i32);
        drawing_area.set_content_height(viewport.height as i32);
        drawing_area.set_focusable(true);

        attach_draw(&drawing_area, &engine);
        attach_resize(&drawing_area, &engine);
        attach_pointer(&drawing_area, &engine);
        attach_buttons(&drawing_area, &engine);
        attach_scroll(&drawing_area, &engine);

        Self {
            drawing_area,
            engine,
        }
    }

    #[must_use]
    pub fn widget(&self) -> &gtk::DrawingArea {
        &self.drawing_area
    }

    #[must_use]
    pub fn engine(&self) -> SharedEngine {
        Rc::clone(&self.engine)
    }
}

fn forward(engine: &SharedEngine, drawing_area: &gtk::DrawingArea, event: ChartEvent) {
    let Ok(mut chart) = engine.try_borrow_mut() else {
        return;
    };
    match chart.handle_event(event) {
        Ok(true) => drawing_area.queue_draw(),
        Ok(false) => {}
        Err(err) => warn!(error = %err, ?event, "chart event rejected"),
    }
}

fn attach_draw(drawing_area: &gtk::DrawingArea, engine: &SharedEngine) {
    let engine = Rc::clone(engine);
    drawing_area.set_draw_func(move |widget, context, width, height| {
        if width <= 0 || height <= 0 {
            return;
        }
        let Ok(mut chart) = engine.try_borrow_mut() else {
            return;
        };

        let viewport = Viewport::new(width as u32, height as u32);
        if chart.config().viewport != viewport {
            let resized = ChartEvent::Resized {
                width: viewport.width,
                height: viewport.height,
            };
            if let Err(err) = chart.handle_event(resized) {
                warn!(error = %err, "skipping draw after failed resize");
                return;
            }
        }

        let frame = chart.build_frame();
        if let Err(err) = chart.renderer_mut().render_on_cairo_context(context, &frame) {
            warn!(error = %err, "cairo draw failed");
        }
        match frame.cursor {
            CursorShape::Crosshair => widget.set_cursor_from_name(Some("crosshair")),
            CursorShape::Default => widget.set_cursor_from_name(None),
        }
    });
}

fn attach_resize(drawing_area: &gtk::DrawingArea, engine: &SharedEngine) {
    let engine = Rc::clone(engine);
    drawing_area.connect_resize(move |widget, width, height| {
        if width <= 0 || height <= 0 {
            return;
        }
        forward(
            &engine,
            widget,
            ChartEvent::Resized {
                width: width as u32,
                height: height as u32,
            },
        );
    });
}

fn attach_pointer(drawing_area: &gtk::DrawingArea, engine: &SharedEngine) {
    let motion = gtk::EventControllerMotion::new();
    {
        let engine = Rc::clone(engine);
        let drawing_area = drawing_area.clone();
        motion.connect_enter(move |_, x, y| {
            forward(&engine, &drawing_area, ChartEvent::PointerEntered);
            forward(&engine, &drawing_area, ChartEvent::PointerMoved { x, y });
        });
    }
    {
        let engine = Rc::clone(engine);
        let drawing_area = drawing_area.clone();
        motion.connect_motion(move |_, x, y| {
            forward(&engine, &drawing_area, ChartEvent::PointerMoved { x, y });
        });
    }
    {
        let engine = Rc::clone(engine);
        let drawing_area = drawing_area.clone();
        motion.connect_leave(move |_| {
            forward(&engine, &drawing_area, ChartEvent::PointerLeft);
        });
    }
    drawing_area.add_controller(motion);
}

fn attach_buttons(drawing_area: &gtk::DrawingArea, engine: &SharedEngine) {
    let click = gtk::GestureClick::new();
    // Listen to every button, not only the primary one.
    click.set_button(0);
    {
        let engine = Rc::clone(engine);
        let drawing_area = drawing_area.clone();
        click.connect_pressed(move |gesture, _n_press, x, y| {
            let button = pointer_button(gesture.current_button());
            forward(&engine, &drawing_area, ChartEvent::ButtonPressed { x, y, button });
        });
    }
    {
        let engine = Rc::clone(engine);
        let drawing_area = drawing_area.clone();
        click.connect_released(move |gesture, _n_press, x, y| {
            let button = pointer_button(gesture.current_button());
            forward(&engine, &drawing_area, ChartEvent::ButtonReleased { x, y, button });
        });
    }
    drawing_area.add_controller(click);
}

fn attach_scroll(drawing_area: &gtk::DrawingArea, engine: &SharedEngine) {
    let scroll = gtk::EventControllerScroll::new(gtk::EventControllerScrollFlags::VERTICAL);
    let engine = Rc::clone(engine);
    let target = drawing_area.clone();
    scroll.connect_scroll(move |_, _dx, dy| {
        let direction = if dy < 0.0 {
            WheelDirection::Up
        } else if dy > 0.0 {
            WheelDirection::Down
        } else {
            return gtk::glib::Propagation::Proceed;
        };
        forward(&engine, &target, ChartEvent::Wheel { direction });
        gtk::glib::Propagation::Stop
    });
    drawing_area.add_controller(scroll);
}

fn pointer_button(raw: u32) -> PointerButton {
    match raw {
        1 => PointerButton::Left,
        2 => PointerButton::Middle,
        3 => PointerButton::Right,
        other => PointerButton::Other(u16::try_from(other).unwrap_or(u16::MAX)),
    }
}
