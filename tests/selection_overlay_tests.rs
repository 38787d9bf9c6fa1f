use approx::assert_abs_diff_eq;
use ohlcv_chart::api::{ChartConfig, ChartEngine, ChartStyle};
use ohlcv_chart::core::{Candle, DataPoint, Viewport};
use ohlcv_chart::interaction::{ChartEvent, InteractionOptions, PointerButton};
use ohlcv_chart::render::{LineStrokeStyle, NullRenderer};

/// 640x320 plot holding ten candles on [-10, 0] x [0, 16].
///
/// Candle `k` from the right is centred at `615.5 - 17 * k`.
fn engine() -> ChartEngine<NullRenderer> {
    let config = ChartConfig::new(Viewport::new(692, 340))
        .with_volume_panel(false)
        .with_scrollbar(false);
    let mut engine = ChartEngine::new(NullRenderer::default(), config).expect("engine");
    let candles: Vec<Candle> = (0..10)
        .map(|i| {
            let high = if i == 4 { 16.0 } else { 8.0 };
            Candle::new(20_240_102, 93_000 + i * 100, 2.0, high, 0.0, 3.0, 10.0)
        })
        .collect();
    engine.append_candles(&candles).expect("append");
    engine
}

fn press(engine: &mut ChartEngine<NullRenderer>, x: f64, y: f64, button: PointerButton) {
    engine
        .handle_event(ChartEvent::ButtonPressed { x, y, button })
        .expect("press");
}

fn drag(engine: &mut ChartEngine<NullRenderer>, from: (f64, f64), to: (f64, f64)) {
    engine.handle_event(ChartEvent::PointerEntered).expect("enter");
    press(engine, from.0, from.1, PointerButton::Left);
    engine
        .handle_event(ChartEvent::PointerMoved { x: to.0, y: to.1 })
        .expect("move");
    engine
        .handle_event(ChartEvent::ButtonReleased {
            x: to.0,
            y: to.1,
            button: PointerButton::Left,
        })
        .expect("release");
}

#[test]
fn two_by_two_selection_reports_delta() {
    let mut engine = engine();
    drag(&mut engine, (564.5, 120.0), (598.5, 80.0));
    let frame = engine.build_frame();

    let summary = engine.selection().expect("selection");
    assert!(!summary.active);
    assert_eq!(summary.start, DataPoint::new(-3.0, 10.0));
    assert_eq!(summary.end, DataPoint::new(-1.0, 12.0));
    assert_eq!(summary.delta, DataPoint::new(2.0, 2.0));

    let delta_label = frame.find_text("2;2").expect("delta label");
    // Trailing box sits right of and below the release point.
    assert!(delta_label.rect.left >= 598.5);
    assert!(delta_label.rect.top >= 80.0);
}

#[test]
fn selection_paints_area_and_anchor_guides() {
    let mut engine = engine();
    drag(&mut engine, (564.5, 120.0), (598.5, 80.0));
    let frame = engine.build_frame();
    let style = ChartStyle::default();

    let area: Vec<_> = frame
        .filled_rects()
        .filter(|rect| rect.color == style.selection_fill_color)
        .collect();
    assert_eq!(area.len(), 1);
    assert_eq!((area[0].x, area[0].y), (564.5, 80.0));
    assert_eq!((area[0].width, area[0].height), (34.0, 40.0));

    let selection_guides = frame
        .lines()
        .filter(|line| {
            line.color == style.selection_color
                && matches!(line.stroke_style, LineStrokeStyle::Dashed { .. })
        })
        .count();
    assert_eq!(selection_guides, 4);
    assert!(frame.find_text("-3.000").is_some());
    assert!(frame.find_text("-1.000").is_some());
}

#[test]
fn live_drag_follows_pointer() {
    let mut engine = engine();
    engine.handle_event(ChartEvent::PointerEntered).expect("enter");
    press(&mut engine, 564.5, 120.0, PointerButton::Left);
    engine
        .handle_event(ChartEvent::PointerMoved { x: 581.5, y: 120.0 })
        .expect("move");
    engine.refresh_viewport();

    let summary = engine.selection().expect("selection");
    assert!(summary.active);
    assert_eq!(summary.delta, DataPoint::new(1.0, 0.0));
}

#[test]
fn anchors_outside_the_plot_are_clamped() {
    let mut engine = engine();
    drag(&mut engine, (564.5, 120.0), (690.0, 335.0));
    engine.refresh_viewport();

    // Clamped to the plot corner (640, 320), right of the newest centre.
    let summary = engine.selection().expect("selection");
    assert_eq!(summary.end.y, 0.0);
    assert_abs_diff_eq!(summary.end.x, 24.5 / 17.0, epsilon = 1e-9);
}

#[test]
fn right_click_clears_selection() {
    let mut engine = engine();
    drag(&mut engine, (564.5, 120.0), (598.5, 80.0));
    engine.refresh_viewport();
    assert!(engine.selection().is_some());

    press(&mut engine, 300.0, 100.0, PointerButton::Right);
    assert!(engine.selection().is_none());
    assert!(engine.build_frame().find_text("2;2").is_none());
}

#[test]
fn disabled_selection_draws_nothing() {
    let mut engine = engine();
    engine.set_interaction_options(InteractionOptions {
        show_labels_with_mouse: false,
        select_area_with_mouse: false,
    });
    drag(&mut engine, (564.5, 120.0), (598.5, 80.0));
    let frame = engine.build_frame();

    assert!(engine.selection().is_none());
    assert!(frame.find_text("2;2").is_none());
    assert!(
        frame
            .lines()
            .all(|line| matches!(line.stroke_style, LineStrokeStyle::Solid))
    );
}

#[test]
fn disabling_selection_drops_existing_anchors() {
    let mut engine = engine();
    drag(&mut engine, (564.5, 120.0), (598.5, 80.0));
    engine.set_select_area_with_mouse(false);
    assert!(engine.interaction().press_position().is_none());

    engine.set_select_area_with_mouse(true);
    assert!(engine.selection().is_none());
}
