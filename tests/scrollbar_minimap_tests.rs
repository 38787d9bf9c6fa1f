use approx::assert_abs_diff_eq;
use ohlcv_chart::api::{ChartConfig, ChartEngine, ChartStyle, window_indicator};
use ohlcv_chart::core::{Candle, Viewport, aggregate_for_strip};
use ohlcv_chart::interaction::{ChartEvent, PointerButton};
use ohlcv_chart::render::NullRenderer;

fn ramp(len: usize) -> Vec<Candle> {
    (0..len)
        .map(|i| {
            let base = 100.0 + (i % 40) as f32;
            Candle::new(20_240_102, 93_000, base, base + 3.0, base - 2.0, base + 1.0, 50.0)
        })
        .collect()
}

/// 200px plot and strip: ten candles fit, the strip spans [0, 200] x [270, 300].
fn engine_with(len: usize) -> ChartEngine<NullRenderer> {
    let config = ChartConfig::new(Viewport::new(252, 300));
    let mut engine = ChartEngine::new(NullRenderer::default(), config).expect("engine");
    engine.append_candles(&ramp(len)).expect("append");
    engine.render().expect("render");
    engine
}

#[test]
fn thousand_candles_merge_five_to_a_pixel() {
    let candles = ramp(1_000);
    let aggregate = aggregate_for_strip(&candles, 200.0).expect("aggregate");
    assert_eq!(aggregate.merge_factor, 5);
    assert_eq!(aggregate.candles.len(), 200);
    assert_eq!(aggregate.candle_width, 1.0);
    assert!(aggregate.candles.iter().all(|merged| merged.count == 5));
}

#[test]
fn strip_draws_every_merged_candle_and_the_indicator() {
    let mut engine = engine_with(1_000);
    let frame = engine.build_frame();
    let style = ChartStyle::default();

    assert_eq!(engine.viewport_state().visible_count, 10);
    let strip_outlines = frame.stroked_rects().filter(|rect| rect.y >= 270.0).count();
    assert_eq!(strip_outlines, 201);
    assert_eq!(
        frame
            .filled_rects()
            .filter(|rect| rect.color == style.scrollbar_background_color)
            .count(),
        1
    );
}

#[test]
fn indicator_covers_visible_window() {
    let engine = engine_with(1_000);
    let indicator = window_indicator(engine.state()).expect("indicator");
    assert_abs_diff_eq!(indicator.left, 198.0, epsilon = 1e-9);
    assert_abs_diff_eq!(indicator.right, 200.0, epsilon = 1e-9);
    assert_eq!((indicator.top, indicator.bottom), (270.0, 300.0));
}

#[test]
fn strip_is_hidden_while_everything_fits() {
    let mut engine = engine_with(5);
    let frame = engine.build_frame();
    let style = ChartStyle::default();

    assert!(window_indicator(engine.state()).is_none());
    assert!(
        frame
            .filled_rects()
            .all(|rect| rect.color != style.scrollbar_background_color)
    );
    // The strip height stays reserved.
    assert_eq!(engine.layout().plot_bottom, 250.0);
}

#[test]
fn strip_press_centres_window_on_fraction() {
    let mut engine = engine_with(1_000);
    let repaint = engine
        .handle_event(ChartEvent::ButtonPressed {
            x: 50.0,
            y: 285.0,
            button: PointerButton::Left,
        })
        .expect("press");
    assert!(repaint);
    engine.render().expect("render");

    // Fraction 0.75 -> centre 750, half window 5.
    assert_eq!(engine.viewport_state().offset_from_end, 745);
    assert!(engine.interaction().is_scrollbar_drag());
    assert!(engine.selection().is_none());

    let indicator = window_indicator(engine.state()).expect("indicator");
    assert_abs_diff_eq!(indicator.right, 200.0 - 0.745 * 200.0, epsilon = 1e-9);
}

#[test]
fn dragging_on_the_strip_keeps_scrolling() {
    let mut engine = engine_with(1_000);
    engine
        .handle_event(ChartEvent::ButtonPressed {
            x: 50.0,
            y: 285.0,
            button: PointerButton::Left,
        })
        .expect("press");
    engine
        .handle_event(ChartEvent::PointerMoved { x: 150.0, y: 120.0 })
        .expect("move");
    engine.render().expect("render");
    assert_eq!(engine.viewport_state().offset_from_end, 245);

    engine
        .handle_event(ChartEvent::ButtonReleased {
            x: 150.0,
            y: 120.0,
            button: PointerButton::Left,
        })
        .expect("release");
    assert!(!engine.interaction().is_scrollbar_drag());
    assert!(engine.selection().is_none());

    engine
        .handle_event(ChartEvent::PointerMoved { x: 20.0, y: 120.0 })
        .expect("move");
    engine.render().expect("render");
    assert_eq!(engine.viewport_state().offset_from_end, 245);
}

#[test]
fn oldest_edge_press_clamps_to_the_first_candles() {
    let mut engine = engine_with(1_000);
    engine
        .handle_event(ChartEvent::ButtonPressed {
            x: 0.0,
            y: 290.0,
            button: PointerButton::Left,
        })
        .expect("press");
    engine.render().expect("render");

    let state = engine.viewport_state();
    assert_eq!(state.offset_from_end, 990);
    assert_eq!(state.x_bounds.min, -1_000.0);
}

#[test]
fn partial_oldest_run_stays_inside_the_strip() {
    // 2px strip: 7 candles merge 4 to one, 2 * 4 / 7 px each, oldest run partial.
    let config = ChartConfig::new(Viewport::new(54, 300));
    let mut engine = ChartEngine::new(NullRenderer::default(), config).expect("engine");
    engine.append_candles(&ramp(7)).expect("append");
    let frame = engine.build_frame();

    let strip_outlines: Vec<_> = frame.stroked_rects().filter(|rect| rect.y >= 270.0).collect();
    // Two merged candles plus the window indicator.
    assert_eq!(strip_outlines.len(), 3);
    assert!(strip_outlines.iter().all(|rect| rect.x >= 0.0));
    assert_abs_diff_eq!(strip_outlines[1].width, 2.0 - 8.0 / 7.0, epsilon = 1e-9);
    assert!(
        frame
            .lines()
            .filter(|line| line.y1 >= 270.0)
            .all(|line| line.x1 >= 0.0)
    );
    assert!(frame.validate().is_ok());
}
