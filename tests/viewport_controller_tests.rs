use ohlcv_chart::api::{
    CandleMetrics, ChartConfig, ChartEngine, ViewportController, ZoomDirection,
};
use ohlcv_chart::core::{Candle, DataRange, Series, Viewport};
use ohlcv_chart::interaction::{ChartEvent, WheelDirection};
use ohlcv_chart::render::NullRenderer;

fn candle(high: f32, low: f32, volume: f32) -> Candle {
    Candle::new(20_240_102, 100_000, low, high, low, high, volume)
}

fn series_from(highs: &[f32], lows: &[f32]) -> Series {
    let batch: Vec<Candle> = highs
        .iter()
        .zip(lows)
        .map(|(&high, &low)| candle(high, low, 10.0))
        .collect();
    let mut series = Series::new();
    series.append(&batch).expect("append");
    series
}

#[test]
fn repeated_zoom_in_converges_to_max_width() {
    let mut controller = ViewportController::new(CandleMetrics::default());
    assert_eq!(controller.state().candle_width, 15);

    let mut widths = Vec::new();
    for _ in 0..10 {
        controller.on_zoom_change(ZoomDirection::In);
        widths.push(controller.state().candle_width);
    }
    assert_eq!(&widths[..3], &[30, 50, 50]);
    assert!(widths.iter().all(|width| *width <= 50));
    assert_eq!(controller.state().candle_width, 50);
}

#[test]
fn repeated_zoom_out_converges_to_min_width() {
    let mut controller = ViewportController::new(CandleMetrics::default());
    let mut widths = Vec::new();
    for _ in 0..10 {
        controller.on_zoom_change(ZoomDirection::Out);
        widths.push(controller.state().candle_width);
    }
    assert_eq!(&widths[..3], &[7, 3, 3]);
    assert!(widths.iter().all(|width| *width >= 3));
    assert_eq!(controller.state().candle_width, 3);
}

#[test]
fn zoom_at_bound_reports_no_change() {
    let mut controller = ViewportController::new(CandleMetrics {
        width_px: 50,
        ..CandleMetrics::default()
    });
    assert!(!controller.on_zoom_change(ZoomDirection::In));
    assert!(controller.on_zoom_change(ZoomDirection::Out));
    assert_eq!(controller.state().candle_width, 25);
}

#[test]
fn five_candle_window_bounds() {
    let series = series_from(&[10.0, 12.0, 9.0, 15.0, 11.0], &[8.0, 9.0, 7.0, 10.0, 9.0]);
    let mut controller = ViewportController::new(CandleMetrics::default());
    controller.on_resize(640.0);
    assert!(controller.ensure_bounds(&series));

    let state = controller.state();
    assert_eq!(state.visible_count, 5);
    assert_eq!(state.y_bounds, DataRange::new(7.0, 15.0));
    assert_eq!(state.x_bounds, DataRange::new(-5.0, 0.0));
    assert_eq!(state.volume_bounds, DataRange::new(0.0, 10.0));
}

#[test]
fn visible_count_reserves_one_step() {
    let highs = vec![2.0; 100];
    let lows = vec![1.0; 100];
    let series = series_from(&highs, &lows);
    let mut controller = ViewportController::new(CandleMetrics::default());

    // step = 17: (170 - 17) / 17 = 9 candles.
    controller.on_resize(170.0);
    controller.ensure_bounds(&series);
    assert_eq!(controller.state().visible_count, 9);

    controller.on_resize(186.0);
    controller.ensure_bounds(&series);
    assert_eq!(controller.state().visible_count, 9);
}

#[test]
fn empty_series_recompute_is_a_no_op() {
    let mut controller = ViewportController::new(CandleMetrics::default());
    controller.on_resize(640.0);
    controller.on_zoom_change(ZoomDirection::In);
    let before = *controller.state();

    assert!(!controller.ensure_bounds(&Series::new()));
    assert_eq!(*controller.state(), before);
    assert_eq!(controller.state().x_bounds, DataRange::new(-1.0, 0.0));
    assert_eq!(controller.state().y_bounds, DataRange::new(0.0, 1.0));
    assert_eq!(controller.state().volume_bounds, DataRange::new(0.0, 1.0));
    assert!(controller.is_dirty());
    assert_eq!(controller.recompute_count(), 0);
}

#[test]
fn single_candle_gets_non_zero_price_span() {
    let mut series = Series::new();
    series
        .append(&[Candle::new(0, 0, 4.0, 4.0, 4.0, 4.0, 0.0)])
        .expect("append");
    let mut controller = ViewportController::new(CandleMetrics::default());
    controller.on_resize(640.0);
    controller.ensure_bounds(&series);

    let state = controller.state();
    assert!(state.y_bounds.span() > 0.0);
    assert!(state.volume_bounds.span() > 0.0);
}

#[test]
fn events_between_paints_coalesce_into_one_recompute() {
    let config = ChartConfig::new(Viewport::new(800, 400));
    let mut engine = ChartEngine::new(NullRenderer::default(), config).expect("engine");
    let batch: Vec<Candle> = (0..300).map(|i| candle(10.0 + i as f32, 5.0, 1.0)).collect();
    engine.append_candles(&batch).expect("append");

    engine.render().expect("render");
    assert_eq!(engine.recompute_count(), 1);

    for width in [700, 720, 740, 760] {
        engine
            .handle_event(ChartEvent::Resized { width, height: 400 })
            .expect("resize");
    }
    engine
        .handle_event(ChartEvent::Wheel {
            direction: WheelDirection::Up,
        })
        .expect("wheel");
    engine.render().expect("render");
    assert_eq!(engine.recompute_count(), 2);

    engine.render().expect("render");
    assert_eq!(engine.recompute_count(), 2);
    assert_eq!(engine.viewport_state().candle_width, 30);
}
