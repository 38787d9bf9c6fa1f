use ohlcv_chart::api::{ChartConfig, ChartEngine};
use ohlcv_chart::core::{Series, Viewport};
use ohlcv_chart::error::ChartError;
use ohlcv_chart::loader::{SeriesLoader, load_series, load_series_from_path};
use ohlcv_chart::render::NullRenderer;

const FIVE_RECORDS: &str = "\
20240102,093000,10.0,12.0,9.5,11.0,1500
20240102,093100,11.0,13.0,10.5,12.5,1800
20240102,093200,12.5,12.9,11.0,11.2,900
20240102,093300,11.2,11.8,10.1,10.4,1200
20240102,093400,10.4,11.1,10.0,11.0,700
";

#[test]
fn loads_every_record_in_order() {
    let series = load_series(FIVE_RECORDS.as_bytes()).expect("load");
    assert_eq!(series.len(), 5);
    let first = series.get(0).expect("first");
    assert_eq!((first.date, first.time), (20_240_102, 93_000));
    assert_eq!(first.open, 10.0);
    assert_eq!(series.from_end(0).map(|c| c.close), Some(11.0));
    assert_eq!(series.global_high(), Some(13.0));
    assert_eq!(series.global_low(), Some(9.5));
}

#[test]
fn chunk_size_does_not_change_content() {
    let reference = load_series(FIVE_RECORDS.as_bytes()).expect("load");
    for chunk_size in [1, 2, 3, 256] {
        let mut series = Series::new();
        let loaded = SeriesLoader::new()
            .with_chunk_size(chunk_size)
            .load_into(FIVE_RECORDS.as_bytes(), &mut series)
            .expect("load");
        assert_eq!(loaded, 5);
        assert_eq!(series, reference);
    }
}

#[test]
fn crlf_and_blank_lines_are_tolerated() {
    let input = "20240102,093000,1,2,0.5,1.5,10\r\n\r\n20240102,093100,1.5,2.5,1,2,20\r\n";
    let series = load_series(input.as_bytes()).expect("load");
    assert_eq!(series.len(), 2);
    assert_eq!(series.from_end(0).map(|c| c.volume), Some(20.0));
}

#[test]
fn wrong_field_count_is_a_parse_error_with_line() {
    let input = "20240102,093000,1,2,0.5,1.5,10\n20240102,093100,1.5,2.5,1,2\n";
    let err = load_series(input.as_bytes()).expect_err("short record must fail");
    match err {
        ChartError::Parse { line, message } => {
            assert_eq!(line, 2);
            assert!(message.contains("7"), "message: {message}");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn non_numeric_field_is_a_parse_error() {
    let input = "20240102,093000,one,2,0.5,1.5,10\n";
    assert!(matches!(
        load_series(input.as_bytes()),
        Err(ChartError::Parse { line: 1, .. })
    ));
}

#[test]
fn failed_load_keeps_completed_chunks() {
    let input = format!("{FIVE_RECORDS}20240102,093500,1,2\n");
    let mut series = Series::new();
    let err = SeriesLoader::new()
        .with_chunk_size(2)
        .load_into(input.as_bytes(), &mut series)
        .expect_err("bad trailing record");

    assert!(matches!(err, ChartError::Parse { line: 6, .. }));
    // Chunks [0, 1] and [2, 3] were appended; candle 4 was still buffered.
    assert_eq!(series.len(), 4);
    assert_eq!(series.from_end(0).map(|c| c.time), Some(93_300));
}

#[test]
fn missing_file_is_an_io_error() {
    let path = std::env::temp_dir().join("ohlcv-chart-missing-input-7f9c2.csv");
    assert!(matches!(
        load_series_from_path(&path),
        Err(ChartError::Io(_))
    ));
}

#[test]
fn engine_load_retains_partial_series_and_refreshes_bounds() {
    let config = ChartConfig::new(Viewport::new(640, 480)).with_loader_chunk_size(2);
    let mut engine = ChartEngine::new(NullRenderer::default(), config).expect("engine");
    let input = format!("{FIVE_RECORDS}garbage\n");

    assert!(engine.load_from_reader(input.as_bytes()).is_err());
    assert_eq!(engine.series().len(), 4);

    engine.render().expect("render");
    assert_eq!(engine.viewport_state().visible_count, 4);
    assert_eq!(engine.viewport_state().y_bounds.max, 13.0);
}
