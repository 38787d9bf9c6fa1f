#[cfg(feature = "cairo-backend")]
use ohlcv_chart::api::{ChartConfig, ChartEngine, ZoomDirection};
#[cfg(feature = "cairo-backend")]
use ohlcv_chart::core::Viewport;
#[cfg(feature = "cairo-backend")]
use std::fs::{self, File};
#[cfg(feature = "cairo-backend")]
use std::path::PathBuf;

#[cfg(feature = "cairo-backend")]
const DEFAULT_OUTPUT_PATH: &str = "chart.png";

#[cfg(feature = "cairo-backend")]
#[derive(Debug)]
struct CliArgs {
    input_path: PathBuf,
    output_path: PathBuf,
    config_path: Option<PathBuf>,
    size: Option<Viewport>,
    zoom_steps: i32,
    offset_from_end: usize,
}

#[cfg(feature = "cairo-backend")]
fn main() {
    let _ = ohlcv_chart::telemetry::init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

#[cfg(not(feature = "cairo-backend"))]
fn main() {
    eprintln!("this tool requires feature `cairo-backend`");
    std::process::exit(1);
}

#[cfg(feature = "cairo-backend")]
fn run() -> Result<(), String> {
    use ohlcv_chart::render::CairoRenderer;

    let args = parse_args()?;
    let mut config = match &args.config_path {
        Some(path) => {
            let raw = fs::read_to_string(path).map_err(|err| {
                format!("failed to read config `{}`: {err}", path.display())
            })?;
            ChartConfig::from_json_str(&raw).map_err(|err| {
                format!("invalid config `{}`: {err}", path.display())
            })?
        }
        None => ChartConfig::default(),
    };
    if let Some(size) = args.size {
        config.viewport = size;
    }
    config.validate().map_err(|err| format!("invalid config: {err}"))?;

    let renderer = CairoRenderer::new(config.viewport.width as i32, config.viewport.height as i32)
        .map_err(|err| format!("failed to create renderer: {err}"))?;
    let mut engine =
        ChartEngine::new(renderer, config).map_err(|err| format!("failed to create chart: {err}"))?;

    let loaded = engine.load_from_path(&args.input_path).map_err(|err| {
        format!("failed to load `{}`: {err}", args.input_path.display())
    })?;

    let direction = if args.zoom_steps >= 0 {
        ZoomDirection::In
    } else {
        ZoomDirection::Out
    };
    for _ in 0..args.zoom_steps.unsigned_abs() {
        engine.zoom(direction);
    }
    engine.scroll_to(args.offset_from_end);
    engine
        .render()
        .map_err(|err| format!("failed to render chart: {err}"))?;

    let renderer = engine.into_renderer();
    let mut file = File::create(&args.output_path).map_err(|err| {
        format!("failed to create `{}`: {err}", args.output_path.display())
    })?;
    renderer
        .write_png(&mut file)
        .map_err(|err| format!("failed to write png: {err}"))?;

    println!(
        "rendered {loaded} candles into {}",
        args.output_path.display()
    );
    Ok(())
}

#[cfg(feature = "cairo-backend")]
fn parse_args() -> Result<CliArgs, String> {
    let mut input_path = None;
    let mut output_path = PathBuf::from(DEFAULT_OUTPUT_PATH);
    let mut config_path = None;
    let mut width = None;
    let mut height = None;
    let mut zoom_steps = 0_i32;
    let mut offset_from_end = 0_usize;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        let mut value = |name: &str| {
            args.next()
                .ok_or_else(|| format!("missing value for {name}"))
        };
        match arg.as_str() {
            "--input" => input_path = Some(PathBuf::from(value("--input")?)),
            "--output" => output_path = PathBuf::from(value("--output")?),
            "--config" => config_path = Some(PathBuf::from(value("--config")?)),
            "--width" => width = Some(parse_number::<u32>("--width", &value("--width")?)?),
            "--height" => height = Some(parse_number::<u32>("--height", &value("--height")?)?),
            "--zoom" => zoom_steps = parse_number::<i32>("--zoom", &value("--zoom")?)?,
            "--offset" => {
                offset_from_end = parse_number::<usize>("--offset", &value("--offset")?)?;
            }
            "-h" | "--help" => {
                print_usage();
                std::process::exit(0);
            }
            _ => {
                return Err(format!("unknown argument `{arg}`\n\n{}", usage_message()));
            }
        }
    }

    let input_path =
        input_path.ok_or_else(|| format!("missing --input\n\n{}", usage_message()))?;
    let size = match (width, height) {
        (None, None) => None,
        (width, height) => Some(Viewport::new(width.unwrap_or(640), height.unwrap_or(480))),
    };

    Ok(CliArgs {
        input_path,
        output_path,
        config_path,
        size,
        zoom_steps,
        offset_from_end,
    })
}

#[cfg(feature = "cairo-backend")]
fn parse_number<T: std::str::FromStr>(name: &str, raw: &str) -> Result<T, String> {
    raw.parse::<T>()
        .map_err(|_| format!("invalid value `{raw}` for {name}"))
}

#[cfg(feature = "cairo-backend")]
fn print_usage() {
    println!("{}", usage_message());
}

#[cfg(feature = "cairo-backend")]
fn usage_message() -> String {
    format!(
        "Usage: cargo run --features cairo-backend --bin render_chart_png -- --input <csv> [options]\n\nOptions:\n  --input <path>    CSV with date,time,open,high,low,close,volume records\n  --output <path>   PNG output path (default: {DEFAULT_OUTPUT_PATH})\n  --config <path>   Chart config JSON\n  --width <px>      Surface width\n  --height <px>     Surface height\n  --zoom <steps>    Zoom steps, negative to zoom out\n  --offset <n>      Candles between the newest one and the window end\n  -h, --help        Show this message"
    )
}
