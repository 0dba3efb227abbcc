use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use wavyform::{
    BlendMode, Canvas, Checkerboard, EnvelopeKind, HighlightStyle, LayerSpec, Margins,
    RenderConfig, RenderOptions, RenderThreading, Rgba8, SampleSource, draw_layer,
    draw_segment_grid, fill_checkerboard, highlight_range_styled, read_wav, render_layers,
};

const GRID_COLOR: Rgba8 = Rgba8::new(250, 120, 200, 200);

/// Layers in composition order: abs-max at the back, min/max on top.
const LAYERS: [(EnvelopeKind, f32, Rgba8); 3] = [
    (EnvelopeKind::AbsMax, 1.7, Rgba8::new(50, 100, 200, 255)),
    (EnvelopeKind::Rms, 1.3, Rgba8::new(100, 150, 250, 255)),
    (EnvelopeKind::MinMax, 1.7, Rgba8::new(255, 128, 0, 150)),
];

#[derive(Parser, Debug)]
#[command(name = "wavyform", version, about = "Render waveform previews of WAV files as PNG")]
struct Cli {
    /// Input WAV files.
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Start of the rendered span, in seconds.
    #[arg(long, default_value_t = 0.0)]
    start: f64,

    /// End of the rendered span, in seconds. Defaults to the end of the clip.
    #[arg(long)]
    end: Option<f64>,

    /// Border around the drawable area, in pixels.
    #[arg(long, default_value_t = 50)]
    margin: u32,

    /// Segment length of the tick grid, in seconds. `0` disables the grid.
    #[arg(long, default_value_t = 0.1)]
    seg: f64,

    /// Start of the highlighted range, relative to `--start`.
    #[arg(long)]
    range_start: Option<f64>,

    /// End of the highlighted range, relative to `--start`.
    #[arg(long)]
    range_end: Option<f64>,

    /// Channel to draw.
    #[arg(long, default_value_t = 0)]
    channel: u16,

    #[arg(long, default_value_t = 1800)]
    width: u32,

    #[arg(long, default_value_t = 400)]
    height: u32,

    /// JSON file of render options applied on top of the flags above.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output directory. Defaults to the directory of each input.
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Also write each envelope layer as its own PNG.
    #[arg(long)]
    layers: bool,

    /// Render the layers on a rayon pool.
    #[arg(long)]
    parallel: bool,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let base = base_config(&cli)?;
    for input in &cli.inputs {
        render_file(&cli, &base, input)
            .with_context(|| format!("render waveform for '{}'", input.display()))?;
    }
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn base_config(cli: &Cli) -> anyhow::Result<RenderConfig> {
    let flags = RenderOptions {
        width: Some(cli.width),
        height: Some(cli.height),
        margins: Some(Margins::uniform(cli.margin)),
        ..RenderOptions::default()
    };
    let options = match &cli.config {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("read config '{}'", path.display()))?;
            let file = RenderOptions::from_json_str(&json)
                .with_context(|| format!("parse config '{}'", path.display()))?;
            flags.merged_with(&file)
        }
        None => flags,
    };
    Ok(options.normalize())
}

fn render_file(cli: &Cli, base: &RenderConfig, input: &Path) -> anyhow::Result<()> {
    let buffer = read_wav(input)?;
    let end = cli.end.unwrap_or_else(|| buffer.duration_secs());
    let clip = buffer
        .slice_secs(cli.start, end)
        .with_context(|| format!("slice {:.3}s..{end:.3}s", cli.start))?;
    let duration = clip.duration_secs();
    tracing::info!(
        input = %input.display(),
        frames = clip.total_samples(),
        duration,
        "rendering"
    );

    let specs: Vec<LayerSpec> = LAYERS
        .iter()
        .map(|&(kind, zoom, color)| {
            LayerSpec::new(
                kind,
                base.with_zoom(zoom)
                    .with_colors(color, Rgba8::TRANSPARENT),
            )
        })
        .collect();
    let threading = RenderThreading {
        parallel: cli.parallel,
        threads: None,
    };
    let layers = render_layers(&clip, cli.channel, &specs, &threading)?;

    let out_dir = output_dir(cli, input)?;
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "waveform".to_owned());

    if cli.layers {
        for (spec, layer) in specs.iter().zip(&layers) {
            let path = out_dir.join(format!("{stem}-{}.png", spec.kind.extractor().name()));
            save_png(&layer.to_rgba_image(), &path)?;
        }
    }

    let mut canvas = Canvas::for_config(base, duration);
    fill_checkerboard(&mut canvas, &Checkerboard::default());
    for layer in &layers {
        draw_layer(&mut canvas, layer, BlendMode::Over)?;
    }

    if cli.range_start.is_some() || cli.range_end.is_some() {
        let t0 = cli.range_start.unwrap_or(0.0);
        let t1 = cli.range_end.unwrap_or(duration);
        highlight_range_styled(&mut canvas, t0, t1, &HighlightStyle::default())
            .context("highlight range")?;
    }
    if cli.seg > 0.0 {
        draw_segment_grid(&mut canvas, cli.seg, GRID_COLOR).context("segment grid")?;
    }

    save_png(&canvas.to_rgba_image(), &out_dir.join(format!("{stem}-combined.png")))
}

fn output_dir(cli: &Cli, input: &Path) -> anyhow::Result<PathBuf> {
    let dir = match &cli.out_dir {
        Some(dir) => dir.clone(),
        None => input
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(".")),
    };
    if !dir.as_os_str().is_empty() {
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("create output dir '{}'", dir.display()))?;
    }
    Ok(dir)
}

fn save_png(img: &image::RgbaImage, path: &Path) -> anyhow::Result<()> {
    img.save_with_format(path, image::ImageFormat::Png)
        .with_context(|| format!("write png '{}'", path.display()))?;
    tracing::info!(path = %path.display(), "wrote");
    Ok(())
}
