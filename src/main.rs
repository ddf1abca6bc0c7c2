use anyhow::Context;
use clap::{ArgAction, Parser};
use inkframe::script::Script;
use inkframe::source::{self, DataUri};
use inkframe::{Config, HostController};
use std::path::{Path, PathBuf};

const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("INKFRAME_GIT_HASH"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "inkframe")]
#[command(version = VERSION, about = "Freehand drawing and shape annotation over raster images")]
struct Cli {
    /// Image to annotate (PNG, JPEG, GIF, WebP, BMP, ...)
    #[arg(long, short = 'i', value_name = "IMAGE")]
    input: Option<PathBuf>,

    /// TOML event script to replay against the editors
    #[arg(long, short = 's', value_name = "FILE", requires = "input")]
    script: Option<PathBuf>,

    /// Where to write the composited freehand drawing (PNG)
    #[arg(long, short = 'o', value_name = "PNG", requires = "input")]
    output: Option<PathBuf>,

    /// Where to write the shape annotation render (PNG)
    #[arg(long, value_name = "PNG", requires = "input")]
    shapes_output: Option<PathBuf>,

    /// Config file to use instead of ~/.config/inkframe/config.toml
    #[arg(long, short = 'c', value_name = "FILE")]
    config: Option<PathBuf>,

    /// Write a documented default config file and exit
    #[arg(long, action = ArgAction::SetTrue)]
    init_config: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if cli.init_config {
        let path = Config::create_default_file()?;
        println!("Created default config at {}", path.display());
        return Ok(());
    }

    let Some(input) = cli.input.as_deref() else {
        print_usage();
        return Ok(());
    };

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let mut host = HostController::from_config(&config);
    let image = source::read_file_as_data_uri(input)
        .with_context(|| format!("Failed to read {}", input.display()))?;
    host.upload(image)
        .with_context(|| format!("Failed to load {}", input.display()))?;

    if let Some(script_path) = &cli.script {
        let script = Script::load(script_path)?;
        let report = script.run(&mut host);
        log::info!(
            "Replayed {} event(s): {} snapshot(s), {} skipped",
            report.events,
            report.snapshots,
            report.skipped
        );
        println!(
            "Replayed {} events ({} snapshots)",
            report.events, report.snapshots
        );
    }

    if let Some(output) = &cli.output {
        let canvas = host
            .canvas_image()
            .context("No composited image available")?;
        write_png(canvas, output)?;
    }

    if let Some(output) = &cli.shapes_output {
        let render = host
            .shapes()
            .and_then(|editor| editor.snapshot())
            .context("Shape editor has no rendered surface")?;
        write_png(&render, output)?;
    }

    Ok(())
}

/// Writes a PNG data URI's payload to disk.
fn write_png(image: &DataUri, path: &Path) -> anyhow::Result<()> {
    anyhow::ensure!(
        image.mime() == source::PNG_MIME,
        "Cannot write {} data as PNG",
        image.mime()
    );
    let written = source::save_png(image.bytes(), path)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    println!("Wrote {}", written.display());
    Ok(())
}

fn print_usage() {
    println!("inkframe: Freehand drawing and shape annotation over raster images");
    println!();
    println!("Usage:");
    println!("  inkframe --input photo.png --script events.toml --output drawn.png");
    println!("  inkframe --input photo.png --script events.toml --shapes-output boxes.png");
    println!("  inkframe --init-config    Write ~/.config/inkframe/config.toml");
    println!("  inkframe --help           Show help");
    println!();
    println!("Event scripts are TOML lists of [[event]] tables, for example:");
    println!("  [[event]]");
    println!("  type = \"pointer-down\"");
    println!("  x = 10.0");
    println!("  y = 10.0");
    println!();
    println!("Event types: pointer-down, pointer-move, pointer-up, pointer-leave,");
    println!("             add-shape (kind), select-at (x, y), key (key), remove-shape");
}
