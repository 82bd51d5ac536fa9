use std::fs;
use std::path::PathBuf;

use clap::Parser;

use eyemark::canvas::AnnotationCanvas;
use eyemark::config::Config;
use eyemark::script::AnnotationScript;

#[derive(Parser, Debug)]
#[command(name = "eyemark")]
#[command(version, about = "Headless renderer for eye-diagram annotation sessions")]
struct Cli {
    /// Recorded annotation session to replay (JSON op list)
    #[arg(long, short = 's', value_name = "FILE")]
    script: PathBuf,

    /// Output PNG path (default: annotation_<timestamp>.png in the current directory)
    #[arg(long, short = 'o', value_name = "FILE")]
    output: Option<PathBuf>,

    /// Engine configuration file (default: ~/.config/eyemark/config.toml)
    #[arg(long, short = 'c', value_name = "FILE")]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let script = AnnotationScript::load(&cli.script)?;
    log::info!(
        "Replaying {} ops from {}",
        script.ops.len(),
        cli.script.display()
    );

    let mut canvas = AnnotationCanvas::new(&config)?;
    script.apply(&mut canvas);

    let png = canvas.export_png()?;

    let output = cli.output.unwrap_or_else(default_output_path);
    fs::write(&output, &png)?;

    println!("Rendered {} ops to {}", script.ops.len(), output.display());
    Ok(())
}

/// Timestamped fallback filename so repeated runs don't overwrite each other.
fn default_output_path() -> PathBuf {
    let stamp = chrono::Local::now().format("%Y-%m-%d_%H%M%S");
    PathBuf::from(format!("annotation_{stamp}.png"))
}
