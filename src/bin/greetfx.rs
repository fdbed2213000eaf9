use std::io::Write as _;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use greetfx::{Millis, PageConfig, RunOpts, Script};

#[derive(Parser, Debug)]
#[command(name = "greetfx", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a scripted session and print snapshots as JSON lines.
    Simulate(SimulateArgs),
    /// Print parallax layer parameters for a scroll offset.
    Layers(LayersArgs),
    /// Validate a page config.
    Check(CheckArgs),
    /// Dump the decorative particle fields as JSON.
    Particles,
}

#[derive(Parser, Debug)]
struct SimulateArgs {
    /// Page config JSON (defaults to the stock page).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Input script JSON.
    #[arg(long)]
    script: PathBuf,

    /// Last simulated instant in milliseconds.
    #[arg(long, default_value_t = 10_000)]
    until: u64,

    /// Snapshot period in milliseconds.
    #[arg(long, default_value_t = 1_000)]
    every: u64,

    /// Make audio playback fail, as a blocked autoplay would.
    #[arg(long, default_value_t = false)]
    refuse_audio: bool,

    /// Write snapshots here instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct LayersArgs {
    /// Scroll offset in pixels.
    #[arg(long)]
    offset: f64,

    /// Page config JSON (defaults to the stock page).
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct CheckArgs {
    /// Page config JSON.
    #[arg(long)]
    config: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Simulate(args) => cmd_simulate(args),
        Command::Layers(args) => cmd_layers(args),
        Command::Check(args) => cmd_check(args),
        Command::Particles => cmd_particles(),
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<PageConfig> {
    match path {
        Some(p) => Ok(PageConfig::from_path(p)?),
        None => Ok(PageConfig::default()),
    }
}

fn cmd_simulate(args: SimulateArgs) -> anyhow::Result<()> {
    let config = load_config(args.config.as_deref())?;
    let script = Script::from_path(&args.script)?;
    let opts = RunOpts {
        until: Millis(args.until),
        sample_every: Millis(args.every),
        refuse_audio: args.refuse_audio,
    };
    let snapshots = greetfx::run_script(config, &script, opts)?;

    let mut lines = Vec::new();
    for snap in &snapshots {
        serde_json::to_writer(&mut lines, snap).context("encode snapshot")?;
        lines.push(b'\n');
    }

    match &args.out {
        Some(out) => {
            if let Some(parent) = out.parent()
                && !parent.as_os_str().is_empty()
            {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(out, &lines)
                .with_context(|| format!("write snapshots '{}'", out.display()))?;
            eprintln!("wrote {} snapshots to {}", snapshots.len(), out.display());
        }
        None => std::io::stdout()
            .lock()
            .write_all(&lines)
            .context("write snapshots to stdout")?,
    }
    Ok(())
}

fn cmd_layers(args: LayersArgs) -> anyhow::Result<()> {
    let config = load_config(args.config.as_deref())?;
    let out = serde_json::json!({
        "offset": args.offset,
        "hearts": config.layers.hearts.params(args.offset),
        "sparkles": config.layers.sparkles.params(args.offset),
    });
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

fn cmd_check(args: CheckArgs) -> anyhow::Result<()> {
    let config = PageConfig::from_path(&args.config)?;
    eprintln!(
        "ok: {} slides, {} sections",
        config.slides.len(),
        config.sections.len()
    );
    Ok(())
}

fn cmd_particles() -> anyhow::Result<()> {
    let out = serde_json::json!({
        "floating_hearts": greetfx::floating_hearts(),
        "sparkles": greetfx::sparkles(),
        "dialog_hearts": greetfx::dialog_hearts(),
    });
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}
