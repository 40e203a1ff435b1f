use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "sketchfolio", version)]
struct Cli {
    /// Raise log verbosity (`-v` debug, `-vv` trace). `RUST_LOG` takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replay a scripted sequence of UI events and print the resulting state as JSON.
    Replay(ReplayArgs),
    /// Print the built-in site configuration as JSON.
    DefaultSite(DefaultSiteArgs),
}

#[derive(Parser, Debug)]
struct ReplayArgs {
    /// Site configuration JSON (the built-in site when omitted).
    #[arg(long)]
    site: Option<PathBuf>,

    /// JSON array of UI events.
    #[arg(long)]
    script: PathBuf,

    /// Rasterize every drawn surface into this directory as PNG.
    #[arg(long)]
    png_dir: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct DefaultSiteArgs {
    /// Write to this file instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.cmd {
        Command::Replay(args) => cmd_replay(args),
        Command::DefaultSite(args) => cmd_default_site(args),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,sketchfolio={level}")));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn cmd_replay(args: ReplayArgs) -> anyhow::Result<()> {
    let site = match &args.site {
        Some(path) => sketchfolio::SiteConfig::from_path(path)?,
        None => sketchfolio::SiteConfig::default(),
    };
    let events = read_script(&args.script)?;

    let mut app = sketchfolio::PortfolioApp::new(site).context("build site")?;
    for (i, event) in events.into_iter().enumerate() {
        app.dispatch(event)
            .with_context(|| format!("dispatch event #{i}"))?;
    }

    if let Some(dir) = &args.png_dir {
        write_pngs(&app, dir)?;
    }

    let summary = serde_json::to_string_pretty(&app.summary()).context("serialize summary")?;
    println!("{summary}");
    Ok(())
}

fn read_script(path: &Path) -> anyhow::Result<Vec<sketchfolio::UiEvent>> {
    let f = File::open(path).with_context(|| format!("open script '{}'", path.display()))?;
    serde_json::from_reader(BufReader::new(f))
        .with_context(|| format!("parse script '{}'", path.display()))
}

fn write_pngs(app: &sketchfolio::PortfolioApp, dir: &Path) -> anyhow::Result<()> {
    std::fs::create_dir_all(dir).with_context(|| format!("create '{}'", dir.display()))?;
    let surfaces = app.drawn_surfaces();
    for (name, surface) in &surfaces {
        let frame = sketchfolio::rasterize_surface(surface, Some(sketchfolio::Rgba8::WHITE))
            .with_context(|| format!("rasterize '{name}'"))?;
        let path = dir.join(format!("{name}.png"));
        sketchfolio::write_png(&frame, &path)?;
    }
    tracing::info!(count = surfaces.len(), dir = %dir.display(), "wrote surfaces");
    Ok(())
}

fn cmd_default_site(args: DefaultSiteArgs) -> anyhow::Result<()> {
    let json = sketchfolio::SiteConfig::default().to_json_pretty()?;
    match &args.out {
        Some(path) => std::fs::write(path, format!("{json}\n"))
            .with_context(|| format!("write '{}'", path.display()))?,
        None => println!("{json}"),
    }
    Ok(())
}
