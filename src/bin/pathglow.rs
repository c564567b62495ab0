use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
    str::FromStr,
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use rand::SeedableRng as _;

#[derive(Parser, Debug)]
#[command(name = "pathglow", version)]
struct Cli {
    /// Log every queued step and committed mutation.
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the queued highlight schedule as JSON.
    Schedule(SessionArgs),
    /// Render the scene at a moment of playback as SVG or PNG (by output extension).
    Frame(FrameArgs),
}

#[derive(Parser, Debug)]
struct SessionArgs {
    /// Input graph JSON (`{"node": {"neighbor": weight}}`).
    #[arg(long)]
    graph: PathBuf,

    /// Route start node.
    #[arg(long, default_value = "start")]
    start: String,

    /// Route finish node.
    #[arg(long, default_value = "finish")]
    finish: String,

    /// Seed for node placement; random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Session config JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Canvas width override.
    #[arg(long)]
    width: Option<u32>,

    /// Canvas height override.
    #[arg(long)]
    height: Option<u32>,

    /// Milliseconds between playback steps.
    #[arg(long)]
    step_delay: Option<u64>,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    session: SessionArgs,

    /// Playback time in milliseconds, or `end`.
    #[arg(long, default_value = "end")]
    at: FrameTime,

    /// Output path, `.svg` or `.png`.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Clone, Copy, Debug)]
enum FrameTime {
    At(u64),
    End,
}

impl FromStr for FrameTime {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("end") {
            return Ok(Self::End);
        }
        s.parse()
            .map(Self::At)
            .map_err(|_| format!("expected milliseconds or `end`, got '{s}'"))
    }
}

#[derive(serde::Serialize)]
struct ScheduleReport<'a> {
    path: &'a [String],
    stats: &'a pathglow::PlaybackStats,
    duration_ms: u64,
    changes: Vec<pathglow::ScheduledChange>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Schedule(args) => cmd_schedule(args),
        Command::Frame(args) => cmd_frame(args),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn read_graph_json(path: &Path) -> anyhow::Result<pathglow::Graph> {
    let f = File::open(path).with_context(|| format!("open graph '{}'", path.display()))?;
    let r = BufReader::new(f);
    let graph: pathglow::Graph =
        serde_json::from_reader(r).with_context(|| "parse graph JSON")?;
    Ok(graph)
}

fn load_config(args: &SessionArgs) -> anyhow::Result<pathglow::SessionConfig> {
    let mut config = match &args.config {
        Some(path) => pathglow::SessionConfig::load(path)?,
        None => pathglow::SessionConfig::default(),
    };
    if let Some(width) = args.width {
        config.viewport.width = width;
    }
    if let Some(height) = args.height {
        config.viewport.height = height;
    }
    if let Some(step_delay) = args.step_delay {
        config.playback.step_delay_ms = step_delay;
    }
    config.validate()?;
    Ok(config)
}

fn open_session(args: &SessionArgs) -> anyhow::Result<pathglow::Session> {
    let graph = read_graph_json(&args.graph)?;
    graph.validate()?;
    let config = load_config(args)?;

    let solver = pathglow::DijkstraSolver;
    let session = match args.seed {
        Some(seed) => {
            let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
            pathglow::run(&solver, &graph, &args.start, &args.finish, &config, &mut rng)?
        }
        None => pathglow::run_unseeded(&solver, &graph, &args.start, &args.finish, &config)?,
    };
    Ok(session)
}

fn cmd_schedule(args: SessionArgs) -> anyhow::Result<()> {
    let session = open_session(&args)?;

    let report = ScheduleReport {
        path: &session.path.path,
        stats: &session.stats,
        duration_ms: session.duration().0,
        changes: session.schedule(),
    };
    let stdout = std::io::stdout();
    serde_json::to_writer_pretty(stdout.lock(), &report).context("write schedule JSON")?;
    println!();
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let mut session = open_session(&args.session)?;

    match args.at {
        FrameTime::At(ms) => session.seek(pathglow::Millis(ms))?,
        FrameTime::End => session.seek_end()?,
    };

    if let Some(parent) = args.out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    let is_png = args
        .out
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("png"));
    if is_png {
        let img = session.render_png()?;
        img.save_with_format(&args.out, image::ImageFormat::Png)
            .with_context(|| format!("write png '{}'", args.out.display()))?;
    } else {
        std::fs::write(&args.out, session.render_svg())
            .with_context(|| format!("write svg '{}'", args.out.display()))?;
    }

    eprintln!("wrote {}", args.out.display());
    Ok(())
}
