use std::{
    fs::File,
    io::{BufReader, BufWriter, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "stardrift", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse and validate a choreography JSON.
    Validate(ValidateArgs),
    /// Sample the flight at one scroll position and print the frame as JSON.
    Frame(FrameArgs),
    /// Drive an in-memory stage through a scroll sweep and emit the applied
    /// mutations as JSON lines.
    Sweep(SweepArgs),
}

#[derive(Parser, Debug)]
struct ValidateArgs {
    /// Input choreography JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Input choreography JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Scroll offset in pixels.
    #[arg(long)]
    offset: f64,

    /// Page height in pixels.
    #[arg(long, default_value_t = 2000.0)]
    page: f64,

    /// Viewport height in pixels.
    #[arg(long, default_value_t = 800.0)]
    viewport: f64,
}

#[derive(Parser, Debug)]
struct SweepArgs {
    /// Input choreography JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Number of scroll steps (the sweep samples steps+1 positions).
    #[arg(long, default_value_t = 10)]
    steps: u32,

    /// Page height in pixels.
    #[arg(long, default_value_t = 2000.0)]
    page: f64,

    /// Viewport height in pixels.
    #[arg(long, default_value_t = 800.0)]
    viewport: f64,

    /// Output path for the mutation log (defaults to stdout).
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Validate(args) => cmd_validate(args),
        Command::Frame(args) => cmd_frame(args),
        Command::Sweep(args) => cmd_sweep(args),
    }
}

fn read_choreography(path: &Path) -> anyhow::Result<stardrift::Choreography> {
    let f = File::open(path).with_context(|| format!("open choreography '{}'", path.display()))?;
    let r = BufReader::new(f);
    let ch: stardrift::Choreography =
        serde_json::from_reader(r).with_context(|| "parse choreography JSON")?;
    Ok(ch)
}

fn cmd_validate(args: ValidateArgs) -> anyhow::Result<()> {
    let ch = read_choreography(&args.in_path)?;
    ch.validate()?;
    eprintln!(
        "ok: {} waypoints, {} props, {} reveal selectors",
        ch.flight.waypoints_x_pct.len(),
        ch.props.len(),
        ch.reveal.selectors.len()
    );
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let ch = read_choreography(&args.in_path)?;
    ch.validate()?;

    let metrics = stardrift::ScrollMetrics::new(args.offset, args.page, args.viewport);
    let progress = metrics.progress(ch.flight.speed_multiplier);
    let frame = ch.flight.sample(progress)?;

    println!("{}", serde_json::to_string_pretty(&frame)?);
    Ok(())
}

fn cmd_sweep(args: SweepArgs) -> anyhow::Result<()> {
    let ch = read_choreography(&args.in_path)?;
    ch.validate()?;

    // One element per configured selector, so every update has a target.
    let mut stage = stardrift::MemoryStage::new();
    stage.insert(ch.flight.craft_selector.clone());
    stage.insert(ch.flight.viewer_selector.clone());
    for prop in &ch.props {
        stage.insert(prop.selector.clone());
    }
    for selector in &ch.reveal.selectors {
        stage.insert(selector.clone());
    }

    let mut session = stardrift::ScrollSession::new(ch, stage)?;

    let max_scroll = (args.page - args.viewport).max(0.0);
    session
        .start(stardrift::ScrollMetrics::new(0.0, args.page, args.viewport))?;

    for step in 1..=args.steps {
        let offset = max_scroll * f64::from(step) / f64::from(args.steps);
        session.handle_scroll(stardrift::ScrollMetrics::new(offset, args.page, args.viewport));
        session.run_frame()?;
    }

    let stats = session.stats();
    let stage = session.into_stage();

    let mut out: Box<dyn std::io::Write> = match &args.out {
        Some(path) => {
            let f = File::create(path)
                .with_context(|| format!("create output '{}'", path.display()))?;
            Box::new(BufWriter::new(f))
        }
        None => Box::new(std::io::stdout().lock()),
    };
    for mutation in stage.mutations() {
        writeln!(out, "{}", serde_json::to_string(mutation)?)?;
    }
    out.flush()?;

    eprintln!(
        "swept {} steps: {} frames run, {} mutations",
        args.steps,
        stats.frames_run,
        stage.mutations().len()
    );
    if let Some(path) = &args.out {
        eprintln!("wrote {}", path.display());
    }
    Ok(())
}
