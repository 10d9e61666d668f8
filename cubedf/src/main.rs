use std::error::Error;
use std::io::Write;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing::info;

use cubecore::DominantContributor;
use cubedf::config::SelectionConfig;
use cubedf::data::output::write_report;
use cubedf::data::source::{write_events, EventFileHandle};
use cubedf::logging::init_tracing;
use cubedf::run::run_events;
use cubedf::sim::generator::{EventGenerator, GeneratorSettings};

#[derive(Parser, Debug)]
#[command(name = "cubedf", version, about = "CC0pi first-object analysis of simulated cube detector events")]
struct Cli {
    /// Log filter, e.g. "debug" or "cubecore=trace"; defaults to RUST_LOG, then "info"
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the selection over an event file and write the delta T histograms
    Analyze(AnalyzeArgs),
    /// Write a file of synthetic events
    Simulate(SimulateArgs),
}

#[derive(Args, Debug)]
struct AnalyzeArgs {
    /// Event file, one JSON event per line
    input: PathBuf,

    /// JSON selection config, missing fields keep their defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory for deltaTNeutron.csv, deltaTOther.csv and summary.json
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,

    /// Stop after this many events
    #[arg(long)]
    max_events: Option<usize>,

    /// Do not dump the objects of selected events
    #[arg(long)]
    quiet: bool,
}

#[derive(Args, Debug)]
struct SimulateArgs {
    /// Output event file
    output: PathBuf,

    #[arg(long, default_value_t = 1000)]
    events: usize,

    #[arg(long, default_value_t = 0)]
    seed: u64,

    #[arg(long, default_value_t = 0)]
    run_id: i32,
}

fn analyze(args: AnalyzeArgs) -> Result<(), Box<dyn Error>> {
    let mut config = match &args.config {
        Some(path) => SelectionConfig::from_json_file(path)?,
        None => SelectionConfig::default(),
    };
    if args.max_events.is_some() {
        config.max_events = args.max_events;
    }
    if args.quiet {
        config.show_objects = false;
    }

    let events = EventFileHandle::new(&args.input)?.read_events()?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let report = run_events(&events, &config, &DominantContributor, &mut out)?;
    out.flush()?;

    write_report(&args.output_dir, &report)?;
    info!(output_dir = %args.output_dir.display(), "histograms written");
    Ok(())
}

fn simulate(args: SimulateArgs) -> Result<(), Box<dyn Error>> {
    let mut generator = EventGenerator::new(GeneratorSettings::default(), args.seed);
    let events = generator.generate_events(args.run_id, args.events);
    write_events(&args.output, &events)?;
    info!(events = events.len(), output = %args.output.display(), "synthetic events written");
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    init_tracing(cli.log_level.as_deref())?;

    match cli.command {
        Command::Analyze(args) => analyze(args),
        Command::Simulate(args) => simulate(args),
    }
}
