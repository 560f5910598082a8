use clap::{ArgAction, Args, Parser, Subcommand};
use log::{debug, LevelFilter};
use sizechart::config::Config;
use sizechart::engine::runner::CANCELLED_MESSAGE;
use sizechart::engine::{CancelAfterRows, ChannelSink, OutputSink, WriterSink};
use sizechart::format::ReducedFraction;
use sizechart::{parse_size, CancelToken, ConversionEngine, ReportFormat, RequestInput};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;

#[derive(Parser)]
#[command(name = "sizechart")]
#[command(about = "Metric wrench sizes close to SAE sizes, and the reverse", long_about = None)]
struct Cli {
    /// More log output on stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Chart metric sizes against the nearest SAE sizes, then SAE against metric
    Chart(ChartArgs),

    /// Show how size strings are read (e.g. "12.5", "7/32", "1-1/4")
    Parse {
        /// Sizes to parse
        #[arg(required = true)]
        sizes: Vec<String>,
    },

    /// Reduce a fraction with a power-of-two denominator (e.g. 20 16 -> 1-1/4)
    Fraction {
        numerator: u32,
        denominator: u32,
    },
}

#[derive(Args)]
struct ChartArgs {
    /// First metric size in mm [default: 3]
    #[arg(long)]
    metric_first: Option<String>,

    /// Last metric size in mm, at most 250 [default: 32]
    #[arg(long)]
    metric_last: Option<String>,

    /// Metric step in mm: 0.1, 0.2, 0.5, 1, 2, 5 or 10 [default: 1]
    #[arg(long)]
    metric_step: Option<String>,

    /// First SAE size in inches [default: 1/8]
    #[arg(long)]
    sae_first: Option<String>,

    /// Last SAE size in inches, at most 10 [default: 1-1/4]
    #[arg(long)]
    sae_last: Option<String>,

    /// SAE step in inches: 1/256 up to 1/2 [default: 1/16]
    #[arg(long)]
    sae_step: Option<String>,

    /// Added before rounding to whole units, from -1.0 to +1.0 [default: 0.0]
    #[arg(long, allow_hyphen_values = true)]
    bias: Option<String>,

    /// TOML file with chart and output defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Row format: text or json
    #[arg(short, long)]
    format: Option<ReportFormat>,

    /// Stop after this many rows, as if cancelled
    #[arg(long)]
    limit_rows: Option<usize>,
}

impl ChartArgs {
    /// Command line values win over the config file
    fn apply(&self, mut input: RequestInput) -> RequestInput {
        let overrides = [
            (&self.metric_first, &mut input.metric_first),
            (&self.metric_last, &mut input.metric_last),
            (&self.metric_step, &mut input.metric_step),
            (&self.sae_first, &mut input.sae_first),
            (&self.sae_last, &mut input.sae_last),
            (&self.sae_step, &mut input.sae_step),
            (&self.bias, &mut input.bias),
        ];
        for (value, field) in overrides {
            if let Some(value) = value {
                field.clone_from(value);
            }
        }
        input
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Chart(args) => chart(args),
        Commands::Parse { sizes } => parse_sizes(&sizes),
        Commands::Fraction {
            numerator,
            denominator,
        } => fraction(numerator, denominator),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn chart(args: ChartArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = match &args.config {
        Some(path) => {
            debug!("Loading config from {}", path.display());
            Config::load_from_file(path)?
        }
        None => Config::empty(),
    };

    let request = args.apply(config.chart).validate()?;
    let format = args.format.unwrap_or(config.output.format);
    let output = args.output.or(config.output.path);

    let engine = ConversionEngine::new(request).with_format(format);
    let token = CancelToken::new();
    let (sender, receiver) = mpsc::channel();

    // The chart is computed on a worker and written here, one line at a time.
    let worker = {
        let token = token.clone();
        let limit = args.limit_rows;
        thread::Builder::new()
            .name("chart".to_string())
            .spawn(move || {
                let mut sink = ChannelSink::new(sender);
                match limit {
                    Some(limit) => {
                        let mut limited = CancelAfterRows::new(sink, limit, token.clone());
                        engine.run(&token, &mut limited)
                    }
                    None => engine.run(&token, &mut sink),
                }
            })?
    };

    let writer: Box<dyn Write> = match &output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(io::stdout().lock()),
    };
    let mut out = WriterSink::new(writer);
    for line in receiver {
        out.write_line(&line)?;
    }

    let summary = worker.join().map_err(|_| "Chart worker panicked")??;
    if summary.cancelled && format == ReportFormat::Text {
        out.write_line(CANCELLED_MESSAGE)?;
    }
    out.into_inner().flush()?;

    debug!(
        "{} metric rows, {} SAE rows, cancelled: {}",
        summary.metric_rows, summary.sae_rows, summary.cancelled
    );
    if let Some(path) = output {
        println!("Chart written to {}", path.display());
    }

    Ok(())
}

fn parse_sizes(sizes: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    let mut failures = 0;
    for size in sizes {
        match parse_size(size) {
            Ok(value) => println!("{} = {}", size, value),
            Err(e) => {
                eprintln!("{}: {}", size, e);
                failures += 1;
            }
        }
    }

    if failures > 0 {
        let message = format!("{} of {} sizes could not be parsed", failures, sizes.len());
        return Err(message.into());
    }
    Ok(())
}

fn fraction(numerator: u32, denominator: u32) -> Result<(), Box<dyn std::error::Error>> {
    let fraction = ReducedFraction::new(numerator, denominator).ok_or_else(|| {
        format!(
            "Denominator must be a power of two (2, 4, 8, ... 256), got {}",
            denominator
        )
    })?;
    println!("{}", fraction);
    Ok(())
}
