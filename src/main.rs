mod args;
mod generator;
mod logger;
mod model;
mod writer;

use std::io;
use std::process;

use tracing_subscriber::EnvFilter;

use args::Args;
use generator::LineGenerator;
use logger::AppendFile;
use model::error::GeneratorError;
use crate::writer::LogWriter;

fn main() {
    let args = Args::from_cli();
    configure_logging(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(args: Args) -> Result<(), GeneratorError> {
    let generator = match args.seed {
        Some(seed) => LineGenerator::with_seed(seed),
        None => LineGenerator::new(),
    };

    let mut writer = LogWriter::new(AppendFile::new(&args.file), generator);

    let stdout = io::stdout();
    writer.write_logs(args.count, args.delay, &mut stdout.lock())?;
    println!("Log generation completed!");

    if args.summary {
        writer.output_summary(stdout.lock())?;
    }

    Ok(())
}

/// Diagnostics go to stderr so stdout only carries progress and the summary.
fn configure_logging(verbose: bool) {
    let filter = if verbose { "warn,log_generator=debug" } else { "warn" };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(io::stderr)
        .try_init();
}
