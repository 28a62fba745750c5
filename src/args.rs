use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "log_generator")]
#[command(about = "Append randomly generated log lines to a file at a fixed rate")]
pub struct Args {
    #[arg(short, long, default_value = "app.txt", help = "Log file to append to")]
    pub file: PathBuf,

    #[arg(short = 'n', long, default_value_t = 1000, help = "Number of log entries to write")]
    pub count: u64,

    #[arg(
        short,
        long,
        default_value = "1",
        value_parser = parse_delay,
        help = "Delay between entries, in seconds"
    )]
    pub delay: Duration,

    #[arg(long, help = "Seed for reproducible level and message choices")]
    pub seed: Option<u64>,

    #[arg(long, help = "Print a per-level CSV summary when done")]
    pub summary: bool,

    #[arg(short, long, help = "Print debug diagnostics to stderr")]
    pub verbose: bool,
}

impl Args {
    pub fn from_cli() -> Self {
        <Self as Parser>::parse()
    }
}

fn parse_delay(value: &str) -> Result<Duration, String> {
    let seconds: f64 = value
        .parse()
        .map_err(|_| format!("'{}' is not a number of seconds", value))?;

    Duration::try_from_secs_f64(seconds).map_err(|_| {
        format!(
            "delay must be a finite, non-negative number of seconds, got {}",
            value
        )
    })
}
