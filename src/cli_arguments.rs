use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct CliArguments {
    #[arg(short, long, default_value_t = 8080)]
    pub port: u16,

    /// Seconds to wait before the first log line
    #[arg(short = 'd', long, default_value_t = 5)]
    pub startup_delay_secs: u64,

    /// Seconds between two log lines
    #[arg(short, long, default_value_t = 10, value_parser = clap::value_parser!(u64).range(1..))]
    pub interval_secs: u64,

    /// Fixed seed for reproducible word selection
    #[arg(short, long)]
    pub seed: Option<u64>,
}
