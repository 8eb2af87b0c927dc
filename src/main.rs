use clap::Parser;
use evenup::core::config;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "evenup", about = "Split bills with friends and search movies")]
struct Args {
    /// Quiet period before a movie search fires, in milliseconds
    #[arg(long)]
    debounce_ms: Option<u64>,

    /// Log level written to evenup.log (error, warn, info, debug, trace)
    #[arg(long, default_value = "debug")]
    log_level: String,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to evenup.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    let level = args.log_level.parse().unwrap_or(LevelFilter::Debug);
    if let Ok(log_file) = File::create("evenup.log") {
        let _ = WriteLogger::init(level, log_config, log_file);
    }

    let file_config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Warning: {e}, using defaults");
            log::warn!("Config load failed: {}", e);
            Default::default()
        }
    };
    let resolved = config::resolve(&file_config, args.debounce_ms);

    log::info!(
        "EvenUp starting up with {} friends, debounce {}ms",
        resolved.friends.len(),
        resolved.debounce_ms
    );

    evenup::tui::run(resolved)
}
