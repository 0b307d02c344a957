use briareo_core::dataset::SequenceIndexer;
use briareo_core::img::standard_transform;
use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_ROOT: &str = "leap_motion/train";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_timer(fmt::time::uptime())
        .with_env_filter(EnvFilter::new("info"))
        .init();

    let args: Vec<String> = std::env::args().collect();
    let root = args.get(1).map(String::as_str).unwrap_or(DEFAULT_ROOT);

    let indexer = SequenceIndexer::new(root, Some(standard_transform()));
    if indexer.is_empty() {
        return Err(format!("no complete sequences found under {root}").into());
    }

    briareo_cli::preview_sequence(&indexer, 0, true)?;
    Ok(())
}
