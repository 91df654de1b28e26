use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufRead, BufReader};
use tracing_subscriber::EnvFilter;

use spec_reporter::{Config, NdjsonSource, SpecReporter, run_reporter};

#[tokio::main]
async fn main() -> Result<()> {
    init_logging()?;

    let workspace = std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."));
    let config = Config::load(&workspace);

    let input: Box<dyn AsyncBufRead + Unpin> = match std::env::args().nth(1) {
        Some(path) => {
            let file = tokio::fs::File::open(&path)
                .await
                .with_context(|| format!("failed to open events file '{}'", path))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(BufReader::new(tokio::io::stdin())),
    };

    let options = config.reporter.render_options();
    let mut reporter = SpecReporter::new(io::stdout(), &config.reporter, options);
    let mut source = NdjsonSource::new(input);

    let count = run_reporter(&mut source, &mut reporter).await?;
    let skipped = source.skipped();
    tracing::debug!(events = count, skipped, "event stream closed");

    Ok(())
}

/// Log to the file named by `SPEC_REPORTER_DEBUG`, if set. Stdout carries the report only.
fn init_logging() -> Result<()> {
    let Some(path) = std::env::var_os("SPEC_REPORTER_DEBUG") else {
        return Ok(());
    };

    let file = std::fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&path)
        .with_context(|| format!("failed to open debug log {:?}", path))?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();

    Ok(())
}
