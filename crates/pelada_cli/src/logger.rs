use anyhow::{Context, Result};
use time::{format_description, UtcOffset};
use tracing::{subscriber::set_global_default, Level};
use tracing_subscriber::{fmt::time::OffsetTime, fmt::writer::BoxMakeWriter, FmtSubscriber};

/// Installs the stderr subscriber. Stdout stays reserved for JSON output.
pub fn init_logger(verbose: bool) -> Result<()> {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    // the local offset is unavailable in multi-threaded processes on some platforms
    let offset = UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC);
    let timer = OffsetTime::new(
        offset,
        format_description::parse("[year]-[month]-[day] [hour]:[minute]:[second]")
            .context("invalid log time format")?,
    );

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_ansi(false)
        .with_timer(timer)
        .with_writer(BoxMakeWriter::new(std::io::stderr))
        .finish();

    set_global_default(subscriber).context("a global tracing subscriber is already set")
}
