use std::path::PathBuf;
use tracing::Subscriber;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use xdg::BaseDirectories;

const LOG_FILE_NAME: &str = "edgebar.log";

/// Adds a layer appending to `$XDG_CACHE_HOME/edgebar/edgebar.log`.
pub fn add_layer<S>(subscriber: S) -> impl Subscriber + for<'span> LookupSpan<'span>
where
    S: Subscriber + for<'span> LookupSpan<'span>,
{
    let layer = log_dir().map(|dir| {
        let writer = tracing_appender::rolling::never(dir, LOG_FILE_NAME);
        tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .with_writer(writer)
    });
    subscriber.with(layer)
}

fn log_dir() -> Option<PathBuf> {
    let base = match BaseDirectories::with_prefix("edgebar") {
        Ok(base) => base,
        Err(err) => {
            eprintln!("Couldn't find the cache directory, not logging to a file: {err}");
            return None;
        }
    };
    base.create_cache_directory("")
        .map_err(|err| eprintln!("Couldn't create the log directory, not logging to a file: {err}"))
        .ok()
}
