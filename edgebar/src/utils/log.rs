use tracing::{metadata::LevelFilter, Subscriber};
use tracing_subscriber::{filter::ParseError, fmt, layer::SubscriberExt, EnvFilter};

#[cfg(feature = "journald-log")]
mod journald;

#[cfg(feature = "file-log")]
pub mod file;

/// Default filter when none is given on the command line or in `RUST_LOG`.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Build the subscriber for `directives`. On a parse error the default
/// level is used and the error handed back so it can be reported once
/// logging works.
#[must_use]
pub fn parse_log_level(directives: &str) -> (impl Subscriber, Option<ParseError>) {
    let mut parse_err = None;
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .parse(directives)
        .unwrap_or_else(|err| {
            parse_err = Some(err);
            EnvFilter::new(DEFAULT_LOG_LEVEL)
        });
    (get_subscribers(filter), parse_err)
}

#[allow(clippy::let_and_return)]
pub fn get_subscribers(filter: EnvFilter) -> impl Subscriber {
    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr));

    #[cfg(feature = "journald-log")]
    let subscriber = journald::add_layer(subscriber);

    #[cfg(feature = "file-log")]
    let subscriber = file::add_layer(subscriber);

    subscriber
}
