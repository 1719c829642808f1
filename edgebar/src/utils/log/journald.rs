use tracing::Subscriber;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;

/// Adds a journald layer when journald is reachable.
pub fn add_layer<S>(subscriber: S) -> impl Subscriber + for<'span> LookupSpan<'span>
where
    S: Subscriber + for<'span> LookupSpan<'span>,
{
    let layer = match tracing_journald::layer() {
        Ok(layer) => Some(layer.with_syslog_identifier("edgebar".to_owned())),
        Err(err) => {
            eprintln!("Couldn't connect to journald, not logging there: {err}");
            None
        }
    };
    subscriber.with(layer)
}
