use tracing::Level;
use tracing_subscriber::Layer;
use tracing_subscriber::filter::filter_fn;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Install the stderr subscriber. Events more verbose than `max_level` are dropped.
///
/// Returns `false` when another global subscriber was already set.
pub fn init(max_level: Level) -> bool {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(filter_fn(move |metadata| *metadata.level() <= max_level));

    // Embedding binaries may have installed their own subscriber already
    if let Err(e) = tracing_subscriber::registry().with(fmt_layer).try_init() {
        tracing::debug!("Keeping existing tracing subscriber: {}", e);
        return false;
    }
    true
}
