use tracing::Subscriber;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use robotrun_core::api::LoggingConfig;

/// `RUST_LOG` wins over the configured level. Buffered file records are only
/// written out once the returned guard is dropped.
pub fn init(cfg: &LoggingConfig) -> Option<WorkerGuard> {
    let (subscriber, guard) = build(cfg);
    subscriber.init();
    guard
}

fn build(cfg: &LoggingConfig) -> (impl Subscriber + Send + Sync + 'static, Option<WorkerGuard>) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cfg.level.as_str()));

    let (file_layer, guard) = match &cfg.directory {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "robotrun.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (
                Some(fmt::layer().with_writer(writer).with_ansi(false)),
                Some(guard),
            )
        }
        None => (None, None),
    };

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(file_layer);

    (subscriber, guard)
}
