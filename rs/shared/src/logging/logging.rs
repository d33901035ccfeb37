use std::{env::var, io::stderr, sync::Once};
use tracing::Subscriber;
use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{fmt, EnvFilter, FmtSubscriber};

use super::error::LoggingSetupError;

static LOGGING_INIT: Once = Once::new();

/// Subscriber writing compact, timestamped records to `writer`.
pub fn log_subscriber<W>(directives: &str, writer: W) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    FmtSubscriber::builder()
        .with_env_filter(EnvFilter::new(directives))
        .with_ansi(false)
        .with_writer(writer)
        .fmt_fields(fmt::format::DefaultFields::new())
        .event_format(
            fmt::format()
                .with_timer(UtcTime::rfc_3339())
                .compact()
                .with_line_number(true)
                .with_thread_ids(true),
        )
        .finish()
}

/// Installs the process-wide subscriber on stderr; stdout carries the report.
pub fn setup_logging() -> Result<(), LoggingSetupError> {
    let mut init_result: Result<(), LoggingSetupError> = Ok(());

    // ensures that the subscriber is only initialized once for all threads
    LOGGING_INIT.call_once(|| {
        let directives = var("RUST_LOG").unwrap_or_else(|_| String::from("info"));
        let subscriber = log_subscriber(&directives, stderr);

        if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
            init_result = Err(e.into());
        }
    });
    init_result
}
