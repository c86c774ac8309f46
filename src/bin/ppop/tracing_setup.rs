//! Tracing configuration for the ppop binary.
//!
//! Sets up the tracing subscriber with custom filtering to suppress noisy
//! webview events. A hover-driven UI generates a lot of `mousemove` /
//! `pointermove` chatter that would otherwise drown the log.
//!
//! Must be initialized BEFORE Dioxus launch to prevent dioxus-logger from
//! setting its own subscriber.

use std::fs::File;
use std::io;
use std::sync::Mutex;

use profile_popup::config::LoggingConfig;
use tracing::{Event, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{self, FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Event formatter that drops messages containing any suppressed pattern.
struct FilteringFormatter {
    inner: fmt::format::Format,
    suppressed_patterns: Vec<String>,
}

impl FilteringFormatter {
    fn new(suppressed_patterns: Vec<String>) -> Self {
        Self {
            inner: fmt::format::Format::default(),
            suppressed_patterns,
        }
    }
}

impl<S, N> FormatEvent<S, N> for FilteringFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        // Format into a buffer first so the message can be inspected
        let mut message_buf = String::new();
        let capture_writer = Writer::new(&mut message_buf);
        self.inner.format_event(ctx, capture_writer, event)?;

        let suppress = self
            .suppressed_patterns
            .iter()
            .any(|pattern| message_buf.contains(pattern.as_str()));

        if suppress {
            Ok(())
        } else {
            write!(writer, "{message_buf}")
        }
    }
}

/// Initialize the tracing subscriber from [`LoggingConfig`].
///
/// Filtering follows `RUST_LOG` when set, the configured level otherwise.
/// Output goes to the configured log file, falling back to stderr.
///
/// # Panics
///
/// Panics if a global subscriber has already been set.
pub fn init(config: &LoggingConfig) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let suppressed = config.suppressed_patterns.clone();

    let log_file = config
        .log_file
        .as_ref()
        .and_then(|path| File::create(path).ok().map(|file| (path.clone(), file)));

    if let Some((path, file)) = log_file {
        let fmt_layer = fmt::layer()
            .with_target(false)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .event_format(FilteringFormatter::new(suppressed));

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .init();

        eprintln!("Logging to {}", path.display());
    } else {
        let fmt_layer = fmt::layer()
            .with_target(false)
            .with_writer(io::stderr)
            .event_format(FilteringFormatter::new(suppressed));

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .init();
    }
}
