use colored::*;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::FormatEvent;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::registry::LookupSpan;

/// Status-symbol formatter. Debug and trace lines also name the module that
/// emitted them, since they only show up when chasing a routing problem.
pub struct RouteFormatter;

fn symbol(level: &Level) -> ColoredString {
    match *level {
        Level::TRACE | Level::DEBUG => "[?]".blue(),
        Level::INFO => "[+]".green().bold(),
        Level::WARN => "[*]".yellow().bold(),
        Level::ERROR => "[-]".red().bold(),
    }
}

impl<S, N> FormatEvent<S, N> for RouteFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();

        write!(writer, "{} ", symbol(meta.level()))?;
        if *meta.level() >= Level::DEBUG {
            write!(writer, "{} ", format!("{}:", meta.target()).as_str().dimmed())?;
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

fn subscriber_builder(
    level: Level,
) -> tracing_subscriber::fmt::SubscriberBuilder<
    format::DefaultFields,
    RouteFormatter,
    EnvFilter,
> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(level.as_str().to_lowercase()))
        .event_format(RouteFormatter)
}

/// Sends all diagnostics to stderr so stdout stays a single address line.
pub fn init_logging(level: Level) {
    subscriber_builder(level).with_writer(std::io::stderr).init();
}
