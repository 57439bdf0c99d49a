use std::fmt;
use tracing::{Event, Subscriber};
use tracing_subscriber::fmt::{format::Writer, FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

/// Bracketed single-line event format:
/// `[TIMESTAMP] [LEVEL] [SPAN_PATH] [MODULE:LINE]: MESSAGE`
///
/// The span path joins the active spans from the root, e.g. `index_validation`
/// while an indexer runs; outside any span it shows `-`.
pub struct BracketedFormatter;

impl<S, N> FormatEvent<S, N> for BracketedFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let metadata = event.metadata();

        let now = chrono::Local::now();
        write!(writer, "[{}] ", now.format("%Y-%m-%dT%H:%M:%S%.3f%:z"))?;
        write!(writer, "[{:<5}] ", metadata.level().as_str())?;

        let span_path = ctx
            .event_scope()
            .map(|scope| {
                scope
                    .from_root()
                    .map(|span| span.name())
                    .collect::<Vec<_>>()
                    .join("::")
            })
            .unwrap_or_else(|| "-".to_string());
        write!(writer, "[{}] ", span_path)?;

        let module = metadata.module_path().unwrap_or_else(|| metadata.target());
        match metadata.line() {
            Some(line) => write!(writer, "[{}:{}]: ", module, line)?,
            None => write!(writer, "[{}]: ", module)?,
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}
