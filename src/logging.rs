//! Unified JSON logging.
//!
//! Log format:
//! ```json
//! {"ts":"2024-12-28T15:04:05.123Z","level":"info","type":"app","msg":"Listening","ctx":{"service":"emit"},"data":{}}
//! ```

use serde::Serialize;
use std::io::{self, Write};
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Log entry with unified structure.
#[derive(Serialize)]
pub struct LogEntry<'a> {
    /// ISO 8601 timestamp with milliseconds, UTC
    pub ts: &'a str,
    /// Log level: debug, info, warn, error
    pub level: &'a str,
    /// Log type: app, access, error
    #[serde(rename = "type")]
    pub log_type: &'a str,
    /// Short human-readable message
    pub msg: &'a str,
    /// Context: service, request_id
    pub ctx: LogContext<'a>,
    /// Type-specific data
    pub data: serde_json::Map<String, serde_json::Value>,
}

/// Log context.
#[derive(Serialize, Default)]
pub struct LogContext<'a> {
    /// Service name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<&'a str>,
    /// Request ID for correlation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<&'a str>,
}

/// Install the global subscriber: `EnvFilter` from `config.filter` plus
/// [`JsonFormatter`].
///
/// Fails if a global subscriber is already set.
pub fn init(config: &LoggingConfig) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::try_new(&config.filter)
        .unwrap_or_else(|_| EnvFilter::new(LoggingConfig::default().filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(JsonFormatter::new(config.service_name.clone())),
        )
        .try_init()?;

    Ok(())
}

/// Custom JSON formatter for tracing.
pub struct JsonFormatter {
    service_name: String,
}

impl JsonFormatter {
    pub fn new(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
        }
    }
}

impl<S, N> FormatEvent<S, N> for JsonFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();
        let level = level_name(meta.level());
        let log_type = if *meta.level() == Level::ERROR {
            "error"
        } else {
            "app"
        };

        let mut visitor = FieldVisitor::new();
        event.record(&mut visitor);

        let ts = Iso8601Timestamp::now();
        let msg = visitor.message.take().unwrap_or_default();

        let entry = LogEntry {
            ts: ts.as_str(),
            level,
            log_type,
            msg: &msg,
            ctx: LogContext {
                service: Some(&self.service_name),
                request_id: None,
            },
            data: visitor.fields,
        };

        writeln!(
            writer,
            "{}",
            serde_json::to_string(&entry).unwrap_or_default()
        )
    }
}

#[inline]
fn level_name(level: &Level) -> &'static str {
    match *level {
        Level::TRACE | Level::DEBUG => "debug",
        Level::INFO => "info",
        Level::WARN => "warn",
        Level::ERROR => "error",
    }
}

/// Field visitor for collecting tracing fields.
struct FieldVisitor {
    message: Option<String>,
    fields: serde_json::Map<String, serde_json::Value>,
}

impl FieldVisitor {
    fn new() -> Self {
        Self {
            message: None,
            fields: serde_json::Map::new(),
        }
    }
}

impl tracing::field::Visit for FieldVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = Some(format!("{:?}", value).trim_matches('"').to_string());
        } else {
            self.fields.insert(
                field.name().to_string(),
                serde_json::Value::String(format!("{:?}", value)),
            );
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_string());
        } else {
            self.fields.insert(
                field.name().to_string(),
                serde_json::Value::String(value.to_string()),
            );
        }
    }

    fn record_i64(&mut self, field: &tracing::field::Field, value: i64) {
        self.fields
            .insert(field.name().to_string(), serde_json::json!(value));
    }

    fn record_u64(&mut self, field: &tracing::field::Field, value: u64) {
        self.fields
            .insert(field.name().to_string(), serde_json::json!(value));
    }

    fn record_f64(&mut self, field: &tracing::field::Field, value: f64) {
        self.fields
            .insert(field.name().to_string(), serde_json::json!(value));
    }

    fn record_bool(&mut self, field: &tracing::field::Field, value: bool) {
        self.fields
            .insert(field.name().to_string(), serde_json::json!(value));
    }
}

/// One served response, as written to the access log.
#[derive(Debug)]
pub struct AccessRecord<'a> {
    pub request_id: &'a str,
    pub method: &'a str,
    pub path: &'a str,
    pub status: u16,
    pub bytes: u64,
    pub duration_ms: f64,
}

/// Render an access log line (without trailing newline).
pub fn format_access(service: &str, record: &AccessRecord<'_>) -> String {
    let ts = Iso8601Timestamp::now();
    let msg = format!("{} {} {}", record.method, record.path, record.status);

    let mut data = serde_json::Map::new();
    data.insert("method".into(), serde_json::json!(record.method));
    data.insert("path".into(), serde_json::json!(record.path));
    data.insert("status".into(), serde_json::json!(record.status));
    data.insert("bytes".into(), serde_json::json!(record.bytes));
    data.insert("duration_ms".into(), serde_json::json!(record.duration_ms));

    let entry = LogEntry {
        ts: ts.as_str(),
        level: "info",
        log_type: "access",
        msg: &msg,
        ctx: LogContext {
            service: Some(service),
            request_id: Some(record.request_id),
        },
        data,
    };

    serde_json::to_string(&entry).unwrap_or_default()
}

/// Write an access log line directly to stdout (bypassing tracing).
pub fn log_access(service: &str, record: &AccessRecord<'_>) {
    let _ = writeln!(io::stdout(), "{}", format_access(service, record));
}

/// ISO 8601 timestamp: exactly 24 bytes, "2024-01-15T10:30:00.123Z".
/// Stack-allocated.
#[derive(Clone, Copy)]
pub struct Iso8601Timestamp {
    buf: [u8; 24],
}

impl Iso8601Timestamp {
    /// Timestamp for the current time.
    #[inline]
    pub fn now() -> Self {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();
        Self::from_duration(now)
    }

    /// Timestamp from a Duration since UNIX_EPOCH.
    pub fn from_duration(duration: Duration) -> Self {
        let secs = duration.as_secs();
        let millis = duration.subsec_millis();

        let day_secs = secs % 86400;
        let (year, month, day) = civil_from_days((secs / 86400) as i64);

        let mut buf = *b"0000-00-00T00:00:00.000Z";
        write_digits(&mut buf[0..4], year as u32);
        write_digits(&mut buf[5..7], month);
        write_digits(&mut buf[8..10], day);
        write_digits(&mut buf[11..13], (day_secs / 3600) as u32);
        write_digits(&mut buf[14..16], ((day_secs % 3600) / 60) as u32);
        write_digits(&mut buf[17..19], (day_secs % 60) as u32);
        write_digits(&mut buf[20..23], millis);

        Self { buf }
    }

    /// Get the timestamp as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        // Only ASCII digits and punctuation are ever written.
        std::str::from_utf8(&self.buf).unwrap_or("1970-01-01T00:00:00.000Z")
    }
}

impl std::fmt::Display for Iso8601Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::fmt::Debug for Iso8601Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Days since 1970-01-01 to (year, month, day), proleptic Gregorian.
fn civil_from_days(days: i64) -> (i64, u32, u32) {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097);
    let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = (doy - (153 * mp + 2) / 5 + 1) as u32;
    let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u32;
    let year = yoe + era * 400 + i64::from(month <= 2);
    (year, month, day)
}

/// Write `val` as zero-padded decimal filling `buf`.
#[inline]
fn write_digits(buf: &mut [u8], mut val: u32) {
    for b in buf.iter_mut().rev() {
        *b = b'0' + (val % 10) as u8;
        val /= 10;
    }
}
