use crate::builder::Compiled;
use crate::dialect::Dialect;
use std::borrow::Cow;
use tracing::Level;

/// Settings for the `tracing` events emitted by [`Builder::compile`](crate::Builder::compile).
///
/// Events go to target `sqlcond.sql`. Enable via the crate feature:
/// `sqlcond = { features = ["tracing"] }` (on by default).
#[derive(Debug, Clone)]
pub struct TraceConfig {
    /// Tracing event level to emit at.
    pub level: Level,
    /// Truncate long SQL strings (in bytes). `None` means no truncation.
    pub max_sql_length: Option<usize>,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            level: Level::DEBUG,
            max_sql_length: Some(200),
        }
    }
}

impl TraceConfig {
    /// Create a new config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the tracing event level.
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Set maximum SQL length to display.
    pub fn with_max_sql_length(mut self, len: usize) -> Self {
        self.max_sql_length = Some(len);
        self
    }

    /// Disable SQL truncation.
    pub fn no_truncate(mut self) -> Self {
        self.max_sql_length = None;
        self
    }

    fn truncate_sql<'a>(&self, sql: &'a str) -> Cow<'a, str> {
        match self.max_sql_length {
            Some(max) if sql.len() > max => {
                Cow::Owned(format!("{}...", truncate_sql_bytes(sql, max)))
            }
            _ => Cow::Borrowed(sql),
        }
    }

    pub(crate) fn emit_compiled(&self, dialect: &Dialect, compiled: &Compiled) {
        /// Dispatch a tracing event at a runtime-determined level.
        macro_rules! emit_at_level {
            ($level:expr, $($field:tt)*) => {
                match $level {
                    Level::ERROR => tracing::error!($($field)*),
                    Level::WARN  => tracing::warn!($($field)*),
                    Level::INFO  => tracing::info!($($field)*),
                    Level::DEBUG => tracing::debug!($($field)*),
                    Level::TRACE => tracing::trace!($($field)*),
                }
            };
        }

        let sql = self.truncate_sql(compiled.sql());
        emit_at_level!(
            self.level,
            target: "sqlcond.sql",
            dialect = %dialect,
            param_count = compiled.args().len(),
            sql = %sql,
        );
    }
}

pub(crate) fn warn_mismatch(sql: &str, placeholders: usize, args: usize) {
    tracing::warn!(
        target: "sqlcond.debug",
        placeholders,
        args,
        sql = %truncate_sql_bytes(sql, 200),
        "placeholder/argument count mismatch"
    );
}

pub(crate) fn truncate_sql_bytes(sql: &str, max_bytes: usize) -> &str {
    if sql.len() <= max_bytes {
        return sql;
    }
    let mut end = max_bytes;
    while end > 0 && !sql.is_char_boundary(end) {
        end -= 1;
    }
    &sql[..end]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::*;
    use std::fmt;
    use std::sync::{Arc, Mutex};
    use tracing::field::{Field, Visit};
    use tracing_subscriber::layer::{Context, SubscriberExt};
    use tracing_subscriber::{Layer, Registry};

    #[derive(Debug, Clone)]
    struct Captured {
        target: String,
        level: Level,
        fields: Vec<(String, String)>,
    }

    impl Captured {
        fn field(&self, name: &str) -> Option<&str> {
            self.fields
                .iter()
                .find(|(k, _)| k == name)
                .map(|(_, v)| v.as_str())
        }
    }

    #[derive(Clone, Default)]
    struct CaptureLayer(Arc<Mutex<Vec<Captured>>>);

    struct FieldVisitor<'a>(&'a mut Vec<(String, String)>);

    impl Visit for FieldVisitor<'_> {
        fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
            self.0.push((field.name().to_string(), format!("{value:?}")));
        }
    }

    impl<S: tracing::Subscriber> Layer<S> for CaptureLayer {
        fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
            let mut fields = Vec::new();
            event.record(&mut FieldVisitor(&mut fields));
            self.0.lock().unwrap().push(Captured {
                target: event.metadata().target().to_string(),
                level: *event.metadata().level(),
                fields,
            });
        }
    }

    fn capture(f: impl FnOnce()) -> Vec<Captured> {
        let layer = CaptureLayer::default();
        let subscriber = Registry::default().with(layer.clone());
        tracing::subscriber::with_default(subscriber, f);
        layer.0.lock().unwrap().clone()
    }

    #[test]
    fn test_truncate_on_char_boundary() {
        assert_eq!(truncate_sql_bytes("abc", 10), "abc");
        assert_eq!(truncate_sql_bytes("abcdef", 3), "abc");
        // 'é' is two bytes; cutting inside it backs off.
        assert_eq!(truncate_sql_bytes("aé", 2), "a");
    }

    #[test]
    fn test_truncate_sql_config() {
        let config = TraceConfig::new().with_max_sql_length(4);
        assert_eq!(config.truncate_sql("a = ? AND b = ?"), "a = ...");
        assert_eq!(config.no_truncate().truncate_sql("a = ? AND b = ?"), "a = ? AND b = ?");
    }

    #[test]
    fn test_compile_emits_debug_event() {
        let events = capture(|| {
            and![eq("a", 1), eq("b", None::<i32>)].compile(&Dialect::DOLLAR);
        });

        assert_eq!(events.len(), 1);
        let event = &events[0];
        assert_eq!(event.target, "sqlcond.sql");
        assert_eq!(event.level, Level::DEBUG);
        assert_eq!(event.field("dialect"), Some("$n"));
        assert_eq!(event.field("param_count"), Some("1"));
        assert_eq!(event.field("sql"), Some("a = $1"));
    }

    #[test]
    fn test_compile_traced_uses_config() {
        let config = TraceConfig::new()
            .with_level(Level::WARN)
            .with_max_sql_length(4);
        let events = capture(|| {
            and![eq("a", 1), eq("b", 2)].compile_traced(&Dialect::QUESTION, &config);
        });

        assert_eq!(events.len(), 1);
        let event = &events[0];
        assert_eq!(event.target, "sqlcond.sql");
        assert_eq!(event.level, Level::WARN);
        assert_eq!(event.field("dialect"), Some("?"));
        assert_eq!(event.field("param_count"), Some("2"));
        assert_eq!(event.field("sql"), Some("a = ..."));
    }

    #[test]
    fn test_debug_mismatch_emits_warning() {
        let events = capture(|| {
            crate::interpolate("a = ? AND b = ?", &[Value::from(1)]);
        });

        assert_eq!(events.len(), 1);
        let event = &events[0];
        assert_eq!(event.target, "sqlcond.debug");
        assert_eq!(event.level, Level::WARN);
        assert_eq!(event.field("placeholders"), Some("2"));
        assert_eq!(event.field("args"), Some("1"));
        assert_eq!(event.field("sql"), Some("a = ? AND b = ?"));
        assert_eq!(event.field("message"), Some("placeholder/argument count mismatch"));
    }

    #[test]
    fn test_debug_without_mismatch_is_silent() {
        let events = capture(|| {
            and![eq("a", 1)].debug();
        });
        assert!(events.is_empty());
    }
}
