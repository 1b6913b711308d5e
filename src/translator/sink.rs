//! Destinations for fallback and missing-translation notices

/// Receives `(key, locale)` whenever a lookup falls back or misses.
///
/// Any `Fn(&str, &str)` closure is a sink.
pub trait LogSink: Send + Sync {
    fn log(&self, key: &str, locale: &str);
}

impl<F> LogSink for F
where
    F: Fn(&str, &str) + Send + Sync,
{
    fn log(&self, key: &str, locale: &str) {
        self(key, locale);
    }
}

/// Sink that emits tracing events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TracingSink {
    /// `debug` event for keys served from the fallback dictionary
    Fallback,
    /// `warn` event for keys found nowhere
    Missing,
}

impl LogSink for TracingSink {
    fn log(&self, key: &str, locale: &str) {
        match self {
            Self::Fallback => tracing::debug!(key, locale, "Translation served from fallback language"),
            Self::Missing => tracing::warn!(key, locale, "Translation missing"),
        }
    }
}

/// Sink that discards everything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Silent;

impl LogSink for Silent {
    fn log(&self, _key: &str, _locale: &str) {}
}
