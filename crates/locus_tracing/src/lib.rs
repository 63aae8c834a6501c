//! Tracing subscriber setup.
//!
//! The resource crates only emit `tracing` events; hosts decide where those go.
//! [`TracingSetup`] installs a global `tracing-subscriber` registry with an
//! [`EnvFilter`] and one fmt layer in the chosen [`TracingFormat`].
//!
//! # Example
//!
//! ```
//! use locus_tracing::{TracingFormat, TracingSetup};
//! use tracing::Level;
//!
//! // Development: pretty output with debug level and span enter/exit
//! let config = TracingSetup::default()
//!     .with_level(Level::DEBUG)
//!     .with_format(TracingFormat::Pretty)
//!     .with_span_events(true)
//!     .init();
//! assert_eq!(config.level(), Level::DEBUG);
//! ```
//!
//! Target-specific levels go through the env filter:
//!
//! ```
//! use locus_tracing::{TracingFormat, TracingSetup};
//!
//! TracingSetup::new()
//!     .with_format(TracingFormat::Json)
//!     .with_env_filter("locus_resource=trace,tokio=warn")
//! # ;
//! ```

use serde::{Deserialize, Serialize};
use tracing::Level;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

// ─────────────────────────────────────────────────────────────────────────────
// TracingFormat
// ─────────────────────────────────────────────────────────────────────────────

/// Tracing output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TracingFormat {
    /// Human-readable colored output (default).
    #[default]
    Pretty,
    /// Compact single-line output.
    Compact,
    /// JSON structured output for log aggregation.
    Json,
}

// ─────────────────────────────────────────────────────────────────────────────
// TracingConfig
// ─────────────────────────────────────────────────────────────────────────────

/// The effective configuration, returned by [`TracingSetup::init`].
///
/// Serializable so hosts can embed it in their own configuration files; the
/// level is stored by name (`"info"`, `"debug"`, ...). Deserializing an
/// unknown level name is an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TracingConfig {
    /// Maximum level, by name.
    #[serde(deserialize_with = "level_name")]
    pub level: String,
    /// Output format.
    #[serde(default)]
    pub format: TracingFormat,
    /// Directives in `target=level,...` form, overriding `level`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub env_filter: Option<String>,
    /// Whether span enter/exit events are printed.
    #[serde(default)]
    pub span_events: bool,
}

impl TracingConfig {
    /// Parses [`level`](Self::level).
    ///
    /// A name set directly on the struct that does not parse is reported with
    /// a warning and treated as `INFO`.
    #[must_use]
    pub fn level(&self) -> Level {
        self.level.parse().unwrap_or_else(|_| {
            tracing::warn!(level = %self.level, "unknown tracing level, using info");
            Level::INFO
        })
    }
}

fn level_name<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let name = String::deserialize(deserializer)?;
    name.parse::<Level>().map_err(|_| {
        serde::de::Error::invalid_value(
            serde::de::Unexpected::Str(&name),
            &"one of trace, debug, info, warn, error",
        )
    })?;
    Ok(name)
}

impl From<TracingConfig> for TracingSetup {
    fn from(config: TracingConfig) -> Self {
        Self {
            level: config.level(),
            format: config.format,
            env_filter: config.env_filter,
            span_events: config.span_events,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// TracingSetup
// ─────────────────────────────────────────────────────────────────────────────

/// Builder that installs the global tracing subscriber.
#[derive(Debug, Clone)]
pub struct TracingSetup {
    level: Level,
    format: TracingFormat,
    /// Directives such as `locus_resource=debug`; replaces `level` when valid.
    env_filter: Option<String>,
    span_events: bool,
}

impl Default for TracingSetup {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            format: TracingFormat::Pretty,
            env_filter: None,
            span_events: false,
        }
    }
}

impl TracingSetup {
    /// `INFO`, pretty output, no filter directives, no span events.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Events above `level` are dropped unless a filter says otherwise.
    #[must_use]
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Chooses how events are rendered.
    #[must_use]
    pub fn with_format(mut self, format: TracingFormat) -> Self {
        self.format = format;
        self
    }

    /// Per-target directives, `target=level,target=level,...`.
    ///
    /// Directives that fail to parse are ignored in favour of the plain level.
    #[must_use]
    pub fn with_env_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    /// Prints span enter/exit, useful when following a tree walk.
    #[must_use]
    pub fn with_span_events(mut self, enabled: bool) -> Self {
        self.span_events = enabled;
        self
    }

    /// The configuration this builder would install.
    #[must_use]
    pub fn config(&self) -> TracingConfig {
        TracingConfig {
            level: self.level.as_str().to_ascii_lowercase(),
            format: self.format,
            env_filter: self.env_filter.clone(),
            span_events: self.span_events,
        }
    }

    fn env_filter(&self) -> EnvFilter {
        match &self.env_filter {
            Some(filter) => {
                EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new(self.level.as_str()))
            }
            None => EnvFilter::new(self.level.as_str()),
        }
    }

    /// Installs the global subscriber and returns the effective configuration.
    ///
    /// Only the first call in a process installs anything; later calls (or a
    /// subscriber installed elsewhere) leave the existing one in place.
    pub fn init(self) -> TracingConfig {
        let env_filter = self.env_filter();

        let span_events = if self.span_events {
            FmtSpan::ENTER | FmtSpan::EXIT
        } else {
            FmtSpan::NONE
        };

        let installed = match self.format {
            TracingFormat::Pretty => tracing_subscriber::registry()
                .with(env_filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .pretty()
                        .with_span_events(span_events),
                )
                .try_init()
                .is_ok(),
            TracingFormat::Compact => tracing_subscriber::registry()
                .with(env_filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .compact()
                        .with_span_events(span_events),
                )
                .try_init()
                .is_ok(),
            TracingFormat::Json => tracing_subscriber::registry()
                .with(env_filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_span_events(span_events),
                )
                .try_init()
                .is_ok(),
        };

        if installed {
            tracing::info!(level = %self.level, format = ?self.format, "tracing initialized");
        } else {
            tracing::debug!("global subscriber already set, keeping it");
        }

        self.config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracing_format_default_is_pretty() {
        assert_eq!(TracingFormat::default(), TracingFormat::Pretty);
    }

    #[test]
    fn default_level_is_info() {
        let setup = TracingSetup::default();
        assert_eq!(setup.level, Level::INFO);
        assert_eq!(setup.config().level, "info");
    }

    #[test]
    fn builder_sets_fields() {
        let setup = TracingSetup::new()
            .with_level(Level::DEBUG)
            .with_format(TracingFormat::Json)
            .with_env_filter("locus_resource=trace")
            .with_span_events(true);

        let config = setup.config();
        assert_eq!(config.level(), Level::DEBUG);
        assert_eq!(config.format, TracingFormat::Json);
        assert_eq!(config.env_filter.as_deref(), Some("locus_resource=trace"));
        assert!(config.span_events);
    }

    #[test]
    fn init_twice_keeps_first_subscriber() {
        let first = TracingSetup::new().with_format(TracingFormat::Compact).init();
        let second = TracingSetup::new().with_level(Level::TRACE).init();
        assert_eq!(first.format, TracingFormat::Compact);
        assert_eq!(second.level(), Level::TRACE);
    }

    #[test]
    fn config_round_trips_through_setup() {
        let json = r#"{"level":"warn","format":"compact"}"#;
        let config: TracingConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.level(), Level::WARN);
        assert!(config.env_filter.is_none());

        let setup = TracingSetup::from(config.clone());
        assert_eq!(setup.config(), config);
    }

    #[test]
    fn unknown_level_name_is_rejected_on_deserialize() {
        let err = serde_json::from_str::<TracingConfig>(r#"{"level":"degub"}"#).unwrap_err();
        assert!(err.to_string().contains("degub"), "unexpected error: {err}");

        let config: TracingConfig = serde_json::from_str(r#"{"level":"DEBUG"}"#).unwrap();
        assert_eq!(config.level(), Level::DEBUG);
    }

    #[test]
    fn unknown_level_name_falls_back_to_info() {
        let config = TracingConfig {
            level: "loud".to_string(),
            format: TracingFormat::Pretty,
            env_filter: None,
            span_events: false,
        };
        assert_eq!(config.level(), Level::INFO);
    }
}
