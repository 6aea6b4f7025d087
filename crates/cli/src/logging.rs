//! Tracing subscriber setup
//!
//! `LIGHTBNB_LOG_FORMAT=json` selects structured JSON lines; anything else
//! gives the multi-line pretty format. Levels come from `RUST_LOG` and default to
//! `lightbnb=info`. Logs go to stderr so command output stays pipeable.

use anyhow::{Context, Result};
use tracing::Subscriber;
use tracing_subscriber::fmt::{self, MakeWriter};
use tracing_subscriber::layer::{Layer, SubscriberExt};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

// Target matching is by prefix, so this also covers lightbnb_core and lightbnb_infra_postgres
const DEFAULT_FILTER: &str = "lightbnb=info";
const VERBOSE_FILTER: &str = "lightbnb=debug";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
}

impl LogFormat {
    pub fn from_env() -> Self {
        Self::parse(std::env::var("LIGHTBNB_LOG_FORMAT").ok().as_deref())
    }

    fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some(s) if s.eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Pretty,
        }
    }
}

pub fn init(format: LogFormat, verbose: bool) -> Result<()> {
    let env_filter = if verbose {
        EnvFilter::try_new(VERBOSE_FILTER)
    } else {
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(DEFAULT_FILTER))
    }
    .context("Failed to create env filter")?;

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer(format, std::io::stderr))
        .try_init()
        .context("Failed to install tracing subscriber")
}

fn fmt_layer<S, W>(format: LogFormat, writer: W) -> Box<dyn Layer<S> + Send + Sync>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    match format {
        LogFormat::Json => fmt::layer().json().with_writer(writer).boxed(),
        LogFormat::Pretty => fmt::layer().pretty().with_writer(writer).boxed(),
    }
}
