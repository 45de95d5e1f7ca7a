use std::{
    fs::OpenOptions,
    path::Path,
    sync::{Arc, Mutex},
};

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::errors::AppError;
use crate::feedback::DiagnosticSink;
use crate::page::Page;

/// Install the global subscriber, appending to `path`.
///
/// The terminal is owned by the UI, so nothing is written to stdout/stderr.
/// `RUST_LOG` overrides the default `info` level.
pub fn init_logging(path: &Path) -> Result<(), AppError> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();
    let file_layer = fmt::layer().with_writer(Mutex::new(file)).with_ansi(false);

    tracing_subscriber::registry().with(env_filter).with(file_layer).try_init()?;
    Ok(())
}

/// Diagnostic sink: a tracing error event plus a line in the page console
pub struct ConsoleSink {
    page: Arc<Page>,
}

impl ConsoleSink {
    pub fn new(page: Arc<Page>) -> Self {
        Self { page }
    }
}

impl DiagnosticSink for ConsoleSink {
    fn error(&self, message: &str) {
        tracing::error!("{}", message);
        self.page.push_console(message);
    }
}
