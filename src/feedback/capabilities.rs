//! Host capabilities consumed by the copy component.
//!
//! Each boundary is a trait so the terminal host and the tests can supply
//! their own implementation.

use futures::future::BoxFuture;

use crate::errors::{ClipboardWriteFailure, MissingElement};

/// Display style of a page element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Display {
    Inline,
    #[default]
    None,
}

/// Writes text to the system clipboard
pub trait ClipboardWriter: Send + Sync {
    /// Resolves once the host has accepted or refused the whole string
    fn write_text(&self, text: &str) -> BoxFuture<'static, Result<(), ClipboardWriteFailure>>;
}

/// Element lookup and styling on the presentation layer
pub trait Document: Send + Sync {
    fn set_display(&self, element_id: &str, display: Display) -> Result<(), MissingElement>;
    fn display(&self, element_id: &str) -> Option<Display>;
}

/// Developer-facing diagnostics
pub trait DiagnosticSink: Send + Sync {
    fn error(&self, message: &str);
}

/// User-facing message that must be acknowledged
pub trait AlertSink: Send + Sync {
    fn alert(&self, message: &str);
}
