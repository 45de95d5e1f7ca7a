use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::task::AbortHandle;
use tokio::time::{sleep, Duration};

use super::capabilities::{AlertSink, ClipboardWriter, DiagnosticSink, Display, Document};
use crate::errors::MissingElement;

/// Id of the element that reports a successful copy
pub const FEEDBACK_ELEMENT_ID: &str = "copy-feedback";
/// How long the feedback stays visible after the most recent success
pub const FEEDBACK_WINDOW: Duration = Duration::from_millis(2000);
pub const FAILURE_LOG_PREFIX: &str = "이메일 복사 실패:";
pub const FAILURE_ALERT: &str = "이메일 복사에 실패했습니다.";

/// Pending hide timer. `generation` bumps on every success so a timer that
/// already woke up cannot hide feedback shown after it was superseded.
#[derive(Debug, Default)]
struct HideTimer {
    generation: u64,
    handle: Option<AbortHandle>,
}

/// Copies a fixed address to the clipboard and flashes the feedback element.
///
/// Cheap to clone: every clone shares the same capabilities and the same hide
/// timer, so feedback shown through any of them is hidden by one timer.
#[derive(Clone)]
pub struct ClipboardCopyFeedback {
    email: Arc<str>,
    clipboard: Arc<dyn ClipboardWriter>,
    document: Arc<dyn Document>,
    diagnostics: Arc<dyn DiagnosticSink>,
    alerts: Arc<dyn AlertSink>,
    hide_timer: Arc<Mutex<HideTimer>>,
}

impl ClipboardCopyFeedback {
    pub fn new(
        email: impl Into<Arc<str>>,
        clipboard: Arc<dyn ClipboardWriter>,
        document: Arc<dyn Document>,
        diagnostics: Arc<dyn DiagnosticSink>,
        alerts: Arc<dyn AlertSink>,
    ) -> Self {
        Self {
            email: email.into(),
            clipboard,
            document,
            diagnostics,
            alerts,
            hide_timer: Arc::new(Mutex::new(HideTimer::default())),
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Start a copy in the background and return immediately.
    /// Must be called from within a tokio runtime.
    pub fn invoke(&self) {
        let this = self.clone();
        tokio::spawn(async move { this.copy().await });
    }

    /// Write the address and react to the outcome. Never fails: a refused
    /// write is logged and alerted here.
    pub async fn copy(&self) {
        let outcome = match self.clipboard.write_text(&self.email).await {
            Ok(()) => self.show_feedback().map_err(|e| e.to_string()),
            Err(e) => Err(e.to_string()),
        };
        if let Err(detail) = outcome {
            self.report_failure(&detail);
        }
    }

    fn show_feedback(&self) -> Result<(), MissingElement> {
        let mut timer = lock(&self.hide_timer);
        self.document.set_display(FEEDBACK_ELEMENT_ID, Display::Inline)?;

        if let Some(previous) = timer.handle.take() {
            previous.abort();
        }
        timer.generation = timer.generation.wrapping_add(1);
        let generation = timer.generation;

        let document = Arc::clone(&self.document);
        let shared = Arc::clone(&self.hide_timer);
        let task = tokio::spawn(async move {
            sleep(FEEDBACK_WINDOW).await;
            let mut timer = lock(&shared);
            if timer.generation != generation {
                return;
            }
            timer.handle = None;
            if let Err(e) = document.set_display(FEEDBACK_ELEMENT_ID, Display::None) {
                tracing::warn!("could not hide copy feedback: {}", e);
            }
        });
        timer.handle = Some(task.abort_handle());

        tracing::info!(email = %self.email, "copied to clipboard");
        Ok(())
    }

    fn report_failure(&self, detail: &str) {
        self.diagnostics.error(&format!("{} {}", FAILURE_LOG_PREFIX, detail));
        self.alerts.alert(FAILURE_ALERT);
    }
}

fn lock(timer: &Mutex<HideTimer>) -> MutexGuard<'_, HideTimer> {
    timer.lock().unwrap_or_else(PoisonError::into_inner)
}
