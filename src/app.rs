// src/app.rs
use std::sync::Arc;

use crate::feedback::{ClipboardCopyFeedback, ClipboardWriter, Display, Document, FEEDBACK_ELEMENT_ID};
use crate::logging::ConsoleSink;
use crate::page::{ConsoleLine, Page};

/// Holds the shared application state
pub struct App {
    /// Element styles, pending alerts and diagnostics
    pub page: Arc<Page>,
    /// The copy action bound to the card
    pub feedback: ClipboardCopyFeedback,
    /// Set once the user asked to quit
    pub exit: bool,
}

impl App {
    /// Build the page and wire the copy component to it
    pub fn new(email: &str, clipboard: Arc<dyn ClipboardWriter>) -> Self {
        let page = Arc::new(Page::new());
        page.register(FEEDBACK_ELEMENT_ID);
        let diagnostics = Arc::new(ConsoleSink::new(page.clone()));
        let feedback = ClipboardCopyFeedback::new(email, clipboard, page.clone(), diagnostics, page.clone());
        App { page, feedback, exit: false }
    }

    pub fn email(&self) -> &str {
        self.feedback.email()
    }

    /// Start a copy unless an alert is waiting for acknowledgement
    pub fn copy_email(&self) -> bool {
        if self.page.current_alert().is_some() {
            return false;
        }
        self.feedback.invoke();
        true
    }

    pub fn feedback_visible(&self) -> bool {
        self.page.display(FEEDBACK_ELEMENT_ID) == Some(Display::Inline)
    }

    pub fn current_alert(&self) -> Option<String> {
        self.page.current_alert()
    }

    pub fn dismiss_alert(&self) -> bool {
        self.page.dismiss_alert()
    }

    pub fn console_lines(&self) -> Vec<ConsoleLine> {
        self.page.console_lines()
    }

    pub fn quit(&mut self) {
        self.exit = true;
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::errors::ClipboardWriteFailure;
    use crate::feedback::AlertSink;
    use futures::future::BoxFuture;

    /// Clipboard that always answers the same way
    pub(crate) struct StaticClipboard(pub Result<(), ClipboardWriteFailure>);

    impl ClipboardWriter for StaticClipboard {
        fn write_text(&self, _text: &str) -> BoxFuture<'static, Result<(), ClipboardWriteFailure>> {
            let outcome = self.0.clone();
            Box::pin(async move { outcome })
        }
    }

    pub(crate) fn app_with(outcome: Result<(), ClipboardWriteFailure>) -> App {
        App::new("zlhh3842@gmail.com", Arc::new(StaticClipboard(outcome)))
    }

    #[tokio::test(start_paused = true)]
    async fn copy_shows_feedback_through_the_page() {
        let app = app_with(Ok(()));
        assert!(!app.feedback_visible());

        assert!(app.copy_email());
        tokio::time::sleep(std::time::Duration::from_millis(10)).await;
        assert!(app.feedback_visible());

        tokio::time::sleep(std::time::Duration::from_millis(2000)).await;
        assert!(!app.feedback_visible());
    }

    #[tokio::test(start_paused = true)]
    async fn failed_copy_raises_alert_and_console_line() {
        let app = app_with(Err(ClipboardWriteFailure::new("Permission denied")));

        app.copy_email();
        tokio::time::sleep(std::time::Duration::from_millis(10)).await;

        assert!(!app.feedback_visible());
        assert_eq!(app.current_alert().as_deref(), Some("이메일 복사에 실패했습니다."));
        let console = app.console_lines();
        assert_eq!(console.len(), 1);
        assert_eq!(console[0].text, "이메일 복사 실패: Permission denied");
    }

    #[tokio::test]
    async fn pending_alert_blocks_copy() {
        let app = app_with(Ok(()));
        app.page.alert("blocked");
        assert!(!app.copy_email());
        assert!(app.dismiss_alert());
        assert!(app.copy_email());
    }
}
