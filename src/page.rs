// src/page.rs
use std::collections::{HashMap, VecDeque};
use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Local};

use crate::errors::MissingElement;
use crate::feedback::{AlertSink, Display, Document};

/// How many diagnostic lines the console keeps
pub const CONSOLE_CAPACITY: usize = 50;

/// One diagnostic line shown in the console panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleLine {
    pub at: DateTime<Local>,
    pub text: String,
}

#[derive(Debug, Default)]
struct PageState {
    elements: HashMap<String, Display>,
    alerts: VecDeque<String>,
    console: VecDeque<ConsoleLine>,
}

/// Presentation state shared between the UI loop and background tasks
#[derive(Debug, Default)]
pub struct Page {
    state: Mutex<PageState>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, PageState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Add an element, initially hidden. Re-registering resets it.
    pub fn register(&self, element_id: &str) {
        self.state().elements.insert(element_id.to_string(), Display::None);
    }

    /// The alert currently waiting for acknowledgement
    pub fn current_alert(&self) -> Option<String> {
        self.state().alerts.front().cloned()
    }

    /// Dismiss the oldest alert. Returns false when there was none.
    pub fn dismiss_alert(&self) -> bool {
        self.state().alerts.pop_front().is_some()
    }

    pub fn push_console(&self, text: impl Into<String>) {
        let mut state = self.state();
        if state.console.len() == CONSOLE_CAPACITY {
            state.console.pop_front();
        }
        state.console.push_back(ConsoleLine { at: Local::now(), text: text.into() });
    }

    /// Console lines, oldest first
    pub fn console_lines(&self) -> Vec<ConsoleLine> {
        self.state().console.iter().cloned().collect()
    }
}

impl Document for Page {
    fn set_display(&self, element_id: &str, display: Display) -> Result<(), MissingElement> {
        let mut state = self.state();
        let slot = state
            .elements
            .get_mut(element_id)
            .ok_or_else(|| MissingElement { id: element_id.to_string() })?;
        *slot = display;
        Ok(())
    }

    fn display(&self, element_id: &str) -> Option<Display> {
        self.state().elements.get(element_id).copied()
    }
}

impl AlertSink for Page {
    fn alert(&self, message: &str) {
        self.state().alerts.push_back(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registered_elements_start_hidden() {
        let page = Page::new();
        assert_eq!(page.display("copy-feedback"), None);
        page.register("copy-feedback");
        assert_eq!(page.display("copy-feedback"), Some(Display::None));
        page.set_display("copy-feedback", Display::Inline).unwrap();
        assert_eq!(page.display("copy-feedback"), Some(Display::Inline));
    }

    #[test]
    fn unknown_element_is_an_error() {
        let page = Page::new();
        let err = page.set_display("nope", Display::Inline).unwrap_err();
        assert_eq!(err.id, "nope");
    }

    #[test]
    fn alerts_are_dismissed_in_order() {
        let page = Page::new();
        assert!(!page.dismiss_alert());
        page.alert("first");
        page.alert("second");
        assert_eq!(page.current_alert().as_deref(), Some("first"));
        assert!(page.dismiss_alert());
        assert_eq!(page.current_alert().as_deref(), Some("second"));
        assert!(page.dismiss_alert());
        assert_eq!(page.current_alert(), None);
    }

    #[test]
    fn console_drops_oldest_lines_past_capacity() {
        let page = Page::new();
        for i in 0..CONSOLE_CAPACITY + 5 {
            page.push_console(format!("line {}", i));
        }
        let lines = page.console_lines();
        assert_eq!(lines.len(), CONSOLE_CAPACITY);
        assert_eq!(lines[0].text, "line 5");
        assert_eq!(lines.last().unwrap().text, format!("line {}", CONSOLE_CAPACITY + 4));
    }
}
