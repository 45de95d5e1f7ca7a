pub mod capabilities;
pub mod copy_feedback;

pub use capabilities::{AlertSink, ClipboardWriter, DiagnosticSink, Display, Document};
pub use copy_feedback::{ClipboardCopyFeedback, FEEDBACK_ELEMENT_ID};
