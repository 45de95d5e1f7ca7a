use std::sync::mpsc;
use std::thread;

use clipboard::{ClipboardContext, ClipboardProvider};
use futures::future::BoxFuture;
use tokio::sync::oneshot;

use crate::errors::ClipboardWriteFailure;
use crate::feedback::ClipboardWriter;

type Request = (String, oneshot::Sender<Result<(), ClipboardWriteFailure>>);

/// The host clipboard.
///
/// Writes are served by one worker thread that keeps the clipboard context
/// alive: on X11 the copied text disappears with the context that owns it.
pub struct SystemClipboard {
    requests: mpsc::Sender<Request>,
}

impl SystemClipboard {
    /// Start the worker thread. It exits when the last handle is dropped.
    pub fn spawn() -> Self {
        let (tx, rx) = mpsc::channel::<Request>();
        thread::spawn(move || {
            let mut ctx: Option<ClipboardContext> = None;
            for (text, reply) in rx {
                let _ = reply.send(set_contents(&mut ctx, text));
            }
        });
        Self { requests: tx }
    }
}

/// Write through the cached context, opening it on first use.
/// A failed write drops the context so the next one starts fresh.
fn set_contents<P: ClipboardProvider>(slot: &mut Option<P>, text: String) -> Result<(), ClipboardWriteFailure> {
    if slot.is_none() {
        let ctx = P::new()
            .map_err(|e| ClipboardWriteFailure::new(format!("clipboard init: {}", e)))?;
        *slot = Some(ctx);
    }
    if let Some(ctx) = slot.as_mut() {
        if let Err(e) = ctx.set_contents(text) {
            *slot = None;
            return Err(ClipboardWriteFailure::new(format!("clipboard set: {}", e)));
        }
    }
    Ok(())
}

impl ClipboardWriter for SystemClipboard {
    fn write_text(&self, text: &str) -> BoxFuture<'static, Result<(), ClipboardWriteFailure>> {
        let (reply, response) = oneshot::channel();
        let sent = self.requests.send((text.to_owned(), reply));
        Box::pin(async move {
            sent.map_err(|_| ClipboardWriteFailure::new("clipboard worker stopped"))?;
            response
                .await
                .map_err(|_| ClipboardWriteFailure::new("clipboard worker stopped"))?
        })
    }
}
