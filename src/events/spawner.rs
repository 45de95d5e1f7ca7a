use tokio::sync::mpsc;
use tokio::task;
use tokio::time::{self, Duration};
use crossterm::event::{self, Event as CEvent, KeyEvent, KeyEventKind};

/// Redraw cadence; short enough that the feedback disappears on time
pub const TICK_RATE: Duration = Duration::from_millis(100);

/// Wrapper for input and tick events
#[derive(Debug, Clone)]
pub enum Event {
    Input(KeyEvent),
    Tick,
    Stop,
}

/// Event source producing `Input` and `Tick` events
pub struct EventSpawner {
    rx: mpsc::Receiver<Event>,
}

impl EventSpawner {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel(20);

        // input poller; exits once the receiver is gone
        let input_tx = tx.clone();
        task::spawn_blocking(move || loop {
            match event::poll(TICK_RATE) {
                Ok(true) => match event::read() {
                    Ok(CEvent::Key(key)) if key.kind == KeyEventKind::Press => {
                        if input_tx.blocking_send(Event::Input(key)).is_err() {
                            break;
                        }
                    }
                    Ok(_) => {}
                    Err(e) => tracing::warn!("reading terminal event failed: {}", e),
                },
                Ok(false) => {
                    if input_tx.is_closed() {
                        break;
                    }
                }
                Err(e) => {
                    tracing::error!("polling terminal events failed: {}", e);
                    let _ = input_tx.blocking_send(Event::Stop);
                    break;
                }
            }
        });

        // tick producer
        tokio::spawn(async move {
            let mut interval = time::interval(TICK_RATE);
            loop {
                interval.tick().await;
                if tx.send(Event::Tick).await.is_err() {
                    break;
                }
            }
        });

        Self { rx }
    }

    pub async fn next(&mut self) -> Event {
        self.rx.recv().await.unwrap_or(Event::Stop)
    }
}
