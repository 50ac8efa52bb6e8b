use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEvent};

use crate::shutdown::ShutdownHandle;

pub enum AppEvent {
    Key(KeyEvent),
    Paste(String),
    Tick,
    Resize(u16, u16),
    /// The banner timer for `generation` ran out.
    BannerExpired { generation: u64 },
    /// OS signal or input EOF.
    Shutdown,
}

pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: Sender<AppEvent>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration, shutdown: ShutdownHandle) -> Self {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();

        thread::Builder::new()
            .name("input".to_string())
            .spawn(move || input_loop(event_tx, tick_rate, shutdown))
            .map_err(|err| tracing::error!(error = %err, "failed to spawn input thread"))
            .ok();

        Self { rx, tx }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    pub fn sender(&self) -> Sender<AppEvent> {
        self.tx.clone()
    }
}

fn input_loop(tx: Sender<AppEvent>, tick_rate: Duration, shutdown: ShutdownHandle) {
    let mut last_tick = Instant::now();
    loop {
        if shutdown.is_shutting_down() {
            let _ = tx.send(AppEvent::Shutdown);
            break;
        }

        // Short poll so the shutdown flag is seen promptly.
        let timeout = tick_rate
            .saturating_sub(last_tick.elapsed())
            .min(Duration::from_millis(50));

        match event::poll(timeout) {
            Ok(true) => {
                let forwarded = match event::read() {
                    Ok(Event::Key(key)) => Some(AppEvent::Key(key)),
                    Ok(Event::Paste(text)) => Some(AppEvent::Paste(text)),
                    Ok(Event::Resize(cols, rows)) => Some(AppEvent::Resize(cols, rows)),
                    Ok(_) => None,
                    Err(err) => {
                        tracing::error!(error = %err, "terminal read failed");
                        let _ = tx.send(AppEvent::Shutdown);
                        break;
                    }
                };
                if let Some(event) = forwarded {
                    if tx.send(event).is_err() {
                        break;
                    }
                }
            }
            Ok(false) => {}
            Err(err) => {
                tracing::error!(error = %err, "terminal poll failed");
                let _ = tx.send(AppEvent::Shutdown);
                break;
            }
        }

        if last_tick.elapsed() >= tick_rate {
            if tx.send(AppEvent::Tick).is_err() {
                break;
            }
            last_tick = Instant::now();
        }
    }
}
