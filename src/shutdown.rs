use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared stop flag for the input thread, the signal task and the UI loop.
#[derive(Clone, Default)]
pub struct ShutdownHandle {
    shutdown: Arc<AtomicBool>,
}

impl ShutdownHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_shutting_down(&self) -> bool {
        self.shutdown.load(Ordering::SeqCst)
    }

    pub fn signal(&self) {
        if !self.shutdown.swap(true, Ordering::SeqCst) {
            tracing::info!("shutdown requested");
        }
    }
}

/// Flip `handle` when the process receives SIGINT or SIGTERM.
///
/// Raw mode swallows Ctrl+C as a key press, so this only matters for
/// signals sent from outside (`kill`, a closing terminal emulator).
pub async fn watch_signals(handle: ShutdownHandle) {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        let Ok(mut term) = signal(SignalKind::terminate()) else {
            tracing::warn!("SIGTERM handler unavailable");
            let _ = tokio::signal::ctrl_c().await;
            handle.signal();
            return;
        };
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {}
            _ = term.recv() => {}
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
    handle.signal();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_flag() {
        let handle = ShutdownHandle::new();
        let other = handle.clone();
        assert!(!other.is_shutting_down());
        handle.signal();
        assert!(other.is_shutting_down());
        // Second signal is harmless.
        other.signal();
        assert!(handle.is_shutting_down());
    }
}
