use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;

pub const DEFAULT_BANNER_TIMEOUT: Duration = Duration::from_secs(5);

/// Callback invoked with the banner generation once its delay has elapsed.
pub type BannerNotifier = Arc<dyn Fn(u64) + Send + Sync>;

/// Schedules the delayed banner clear.
///
/// At most one clear is pending: scheduling a new one or calling
/// [`cancel`](Self::cancel) aborts the previous task. Without a tokio runtime
/// or a notifier nothing is scheduled and the banner stays until replaced.
pub struct BannerTimer {
    delay: Duration,
    notifier: Option<BannerNotifier>,
    pending: Option<JoinHandle<()>>,
}

impl BannerTimer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            notifier: None,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn set_notifier(&mut self, notifier: BannerNotifier) {
        self.notifier = Some(notifier);
    }

    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|task| !task.is_finished())
    }

    pub fn schedule(&mut self, generation: u64) {
        self.cancel();

        let Some(notifier) = self.notifier.clone() else {
            return;
        };
        let Ok(runtime) = Handle::try_current() else {
            tracing::debug!(generation, "no async runtime, banner clear not scheduled");
            return;
        };

        let delay = self.delay;
        tracing::trace!(generation, ?delay, "banner clear scheduled");
        self.pending = Some(runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            notifier(generation);
        }));
    }

    pub fn cancel(&mut self) {
        if let Some(task) = self.pending.take() {
            task.abort();
        }
    }
}

impl Default for BannerTimer {
    fn default() -> Self {
        Self::new(DEFAULT_BANNER_TIMEOUT)
    }
}

impl Drop for BannerTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    fn recording_timer(delay: Duration) -> (BannerTimer, Arc<Mutex<Vec<u64>>>) {
        let fired = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&fired);
        let mut timer = BannerTimer::new(delay);
        timer.set_notifier(Arc::new(move |generation| sink.lock().push(generation)));
        (timer, fired)
    }

    #[test]
    fn schedule_without_runtime_is_silent() {
        let (mut timer, fired) = recording_timer(Duration::from_millis(1));
        timer.schedule(1);
        assert!(!timer.is_pending());
        assert!(fired.lock().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn fires_after_delay() {
        let (mut timer, fired) = recording_timer(Duration::from_secs(5));
        timer.schedule(3);
        tokio::time::sleep(Duration::from_millis(4_900)).await;
        assert!(fired.lock().is_empty());
        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(*fired.lock(), vec![3]);
    }

    #[tokio::test(start_paused = true)]
    async fn reschedule_aborts_previous() {
        let (mut timer, fired) = recording_timer(Duration::from_secs(5));
        timer.schedule(1);
        tokio::time::sleep(Duration::from_secs(3)).await;
        timer.schedule(2);
        tokio::time::sleep(Duration::from_secs(6)).await;
        assert_eq!(*fired.lock(), vec![2]);
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_stops_pending_clear() {
        let (mut timer, fired) = recording_timer(Duration::from_secs(5));
        timer.schedule(1);
        timer.cancel();
        tokio::time::sleep(Duration::from_secs(10)).await;
        assert!(fired.lock().is_empty());
        assert!(!timer.is_pending());
    }
}
