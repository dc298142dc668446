use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Trailing-edge debouncer. Every caller takes a ticket and waits out the
/// quiet period; only the holder of the most recent ticket reports `true`,
/// collapsing a burst of keystrokes into a single action.
#[derive(Clone)]
pub struct Debouncer {
    delay: Duration,
    latest: Arc<AtomicU64>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self { delay, latest: Arc::new(AtomicU64::new(0)) }
    }

    pub async fn settle(&self) -> bool {
        let ticket = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        tokio::time::sleep(self.delay).await;
        self.latest.load(Ordering::SeqCst) == ticket
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn only_the_last_caller_settles() {
        let debouncer = Debouncer::new(Duration::from_millis(500));

        let (first, second, third) = tokio::join!(
            debouncer.settle(),
            debouncer.settle(),
            debouncer.settle()
        );

        assert!(!first);
        assert!(!second);
        assert!(third);
    }

    #[tokio::test(start_paused = true)]
    async fn a_lone_caller_settles() {
        let debouncer = Debouncer::new(Duration::from_millis(500));
        assert!(debouncer.settle().await);
    }
}
