use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonic request tag shared between a controller and its in-flight
/// fetches. A response is applied only while its ticket is still the latest
/// one issued, giving "last request wins" semantics instead of "last response
/// to arrive wins" when calls complete out of order.
#[derive(Clone, Default)]
pub struct RequestSeq {
    latest: Arc<AtomicU64>,
}

impl RequestSeq {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&self) -> u64 {
        self.latest.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket
    }
}
