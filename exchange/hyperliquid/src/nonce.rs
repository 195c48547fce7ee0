use std::sync::atomic::{AtomicU64, Ordering};

use crate::utils::now_ms;

/// Millisecond nonces, strictly increasing even when called faster than the clock ticks.
#[derive(Debug, Default)]
pub struct NonceFactory {
    last: AtomicU64,
}

impl NonceFactory {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn get_new_nonce(&self) -> u64 {
        self.next_nonce_at(now_ms())
    }
    fn next_nonce_at(&self, now: u64) -> u64 {
        let mut last = self.last.load(Ordering::Relaxed);
        loop {
            let nonce = now.max(last + 1);
            match self
                .last
                .compare_exchange_weak(last, nonce, Ordering::AcqRel, Ordering::Relaxed)
            {
                Ok(_) => return nonce,
                Err(actual) => last = actual,
            }
        }
    }
}
