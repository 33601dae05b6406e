//! Entry id generation.
//!
//! `AppState` holds an `Arc<dyn IdGenerator>`; tests swap in `SequentialIds`
//! to get predictable ids.

use uuid::Uuid;

pub trait IdGenerator: Send + Sync {
    /// Returns an id never handed out before by this generator.
    fn next_id(&self) -> String;
}

/// Random v4 UUIDs.
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

#[cfg(test)]
pub use sequential::SequentialIds;

#[cfg(test)]
mod sequential {
    use std::sync::atomic::{AtomicU64, Ordering};

    use super::IdGenerator;

    /// Deterministic ids: `{prefix}-1`, `{prefix}-2`, ...
    pub struct SequentialIds {
        prefix: &'static str,
        counter: AtomicU64,
    }

    impl SequentialIds {
        pub fn new(prefix: &'static str) -> Self {
            SequentialIds {
                prefix,
                counter: AtomicU64::new(0),
            }
        }
    }

    impl IdGenerator for SequentialIds {
        fn next_id(&self) -> String {
            let n = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
            format!("{}-{}", self.prefix, n)
        }
    }
}
