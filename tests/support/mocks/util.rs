// tests/support/mocks/util.rs
use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Clone)]
pub struct DummyClock;

impl article_service::application::ports::time::Clock for DummyClock {
    fn now(&self) -> DateTime<Utc> {
        // Use fixed time for deterministic tests
        super::time::fixed_now()
    }
}

/// `article-1`, `article-2`, ... in call order.
#[derive(Default)]
pub struct SequentialIds {
    next: AtomicU64,
}

impl article_service::application::ports::util::IdGenerator for SequentialIds {
    fn next_id(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::SeqCst) + 1;
        format!("article-{n}")
    }
}
