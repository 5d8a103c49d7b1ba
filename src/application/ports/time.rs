// src/application/ports/time.rs
use chrono::{DateTime, Utc};

/// Source of the current UTC time for timestamp assignment.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
