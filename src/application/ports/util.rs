// src/application/ports/util.rs
pub trait IdGenerator: Send + Sync {
    /// A new identifier, unique across every id previously handed out.
    fn next_id(&self) -> String;
}
