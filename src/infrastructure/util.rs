use crate::application::ports::util::IdGenerator;
use uuid::Uuid;

/// Random (v4) UUIDs in hyphenated form.
#[derive(Default, Clone)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}
