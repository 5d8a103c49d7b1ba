pub mod request_context;

pub use request_context::{X_REQUEST_ID, request_context};
