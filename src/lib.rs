pub mod application;
pub mod config;
pub mod context;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
