// src/application/error.rs
use crate::domain::errors::{DomainError, DomainResult, ErrorKind};
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("validation error: {0}")]
    Validation(String),

    /// A store failure, wrapped with the operation that triggered it.
    #[error("{context}: {source}")]
    Store {
        context: String,
        #[source]
        source: DomainError,
    },
}

impl ApplicationError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn store(context: impl Into<String>, source: DomainError) -> Self {
        Self::Store {
            context: context.into(),
            source,
        }
    }

    /// Classification of the root cause, visible through any context wrapping.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
            Self::Store { source, .. } => source.kind(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }
}

/// Attach operation context to a store result.
pub trait StoreResultExt<T> {
    fn context(self, context: impl Into<String>) -> ApplicationResult<T>;

    fn with_context<F, C>(self, f: F) -> ApplicationResult<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T> StoreResultExt<T> for DomainResult<T> {
    fn context(self, context: impl Into<String>) -> ApplicationResult<T> {
        self.map_err(|err| ApplicationError::store(context, err))
    }

    fn with_context<F, C>(self, f: F) -> ApplicationResult<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|err| ApplicationError::store(f(), err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn not_found_survives_wrapping() {
        let result: DomainResult<()> = Err(DomainError::not_found("article abc"));
        let err = result.context("could not get article abc").unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(
            err.to_string(),
            "could not get article abc: not found: article abc"
        );
        let source = err.source().expect("cause retained");
        assert_eq!(source.to_string(), "not found: article abc");
    }

    #[test]
    fn persistence_is_not_not_found() {
        let result: DomainResult<()> = Err(DomainError::persistence("locked"));
        let err = result.with_context(|| "could not list articles").unwrap_err();
        assert!(!err.is_not_found());
        assert_eq!(err.kind(), ErrorKind::Persistence);
    }

    #[test]
    fn validation_kind() {
        assert_eq!(
            ApplicationError::validation("too long").kind(),
            ErrorKind::Validation
        );
    }
}
