// src/presentation/http/state.rs
use crate::application::services::ArticleUsecase;
use std::sync::Arc;

#[derive(Clone)]
pub struct HttpState {
    pub usecase: Arc<dyn ArticleUsecase>,
}
