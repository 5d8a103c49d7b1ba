// tests/support/mocks/article_repos.rs
use async_trait::async_trait;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use article_service::context::RequestContext;
use article_service::domain::article::{
    Article, ArticleId, ArticleReadRepository, ArticleWriteRepository,
};
use article_service::domain::errors::{DomainError, DomainResult};

/* -------------------------------- InMemoryArticleRepo -------------------------------- */

/// インメモリの記事リポジトリ（挿入順を保持し、呼び出し回数を記録する）
#[derive(Default)]
pub struct InMemoryArticleRepo {
    rows: Mutex<Vec<Article>>,
    inserts: AtomicUsize,
    updates: AtomicUsize,
    deletes: AtomicUsize,
}

impl InMemoryArticleRepo {
    pub fn with_articles(articles: Vec<Article>) -> Self {
        Self {
            rows: Mutex::new(articles),
            ..Self::default()
        }
    }

    pub fn insert_calls(&self) -> usize {
        self.inserts.load(Ordering::SeqCst)
    }

    pub fn update_calls(&self) -> usize {
        self.updates.load(Ordering::SeqCst)
    }

    pub fn delete_calls(&self) -> usize {
        self.deletes.load(Ordering::SeqCst)
    }

    pub fn snapshot(&self) -> Vec<Article> {
        self.rows.lock().unwrap().clone()
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryArticleRepo {
    async fn insert(&self, _ctx: &RequestContext, article: Article) -> DomainResult<Article> {
        self.inserts.fetch_add(1, Ordering::SeqCst);
        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|a| a.id == article.id) {
            return Err(DomainError::persistence("UNIQUE constraint failed: articles.id"));
        }
        rows.push(article.clone());
        Ok(article)
    }

    async fn update(&self, _ctx: &RequestContext, article: Article) -> DomainResult<Article> {
        self.updates.fetch_add(1, Ordering::SeqCst);
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|a| a.id == article.id)
            .ok_or_else(|| DomainError::not_found(format!("article {}", article.id)))?;
        row.title = article.title;
        row.content = article.content;
        row.author = article.author;
        row.updated_at = article.updated_at;
        Ok(row.clone())
    }

    async fn delete(&self, _ctx: &RequestContext, id: &ArticleId) -> DomainResult<()> {
        self.deletes.fetch_add(1, Ordering::SeqCst);
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|a| &a.id != id);
        if rows.len() == before {
            return Err(DomainError::not_found(format!("article {id}")));
        }
        Ok(())
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryArticleRepo {
    async fn list(&self, _ctx: &RequestContext) -> DomainResult<Vec<Article>> {
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn find_by_id(&self, _ctx: &RequestContext, id: &ArticleId) -> DomainResult<Article> {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .find(|a| &a.id == id)
            .cloned()
            .ok_or_else(|| DomainError::not_found(format!("article {id}")))
    }
}

/* -------------------------------- FailingArticleRepo -------------------------------- */

/// すべての操作で永続化エラーを返すリポジトリ
pub struct FailingArticleRepo;

fn failure() -> DomainError {
    DomainError::persistence("database is locked: /var/lib/articles.db")
}

#[async_trait]
impl ArticleWriteRepository for FailingArticleRepo {
    async fn insert(&self, _ctx: &RequestContext, _article: Article) -> DomainResult<Article> {
        Err(failure())
    }

    async fn update(&self, _ctx: &RequestContext, _article: Article) -> DomainResult<Article> {
        Err(failure())
    }

    async fn delete(&self, _ctx: &RequestContext, _id: &ArticleId) -> DomainResult<()> {
        Err(failure())
    }
}

#[async_trait]
impl ArticleReadRepository for FailingArticleRepo {
    async fn list(&self, _ctx: &RequestContext) -> DomainResult<Vec<Article>> {
        Err(failure())
    }

    async fn find_by_id(&self, _ctx: &RequestContext, _id: &ArticleId) -> DomainResult<Article> {
        Err(failure())
    }
}
