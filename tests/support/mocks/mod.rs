//! テストサポートモック再エクスポートモジュール
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod article_repos;
pub mod time;
pub mod util;

// 時刻関連
pub use time::{fixed_now, fixed_offset};

// ユーティリティ関連
pub use util::{DummyClock, SequentialIds};

// 記事リポジトリ
pub use article_repos::{FailingArticleRepo, InMemoryArticleRepo};
