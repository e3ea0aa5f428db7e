//! In-memory post repository - used as fallback when no database is configured.

use std::sync::atomic::{AtomicI32, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use bulletin_core::domain::{NewPost, Post, PostChanges};
use bulletin_core::error::RepoError;
use bulletin_core::ports::PostRepository;

/// In-memory repository using a Vec behind an async RwLock.
///
/// This is the fallback implementation when `DATABASE_URL` is not set.
/// Note: Data is lost on process restart.
pub struct InMemoryPostRepository {
    rows: RwLock<Vec<Post>>,
    seq: AtomicI32,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(Vec::new()),
            seq: AtomicI32::new(0),
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn insert(&self, new_post: NewPost) -> Result<Post, RepoError> {
        let now = Utc::now();
        let post = Post {
            id: self.seq.fetch_add(1, Ordering::SeqCst) + 1,
            title: new_post.title,
            created_at: now,
            updated_at: now,
        };

        self.rows.write().await.push(post.clone());
        Ok(post)
    }

    async fn list_newest_first(&self) -> Result<Vec<Post>, RepoError> {
        let mut rows = self.rows.read().await.clone();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Post>, RepoError> {
        Ok(self.rows.read().await.iter().find(|p| p.id == id).cloned())
    }

    async fn update(&self, id: i32, changes: PostChanges) -> Result<Option<Post>, RepoError> {
        let mut rows = self.rows.write().await;
        let Some(row) = rows.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };

        if let Some(title) = changes.title {
            row.title = title;
        }
        row.updated_at = Utc::now();

        Ok(Some(row.clone()))
    }

    async fn delete(&self, id: i32) -> Result<(), RepoError> {
        let mut rows = self.rows.write().await;
        let len_before = rows.len();
        rows.retain(|p| p.id != id);

        if rows.len() == len_before {
            return Err(RepoError::NotFound);
        }

        Ok(())
    }
}
