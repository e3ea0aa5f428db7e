use std::sync::Arc;

use crate::domain::{NewPost, Post, PostChanges};
use crate::error::DomainError;
use crate::ports::PostRepository;

/// CRUD facade over the post repository.
///
/// Each operation is a single round-trip to the repository plus the
/// not-found check the contract requires. There is no cross-call state:
/// consistency between calls is whatever the storage provides per
/// statement.
#[derive(Clone)]
pub struct PostService {
    repo: Arc<dyn PostRepository>,
}

impl PostService {
    pub fn new(repo: Arc<dyn PostRepository>) -> Self {
        Self { repo }
    }

    /// Persist a new post and return it with its assigned id and timestamps.
    pub async fn create(&self, input: NewPost) -> Result<Post, DomainError> {
        Ok(self.repo.insert(input).await?)
    }

    /// All posts, newest first. An empty result is valid, not an error.
    pub async fn find_all(&self) -> Result<Vec<Post>, DomainError> {
        Ok(self.repo.list_newest_first().await?)
    }

    /// Look up a single post by id.
    pub async fn find_one(&self, id: i32) -> Result<Post, DomainError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::post_not_found(id))
    }

    /// Overwrite the post's fields and refresh `updated_at`.
    pub async fn update(&self, id: i32, changes: PostChanges) -> Result<Post, DomainError> {
        self.repo
            .update(id, changes)
            .await?
            .ok_or_else(|| DomainError::post_not_found(id))
    }

    /// Delete a post, returning its last known state.
    pub async fn remove(&self, id: i32) -> Result<Post, DomainError> {
        let post = self.find_one(id).await?;
        self.repo.delete(id).await?;
        Ok(post)
    }
}
