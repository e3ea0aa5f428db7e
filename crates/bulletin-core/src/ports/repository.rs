use async_trait::async_trait;

use crate::domain::{NewPost, Post, PostChanges};
use crate::error::RepoError;

/// Post repository - the persistence client behind the service.
///
/// Implementations own the clock for row timestamps: insert assigns
/// `created_at` and `updated_at`, update refreshes `updated_at`.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Insert a new post; the storage assigns its id and timestamps.
    async fn insert(&self, post: NewPost) -> Result<Post, RepoError>;

    /// All posts ordered by `created_at` descending.
    async fn list_newest_first(&self) -> Result<Vec<Post>, RepoError>;

    /// Find a post by its unique ID.
    async fn find_by_id(&self, id: i32) -> Result<Option<Post>, RepoError>;

    /// Apply changes to a post and refresh `updated_at`. Returns `None`
    /// when no row matches.
    async fn update(&self, id: i32, changes: PostChanges) -> Result<Option<Post>, RepoError>;

    /// Delete a post by its ID. Fails with [`RepoError::NotFound`] when no
    /// row matches.
    async fn delete(&self, id: i32) -> Result<(), RepoError>;
}
