//! PostgreSQL repository implementation.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue::Set, DbConn, EntityTrait, QueryOrder};

use bulletin_core::domain::{NewPost, Post, PostChanges};
use bulletin_core::error::RepoError;
use bulletin_core::ports::PostRepository;

use super::entity::post::{self, Entity as PostEntity};

/// PostgreSQL post repository backed by SeaORM.
///
/// The database owns the row ids; this adapter owns the timestamps.
pub struct PostgresPostRepository {
    db: DbConn,
}

impl PostgresPostRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn insert(&self, new_post: NewPost) -> Result<Post, RepoError> {
        let now = Utc::now();
        let model = post::ActiveModel {
            title: Set(new_post.title),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
            ..Default::default()
        };

        let inserted = model
            .insert(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(inserted.into())
    }

    async fn list_newest_first(&self) -> Result<Vec<Post>, RepoError> {
        let rows = PostEntity::find()
            .order_by_desc(post::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Post>, RepoError> {
        let row = PostEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(row.map(Into::into))
    }

    async fn update(&self, id: i32, changes: PostChanges) -> Result<Option<Post>, RepoError> {
        let Some(row) = PostEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?
        else {
            return Ok(None);
        };

        let mut model: post::ActiveModel = row.into();
        if let Some(title) = changes.title {
            model.title = Set(title);
        }
        model.updated_at = Set(Utc::now().into());

        let updated = model
            .update(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(Some(updated.into()))
    }

    async fn delete(&self, id: i32) -> Result<(), RepoError> {
        tracing::debug!(post_id = id, "Deleting post");

        let result = PostEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        Ok(())
    }
}
