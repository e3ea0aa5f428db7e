use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Post entity - a titled entry with storage-assigned id and timestamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: i32,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a post. The id and both timestamps are assigned by
/// the persistence layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPost {
    pub title: String,
}

/// Partial update for a post. `updated_at` is refreshed even when every
/// field is absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostChanges {
    pub title: Option<String>,
}
