//! Application state - shared across all handlers.

use std::sync::Arc;

use bulletin_core::PostService;
use bulletin_infra::database::{
    DatabaseConfig, DatabaseConnections, InMemoryPostRepository, PostgresPostRepository,
};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: PostService,
    pub db: Option<Arc<DatabaseConnections>>,
}

impl AppState {
    /// Build the application state with the appropriate repository.
    pub async fn new(db_config: Option<&DatabaseConfig>) -> Self {
        let (db, posts) = match db_config {
            Some(config) => match DatabaseConnections::init(config).await {
                Ok(connections) => {
                    let conn = Arc::new(connections);
                    let service =
                        PostService::new(Arc::new(PostgresPostRepository::new(conn.main.clone())));
                    (Some(conn), service)
                }
                Err(e) => {
                    tracing::error!(
                        "Failed to connect to database: {}. Using in-memory fallback.",
                        e
                    );
                    (
                        None,
                        PostService::new(Arc::new(InMemoryPostRepository::new())),
                    )
                }
            },
            None => {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                (
                    None,
                    PostService::new(Arc::new(InMemoryPostRepository::new())),
                )
            }
        };

        tracing::info!("Application state initialized");

        Self { posts, db }
    }
}
