//! Application state - shared across all handlers.

use std::sync::Arc;

use quill_core::ports::{CommentRepository, PostRepository};
use quill_core::{CommentService, PostService};
use quill_infra::{DatabaseConfig, InMemoryCommentRepository, InMemoryPostRepository};

#[cfg(feature = "postgres")]
use quill_infra::{PostgresCommentRepository, PostgresPostRepository};

/// Shared application state. Cloning is cheap; every worker gets a copy
/// backed by the same store.
#[derive(Clone)]
pub struct AppState {
    pub posts: PostService,
    pub comments: CommentService,
}

impl AppState {
    pub fn new(posts: Arc<dyn PostRepository>, comments: Arc<dyn CommentRepository>) -> Self {
        Self {
            posts: PostService::new(posts.clone()),
            comments: CommentService::new(posts, comments),
        }
    }

    /// State over a fresh in-memory store.
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryPostRepository::new()),
            Arc::new(InMemoryCommentRepository::new()),
        )
    }

    /// Build the state with the store selected by configuration.
    ///
    /// A configured database that cannot be reached is fatal; there is no
    /// silent fallback to memory in that case.
    pub async fn init(db_config: Option<&DatabaseConfig>) -> anyhow::Result<Self> {
        let Some(config) = db_config else {
            tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
            return Ok(Self::in_memory());
        };

        #[cfg(feature = "postgres")]
        {
            let db = quill_infra::database::connect(config).await?;
            tracing::info!("Application state initialized");
            Ok(Self::new(
                Arc::new(PostgresPostRepository::new(db.clone())),
                Arc::new(PostgresCommentRepository::new(db)),
            ))
        }

        #[cfg(not(feature = "postgres"))]
        {
            anyhow::bail!(
                "DATABASE_URL is set ({} connections) but the postgres feature is disabled",
                config.max_connections
            )
        }
    }
}
