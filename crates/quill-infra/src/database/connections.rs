#[cfg(feature = "postgres")]
use std::time::Duration;

#[cfg(feature = "postgres")]
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DbConn, DbErr, Schema};

#[cfg(feature = "postgres")]
use super::entity::{comment, post};

/// Configuration for the document store.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

/// Open the connection pool and make sure both tables exist.
#[cfg(feature = "postgres")]
pub async fn connect(config: &DatabaseConfig) -> Result<DbConn, DbErr> {
    tracing::info!("Connecting to database...");

    let opts = ConnectOptions::new(&config.url)
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .connect_timeout(Duration::from_secs(10))
        .idle_timeout(Duration::from_secs(300))
        .sqlx_logging(true)
        .to_owned();

    let db = Database::connect(opts).await?;
    tracing::info!("Database connected (pool: {})", config.max_connections);

    sync_schema(&db).await?;
    Ok(db)
}

/// Create the `posts` and `comments` tables, and the index on
/// `comments.post_id`, when they are missing. Existing tables are left alone.
#[cfg(feature = "postgres")]
pub async fn sync_schema(db: &DbConn) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    let mut posts = schema.create_table_from_entity(post::Entity);
    posts.if_not_exists();
    db.execute(backend.build(&posts)).await?;

    let mut comments = schema.create_table_from_entity(comment::Entity);
    comments.if_not_exists();
    db.execute(backend.build(&comments)).await?;

    for mut index in schema.create_index_from_entity(comment::Entity) {
        index.if_not_exists();
        db.execute(backend.build(&index)).await?;
    }

    tracing::debug!("Schema in sync");
    Ok(())
}
