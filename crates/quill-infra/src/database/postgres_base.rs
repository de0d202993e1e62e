use std::marker::PhantomData;

use sea_orm::{DbConn, DbErr, EntityTrait, PrimaryKeyTrait};
use uuid::Uuid;

use quill_core::domain::schema::cast_id;
use quill_core::error::RepoError;

/// Generic PostgreSQL repository over one uuid-keyed table.
pub struct PostgresBaseRepository<E>
where
    E: EntityTrait,
{
    pub(crate) db: DbConn,
    _entity: PhantomData<E>,
}

impl<E> PostgresBaseRepository<E>
where
    E: EntityTrait,
    E::PrimaryKey: PrimaryKeyTrait<ValueType = Uuid>,
{
    pub fn new(db: DbConn) -> Self {
        Self {
            db,
            _entity: PhantomData,
        }
    }

    /// Row lookup by raw id. A malformed id fails before any query is sent.
    pub(crate) async fn find_model(&self, id: &str) -> Result<Option<E::Model>, RepoError> {
        let id = cast_id(id)?;

        E::find_by_id(id).one(&self.db).await.map_err(db_err)
    }

    /// Returns whether a row was removed.
    pub(crate) async fn delete_model(&self, id: &str) -> Result<bool, RepoError> {
        let id = cast_id(id)?;

        let result = E::delete_by_id(id).exec(&self.db).await.map_err(db_err)?;
        Ok(result.rows_affected > 0)
    }
}

pub(crate) fn db_err(e: DbErr) -> RepoError {
    match e {
        DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => RepoError::Connection(e.to_string()),
        _ => RepoError::Query(e.to_string()),
    }
}
