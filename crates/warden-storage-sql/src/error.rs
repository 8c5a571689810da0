//! SQL error translation.

use sqlx::Error as SqlxError;
use warden_storage::StorageError;

/// Converts a `SQLx` error to a storage error.
///
/// Unique constraint violations (`PostgreSQL` error code 23505) map to
/// [`StorageError::Duplicate`] so callers can recognize an email race
/// as a retryable conflict.
#[allow(clippy::needless_pass_by_value)]
pub(crate) fn from_sqlx_error(err: SqlxError) -> StorageError {
    match err {
        SqlxError::Database(db_err) => {
            if db_err.code().is_some_and(|c| c == "23505") {
                StorageError::duplicate("email", db_err.message())
            } else {
                StorageError::query(db_err.to_string())
            }
        }
        SqlxError::PoolTimedOut => StorageError::connection("connection pool timeout"),
        SqlxError::PoolClosed => StorageError::connection("connection pool closed"),
        SqlxError::Io(io_err) => StorageError::connection(io_err.to_string()),
        _ => StorageError::internal(err.to_string()),
    }
}
