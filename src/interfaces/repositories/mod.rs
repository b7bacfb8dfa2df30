pub mod catalog;
pub mod engagement;
pub mod notification;
pub mod profile;
pub mod project;
pub mod rating;
pub mod sqlx_repo;
pub mod task;
pub mod user;

pub(crate) const UNIQUE_VIOLATION: &str = "23505";
pub(crate) const FOREIGN_KEY_VIOLATION: &str = "23503";

/// Returns the constraint name when `err` is a database error with the given SQLSTATE.
///
/// The name is empty when the server did not report one.
pub(crate) fn violated_constraint(err: &sqlx::Error, code: &str) -> Option<String> {
    match err {
        sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some(code) => {
            Some(db_err.constraint().unwrap_or_default().to_string())
        }
        _ => None,
    }
}
