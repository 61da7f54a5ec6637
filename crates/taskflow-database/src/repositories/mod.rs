//! PostgreSQL repository implementations of the store traits.

pub mod comment;
pub mod invite;
pub mod membership;
pub mod project;
pub mod refresh;
pub mod task;
pub mod user;
pub mod workspace;

pub use comment::CommentRepository;
pub use invite::InviteRepository;
pub use membership::MembershipRepository;
pub use project::ProjectRepository;
pub use refresh::RefreshCredentialRepository;
pub use task::TaskRepository;
pub use user::UserRepository;
pub use workspace::WorkspaceRepository;

use taskflow_core::error::{AppError, ErrorKind};

/// Map a sqlx error, turning unique-constraint violations into `Conflict`.
pub(crate) fn map_insert_error(
    err: sqlx::Error,
    conflict_message: &str,
    context: &'static str,
) -> AppError {
    let unique = err
        .as_database_error()
        .map(|db| db.is_unique_violation())
        .unwrap_or(false);
    if unique {
        AppError::conflict(conflict_message)
    } else {
        AppError::with_source(ErrorKind::Database, context, err)
    }
}

/// Map a sqlx error into a `Database` error with context.
pub(crate) fn db_error(context: &'static str) -> impl FnOnce(sqlx::Error) -> AppError {
    move |e| AppError::with_source(ErrorKind::Database, context, e)
}
