//! Convenience result type alias for TaskFlow.

use crate::error::AppError;

/// A specialized `Result` type for TaskFlow operations.
pub type AppResult<T> = Result<T, AppError>;
