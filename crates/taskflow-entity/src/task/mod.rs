//! Tasks and their workflow enums.

pub mod filter;
pub mod model;
pub mod status;

pub use filter::TaskFilter;
pub use model::{CreateTask, Task, TaskPatch};
pub use status::{TaskPriority, TaskStatus};
