//! Task lifecycle with ownership-aware update rules.

pub mod service;

pub use service::TaskService;
pub use taskflow_entity::task::TaskFilter;
