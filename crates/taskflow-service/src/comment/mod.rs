//! Task comments.

pub mod service;

pub use service::CommentService;
