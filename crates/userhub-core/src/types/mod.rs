//! Core type definitions used across the UserHub workspace.

pub mod pagination;
pub mod response;

pub use pagination::PageRequest;
pub use response::ErrorBody;
