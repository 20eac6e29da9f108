//! Custom Axum extractors.

pub mod auth;
pub mod json;
pub mod pagination;
pub mod path;
pub mod query;

pub use auth::CurrentUser;
pub use json::JsonBody;
pub use pagination::PaginationParams;
pub use query::QueryParams;
