//! Request and response bodies.

pub mod request;
pub mod response;

pub use request::{LoginRequest, RegisterRequest};
pub use response::{DetailedHealthResponse, HealthResponse, LoginResponse, UserResponse};
