//! JWT token encoding, decoding, and claims management.

pub mod authenticator;
pub mod claims;
pub mod decoder;
pub mod encoder;
pub mod error;

pub use authenticator::TokenAuthenticator;
pub use claims::Claims;
pub use decoder::JwtDecoder;
pub use encoder::JwtEncoder;
pub use error::TokenError;
