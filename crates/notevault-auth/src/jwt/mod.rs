//! JWT token encoding, decoding, renewal, and claims management.

pub mod claims;
pub mod decoder;
pub mod encoder;
pub mod issuer;
pub mod ttl;

pub use claims::Claims;
pub use decoder::JwtDecoder;
pub use encoder::JwtEncoder;
pub use issuer::{TokenIssuer, TokenPair};
pub use ttl::parse_ttl;
