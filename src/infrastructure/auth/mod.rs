//! Authentication infrastructure module
//!
//! Login tokens are a fixed placeholder; nothing issues or validates real
//! session tokens.

mod token;

pub use token::{PlaceholderTokenIssuer, TokenIssuer};
