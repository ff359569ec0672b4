//! Authentication: credentials, tokens, token storage, and sessions.

mod credentials;
mod session;
mod store;
mod tokens;

pub use credentials::Credentials;
pub use session::Session;
pub use store::{MemoryTokenStore, TokenStore};
pub use tokens::{AccessToken, RefreshToken};
