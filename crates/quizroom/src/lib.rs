//! quizroom - Client library for the quizroom learning platform API
//!
//! This library provides a session-centric client for the platform's REST
//! backend. All authenticated operations flow through a [`Session`], which
//! attaches the bearer credential to outgoing requests and transparently
//! renews it: a request rejected with 401 triggers one token refresh and
//! one replay.
//!
//! # Example
//!
//! ```no_run
//! use quizroom::{BaseUrl, Credentials, Session};
//!
//! # async fn example() -> Result<(), quizroom::Error> {
//! let base = BaseUrl::new("https://api.quizroom.app")?;
//! let credentials = Credentials::new("admin@school.edu", "password");
//! let session = Session::login(&base, credentials).await?;
//!
//! for course in session.courses().list().await? {
//!     println!("{}: {}", course.id, course.name);
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod auth;
pub mod error;
pub mod live;
pub mod table;
pub mod types;

mod http;

// Re-export primary types at crate root for convenience
pub use auth::{AccessToken, Credentials, MemoryTokenStore, RefreshToken, Session, TokenStore};
pub use error::Error;
pub use types::{BaseUrl, ResourceId};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
