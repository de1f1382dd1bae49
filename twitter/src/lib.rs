//! Minimal Twitter API v2 client: OAuth 1.0a user-context signing and
//! the single create-tweet call the bot needs.
mod client;
mod error;
mod schema;
mod sign;

pub use client::Client;
pub use error::Error;
pub use schema::Tweet;
pub use sign::Credentials;

pub type Result<T> = std::result::Result<T, Error>;
