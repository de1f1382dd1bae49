//! Client for the kupi.cz promotion page tracked by the bot.
//! It covers fetching the page, extracting its embedded JSON-LD block,
//! normalizing the offers it advertises and formatting the daily post.
mod error;
mod format;
mod http;
mod offers;

pub use error::Error;
pub use format::format_message;
pub use http::{HttpClient, PAGE_URL};
pub use offers::{extract_offers, Offer, Price, UNKNOWN_SELLER};

pub type Result<T> = std::result::Result<T, Error>;
