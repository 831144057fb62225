//! Article acquisition: fetch a page and pull out its readable text.

pub mod errors;
pub mod extract;
pub mod fetcher;
pub mod models;

pub use errors::ScrapeError;
pub use extract::extract_article;
pub use fetcher::{validate_url, ArticleScraper};
pub use models::Article;
