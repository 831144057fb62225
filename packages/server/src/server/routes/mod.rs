// HTTP routes
pub mod api_docs;
pub mod auth;
pub mod health;
pub mod showcase;
pub mod stats;
pub mod summarize;
pub mod user_summaries;

pub use api_docs::*;
pub use auth::*;
pub use health::*;
pub use showcase::*;
pub use stats::*;
pub use summarize::*;
pub use user_summaries::*;
