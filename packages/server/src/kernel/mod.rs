//! Kernel module - server infrastructure and dependencies.

pub mod deps;
pub mod openai;
pub mod test_dependencies;
pub mod traits;

pub use deps::ServerDeps;
pub use openai::OpenAiChat;
pub use test_dependencies::{MockAI, MockArticleScraper, TestDependencies};
pub use traits::*;
