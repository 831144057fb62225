// Article Summarizer - API Core
//
// Backend for summarizing web articles and pasted text with an LLM, with
// per-user history, statistics and a public showcase.
// Architecture follows domain-driven design: domains/ hold business logic,
// kernel/ holds infrastructure traits, server/ holds the HTTP surface.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
