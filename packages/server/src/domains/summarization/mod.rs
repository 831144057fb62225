//! Summarization: prompt the LLM and turn its reply into a [`Summary`].

pub mod models;
pub mod parse;
pub mod prompt;
pub mod service;

pub use models::{SummarizationResponse, Summary};
pub use parse::{parse_summary_reply, ParsedReply};
pub use prompt::build_summary_prompt;
pub use service::{SummarizeError, Summarizer};
