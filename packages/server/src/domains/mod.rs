// Business domains
pub mod articles;
pub mod auth;
pub mod summaries;
pub mod summarization;
