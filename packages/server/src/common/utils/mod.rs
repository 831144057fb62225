pub mod content;
pub mod text_stats;

pub use content::*;
pub use text_stats::*;
