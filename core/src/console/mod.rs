//! Fallback extraction from the runner's console text.
//!
//! Nothing here fails: each extraction degrades to its empty result.

mod correlation;
mod counts;
mod message;

pub use correlation::correlation_id;
pub use counts::parse_counts;
pub use message::failure_message;
