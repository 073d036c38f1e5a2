//! Result sources and the primary/fallback strategy that combines them.

mod layered;
mod structured;
mod text;
mod traits;

pub use layered::LayeredExtraction;
pub use structured::StructuredExtractor;
pub use text::TextExtractor;
pub use traits::ResultExtractor;
