//! MEI document model and identifier allocation

pub mod ids;
pub mod types;

// Re-export commonly used types
pub use ids::{IdAllocator, RandomIdAllocator, SequentialIdAllocator};
pub use types::*;
