pub mod select;

// Re-export all modules
pub use select::*;
