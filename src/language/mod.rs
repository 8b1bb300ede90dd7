// Types representing a parsed Org document

mod error;
mod types;

// Re-export all public symbols
pub use error::*;
pub use types::*;
