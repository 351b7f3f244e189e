pub mod cs;
pub mod error;

pub use cs::select;
pub use error::{Error, Result};
