//! Type definitions for cleanquote

mod error;
mod estimate;

pub use error::*;
pub use estimate::*;
