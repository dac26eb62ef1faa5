pub(crate) mod json;
pub mod prompt;

pub use json::*;
