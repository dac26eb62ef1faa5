pub mod chat;
pub mod diary;
pub mod health_checks;
pub mod voice;

pub use health_checks::*;
