mod chat;
mod diary;

pub use chat::*;
pub use diary::*;
