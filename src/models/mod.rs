mod diary;
pub mod user;

pub use diary::*;
pub use user::*;
