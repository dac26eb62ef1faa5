mod send;

pub use send::*;
