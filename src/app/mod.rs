// Presentation layer: turns console lines into session calls and notices.

pub mod console;
pub mod notice;
