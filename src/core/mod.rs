// src/core/mod.rs

pub mod html;
pub mod sanitize;
pub mod text_chars;

pub use text_chars::{text_content, TextChars};
