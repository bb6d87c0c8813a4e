// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod core;
pub mod format;

pub mod csv;
pub mod dom;
pub mod file;
pub mod gui;
pub mod markup;
pub mod progress;
pub mod runner;

pub use dom::{format_all, Rewrite, TextNodes};
pub use format::{format_amount, format_amount_with};
pub use markup::HtmlDocument;
