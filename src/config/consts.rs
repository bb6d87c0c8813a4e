// src/config/consts.rs

// Display format (fixed; not locale-aware)
pub const SYMBOL: char = '$';
pub const FRACTION_DIGITS: usize = 4;
pub const FIELD_WIDTH: usize = 16; // number field only; SYMBOL sits outside

// Selection
pub const CURRENCY_CLASS: &str = "currency";

// Local state
pub const STORE_DIR: &str = ".currency_fmt";
pub const LOG_FILE: &str = "debug.log";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE: &str = "formatted.html";
