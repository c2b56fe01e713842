//!
//! Description: Parser and stdout printers for `debug.properties`-style key/value files.
//!

pub mod error;
pub mod printer;
pub mod properties;
