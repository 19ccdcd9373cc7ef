//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`Bold`**: `DELIMITER = "**"`
//! - **`Italic`**: `DELIMITER = "*"`
//! - **`Code`**: `DELIMITER` is a single backtick
//! - **`Image`**: `![alt](url)`
//! - **`Link`**: `[text](url)`, never preceded by `!`
//!
//! ## Design Principle
//!
//! All delimiter constants and patterns live here, not scattered in parser
//! code. The parser asks these types; it never hardcodes `**` or `](`.

pub mod delimiter;
pub mod image;
pub mod link;

pub use delimiter::{Bold, Code, Delimited, Italic};
pub use image::Image;
pub use link::Link;
