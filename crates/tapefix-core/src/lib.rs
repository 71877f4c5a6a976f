//! Shared building blocks for tapefix.
//!
//! - [`character`] -- Unicode whitespace and simple case mapping
//! - [`case`] -- carrying capitalization over to a corrected word
//! - [`enums`] -- result types shared by the speller and its callers
//! - [`text`] -- splitting free text into words and joining them back

pub mod case;
pub mod character;
pub mod enums;
pub mod text;
