//! Convenience converters for common input sources.
//!
//! The functions in this module are suited to extracting the plain text of
//! documents held in byte slices, strings, readers, and files. All of them
//! drive the scanner from the [`crate::sans`] module and produce the same
//! output for the same document content.
//!
//! Output line breaks are always `\n` and tabs `\t`, regardless of platform.

#[cfg(feature = "std")]
pub mod reader;
pub mod slice;

#[cfg(feature = "std")]
pub use reader::{convert as convert_reader, convert_path};
pub use slice::{convert as convert_slice, convert_str};
