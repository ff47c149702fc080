#![no_std]

//! A streaming plain-text extractor for Rich Text Format documents.
//!
//! Matte recovers the plain text carried by a simplified subset of RTF,
//! discarding formatting along the way. It is intended as a fallback for
//! transfers to consumers that cannot render rich content (such as pasting
//! styled text into a plain-text field), not as a renderer: fonts, colors,
//! styles, and embedded objects are dropped, and the contents of nested
//! groups are dropped with them.
//!
//! Most users should begin with the functions in the [`avec`] module. These
//! are suited to converting documents held in slices, strings, readers, and
//! files. If these prove insufficient, consider driving the scanner described
//! in the [`sans`] module.
//!
//! ## Cargo Features
//!
//! The following crate feature flags are available:
//!
//! - `std`: enable reader- and path-based converters (default).

pub mod avec;
pub mod sans;
