//! Character-level finite-state machine for implementing converters.
//!
//! This module is intended for applications that need fine control over
//! scanner internals, such as those running without an allocator or consuming
//! characters from an unusual source. See [`crate::avec`] for implementations
//! covering common conversion patterns.
//!
//! # Architecture
//!
//! All states are represented by a small, non-copy token. Transition to
//! another state by calling the token's `advance` method with the next
//! document character. This will return a successor state token, along with
//! an instruction to apply to the conversion buffers, if any.
//!
//! The machine holds no buffers of its own. Callers own the output text and
//! the pending control word name: append characters to them as instructed by
//! [`scan::Emit::Literal`] and [`scan::Emit::Word`], and on
//! [`scan::Emit::Resolve`], expand the accumulated name through
//! [`word::resolve`] and clear it. The tokens track whether a name is pending
//! internally, so a caller's word buffer is empty exactly when the machine
//! believes it to be.
//!
//! Only the initial state, re-exported for convenience as [`Scanner`], can be
//! constructed. Its single transition consumes the opening delimiter of the
//! document envelope and is the only fallible step; scanning then continues
//! until the character source is exhausted. Unbalanced groups and a dangling
//! control word name at the end of input are not errors.
//!
//! Implementers are recommended to begin by studying and modifying a
//! converter from the [`crate::avec`] module.

pub mod envelope;
pub mod scan;
pub mod word;

/// Entrypoint to the finite-state machine.
pub type Scanner = envelope::Envelope;
