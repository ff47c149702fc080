//! Slice-based converter implementations.

use alloc::string::String;

use either::Either::{self, Left, Right};
use thiserror::Error;

use crate::sans::{
    Scanner,
    envelope::EnvelopeError,
    scan::{ControlWord, Emit, Text},
    word::resolve,
};

extern crate alloc;

/// Errors occurring while converting from a slice.
#[derive(Debug, Error)]
pub enum Error {
    /// Incorrect document envelope.
    #[error("Incorrect document envelope: {0}.")]
    Envelope(#[from] EnvelopeError),
}

/// Convert a document in a byte slice to plain text.
///
/// Bytes are widened one-to-one into characters; bytes above the 7-bit range
/// are not interpreted as multi-byte sequences. Non-ASCII content is expected
/// to arrive through decimal Unicode escapes, not raw high-order bytes.
///
/// This method is also re-exported as `matte::avec::convert_slice`.
pub fn convert(r: &[u8]) -> Result<String, Error> {
    drive(r.iter().map(|b| char::from(*b)))
}

/// Convert a document in a string slice to plain text.
///
/// This method is also re-exported as `matte::avec::convert_str`.
pub fn convert_str(r: &str) -> Result<String, Error> {
    drive(r.chars())
}

fn drive(mut chars: impl Iterator<Item = char>) -> Result<String, Error> {
    let mut state: Either<Text, ControlWord> = Left(Scanner::advance(
        chars.next().ok_or(EnvelopeError::NotRichText)?,
    )?);

    let mut output = String::new();
    let mut word = String::new();

    for c in chars {
        let (emit, successor) = match state {
            Left(text) => text.advance(c),
            Right(control_word) => control_word.advance(c),
        };

        match emit {
            Some(Emit::Literal(c)) => output.push(c),
            Some(Emit::Word(c)) => word.push(c),
            Some(Emit::Resolve) => {
                output.extend(resolve(&word));
                word.clear();
            }
            None => {}
        }

        state = successor;
    }

    Ok(output)
}
