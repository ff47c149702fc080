//! Reader-based converter implementations.
//!
//! _Requires Cargo feature `std`._

use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path,
    string::String,
};

use either::Either::{self, Left, Right};
use thiserror::Error;

use crate::sans::{
    Scanner,
    envelope::EnvelopeError,
    scan::{ControlWord, Emit, Text},
    word::resolve,
};

extern crate std;

/// Errors occurring while converting from a reader.
#[derive(Debug, Error)]
pub enum Error {
    /// An error from the supplied reader.
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// Incorrect document envelope.
    #[error("Incorrect document envelope: {0}.")]
    Envelope(#[from] EnvelopeError),
}

/// Convert a document from a reader to plain text.
///
/// The reader is taken by value: the scan drains it to the end of input, and
/// it is dropped (closing any underlying handle) before this function
/// returns, whether or not conversion succeeds. Bytes are widened one-to-one
/// into characters, as by [`crate::avec::slice::convert`]. Reads are not
/// buffered here; wrap file or socket readers in a [`BufReader`].
///
/// This method is also re-exported as `matte::avec::convert_reader`.
pub fn convert(r: impl Read) -> Result<String, Error> {
    let mut bytes = r.bytes();

    let first = match bytes.next() {
        Some(b) => char::from(b?),
        None => Err(EnvelopeError::NotRichText)?,
    };

    let mut state: Either<Text, ControlWord> = Left(Scanner::advance(first)?);

    let mut output = String::new();
    let mut word = String::new();

    for b in bytes {
        let c = char::from(b?);

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

/// Convert a document at a filesystem path to plain text.
///
/// This method is also re-exported as `matte::avec::convert_path`.
pub fn convert_path(p: impl AsRef<Path>) -> Result<String, Error> {
    convert(BufReader::new(File::open(p)?))
}
