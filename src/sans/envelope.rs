//! State processing the document envelope.

use thiserror::Error;

use super::scan::Text;

/// An error advancing over a document envelope.
#[derive(Debug, Error)]
pub enum EnvelopeError {
    /// Missing opening group delimiter.
    #[error("Missing opening group delimiter.")]
    NotRichText,
}

/// State token to consume the opening delimiter of a document.
///
/// A document is wrapped in a single outer group. The opening `{` is consumed
/// here without affecting the nesting depth; scanning of the enclosed content
/// begins at depth zero.
#[derive(Debug)]
pub struct Envelope;

impl Envelope {
    /// Transition to another state by consuming the opening delimiter of a
    /// document.
    ///
    /// Returns the successor state token.
    pub fn advance(c: char) -> Result<Text, EnvelopeError> {
        if c != '{' {
            Err(EnvelopeError::NotRichText)?;
        }

        Ok(Text { depth: 0 })
    }
}
