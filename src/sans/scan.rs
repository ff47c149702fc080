//! States scanning document text and control words.

use either::Either::{self, Left, Right};

/// An instruction to apply to the conversion buffers.
#[derive(Debug, PartialEq, Eq)]
pub enum Emit {
    /// Append a character to the output text.
    Literal(char),
    /// Append a character to the pending control word name.
    Word(char),
    /// Resolve the pending control word name, then clear it.
    ///
    /// See [`crate::sans::word::resolve`].
    Resolve,
}

/// State token to scan literal document text.
#[derive(Debug)]
pub struct Text {
    pub(super) depth: i32,
}

impl Text {
    /// Transition to another state by scanning one document character.
    ///
    /// Returns an instruction to apply, if any, and a successor state token.
    pub fn advance(self, c: char) -> (Option<Emit>, Either<Text, ControlWord>) {
        let Self { depth } = self;

        match c {
            '{' => (None, Left(Self { depth: depth + 1 })),
            '}' => (None, Left(Self { depth: depth - 1 })),
            '\\' if depth == 0 => (
                None,
                Right(ControlWord {
                    depth,
                    named: false,
                }),
            ),
            // Source-level line breaks carry no content.
            '\r' | '\n' => (None, Left(Self { depth })),
            _ if depth == 0 => (Some(Emit::Literal(c)), Left(Self { depth })),
            _ => (None, Left(Self { depth })),
        }
    }
}

/// State token to scan a control word.
///
/// A brace scanned while a name is pending adjusts only the nesting depth,
/// leaving the name in place: accumulation continues if depth returns to
/// zero, and the name is resolved by the next terminator or abandoned at the
/// end of input. Downstream output depends on this, so it is preserved here.
#[derive(Debug)]
pub struct ControlWord {
    pub(super) depth: i32,
    pub(super) named: bool,
}

impl ControlWord {
    /// Transition to another state by scanning one document character.
    ///
    /// Returns an instruction to apply, if any, and a successor state token.
    pub fn advance(self, c: char) -> (Option<Emit>, Either<Text, ControlWord>) {
        let Self { depth, named } = self;

        match c {
            '{' if !named => (Some(Emit::Literal('{')), Left(Text { depth })),
            '{' => (
                None,
                Right(Self {
                    depth: depth + 1,
                    named,
                }),
            ),
            '}' if !named => (Some(Emit::Literal('}')), Left(Text { depth })),
            '}' => (
                None,
                Right(Self {
                    depth: depth - 1,
                    named,
                }),
            ),
            '\\' if depth != 0 => (None, Right(Self { depth, named })),
            '\\' if !named => (Some(Emit::Literal('\\')), Left(Text { depth })),
            '\\' => (
                Some(Emit::Resolve),
                Right(Self {
                    depth,
                    named: false,
                }),
            ),
            // The terminator itself is consumed, never output.
            ' ' | '\r' | '\n' if depth == 0 => (Some(Emit::Resolve), Left(Text { depth })),
            _ if depth == 0 => (Some(Emit::Word(c)), Right(Self { depth, named: true })),
            _ => (None, Right(Self { depth, named })),
        }
    }
}
