//! The lookahead protocol between the engine and the code that owns the input.
//!
//! The engine never holds the input itself.
//! Instead, each call to [Scanner::scan](crate::scanner::Scanner::scan) is handed a [Lexer]
//!     that exposes the next character, lets the engine consume it,
//!     and lets the engine mark where the token it is producing ends.
//! Characters may be consumed past the marked end (for example, while checking whether an
//!     environment terminator follows); the token still ends at the last mark.
//!
//! [StrLexer] is an implementation over an in-memory string.

/// Lookahead access to the input.
pub trait Lexer {
    /// Returns the next character, or `None` at the end of the input.
    fn lookahead(&self) -> Option<char>;

    /// Consumes the next character. Does nothing at the end of the input.
    fn advance(&mut self);

    /// Marks the current position as the end of the token being scanned.
    fn mark_end(&mut self);

    /// Returns to the position where the current token started, discarding
    ///     everything consumed and marked since.
    fn rewind(&mut self);
}

/// A token produced by the engine: its kind and the byte range of the input it covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<K> {
    pub kind: K,
    pub span: std::ops::Range<usize>,
}

/// A [Lexer] over a string slice.
///
/// Positions are byte offsets into the string.
#[derive(Debug, Clone)]
pub struct StrLexer<'a> {
    source: &'a str,
    start: usize,
    pos: usize,
    end: usize,
}

impl<'a> StrLexer<'a> {
    pub fn new(source: &'a str) -> StrLexer<'a> {
        StrLexer {
            source,
            start: 0,
            pos: 0,
            end: 0,
        }
    }

    /// Creates a lexer that starts reading at the provided byte offset.
    ///
    /// If the offset is not a character boundary the lexer starts at the end of the input.
    pub fn new_at(source: &'a str, offset: usize) -> StrLexer<'a> {
        let offset = if source.is_char_boundary(offset) {
            offset
        } else {
            source.len()
        };
        StrLexer {
            source,
            start: offset,
            pos: offset,
            end: offset,
        }
    }

    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Byte offset of the lookahead character.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Byte offset where the current token started.
    pub fn token_start(&self) -> usize {
        self.start
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Finishes the current token.
    ///
    /// Returns the byte range between the token start and the last marked end,
    ///     and moves the lexer to that end so that the next token starts there.
    pub fn finish_token(&mut self) -> std::ops::Range<usize> {
        let span = self.start..self.end;
        self.start = self.end;
        self.pos = self.end;
        span
    }

    /// Consumes one character outside of any token, the way a grammar consumes text
    ///     that the engine is not asked to lex.
    ///
    /// Returns the consumed character.
    pub fn skip(&mut self) -> Option<char> {
        let c = self.lookahead();
        self.advance();
        self.mark_end();
        self.finish_token();
        c
    }
}

impl<'a> Lexer for StrLexer<'a> {
    #[inline]
    fn lookahead(&self) -> Option<char> {
        self.source[self.pos..].chars().next()
    }

    #[inline]
    fn advance(&mut self) {
        if let Some(c) = self.lookahead() {
            self.pos += c.len_utf8();
        }
    }

    #[inline]
    fn mark_end(&mut self) {
        self.end = self.pos;
    }

    fn rewind(&mut self) {
        self.pos = self.start;
        self.end = self.start;
    }
}
