//! # Texscan: a context-sensitive lexing engine for TeX and LaTeX.
//!
//! TeX has no fixed lexical grammar.
//! What each character means (a letter, an escape character, the start of a comment...)
//!     is decided by a classification table that the document itself rewrites as it goes,
//!     with commands like `\makeatletter` and `\ExplSyntaxOn`, or by entering a verbatim environment.
//! This crate implements a lexer for such input that keeps the classification state,
//!     including TeX's grouping semantics, and that can pause and resume at any token boundary.
//!
//! The engine is designed to sit underneath an incremental parser.
//! The parser asks for one token at a time, passing the set of token kinds it could accept;
//!     see [Scanner::scan](scanner::Scanner::scan).
//!
//! ```
//! use texscan::kind::{KindSet, TokenKind};
//! use texscan::lexer::StrLexer;
//! use texscan::scanner::Scanner;
//!
//! let input = r"\verb|%|";
//! let mut scanner = Scanner::new();
//! let mut lexer = StrLexer::new(input);
//! let mut next = |admissible: KindSet| {
//!     let token = scanner.next_token(&mut lexer, &admissible).unwrap();
//!     (token.kind, &input[token.span])
//! };
//! assert_eq!(next(KindSet::STRUCTURAL), (TokenKind::ControlSequenceBegin, r"\"));
//! assert_eq!(next(TokenKind::ControlSequenceEnd.into()), (TokenKind::ControlSequenceEnd, "verb"));
//! assert_eq!(next(TokenKind::VerbDelim.into()), (TokenKind::VerbDelim, "|"));
//! assert_eq!(next(TokenKind::VerbBody.into()), (TokenKind::VerbBody, "%"));
//! assert_eq!(next(TokenKind::VerbDelim.into()), (TokenKind::VerbDelim, "|"));
//! ```

pub mod catcode;
pub mod comment;
pub mod directive;
mod intervalmap;
pub mod kind;
pub mod lexer;
pub mod pattern;
pub mod scanner;
pub mod snapshot;
pub mod table;
pub mod verbatim;

pub use scanner::Scanner;
