//! Comment classification.
//!
//! Some comments carry instructions for tools other than TeX and are given their own token kinds:
//!
//! | Example                        | Kind                            |
//! |--------------------------------|---------------------------------|
//! | `%:Section`                    | [TokenKind::TagComment]         |
//! | `% arara: pdflatex`            | [TokenKind::AraraComment]       |
//! | `% !TEX program = lualatex`    | [TokenKind::MagicComment]       |
//! | `% !BIB program = biber`       | [TokenKind::BibComment]         |
//!
//! Everything else is a plain [TokenKind::Comment].
use crate::catcode::{Category, CategorySet};
use crate::kind::TokenKind;
use crate::lexer::Lexer;
use crate::pattern::{bounded_length, MatchLength};
use crate::table::CatCodeTable;

/// Scans a comment starting at the comment character in the lookahead.
///
/// The token includes the rest of the line and the end of line character, if any.
pub fn scan_comment<L: Lexer>(lexer: &mut L, table: &CatCodeTable) -> TokenKind {
    lexer.advance();
    let kind = classify(lexer, table);
    while let Some(c) = lexer.lookahead() {
        lexer.advance();
        if table.classify_char(c) == Category::EndOfLine {
            break;
        }
    }
    lexer.mark_end();
    kind
}

fn classify<L: Lexer>(lexer: &mut L, table: &CatCodeTable) -> TokenKind {
    if bounded_length(lexer, table, ":", CategorySet::ALL).is_complete() {
        return TokenKind::TagComment;
    }
    while let Some(c) = lexer.lookahead() {
        if table.classify_char(c) != Category::Space {
            break;
        }
        lexer.advance();
    }
    match bounded_length(lexer, table, "arara:", CategorySet::ALL) {
        MatchLength::Complete => TokenKind::AraraComment,
        MatchLength::Partial(0) => {
            match bounded_length(lexer, table, "!tex", CategorySet::WORD_BOUNDARY) {
                MatchLength::Complete => TokenKind::MagicComment,
                MatchLength::Partial(1)
                    if bounded_length(lexer, table, "bib", CategorySet::WORD_BOUNDARY)
                        .is_complete() =>
                {
                    TokenKind::BibComment
                }
                MatchLength::Partial(_) => TokenKind::Comment,
            }
        }
        MatchLength::Partial(_) => TokenKind::Comment,
    }
}
