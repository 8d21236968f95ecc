//! Matching keywords and terminators against the lookahead.
//!
//! Both matchers consume characters as they match them and stop at the first mismatch,
//!     leaving the lexer wherever they stopped.
//! Neither marks the token end; that is the caller's job.
use crate::catcode::{Category, CategorySet};
use crate::lexer::Lexer;
use crate::table::CatCodeTable;

/// Result of [bounded_length].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchLength {
    /// The whole keyword matched and was followed by a terminating character.
    Complete,
    /// Only this many characters of the keyword matched,
    ///     or the keyword matched but was not followed by a terminating character.
    Partial(usize),
}

impl MatchLength {
    pub fn is_complete(&self) -> bool {
        matches!(self, MatchLength::Complete)
    }
}

/// Matches a keyword against the lookahead, ignoring ASCII case.
///
/// The keyword must be given in lower case.
/// When every character of the keyword matches, the match is [MatchLength::Complete]
///     if the category of the following character is in `terminators`
///     or the input has ended.
/// Use [CategorySet::ALL] for keywords that may be followed by anything.
///
/// ```
/// # use texscan::catcode::CategorySet;
/// # use texscan::lexer::StrLexer;
/// # use texscan::pattern::*;
/// # use texscan::table::CatCodeTable;
/// let table = CatCodeTable::default();
/// let mut lexer = StrLexer::new("!TeXstudio");
/// assert_eq!(
///     bounded_length(&mut lexer, &table, "!tex", CategorySet::WORD_BOUNDARY),
///     MatchLength::Partial(4),
/// );
/// ```
pub fn bounded_length<L: Lexer>(
    lexer: &mut L,
    table: &CatCodeTable,
    keyword: &str,
    terminators: CategorySet,
) -> MatchLength {
    let mut length = 0;
    for expected in keyword.chars() {
        match lexer.lookahead() {
            Some(c) if c.to_ascii_lowercase() == expected => {
                length += 1;
                lexer.advance();
            }
            _ => return MatchLength::Partial(length),
        }
    }
    match lexer.lookahead() {
        Some(c) if !terminators.contains(table.classify_char(c)) => MatchLength::Partial(length),
        _ => MatchLength::Complete,
    }
}

/// Matches a pattern in which some characters stand for categories rather than themselves.
///
/// - `\` matches any escape character.
/// - `{` and `}` match any begin group and end group character respectively.
/// - A space matches any number (including zero) of space characters.
///
/// Every other character matches itself.
/// Thus the pattern ` \end {verbatim}` matches `\end{verbatim}` as well as `  \end {verbatim}`.
pub fn matches_class_pattern<L: Lexer>(lexer: &mut L, table: &CatCodeTable, pattern: &str) -> bool {
    for expected in pattern.chars() {
        match expected {
            ' ' => {
                while let Some(c) = lexer.lookahead() {
                    if table.classify_char(c) != Category::Space {
                        break;
                    }
                    lexer.advance();
                }
                continue;
            }
            '\\' => {
                if !next_has_category(lexer, table, Category::Escape) {
                    return false;
                }
            }
            '{' => {
                if !next_has_category(lexer, table, Category::BeginGroup) {
                    return false;
                }
            }
            '}' => {
                if !next_has_category(lexer, table, Category::EndGroup) {
                    return false;
                }
            }
            _ => {
                if lexer.lookahead() != Some(expected) {
                    return false;
                }
            }
        }
        lexer.advance();
    }
    true
}

#[inline]
fn next_has_category<L: Lexer>(lexer: &L, table: &CatCodeTable, category: Category) -> bool {
    matches!(lexer.lookahead(), Some(c) if table.classify_char(c) == category)
}
