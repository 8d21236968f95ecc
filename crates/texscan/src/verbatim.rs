//! Scanning raw text: inline verbatim spans and verbatim environment bodies.
//!
//! An inline verbatim span like `\verb|x|` is scanned as three tokens:
//!     the opening delimiter, the body, and the closing delimiter.
//! The opening delimiter can be any character other than an end of line,
//!     and the span is implicitly closed by the end of the line.
//!
//! A verbatim environment body runs until the environment's terminator,
//!     which is matched with [matches_class_pattern] at the start of every line
//!     and at the start of the body.
//!
//! The functions here mark the token end but leave mode changes to the caller.
use crate::catcode::Category;
use crate::lexer::Lexer;
use crate::pattern::matches_class_pattern;
use crate::table::CatCodeTable;

#[inline]
fn is_end_of_line(table: &CatCodeTable, c: char) -> bool {
    table.classify_char(c) == Category::EndOfLine
}

/// Scans the opening delimiter of an inline verbatim span.
///
/// Returns the delimiter, or `None` if the input has ended or the next character is
///     an end of line.
pub fn scan_start_delimiter<L: Lexer>(lexer: &mut L, table: &CatCodeTable) -> Option<char> {
    let delimiter = lexer.lookahead()?;
    if is_end_of_line(table, delimiter) {
        return None;
    }
    lexer.advance();
    lexer.mark_end();
    Some(delimiter)
}

/// Scans the closing delimiter of an inline verbatim span.
///
/// If the next character is the delimiter it is consumed.
/// If the next character is an end of line, or the input has ended,
///     the span is closed with a zero-width token and the end of line is left in place.
/// Otherwise there is no closing delimiter here and `false` is returned.
pub fn scan_end_delimiter<L: Lexer>(lexer: &mut L, table: &CatCodeTable, delimiter: u32) -> bool {
    match lexer.lookahead() {
        Some(c) if c as u32 == delimiter => {
            lexer.advance();
            lexer.mark_end();
            true
        }
        Some(c) if !is_end_of_line(table, c) => false,
        _ => {
            lexer.mark_end();
            true
        }
    }
}

/// Scans the body of an inline verbatim span, up to the delimiter or the end of the line.
///
/// The body may be empty.
pub fn scan_verb_body<L: Lexer>(lexer: &mut L, table: &CatCodeTable, delimiter: u32) {
    while let Some(c) = lexer.lookahead() {
        if c as u32 == delimiter || is_end_of_line(table, c) {
            break;
        }
        lexer.advance();
    }
    lexer.mark_end();
}

/// Scans the body of a verbatim environment.
///
/// The body ends right before the first line that starts with the terminator.
/// A body whose terminator never appears runs until the end of the input.
pub fn scan_environment_body<L: Lexer>(lexer: &mut L, table: &CatCodeTable, terminator: &str) {
    lexer.mark_end();
    loop {
        if matches_class_pattern(lexer, table, terminator) {
            return;
        }
        while let Some(c) = lexer.lookahead() {
            lexer.advance();
            if is_end_of_line(table, c) {
                break;
            }
        }
        lexer.mark_end();
        if lexer.lookahead().is_none() {
            return;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::StrLexer;

    #[test]
    fn inline_span() {
        let table = CatCodeTable::default();
        let mut lexer = StrLexer::new("|a b|c");
        assert_eq!(scan_start_delimiter(&mut lexer, &table), Some('|'));
        assert_eq!(lexer.finish_token(), 0..1);
        scan_verb_body(&mut lexer, &table, '|' as u32);
        assert_eq!(lexer.finish_token(), 1..4);
        assert!(scan_end_delimiter(&mut lexer, &table, '|' as u32));
        assert_eq!(lexer.finish_token(), 4..5);
    }

    #[test]
    fn inline_span_closed_by_end_of_line() {
        let table = CatCodeTable::default();
        let mut lexer = StrLexer::new("+ab\ncd+");
        assert_eq!(scan_start_delimiter(&mut lexer, &table), Some('+'));
        lexer.finish_token();
        scan_verb_body(&mut lexer, &table, '+' as u32);
        assert_eq!(lexer.finish_token(), 1..3);
        assert!(scan_end_delimiter(&mut lexer, &table, '+' as u32));
        assert_eq!(lexer.finish_token(), 3..3);
        assert_eq!(lexer.lookahead(), Some('\n'));
    }

    #[test]
    fn inline_span_closed_by_end_of_input() {
        let table = CatCodeTable::default();
        let mut lexer = StrLexer::new("ab");
        scan_verb_body(&mut lexer, &table, '|' as u32);
        assert_eq!(lexer.finish_token(), 0..2);
        assert!(scan_end_delimiter(&mut lexer, &table, '|' as u32));
        assert_eq!(lexer.finish_token(), 2..2);
    }

    #[test]
    fn end_delimiter_elsewhere() {
        let table = CatCodeTable::default();
        let mut lexer = StrLexer::new("x|");
        assert!(!scan_end_delimiter(&mut lexer, &table, '|' as u32));
    }

    #[test]
    fn no_start_delimiter_at_end_of_line() {
        let table = CatCodeTable::default();
        assert_eq!(scan_start_delimiter(&mut StrLexer::new("\nx"), &table), None);
        assert_eq!(scan_start_delimiter(&mut StrLexer::new(""), &table), None);
        assert_eq!(scan_start_delimiter(&mut StrLexer::new(" x "), &table), Some(' '));
    }

    macro_rules! environment_body_tests {
        ( $( ($name: ident, $input: expr, $want: expr $(,)? ), )+ ) => {
            $(
            #[test]
            fn $name() {
                let table = CatCodeTable::default();
                let mut lexer = StrLexer::new($input);
                scan_environment_body(&mut lexer, &table, " \\end {verbatim}");
                let span = lexer.finish_token();
                assert_eq!(&$input[span], $want);
            }
            )+
        };
    }

    environment_body_tests!(
        (empty_body, "\\end{verbatim}", ""),
        (one_line, "\nx = \\y{}\n\\end{verbatim}", "\nx = \\y{}\n"),
        (indented_terminator, "a\n  \\end {verbatim}", "a\n"),
        (terminator_mid_line, "a \\end{verbatim}\n\\end{verbatim}", "a \\end{verbatim}\n"),
        (other_environment_end, "a\n\\end{itemize}\n\\end{verbatim}", "a\n\\end{itemize}\n"),
        (unterminated, "a\nb\n", "a\nb\n"),
        (unterminated_without_final_newline, "a\nb", "a\nb"),
    );
}
