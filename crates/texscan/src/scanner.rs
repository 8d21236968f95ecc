//! The scanner: the mode state machine that turns lookahead into tokens.
//!
//! The scanner is driven by a grammar that, at each position of the input,
//!     knows which token kinds it could accept.
//! It asks for a token by calling [Scanner::scan] with the set of admissible kinds.
//! The scanner returns at most one token, of an admissible kind, and may change its
//!     own state (the mode, the classification table) while doing so.
//!
//! The scanner has four modes.
//!
//! - [Mode::Normal]: ordinary markup.
//! - [Mode::ControlSequence]: an escape character followed by a letter has been scanned
//!     and the rest of the control sequence name is next.
//! - [Mode::Escaped]: an escape character followed by a non-letter has been scanned
//!     and that single character is next.
//! - [Mode::Verbatim]: inside an inline verbatim span like `\verb|x|`.
//!
//! When no token can be produced the lexer is rewound and the scanner state is not changed,
//!     so that the grammar can try something else.
use crate::catcode::Category;
use crate::comment;
use crate::directive::{Config, Directive, SymbolClass};
use crate::kind::{KindSet, TokenKind};
use crate::lexer::{Lexer, StrLexer, Token};
use crate::snapshot::{Snapshot, SnapshotError};
use crate::table::{CatCodeTable, Scope};
use crate::verbatim;
use log::{debug, trace, warn};
use std::sync::Arc;

/// Mode of the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Mode {
    #[default]
    Normal = 0,
    ControlSequence = 1,
    Escaped = 2,
    Verbatim = 3,
}

impl TryFrom<u8> for Mode {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Ok(match value {
            0 => Mode::Normal,
            1 => Mode::ControlSequence,
            2 => Mode::Escaped,
            3 => Mode::Verbatim,
            _ => return Err(value),
        })
    }
}

/// Mutable state of the scanner.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct State {
    pub mode: Mode,
    /// Code point that closes the current inline verbatim span; 0 when there is none.
    pub pending_delimiter: u32,
    pub table: CatCodeTable,
}

impl State {
    fn from_snapshot(snapshot: &Snapshot) -> State {
        State {
            mode: snapshot.mode,
            pending_delimiter: snapshot.pending_delimiter,
            table: snapshot.table(),
        }
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot::capture(self.mode, self.pending_delimiter, &self.table)
    }
}

/// The scanner.
///
/// See the module documentation for an overview.
#[derive(Debug, Clone)]
pub struct Scanner {
    state: State,
    config: Arc<Config>,
}

impl Default for Scanner {
    fn default() -> Self {
        Scanner::new()
    }
}

impl Scanner {
    /// Creates a scanner with the default configuration.
    pub fn new() -> Scanner {
        Scanner::with_config(Arc::new(Config::default()))
    }

    pub fn with_config(config: Arc<Config>) -> Scanner {
        Scanner {
            state: Default::default(),
            config,
        }
    }

    pub fn mode(&self) -> Mode {
        self.state.mode
    }

    pub fn pending_delimiter(&self) -> u32 {
        self.state.pending_delimiter
    }

    pub fn table(&self) -> &CatCodeTable {
        &self.state.table
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Returns the scanner to its initial state.
    pub fn reset(&mut self) {
        self.state = Default::default();
    }

    /// Scans the next token.
    ///
    /// Returns `None` if no admissible token starts at the current position.
    /// In this case the lexer is rewound to where the token would have started
    ///     and the scanner state is unchanged.
    pub fn scan<L: Lexer>(&mut self, lexer: &mut L, admissible: &KindSet) -> Option<TokenKind> {
        let kind = match self.state.mode {
            Mode::Normal => self.scan_normal_mode(lexer, admissible),
            Mode::ControlSequence => self.scan_control_sequence_mode(lexer, admissible),
            Mode::Escaped => self.scan_escaped_mode(lexer, admissible),
            Mode::Verbatim => self.scan_verbatim_mode(lexer, admissible),
        };
        match kind {
            Some(kind) => trace!("scanned {kind} (mode now {:?})", self.state.mode),
            None => lexer.rewind(),
        }
        kind
    }

    /// Scans the next token of a string and returns it with its span.
    pub fn next_token(
        &mut self,
        lexer: &mut StrLexer,
        admissible: &KindSet,
    ) -> Option<Token<TokenKind>> {
        let kind = self.scan(lexer, admissible)?;
        Some(Token {
            kind,
            span: lexer.finish_token(),
        })
    }

    /// Applies the classification edits of a directive and returns its symbol class.
    pub fn apply_directive(&mut self, directive: &Directive) -> SymbolClass {
        if directive.has_edits() {
            debug!(
                "applying {} {:?} classification edits for {}",
                directive.edits.len(),
                directive.scope,
                directive.class
            );
            self.state.table.assign_all(&directive.edits, directive.scope);
        }
        directive.class
    }

    /// Applies the directive registered for a control sequence in the command directory.
    ///
    /// The name does not include the escape character.
    /// Returns the symbol class of the directive, or `None` if the name is unknown.
    pub fn apply_control_sequence(&mut self, name: &str) -> Option<SymbolClass> {
        let config = Arc::clone(&self.config);
        let directive = config.commands().get(name)?;
        Some(self.apply_directive(directive))
    }

    /// Serializes the scanner state.
    pub fn serialize(&self) -> Vec<u8> {
        let mut b = vec![];
        self.state.snapshot().encode(&mut b);
        b
    }

    /// Serializes the scanner state into a fixed buffer and returns the number of bytes written.
    ///
    /// If the state does not fit in the buffer or in [SNAPSHOT_CAPACITY](crate::snapshot::SNAPSHOT_CAPACITY)
    ///     bytes, nothing is written and 0 is returned.
    /// Restoring from 0 bytes gives a fresh scanner.
    pub fn serialize_into(&self, buffer: &mut [u8]) -> usize {
        match self.state.snapshot().encode_into(buffer) {
            Ok(n) => n,
            Err(err) => {
                warn!("discarding scanner state: {err}");
                0
            }
        }
    }

    /// Restores a state written by [Scanner::serialize] or [Scanner::serialize_into].
    ///
    /// Empty input resets the scanner.
    /// So does malformed input, after logging a warning.
    pub fn restore(&mut self, b: &[u8]) {
        if b.is_empty() {
            self.reset();
            return;
        }
        match self.try_restore(b) {
            Ok(()) => {}
            Err(err) => {
                warn!("failed to restore scanner state, resetting: {err}");
                self.reset();
            }
        }
    }

    fn try_restore(&mut self, b: &[u8]) -> Result<(), SnapshotError> {
        let snapshot = Snapshot::decode(b)?;
        self.state = State::from_snapshot(&snapshot);
        Ok(())
    }

    fn set_mode(&mut self, mode: Mode) {
        if self.state.mode != mode {
            debug!("mode {:?} -> {:?}", self.state.mode, mode);
            self.state.mode = mode;
        }
    }

    fn scan_normal_mode<L: Lexer>(
        &mut self,
        lexer: &mut L,
        admissible: &KindSet,
    ) -> Option<TokenKind> {
        if let Some(kind) = self.scan_profile(lexer, admissible) {
            return Some(kind);
        }
        if admissible.contains(TokenKind::VerbDelim) {
            return self.scan_start_delimiter(lexer, TokenKind::VerbDelim);
        }
        if let Some(kind) = self.scan_environment_body(lexer, admissible) {
            return Some(kind);
        }
        if admissible.contains(TokenKind::ScopeBegin) {
            self.state.table.push();
            lexer.mark_end();
            return Some(TokenKind::ScopeBegin);
        }
        if admissible.contains(TokenKind::ScopeEnd) {
            // With no open group the other admissible kinds are still tried.
            match self.state.table.pop() {
                Ok(()) => {
                    lexer.mark_end();
                    return Some(TokenKind::ScopeEnd);
                }
                Err(err) => warn!("ignoring scope end: {err}"),
            }
        }
        let Some(c) = lexer.lookahead() else {
            return if admissible.contains(TokenKind::Exit) {
                lexer.mark_end();
                Some(TokenKind::Exit)
            } else {
                None
            };
        };
        let single = |lexer: &mut L, kind: TokenKind| {
            if !admissible.contains(kind) {
                return None;
            }
            lexer.advance();
            lexer.mark_end();
            Some(kind)
        };
        match self.state.table.classify_char(c) {
            Category::Escape => self.scan_escape(lexer, admissible),
            Category::BeginGroup => single(lexer, TokenKind::BeginGroup),
            Category::EndGroup => {
                if admissible.contains(TokenKind::Exit) {
                    lexer.mark_end();
                    Some(TokenKind::Exit)
                } else {
                    single(lexer, TokenKind::EndGroup)
                }
            }
            Category::MathShift => single(lexer, TokenKind::MathShift),
            Category::AlignmentTab => single(lexer, TokenKind::AlignmentTab),
            Category::Superscript => single(lexer, TokenKind::Superscript),
            Category::Subscript => single(lexer, TokenKind::Subscript),
            Category::Active => single(lexer, TokenKind::ActiveChar),
            Category::EndOfLine => {
                if admissible.contains(TokenKind::EndOfLine) {
                    single(lexer, TokenKind::EndOfLine)
                } else if admissible.contains(TokenKind::Space) {
                    self.scan_space(lexer)
                } else {
                    None
                }
            }
            Category::Parameter => {
                if !admissible.contains(TokenKind::ParameterChar) {
                    return None;
                }
                self.scan_run(lexer, Category::Parameter);
                Some(TokenKind::ParameterChar)
            }
            Category::Space => {
                if !admissible.contains(TokenKind::Space) {
                    return None;
                }
                self.scan_space(lexer)
            }
            Category::Comment => {
                if !admissible.contains(TokenKind::Comment) {
                    return None;
                }
                Some(comment::scan_comment(lexer, &self.state.table))
            }
            Category::VerbatimDelimiter => {
                if !admissible.contains(TokenKind::ShortVerbDelim) {
                    return None;
                }
                self.scan_start_delimiter(lexer, TokenKind::ShortVerbDelim)
            }
            Category::Ignored | Category::Letter | Category::Other | Category::Invalid => None,
        }
    }

    fn scan_profile<L: Lexer>(&mut self, lexer: &mut L, admissible: &KindSet) -> Option<TokenKind> {
        let config = Arc::clone(&self.config);
        let (kind, directive) = config
            .profiles()
            .iter()
            .find(|(kind, _)| admissible.contains(*kind))?;
        debug!("installing classification profile {kind}");
        self.apply_directive(directive);
        lexer.mark_end();
        Some(*kind)
    }

    fn scan_environment_body<L: Lexer>(
        &mut self,
        lexer: &mut L,
        admissible: &KindSet,
    ) -> Option<TokenKind> {
        let environment = self
            .config
            .verbatim_environments()
            .iter()
            .find(|environment| admissible.contains(environment.kind))?;
        verbatim::scan_environment_body(lexer, &self.state.table, &environment.terminator);
        Some(environment.kind)
    }

    fn scan_start_delimiter<L: Lexer>(&mut self, lexer: &mut L, kind: TokenKind) -> Option<TokenKind> {
        let delimiter = verbatim::scan_start_delimiter(lexer, &self.state.table)?;
        self.state.pending_delimiter = delimiter as u32;
        self.set_mode(Mode::Verbatim);
        Some(kind)
    }

    fn scan_escape<L: Lexer>(&mut self, lexer: &mut L, admissible: &KindSet) -> Option<TokenKind> {
        if admissible.contains(TokenKind::MakeShortVerbDelim) {
            lexer.advance();
            if let Some(c) = lexer.lookahead() {
                debug!("declaring {c:?} a short verbatim delimiter");
                self.state
                    .table
                    .insert(c as u32, Category::VerbatimDelimiter, Scope::Global);
                lexer.advance();
            }
            lexer.mark_end();
            return Some(TokenKind::MakeShortVerbDelim);
        }
        if admissible.contains(TokenKind::DeleteShortVerbDelim) {
            lexer.advance();
            if let Some(c) = lexer.lookahead() {
                debug!("removing short verbatim delimiter {c:?}");
                self.state.table.erase(c as u32, Scope::Global);
                lexer.advance();
            }
            lexer.mark_end();
            return Some(TokenKind::DeleteShortVerbDelim);
        }
        lexer.advance();
        let next_is_letter = matches!(
            lexer.lookahead(),
            Some(c) if self.state.table.classify_char(c) == Category::Letter
        );
        let (kind, mode) = if next_is_letter {
            (TokenKind::ControlSequenceBegin, Mode::ControlSequence)
        } else {
            (TokenKind::EscapedBegin, Mode::Escaped)
        };
        if !admissible.contains(kind) {
            return None;
        }
        lexer.mark_end();
        self.set_mode(mode);
        Some(kind)
    }

    fn scan_run<L: Lexer>(&self, lexer: &mut L, category: Category) {
        loop {
            lexer.advance();
            match lexer.lookahead() {
                Some(c) if self.state.table.classify_char(c) == category => {}
                _ => break,
            }
        }
        lexer.mark_end();
    }

    /// Scans spaces containing at most one end of line; two end of lines form a paragraph break.
    fn scan_space<L: Lexer>(&self, lexer: &mut L) -> Option<TokenKind> {
        let mut seen_end_of_line = false;
        while let Some(c) = lexer.lookahead() {
            match self.state.table.classify_char(c) {
                Category::Space => {}
                Category::EndOfLine => {
                    if seen_end_of_line {
                        return None;
                    }
                    seen_end_of_line = true;
                }
                _ => break,
            }
            lexer.advance();
        }
        lexer.mark_end();
        Some(TokenKind::Space)
    }

    fn scan_control_sequence_mode<L: Lexer>(
        &mut self,
        lexer: &mut L,
        admissible: &KindSet,
    ) -> Option<TokenKind> {
        if !admissible.contains(TokenKind::ControlSequenceEnd) {
            return None;
        }
        while let Some(c) = lexer.lookahead() {
            if self.state.table.classify_char(c) != Category::Letter {
                break;
            }
            lexer.advance();
        }
        lexer.mark_end();
        self.set_mode(Mode::Normal);
        Some(TokenKind::ControlSequenceEnd)
    }

    fn scan_escaped_mode<L: Lexer>(
        &mut self,
        lexer: &mut L,
        admissible: &KindSet,
    ) -> Option<TokenKind> {
        if !admissible.contains(TokenKind::EscapedEnd) {
            return None;
        }
        lexer.advance();
        lexer.mark_end();
        self.set_mode(Mode::Normal);
        Some(TokenKind::EscapedEnd)
    }

    fn scan_verbatim_mode<L: Lexer>(
        &mut self,
        lexer: &mut L,
        admissible: &KindSet,
    ) -> Option<TokenKind> {
        let delimiter = self.state.pending_delimiter;
        if admissible.contains(TokenKind::VerbDelim) {
            if !verbatim::scan_end_delimiter(lexer, &self.state.table, delimiter) {
                return None;
            }
            self.state.pending_delimiter = 0;
            self.set_mode(Mode::Normal);
            return Some(TokenKind::VerbDelim);
        }
        if admissible.contains(TokenKind::VerbBody) {
            verbatim::scan_verb_body(lexer, &self.state.table, delimiter);
            return Some(TokenKind::VerbBody);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directive::{CommandDirectory, AT_LETTER};
    use crate::snapshot::SNAPSHOT_CAPACITY;
    use TokenKind::*;

    fn kinds<const N: usize>(kinds: [TokenKind; N]) -> KindSet {
        KindSet::from(kinds)
    }

    /// Runs a sequence of scans, each with a single admissible kind set,
    ///     and checks the kind and text of each token.
    fn run(
        scanner: &mut Scanner,
        input: &str,
        steps: &[(KindSet, Option<(TokenKind, &str)>)],
    ) {
        let mut lexer = StrLexer::new(input);
        for (i, (admissible, want)) in steps.iter().enumerate() {
            let got = scanner
                .next_token(&mut lexer, admissible)
                .map(|token| (token.kind, &input[token.span]));
            similar_asserts::assert_eq!(got, *want, "step {}", i);
        }
    }

    macro_rules! scan_tests {
        ( $( ($name: ident, $input: expr, [ $( ( $admissible: expr, $want: expr ) ),* $(,)? ] $(,)? ), )+ ) => {
            $(
            #[test]
            fn $name() {
                let mut scanner = Scanner::new();
                run(&mut scanner, $input, &[ $( ($admissible, $want) ),* ]);
            }
            )+
        };
    }

    scan_tests!(
        (
            control_sequence,
            "\\section{",
            [
                (KindSet::STRUCTURAL, Some((ControlSequenceBegin, "\\"))),
                (kinds([ControlSequenceEnd]), Some((ControlSequenceEnd, "section"))),
                (KindSet::STRUCTURAL, Some((BeginGroup, "{"))),
            ]
        ),
        (
            escaped_character,
            "\\{x",
            [
                (KindSet::STRUCTURAL, Some((EscapedBegin, "\\"))),
                (kinds([EscapedEnd]), Some((EscapedEnd, "{"))),
            ]
        ),
        (
            escaped_character_at_end_of_input,
            "\\",
            [
                (KindSet::STRUCTURAL, Some((EscapedBegin, "\\"))),
                (kinds([EscapedEnd]), Some((EscapedEnd, ""))),
                (kinds([Exit]), Some((Exit, ""))),
            ]
        ),
        (
            end_group_or_exit,
            "}}",
            [
                (kinds([EndGroup]), Some((EndGroup, "}"))),
                (kinds([EndGroup, Exit]), Some((Exit, ""))),
            ]
        ),
        (
            single_character_tokens,
            "$&^_~",
            [
                (KindSet::STRUCTURAL, Some((MathShift, "$"))),
                (KindSet::STRUCTURAL, Some((AlignmentTab, "&"))),
                (KindSet::STRUCTURAL, Some((Superscript, "^"))),
                (KindSet::STRUCTURAL, Some((Subscript, "_"))),
                (KindSet::STRUCTURAL, Some((ActiveChar, "~"))),
            ]
        ),
        (
            parameter_run,
            "###1",
            [(KindSet::STRUCTURAL, Some((ParameterChar, "###")))]
        ),
        (
            space_with_one_end_of_line,
            " \t\n  x",
            [(KindSet::STRUCTURAL, Some((Space, " \t\n  ")))]
        ),
        (
            space_rejects_paragraph_break,
            " \n \n",
            [
                (KindSet::STRUCTURAL, None),
                (kinds([EndOfLine, Space]), None),
            ]
        ),
        (
            end_of_line_token,
            "\n\nx",
            [
                (kinds([EndOfLine]), Some((EndOfLine, "\n"))),
                (kinds([EndOfLine]), Some((EndOfLine, "\n"))),
            ]
        ),
        (
            end_of_line_as_space,
            "\nx",
            [(KindSet::STRUCTURAL, Some((Space, "\n")))]
        ),
        (
            inadmissible_character,
            "x",
            [(KindSet::STRUCTURAL, None)]
        ),
        (
            comment_kinds,
            "% !TEX root = a.tex\n%:tag\n% x",
            [
                (KindSet::STRUCTURAL, Some((MagicComment, "% !TEX root = a.tex\n"))),
                (KindSet::STRUCTURAL, Some((TagComment, "%:tag\n"))),
                (KindSet::STRUCTURAL, Some((Comment, "% x"))),
            ]
        ),
        (
            inline_verbatim,
            "|a%b|c",
            [
                (kinds([VerbDelim]), Some((VerbDelim, "|"))),
                (kinds([VerbBody]), Some((VerbBody, "a%b"))),
                (kinds([VerbDelim]), Some((VerbDelim, "|"))),
            ]
        ),
        (
            inline_verbatim_empty_body,
            "++",
            [
                (kinds([VerbDelim]), Some((VerbDelim, "+"))),
                (kinds([VerbBody]), Some((VerbBody, ""))),
                (kinds([VerbDelim]), Some((VerbDelim, "+"))),
            ]
        ),
        (
            inline_verbatim_unterminated,
            "|ab\ncd",
            [
                (kinds([VerbDelim]), Some((VerbDelim, "|"))),
                (kinds([VerbBody]), Some((VerbBody, "ab"))),
                (kinds([VerbDelim]), Some((VerbDelim, ""))),
                (kinds([EndOfLine]), Some((EndOfLine, "\n"))),
            ]
        ),
        (
            inline_verbatim_needs_delimiter,
            "\nx",
            [
                (kinds([VerbDelim, Space]), None),
                (kinds([Space]), Some((Space, "\n"))),
            ]
        ),
        (
            environment_body,
            "\nint x;\n\\end{lstlisting}",
            [
                (kinds([LstlistingBody, MintedBody]), Some((LstlistingBody, "\nint x;\n"))),
                (KindSet::STRUCTURAL, Some((ControlSequenceBegin, "\\"))),
            ]
        ),
        (
            environment_body_priority,
            "x\n\\end{verbatim}",
            [(kinds([VerbatimStarBody, VerbatimBody]), Some((VerbatimBody, "x\n")))]
        ),
        (
            environment_body_unterminated,
            "x\n\\end{verbatim*}\n",
            [(kinds([VerbatimBody]), Some((VerbatimBody, "x\n\\end{verbatim*}\n")))]
        ),
        (
            exit_at_end_of_input,
            "",
            [
                (KindSet::STRUCTURAL, None),
                (kinds([Exit]), Some((Exit, ""))),
            ]
        ),
    );

    #[test]
    fn scope_restores_classification() {
        let mut scanner = Scanner::new();
        run(
            &mut scanner,
            "@",
            &[
                (kinds([ScopeBegin]), Some((ScopeBegin, ""))),
                (kinds([AtLetterProfile]), Some((AtLetterProfile, ""))),
            ],
        );
        assert_eq!(scanner.table().classify('@' as u32), Category::Letter);
        run(&mut scanner, "", &[(kinds([ScopeEnd]), Some((ScopeEnd, "")))]);
        assert_eq!(scanner.table().classify('@' as u32), Category::Other);
        assert_eq!(scanner.table(), &CatCodeTable::default());
    }

    #[test]
    fn global_profile_survives_scope_end() {
        let mut scanner = Scanner::new();
        run(
            &mut scanner,
            "|x|",
            &[
                (kinds([ScopeBegin]), Some((ScopeBegin, ""))),
                (kinds([PipeVerbDelimiterProfile]), Some((PipeVerbDelimiterProfile, ""))),
                (kinds([ScopeEnd]), Some((ScopeEnd, ""))),
                (KindSet::STRUCTURAL, Some((ShortVerbDelim, "|"))),
                (kinds([VerbBody]), Some((VerbBody, "x"))),
                (kinds([VerbDelim]), Some((VerbDelim, "|"))),
            ],
        );
        assert_eq!(scanner.mode(), Mode::Normal);
    }

    #[test]
    fn scope_end_without_scope() {
        let mut scanner = Scanner::new();
        run(&mut scanner, "x", &[(kinds([ScopeEnd]), None)]);
        assert_eq!(scanner.state(), &State::default());
    }

    #[test]
    fn scope_end_without_scope_falls_through() {
        let mut scanner = Scanner::new();
        run(
            &mut scanner,
            "{",
            &[(kinds([ScopeEnd, BeginGroup]), Some((BeginGroup, "{")))],
        );
        assert_eq!(scanner.state(), &State::default());
    }

    #[test]
    fn at_other_reverts_at_letter() {
        let mut scanner = Scanner::new();
        run(
            &mut scanner,
            "",
            &[(kinds([AtLetterProfile]), Some((AtLetterProfile, "")))],
        );
        assert_eq!(scanner.table().classify('@' as u32), Category::Letter);
        run(
            &mut scanner,
            "",
            &[(kinds([AtOtherProfile]), Some((AtOtherProfile, "")))],
        );
        assert_eq!(scanner.table().classify('@' as u32), Category::Other);
        assert_eq!(scanner.table(), &CatCodeTable::default());
    }

    #[test]
    fn short_verb_declare_and_delete() {
        let mut scanner = Scanner::new();
        run(
            &mut scanner,
            "\\+ +a+ \\+ +",
            &[
                (kinds([MakeShortVerbDelim]), Some((MakeShortVerbDelim, "\\+"))),
                (KindSet::STRUCTURAL, Some((Space, " "))),
                (KindSet::STRUCTURAL, Some((ShortVerbDelim, "+"))),
                (kinds([VerbBody]), Some((VerbBody, "a"))),
                (kinds([VerbDelim]), Some((VerbDelim, "+"))),
                (KindSet::STRUCTURAL, Some((Space, " "))),
                (kinds([DeleteShortVerbDelim]), Some((DeleteShortVerbDelim, "\\+"))),
                (KindSet::STRUCTURAL, Some((Space, " "))),
                (KindSet::STRUCTURAL, None),
            ],
        );
        assert_eq!(scanner.table(), &CatCodeTable::default());
    }

    #[test]
    fn no_match_leaves_state_untouched() {
        let mut scanner = Scanner::new();
        let mut lexer = StrLexer::new("\\abc");
        scanner.scan(&mut lexer, &KindSet::STRUCTURAL);
        lexer.finish_token();
        let before = scanner.state().clone();
        for admissible in [KindSet::EMPTY, kinds([EscapedEnd]), KindSet::STRUCTURAL] {
            assert_eq!(scanner.scan(&mut lexer, &admissible), None);
            assert_eq!(lexer.position(), 1);
            assert_eq!(scanner.state(), &before);
        }
    }

    #[test]
    fn escape_requires_matching_kind() {
        let mut scanner = Scanner::new();
        run(
            &mut scanner,
            "\\a",
            &[
                (kinds([EscapedBegin]), None),
                (kinds([ControlSequenceBegin]), Some((ControlSequenceBegin, "\\"))),
            ],
        );
    }

    #[test]
    fn control_sequence_name_follows_classification() {
        let mut scanner = Scanner::new();
        run(
            &mut scanner,
            "\\@gobble",
            &[
                (kinds([AtLetterProfile]), Some((AtLetterProfile, ""))),
                (KindSet::STRUCTURAL, Some((ControlSequenceBegin, "\\"))),
                (kinds([ControlSequenceEnd]), Some((ControlSequenceEnd, "@gobble"))),
            ],
        );
    }

    #[test]
    fn apply_control_sequence() {
        let commands: CommandDirectory = [
            ("makeatletter", Directive::local(SymbolClass::GENERIC, AT_LETTER)),
            ("label", Directive::plain(SymbolClass::new("label"))),
        ]
        .into_iter()
        .collect();
        let config = Config::default().with_command_directory(commands);
        let mut scanner = Scanner::with_config(Arc::new(config));
        assert_eq!(
            scanner.apply_control_sequence("label"),
            Some(SymbolClass::new("label"))
        );
        assert_eq!(scanner.table(), &CatCodeTable::default());
        assert_eq!(
            scanner.apply_control_sequence("makeatletter"),
            Some(SymbolClass::GENERIC)
        );
        assert_eq!(scanner.table().classify('@' as u32), Category::Letter);
        assert_eq!(scanner.apply_control_sequence("unknown"), None);
    }

    #[test]
    fn serialize_and_restore() {
        let mut scanner = Scanner::new();
        run(
            &mut scanner,
            "|a",
            &[
                (kinds([ScopeBegin]), Some((ScopeBegin, ""))),
                (kinds([ExplBeginProfile]), Some((ExplBeginProfile, ""))),
                (kinds([VerbDelim]), Some((VerbDelim, "|"))),
            ],
        );
        let b = scanner.serialize();
        let mut restored = Scanner::new();
        restored.restore(&b);
        assert_eq!(restored.state(), scanner.state());
        assert_eq!(restored.mode(), Mode::Verbatim);
        assert_eq!(restored.pending_delimiter(), '|' as u32);
        run(
            &mut restored,
            "",
            &[
                (kinds([VerbDelim]), Some((VerbDelim, ""))),
                (kinds([ScopeEnd]), Some((ScopeEnd, ""))),
            ],
        );
        assert_eq!(restored.table(), &CatCodeTable::default());
    }

    #[test]
    fn restore_empty_or_corrupt() {
        let mut scanner = Scanner::new();
        run(&mut scanner, "", &[(kinds([ScopeBegin]), Some((ScopeBegin, "")))]);
        let mut b = scanner.serialize();
        scanner.restore(&[]);
        assert_eq!(scanner.state(), &State::default());

        run(&mut scanner, "", &[(kinds([AtLetterProfile]), Some((AtLetterProfile, "")))]);
        b.push(0);
        scanner.restore(&b);
        assert_eq!(scanner.state(), &State::default());

        run(&mut scanner, "", &[(kinds([AtLetterProfile]), Some((AtLetterProfile, "")))]);
        scanner.restore(&[9, 0, 0, 0, 0, 1, 0]);
        assert_eq!(scanner.state(), &State::default());
    }

    #[test]
    fn serialize_into_bounded_buffer() {
        let mut scanner = Scanner::new();
        let mut buffer = [0_u8; SNAPSHOT_CAPACITY];
        let n = scanner.serialize_into(&mut buffer);
        assert!(n > 0);
        let mut restored = Scanner::new();
        restored.restore(&buffer[..n]);
        assert_eq!(restored.state(), scanner.state());

        for c in 0x400_u32..0x500 {
            let category = if c % 2 == 0 { Category::Letter } else { Category::Active };
            scanner.state.table.insert(c, category, Scope::Global);
        }
        assert_eq!(scanner.serialize_into(&mut buffer), 0);
        restored.restore(&buffer[..0]);
        assert_eq!(restored.state(), &State::default());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_round_trip() {
        let mode: Mode = serde_json::from_str(&serde_json::to_string(&Mode::Verbatim).unwrap()).unwrap();
        assert_eq!(mode, Mode::Verbatim);
        let set = KindSet::from([VerbBody, VerbDelim]);
        let got: KindSet = serde_json::from_str(&serde_json::to_string(&set).unwrap()).unwrap();
        assert_eq!(got, set);
    }

    #[test]
    fn scanner_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Scanner>();
    }
}
