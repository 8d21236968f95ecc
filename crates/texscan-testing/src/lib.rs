/*!
Texscan unit testing library

This is a crate for writing tests for the Texscan lexing engine.
The engine is built to be driven by a grammar, so to test it end to end
    this crate provides a [Driver] that plays the role of a small LaTeX grammar.
The driver knows just enough LaTeX to exercise every part of the engine:

- Groups `{...}` open and close classification scopes.
- The names of control sequences are looked up in the command directory
    and their classification edits are applied.
    The default configuration has an empty command directory;
    pass a [TestOption::Config] with a populated directory to test command handling.
- `\verb` is followed by an inline verbatim span, and the arguments of
    `\MakeShortVerb` and `\DeleteShortVerb` declare and remove short verbatim delimiters.
- `\begin{NAME}` for a verbatim environment is followed by the environment body.
    The `alltt` and `luacode` environments install their classification profiles in a new scope.
- Characters the engine produces no token for are consumed one at a time as text,
    the way a grammar consumes words.

## Test types

- Lexing tests: the input lexes to the provided lexemes.
    Lexemes are written one per line, as the token kind (or `Text`) followed by the
    quoted text of the lexeme; see [render].

- Resumption tests: lexing the input while snapshotting the engine and restoring it into a
    fresh scanner after every token gives the same lexemes as lexing it in one go.

Both kinds of tests also check that the lexemes cover the input exactly.

Tests are usually generated with the [test_suite] macro:

```
use texscan_testing::*;

test_suite![
    lexing_tests(
        (comment, "% arara: pdflatex", r#"
            AraraComment "% arara: pdflatex"
            Exit ""
        "#),
    ),
    resumption_tests(
        (verb, r"\verb|x|"),
    ),
];
```
*/

use std::collections::VecDeque;
use std::sync::Arc;
use texscan::catcode::Category;
use texscan::directive::Config;
use texscan::kind::{KindSet, TokenKind};
use texscan::lexer::StrLexer;
use texscan::scanner::{Mode, Scanner};

/// A piece of the input: either a token produced by the engine or text consumed by the driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexeme {
    /// The kind of the token, or `None` for text.
    pub kind: Option<TokenKind>,
    pub text: String,
}

/// Option passed to a test runner.
#[derive(Clone)]
pub enum TestOption {
    /// The engine configuration to use.
    ///
    /// Overrides previous `Config` options.
    /// The default is [Config::default], which has an empty command directory.
    Config(Arc<Config>),
}

struct ResolvedOptions {
    config: Arc<Config>,
}

impl ResolvedOptions {
    fn new(options: &[TestOption]) -> Self {
        let mut resolved = ResolvedOptions {
            config: Arc::new(Config::default()),
        };
        for option in options {
            match option {
                TestOption::Config(config) => resolved.config = Arc::clone(config),
            }
        }
        resolved
    }
}

/// The argument of `\begin` or `\end`, while it is being read.
#[derive(Debug)]
struct EnvironmentArgument {
    begin: bool,
    opened: bool,
    name: String,
}

/// A driver that emulates a small LaTeX grammar on top of a [Scanner].
pub struct Driver {
    scanner: Scanner,
    resume_after_every_token: bool,
    // Kinds that must be scanned next, in order.
    forced: VecDeque<TokenKind>,
    // A kind that is admissible in addition to the structural kinds, until it is scanned.
    pending: Option<TokenKind>,
    environment_argument: Option<EnvironmentArgument>,
    verb_body_scanned: bool,
    open_groups: usize,
    scope_closed: bool,
}

impl Driver {
    pub fn new(config: Arc<Config>) -> Driver {
        Driver {
            scanner: Scanner::with_config(config),
            resume_after_every_token: false,
            forced: VecDeque::new(),
            pending: None,
            environment_argument: None,
            verb_body_scanned: false,
            open_groups: 0,
            scope_closed: false,
        }
    }

    /// Snapshot the scanner and restore it into a fresh scanner after every token.
    pub fn resume_after_every_token(mut self, resume: bool) -> Driver {
        self.resume_after_every_token = resume;
        self
    }

    pub fn scanner(&self) -> &Scanner {
        &self.scanner
    }

    /// Lexes the input.
    pub fn lex(&mut self, input: &str) -> Vec<Lexeme> {
        let mut lexer = StrLexer::new(input);
        let mut lexemes: Vec<Lexeme> = vec![];
        loop {
            self.settle(&lexer);
            let admissible = self.admissible(&lexer);
            match self.scanner.next_token(&mut lexer, &admissible) {
                Some(token) => {
                    let text = &input[token.span];
                    self.observe(token.kind, text);
                    lexemes.push(Lexeme {
                        kind: Some(token.kind),
                        text: text.into(),
                    });
                    if token.kind == TokenKind::Exit {
                        break;
                    }
                    if self.resume_after_every_token {
                        self.resume();
                    }
                }
                None => {
                    if let Some(kind) = self.forced.pop_front() {
                        log::debug!("forced token {kind} did not match");
                        continue;
                    }
                    let Some(c) = lexer.skip() else {
                        break;
                    };
                    if let Some(argument) = &mut self.environment_argument {
                        argument.name.push(c);
                    }
                    match lexemes.last_mut() {
                        Some(Lexeme { kind: None, text }) => text.push(c),
                        _ => lexemes.push(Lexeme {
                            kind: None,
                            text: c.into(),
                        }),
                    }
                }
            }
        }
        lexemes
    }

    fn resume(&mut self) {
        let b = self.scanner.serialize();
        let mut scanner = Scanner::with_config(Arc::clone(self.scanner.config()));
        scanner.restore(&b);
        assert_eq!(
            scanner.state(),
            self.scanner.state(),
            "restoring a snapshot changed the scanner state"
        );
        self.scanner = scanner;
    }

    fn category(&self, lexer: &StrLexer) -> Option<Category> {
        use texscan::lexer::Lexer;
        lexer
            .lookahead()
            .map(|c| self.scanner.table().classify_char(c))
    }

    // Drops a `\begin` or `\end` that is not followed by a braced argument.
    fn settle(&mut self, lexer: &StrLexer) {
        let category = self.category(lexer);
        if let Some(argument) = &self.environment_argument {
            if !argument.opened
                && self.scanner.mode() == Mode::Normal
                && category != Some(Category::BeginGroup)
            {
                self.environment_argument = None;
            }
        }
    }

    fn admissible(&self, lexer: &StrLexer) -> KindSet {
        if let Some(kind) = self.forced.front() {
            return (*kind).into();
        }
        match self.scanner.mode() {
            Mode::ControlSequence => TokenKind::ControlSequenceEnd.into(),
            Mode::Escaped => TokenKind::EscapedEnd.into(),
            Mode::Verbatim => {
                if self.verb_body_scanned {
                    TokenKind::VerbDelim.into()
                } else {
                    TokenKind::VerbBody.into()
                }
            }
            Mode::Normal => {
                let category = self.category(lexer);
                if let Some(argument) = &self.environment_argument {
                    return match (argument.opened, category) {
                        (false, _) => TokenKind::BeginGroup.into(),
                        (true, Some(Category::EndGroup)) => TokenKind::EndGroup.into(),
                        (true, _) => KindSet::EMPTY,
                    };
                }
                if category.is_none() {
                    return TokenKind::Exit.into();
                }
                if category == Some(Category::EndGroup)
                    && self.open_groups > 0
                    && !self.scope_closed
                {
                    return TokenKind::ScopeEnd.into();
                }
                let mut admissible = KindSet::STRUCTURAL;
                if let Some(kind) = self.pending {
                    admissible.insert(kind);
                }
                admissible
            }
        }
    }

    fn observe(&mut self, kind: TokenKind, text: &str) {
        let forced = self.forced.front() == Some(&kind);
        if forced {
            self.forced.pop_front();
        }
        if self.pending == Some(kind) {
            self.pending = None;
        }
        match kind {
            TokenKind::BeginGroup => match &mut self.environment_argument {
                Some(argument) => argument.opened = true,
                None => {
                    self.open_groups += 1;
                    self.forced.push_back(TokenKind::ScopeBegin);
                }
            },
            TokenKind::ScopeEnd if !forced => {
                self.scope_closed = true;
            }
            TokenKind::EndGroup => match self.environment_argument.take() {
                Some(argument) => self.finish_environment_argument(argument),
                None => {
                    if self.scope_closed {
                        self.open_groups -= 1;
                        self.scope_closed = false;
                    }
                }
            },
            TokenKind::ControlSequenceEnd | TokenKind::EscapedEnd => {
                let Some(class) = self.scanner.apply_control_sequence(text) else {
                    return;
                };
                match class.as_str() {
                    "begin" | "end" => {
                        self.environment_argument = Some(EnvironmentArgument {
                            begin: class.as_str() == "begin",
                            opened: false,
                            name: String::new(),
                        });
                    }
                    "verb" => self.forced.push_back(TokenKind::VerbDelim),
                    "MakeShortVerb" => self.pending = Some(TokenKind::MakeShortVerbDelim),
                    "DeleteShortVerb" => self.pending = Some(TokenKind::DeleteShortVerbDelim),
                    _ => {}
                }
            }
            TokenKind::VerbDelim | TokenKind::ShortVerbDelim => {
                self.verb_body_scanned = false;
            }
            TokenKind::VerbBody => {
                self.verb_body_scanned = true;
            }
            _ => {}
        }
    }

    fn finish_environment_argument(&mut self, argument: EnvironmentArgument) {
        let profile = match argument.name.as_str() {
            "alltt" => Some(TokenKind::AllttProfile),
            "luacode" => Some(TokenKind::LuacodeProfile),
            _ => None,
        };
        if let Some(profile) = profile {
            if argument.begin {
                self.forced.push_back(TokenKind::ScopeBegin);
                self.forced.push_back(profile);
            } else {
                self.forced.push_back(TokenKind::ScopeEnd);
            }
            return;
        }
        if !argument.begin {
            return;
        }
        let body = self
            .scanner
            .config()
            .verbatim_environments()
            .iter()
            .find(|environment| {
                environment_name(&environment.terminator) == Some(argument.name.as_str())
            })
            .map(|environment| environment.kind);
        if let Some(body) = body {
            self.forced.push_back(body);
        }
    }
}

fn environment_name(terminator: &str) -> Option<&str> {
    terminator.strip_prefix(" \\end {")?.strip_suffix('}')
}

/// Renders lexemes one per line, as the kind (or `Text`) followed by the quoted text.
pub fn render(lexemes: &[Lexeme]) -> String {
    let mut s = String::new();
    for lexeme in lexemes {
        let kind = match lexeme.kind {
            Some(kind) => kind.to_string(),
            None => "Text".to_string(),
        };
        s.push_str(&format!("{kind} {:?}\n", lexeme.text));
    }
    s
}

fn normalize(want: &str) -> String {
    let mut s = String::new();
    for line in want.lines() {
        let line = line.trim();
        if !line.is_empty() {
            s.push_str(line);
            s.push('\n');
        }
    }
    s
}

fn assert_lossless(input: &str, lexemes: &[Lexeme]) {
    let got: String = lexemes.iter().map(|lexeme| lexeme.text.as_str()).collect();
    similar_asserts::assert_eq!(got.as_str(), input, "lexemes do not cover the input exactly");
}

/// Lexes the input with a fresh driver.
pub fn lex(input: &str, options: &[TestOption]) -> Vec<Lexeme> {
    let options = ResolvedOptions::new(options);
    Driver::new(options.config).lex(input)
}

/// Run a lexing test.
///
/// The test passes if the input lexes to the provided lexemes, written as in [render].
pub fn run_lexing_test(input: &str, want: &str, options: &[TestOption]) {
    let lexemes = lex(input, options);
    assert_lossless(input, &lexemes);
    similar_asserts::assert_eq!(render(&lexemes), normalize(want));
}

/// Run a resumption test.
///
/// The test passes if lexing the input while resuming from a snapshot after every token
///     gives the same lexemes as lexing it without snapshots.
pub fn run_resumption_test(input: &str, options: &[TestOption]) {
    let options = ResolvedOptions::new(options);
    let want = Driver::new(Arc::clone(&options.config)).lex(input);
    let got = Driver::new(options.config)
        .resume_after_every_token(true)
        .lex(input);
    assert_lossless(input, &got);
    similar_asserts::assert_eq!(render(&got), render(&want));
}

/// Macro to generate a suite of unit tests.
///
/// See the crate documentation for an example.
/// The options are optional; by default the engine's default configuration is used.
#[macro_export]
macro_rules! test_suite {
    ( options $options: tt, lexing_tests ( $( ($name: ident, $input: expr, $want: expr $(,)? ) ),* $(,)? ) $(,)? ) => (
        $(
            #[test]
            fn $name() {
                let options = vec! $options;
                $crate::run_lexing_test($input, $want, &options);
            }
        )*
    );
    ( options $options: tt, resumption_tests ( $( ($name: ident, $input: expr $(,)? ) ),* $(,)? ) $(,)? ) => (
        $(
            #[test]
            fn $name() {
                let options = vec! $options;
                $crate::run_resumption_test($input, &options);
            }
        )*
    );
    ( options $options: tt, $test_kind: ident $test_cases: tt $(,)? ) => (
        compile_error!("Invalid keyword: test_suite! only accepts the following keywords: `options`, `lexing_tests`, `resumption_tests`");
    );
    ( options $options: tt, $( $test_kind: ident $test_cases: tt ),+ $(,)? ) => (
        $(
            $crate::test_suite![options $options, $test_kind $test_cases,];
        )+
    );
    ( $( $test_kind: ident $test_cases: tt ),+ $(,)? ) => (
        $crate::test_suite![options [], $( $test_kind $test_cases, )+ ];
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn environment_names() {
        assert_eq!(environment_name(" \\end {verbatim*}"), Some("verbatim*"));
        assert_eq!(environment_name("\\end{verbatim}"), None);
    }

    #[test]
    fn render_and_normalize() {
        let lexemes = vec![
            Lexeme {
                kind: Some(TokenKind::ControlSequenceBegin),
                text: "\\".into(),
            },
            Lexeme {
                kind: None,
                text: "ab".into(),
            },
        ];
        assert_eq!(
            render(&lexemes),
            normalize(
                r#"
                ControlSequenceBegin "\\"
                Text "ab"
            "#
            )
        );
    }
}
