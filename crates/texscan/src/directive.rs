//! Configuration of the engine: directives, classification profiles and verbatim environments.
//!
//! All of the types here are immutable data.
//! The engine applies directives but never interprets the [SymbolClass] attached to them;
//!     that tag exists for the grammar sitting on top of the engine.

use crate::catcode::Category::{self, *};
use crate::kind::TokenKind;
use crate::table::{Interval, Scope};
use std::borrow::Cow;
use std::collections::HashMap;

/// Semantic tag attached to a command, consumed by the calling grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SymbolClass(&'static str);

impl SymbolClass {
    /// Tag for commands with no special grammar treatment.
    pub const GENERIC: SymbolClass = SymbolClass("cs");

    pub const fn new(name: &'static str) -> SymbolClass {
        SymbolClass(name)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for SymbolClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

/// A named side effect: a symbol class and a list of classification edits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive {
    pub class: SymbolClass,
    pub scope: Scope,
    pub edits: Cow<'static, [Interval]>,
}

impl Directive {
    /// A directive with no classification edits.
    pub const fn plain(class: SymbolClass) -> Directive {
        Directive {
            class,
            scope: Scope::Local,
            edits: Cow::Borrowed(&[]),
        }
    }

    /// A directive whose edits are applied in the local scope.
    pub const fn local(class: SymbolClass, edits: &'static [Interval]) -> Directive {
        Directive {
            class,
            scope: Scope::Local,
            edits: Cow::Borrowed(edits),
        }
    }

    /// A directive whose edits are applied in the global scope.
    pub const fn global(class: SymbolClass, edits: &'static [Interval]) -> Directive {
        Directive {
            class,
            scope: Scope::Global,
            edits: Cow::Borrowed(edits),
        }
    }

    pub fn has_edits(&self) -> bool {
        !self.edits.is_empty()
    }
}

/// A map from control sequence names (without the escape character) to directives.
#[derive(Debug, Clone, Default)]
pub struct CommandDirectory {
    map: HashMap<Cow<'static, str>, Directive>,
}

impl CommandDirectory {
    pub fn new() -> CommandDirectory {
        Default::default()
    }

    /// Inserts a directive, returning the directive previously registered under the name.
    pub fn insert<N: Into<Cow<'static, str>>>(
        &mut self,
        name: N,
        directive: Directive,
    ) -> Option<Directive> {
        self.map.insert(name.into(), directive)
    }

    pub fn get(&self, name: &str) -> Option<&Directive> {
        self.map.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.map.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Directive)> {
        self.map.iter().map(|(name, directive)| (name.as_ref(), directive))
    }
}

impl<N: Into<Cow<'static, str>>> FromIterator<(N, Directive)> for CommandDirectory {
    fn from_iter<T: IntoIterator<Item = (N, Directive)>>(iter: T) -> Self {
        let mut directory = CommandDirectory::new();
        for (name, directive) in iter {
            directory.insert(name, directive);
        }
        directory
    }
}

/// An environment whose body is captured verbatim, together with its terminator.
///
/// The terminator is a class pattern in the sense of
///     [matches_class_pattern](crate::pattern::matches_class_pattern),
///     so `\end{verbatim}` is recognized whatever the current escape and group characters are.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerbatimEnvironment {
    pub kind: TokenKind,
    pub terminator: Cow<'static, str>,
}

impl VerbatimEnvironment {
    /// Creates the descriptor for the environment with the provided name.
    pub fn new(kind: TokenKind, name: &str) -> VerbatimEnvironment {
        VerbatimEnvironment {
            kind,
            terminator: Cow::Owned(format!(" \\end {{{name}}}")),
        }
    }
}

/// Engine configuration.
///
/// The default configuration contains the compiled-in classification profiles and
///     verbatim environments, and an empty command directory.
#[derive(Debug, Clone)]
pub struct Config {
    profiles: Vec<(TokenKind, Directive)>,
    verbatim_environments: Vec<VerbatimEnvironment>,
    commands: CommandDirectory,
}

impl Config {
    /// A configuration with no profiles, no verbatim environments and no commands.
    pub fn empty() -> Config {
        Config {
            profiles: Vec::new(),
            verbatim_environments: Vec::new(),
            commands: CommandDirectory::new(),
        }
    }

    pub fn with_command_directory(mut self, commands: CommandDirectory) -> Config {
        self.commands = commands;
        self
    }

    /// Adds a verbatim environment with the lowest priority.
    ///
    /// An existing environment for the same token kind is replaced in place.
    pub fn with_verbatim_environment(mut self, environment: VerbatimEnvironment) -> Config {
        match self
            .verbatim_environments
            .iter_mut()
            .find(|existing| existing.kind == environment.kind)
        {
            Some(existing) => *existing = environment,
            None => self.verbatim_environments.push(environment),
        }
        self
    }

    /// Binds a classification profile to a token kind.
    ///
    /// An existing profile for the same token kind is replaced in place.
    pub fn with_profile(mut self, kind: TokenKind, directive: Directive) -> Config {
        match self.profiles.iter_mut().find(|(existing, _)| *existing == kind) {
            Some((_, existing)) => *existing = directive,
            None => self.profiles.push((kind, directive)),
        }
        self
    }

    /// Profiles in priority order.
    pub fn profiles(&self) -> &[(TokenKind, Directive)] {
        &self.profiles
    }

    /// Verbatim environments in priority order.
    pub fn verbatim_environments(&self) -> &[VerbatimEnvironment] {
        &self.verbatim_environments
    }

    pub fn commands(&self) -> &CommandDirectory {
        &self.commands
    }
}

impl Default for Config {
    fn default() -> Self {
        let profiles = [
            (TokenKind::AllttProfile, Directive::local(SymbolClass::GENERIC, ALLTT)),
            (TokenKind::AtLetterProfile, Directive::local(SymbolClass::GENERIC, AT_LETTER)),
            (TokenKind::AtOtherProfile, Directive::local(SymbolClass::GENERIC, AT_OTHER)),
            (TokenKind::ExplBeginProfile, Directive::local(SymbolClass::GENERIC, EXPL_ON)),
            (TokenKind::ExplEndProfile, Directive::local(SymbolClass::GENERIC, EXPL_OFF)),
            (TokenKind::L3docProfile, Directive::global(SymbolClass::GENERIC, L3DOC)),
            (TokenKind::LuacodeProfile, Directive::local(SymbolClass::GENERIC, LUACODE)),
            (TokenKind::LuadirectProfile, Directive::local(SymbolClass::GENERIC, LUADIRECT)),
            (TokenKind::LuaexecProfile, Directive::local(SymbolClass::GENERIC, LUAEXEC)),
            (
                TokenKind::PipeVerbDelimiterProfile,
                Directive::global(SymbolClass::GENERIC, PIPE_VERB_DELIMITER),
            ),
        ];
        let verbatim_environments = [
            (TokenKind::BVerbatimBody, "BVerbatim"),
            (TokenKind::BVerbatimStarBody, "BVerbatim*"),
            (TokenKind::CommentBody, "comment"),
            (TokenKind::FilecontentsBody, "filecontents"),
            (TokenKind::FilecontentsStarBody, "filecontents*"),
            (TokenKind::LstlistingBody, "lstlisting"),
            (TokenKind::LuacodeStarBody, "luacode*"),
            (TokenKind::LVerbatimBody, "LVerbatim"),
            (TokenKind::LVerbatimStarBody, "LVerbatim*"),
            (TokenKind::MintedBody, "minted"),
            (TokenKind::VerbatimBody, "verbatim"),
            (TokenKind::VerbatimCapitalBody, "Verbatim"),
            (TokenKind::VerbatimStarBody, "verbatim*"),
            (TokenKind::VerbatimCapitalStarBody, "Verbatim*"),
        ];
        Config {
            profiles: profiles.into(),
            verbatim_environments: verbatim_environments
                .into_iter()
                .map(|(kind, name)| VerbatimEnvironment::new(kind, name))
                .collect(),
            commands: CommandDirectory::new(),
        }
    }
}

const fn single(c: char, category: Category) -> Interval {
    Interval::single(c, category)
}

const fn range(lo: char, hi: char, category: Category) -> Interval {
    Interval::range(lo, hi, category)
}

/// Classification used inside the `alltt` environment.
pub const ALLTT: &[Interval] = &[
    single('\t', Other),
    single(' ', Other),
    single('#', Other),
    single('$', Other),
    single('%', Other),
    single('&', Other),
    range('A', 'Z', Letter),
    single('\\', Escape),
    single('^', Other),
    single('_', Other),
    range('a', 'z', Letter),
    single('{', BeginGroup),
    single('}', EndGroup),
    single('~', Other),
];

/// `\makeatletter`.
pub const AT_LETTER: &[Interval] = &[single('@', Letter)];

/// `\makeatother`.
pub const AT_OTHER: &[Interval] = &[single('@', Other)];

/// `\ExplSyntaxOn`.
pub const EXPL_ON: &[Interval] = &[
    single('\t', Ignored),
    single(' ', Ignored),
    single('"', Other),
    single('&', AlignmentTab),
    single(':', Letter),
    single('^', Superscript),
    single('_', Letter),
    single('|', Other),
    single('~', Space),
];

/// `\ExplSyntaxOff`.
pub const EXPL_OFF: &[Interval] = &[
    single('\t', Space),
    single(' ', Space),
    single('"', Other),
    single('&', AlignmentTab),
    single(':', Other),
    single('^', Superscript),
    single('_', Subscript),
    single('|', Other),
    single('~', Active),
];

/// Short verbatim delimiters of the `l3doc` class.
pub const L3DOC: &[Interval] = &[single('"', VerbatimDelimiter), single('|', VerbatimDelimiter)];

/// Classification inside the `luacode` environment.
pub const LUACODE: &[Interval] = &[
    range('\u{1}', '@', Other),
    range('A', 'Z', Letter),
    single('[', Other),
    single('\\', Escape),
    range(']', '`', Other),
    range('a', 'z', Letter),
    single('{', BeginGroup),
    single('|', Other),
    single('}', EndGroup),
    single('~', Other),
    single('\u{7f}', Invalid),
];

/// Classification inside the argument of `\luadirect` and `\directlua`.
pub const LUADIRECT: &[Interval] = &[
    range('\u{1}', '\t', EndOfLine),
    single('\n', EndOfLine),
    range('\u{b}', '$', Other),
    single('%', Comment),
    range('&', '@', Other),
    range('A', 'Z', Letter),
    single('[', Other),
    single('\\', Escape),
    range(']', '`', Other),
    range('a', 'z', Letter),
    single('{', BeginGroup),
    single('|', Other),
    single('}', EndGroup),
    single('~', Active),
    single('\u{7f}', Invalid),
];

/// Classification inside the argument of `\luaexec`.
pub const LUAEXEC: &[Interval] = &[
    range('\u{1}', '\t', EndOfLine),
    single('\n', EndOfLine),
    range('\u{b}', '$', Other),
    single('%', Comment),
    range('&', '@', Other),
    range('A', 'Z', Letter),
    single('[', Other),
    single('\\', Escape),
    range(']', '`', Other),
    range('a', 'z', Letter),
    single('{', BeginGroup),
    single('|', Other),
    single('}', EndGroup),
    single('~', Other),
    single('\u{7f}', Invalid),
];

/// `|` as a short verbatim delimiter.
pub const PIPE_VERB_DELIMITER: &[Interval] = &[single('|', VerbatimDelimiter)];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbatim_terminator() {
        let environment = VerbatimEnvironment::new(TokenKind::VerbatimStarBody, "verbatim*");
        assert_eq!(environment.terminator, " \\end {verbatim*}");
    }

    #[test]
    fn default_config_order() {
        let config = Config::default();
        assert_eq!(config.profiles().len(), 10);
        assert_eq!(config.profiles()[0].0, TokenKind::AllttProfile);
        assert_eq!(config.profiles()[5].1.scope, Scope::Global);
        assert_eq!(config.verbatim_environments().len(), 14);
        assert_eq!(config.verbatim_environments()[0].kind, TokenKind::BVerbatimBody);
        assert!(config.commands().is_empty());
    }

    #[test]
    fn builder_replaces_in_place() {
        let config = Config::default()
            .with_verbatim_environment(VerbatimEnvironment::new(TokenKind::CommentBody, "Comment"))
            .with_profile(
                TokenKind::AtLetterProfile,
                Directive::local(SymbolClass::GENERIC, AT_OTHER),
            );
        assert_eq!(config.verbatim_environments()[2].terminator, " \\end {Comment}");
        assert_eq!(config.verbatim_environments().len(), 14);
        assert_eq!(config.profiles()[1].1.edits.as_ref(), AT_OTHER);
    }

    #[test]
    fn command_directory() {
        let directory: CommandDirectory = [
            ("makeatletter", Directive::local(SymbolClass::GENERIC, AT_LETTER)),
            ("section", Directive::plain(SymbolClass::new("section"))),
        ]
        .into_iter()
        .collect();
        assert_eq!(directory.len(), 2);
        assert!(directory.get("makeatletter").unwrap().has_edits());
        assert!(!directory.get("section").unwrap().has_edits());
        assert_eq!(directory.get("section").unwrap().class.as_str(), "section");
        assert!(directory.get("makeatother").is_none());
    }
}
