//! Token kinds and sets of admissible token kinds.

/// Kinds of tokens the engine can produce.
///
/// The calling grammar tells the engine which of these it will accept at each position
///     using a [KindSet].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum TokenKind {
    // Classification profiles. These are zero-width and install a whole profile.
    AllttProfile,
    AtLetterProfile,
    AtOtherProfile,
    ExplBeginProfile,
    ExplEndProfile,
    L3docProfile,
    LuacodeProfile,
    LuadirectProfile,
    LuaexecProfile,
    PipeVerbDelimiterProfile,

    /// The escape character of a control sequence whose name is made of letters.
    ControlSequenceBegin,
    /// The (rest of the) name of a control sequence.
    ControlSequenceEnd,
    /// The escape character of a control symbol like `\{`.
    EscapedBegin,
    /// The single character of a control symbol.
    EscapedEnd,
    /// Zero-width token that opens a classification scope.
    ScopeBegin,
    /// Zero-width token that closes a classification scope.
    ScopeEnd,
    /// A run of space and end of line characters containing at most one end of line.
    Space,
    ActiveChar,
    AlignmentTab,
    EndOfLine,
    /// Zero-width token at the end of the input or before a group end character.
    Exit,
    BeginGroup,
    EndGroup,
    MathShift,
    /// A run of parameter characters.
    ParameterChar,
    Superscript,
    Subscript,

    Comment,
    /// A comment starting with `%:`.
    TagComment,
    /// A comment starting with `% arara:`.
    AraraComment,
    /// A comment starting with `% !TEX`.
    MagicComment,
    /// A comment starting with `% !BIB`.
    BibComment,

    /// A delimiter of an inline verbatim span, like the `|` characters in `\verb|x|`.
    VerbDelim,
    /// The body of an inline verbatim span.
    VerbBody,
    /// A character declared as a short verbatim delimiter, opening an inline verbatim span.
    ShortVerbDelim,
    /// The control symbol argument of `\MakeShortVerb`.
    MakeShortVerbDelim,
    /// The control symbol argument of `\DeleteShortVerb`.
    DeleteShortVerbDelim,

    // Verbatim environment bodies.
    BVerbatimBody,
    BVerbatimStarBody,
    CommentBody,
    FilecontentsBody,
    FilecontentsStarBody,
    LstlistingBody,
    LuacodeStarBody,
    LVerbatimBody,
    LVerbatimStarBody,
    MintedBody,
    VerbatimBody,
    VerbatimCapitalBody,
    VerbatimStarBody,
    VerbatimCapitalStarBody,
}

impl TokenKind {
    /// All token kinds, in declaration order.
    pub const ALL: [TokenKind; 51] = {
        use TokenKind::*;
        [
            AllttProfile,
            AtLetterProfile,
            AtOtherProfile,
            ExplBeginProfile,
            ExplEndProfile,
            L3docProfile,
            LuacodeProfile,
            LuadirectProfile,
            LuaexecProfile,
            PipeVerbDelimiterProfile,
            ControlSequenceBegin,
            ControlSequenceEnd,
            EscapedBegin,
            EscapedEnd,
            ScopeBegin,
            ScopeEnd,
            Space,
            ActiveChar,
            AlignmentTab,
            EndOfLine,
            Exit,
            BeginGroup,
            EndGroup,
            MathShift,
            ParameterChar,
            Superscript,
            Subscript,
            Comment,
            TagComment,
            AraraComment,
            MagicComment,
            BibComment,
            VerbDelim,
            VerbBody,
            ShortVerbDelim,
            MakeShortVerbDelim,
            DeleteShortVerbDelim,
            BVerbatimBody,
            BVerbatimStarBody,
            CommentBody,
            FilecontentsBody,
            FilecontentsStarBody,
            LstlistingBody,
            LuacodeStarBody,
            LVerbatimBody,
            LVerbatimStarBody,
            MintedBody,
            VerbatimBody,
            VerbatimCapitalBody,
            VerbatimStarBody,
            VerbatimCapitalStarBody,
        ]
    };

    #[inline]
    const fn bit(self) -> u64 {
        1 << self as u8
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

/// A set of token kinds.
///
/// ```
/// # use texscan::kind::{KindSet, TokenKind};
/// let kinds = KindSet::from([TokenKind::Comment, TokenKind::Space]);
/// assert!(kinds.contains(TokenKind::Comment));
/// assert!(!kinds.contains(TokenKind::Exit));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KindSet(u64);

impl KindSet {
    pub const EMPTY: KindSet = KindSet(0);

    /// All token kinds that can be produced while in normal mode without
    ///     installing a profile or starting a verbatim construct.
    pub const STRUCTURAL: KindSet = KindSet::EMPTY
        .with(TokenKind::ControlSequenceBegin)
        .with(TokenKind::EscapedBegin)
        .with(TokenKind::Space)
        .with(TokenKind::ActiveChar)
        .with(TokenKind::AlignmentTab)
        .with(TokenKind::BeginGroup)
        .with(TokenKind::EndGroup)
        .with(TokenKind::MathShift)
        .with(TokenKind::ParameterChar)
        .with(TokenKind::Superscript)
        .with(TokenKind::Subscript)
        .with(TokenKind::Comment)
        .with(TokenKind::ShortVerbDelim);

    pub const fn with(self, kind: TokenKind) -> KindSet {
        KindSet(self.0 | kind.bit())
    }

    pub const fn without(self, kind: TokenKind) -> KindSet {
        KindSet(self.0 & !kind.bit())
    }

    pub fn insert(&mut self, kind: TokenKind) {
        self.0 |= kind.bit();
    }

    pub fn remove(&mut self, kind: TokenKind) {
        self.0 &= !kind.bit();
    }

    #[inline]
    pub const fn contains(&self, kind: TokenKind) -> bool {
        self.0 & kind.bit() != 0
    }

    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Iterates over the kinds in the set, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = TokenKind> + '_ {
        TokenKind::ALL.into_iter().filter(|kind| self.contains(*kind))
    }
}

impl FromIterator<TokenKind> for KindSet {
    fn from_iter<T: IntoIterator<Item = TokenKind>>(iter: T) -> Self {
        iter.into_iter().fold(KindSet::EMPTY, KindSet::with)
    }
}

impl From<TokenKind> for KindSet {
    fn from(kind: TokenKind) -> Self {
        KindSet::EMPTY.with(kind)
    }
}

impl<const N: usize> From<[TokenKind; N]> for KindSet {
    fn from(kinds: [TokenKind; N]) -> Self {
        kinds.into_iter().collect()
    }
}
