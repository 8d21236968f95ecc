//! Category codes and sets of category codes.
use Category::*;

/// Enum representing the 16 category codes of TeX plus one engine-specific extension.
///
/// Each variant's documentation contains an example character which is mapped to that
/// category in the default classification of the engine.
/// The discriminants are TeX's numbering and double as the wire encoding
/// used in snapshots.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Category {
    /// Marks the beginning of a control sequence.
    /// Example: `\`.
    Escape = 0,
    /// Begins a new group.
    /// Example: `{`.
    BeginGroup = 1,
    /// Ends an existing group.
    /// Example: `}`.
    EndGroup = 2,
    /// Starts or ends math mode.
    /// Example: `$`.
    MathShift = 3,
    /// Used in typesetting tables to align cells.
    /// Example: `&`.
    AlignmentTab = 4,
    /// Marks a new line in the input.
    /// Example: `\n`.
    ///
    /// This category terminates comments, inline verbatim spans, and
    ///     two of them in a row (modulo [Space] characters) form a paragraph break.
    EndOfLine = 5,
    /// Marks the beginning of a parameter number.
    /// Example: `#`.
    Parameter = 6,
    /// Example: `^`.
    Superscript = 7,
    /// Example: `_`.
    Subscript = 8,
    /// Character that is ignored.
    /// There is no example in the default classification; `\ExplSyntaxOn` maps space to it.
    Ignored = 9,
    /// Whitespace. Example: ` `.
    Space = 10,
    /// A character that can be used in a control sequence name.
    /// Examples: `[a-zA-Z]`.
    Letter = 11,
    /// A character than cannot be used in a control sequence name.
    /// Example: `@`.
    #[default]
    Other = 12,
    /// A single character that behaves like a control sequence.
    /// Example: `~`.
    Active = 13,
    /// Marks the beginning of a comment that runs until the next [EndOfLine].
    /// Example: `%`.
    Comment = 14,
    /// An invalid character.
    /// Example: ASCII delete (127).
    Invalid = 15,
    /// A short verbatim delimiter declared with `\MakeShortVerb` or similar.
    ///
    /// This is not a TeX category code; it is how the engine remembers which characters
    ///     open an inline verbatim span on their own.
    VerbatimDelimiter = 16,
}

impl TryFrom<u8> for Category {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Ok(match value {
            0 => Escape,
            1 => BeginGroup,
            2 => EndGroup,
            3 => MathShift,
            4 => AlignmentTab,
            5 => EndOfLine,
            6 => Parameter,
            7 => Superscript,
            8 => Subscript,
            9 => Ignored,
            10 => Space,
            11 => Letter,
            12 => Other,
            13 => Active,
            14 => Comment,
            15 => Invalid,
            16 => VerbatimDelimiter,
            _ => return Err(value),
        })
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?} ({})", self, *self as u8)
    }
}

impl Category {
    /// All categories, in wire order.
    pub const ALL: [Category; 17] = [
        Escape,
        BeginGroup,
        EndGroup,
        MathShift,
        AlignmentTab,
        EndOfLine,
        Parameter,
        Superscript,
        Subscript,
        Ignored,
        Space,
        Letter,
        Other,
        Active,
        Comment,
        Invalid,
        VerbatimDelimiter,
    ];

    /// Default categories of the engine for all ASCII characters.
    ///
    /// To find the category for an ASCII character,
    ///     convert it to an integer and use it as an index for the array.
    ///
    /// This is close to the plainTeX defaults (TeXBook p343) with two differences
    ///     that matter for an editor-facing lexer:
    ///     ASCII null is [Other] rather than ignored,
    ///     and only the line feed is an end of line.
    pub const LATEX_DEFAULTS: [Category; 128] = {
        let mut a = [Other; 128];
        a[b'\t' as usize] = Space;
        a[b'\n' as usize] = EndOfLine;
        a[b' ' as usize] = Space;
        a[b'#' as usize] = Parameter;
        a[b'$' as usize] = MathShift;
        a[b'%' as usize] = Comment;
        a[b'&' as usize] = AlignmentTab;
        a[b'\\' as usize] = Escape;
        a[b'^' as usize] = Superscript;
        a[b'_' as usize] = Subscript;
        a[b'{' as usize] = BeginGroup;
        a[b'}' as usize] = EndGroup;
        a[b'~' as usize] = Active;
        a[0x7F] = Invalid;
        let mut c = b'a';
        while c <= b'z' {
            a[c as usize] = Letter;
            a[c.to_ascii_uppercase() as usize] = Letter;
            c += 1;
        }
        a
    };

    /// Returns the default category of a code point.
    #[inline]
    pub fn default_for(c: u32) -> Category {
        match Category::LATEX_DEFAULTS.get(c as usize) {
            Some(category) => *category,
            None => Other,
        }
    }
}

/// A set of categories.
///
/// Used to describe which categories may follow a keyword for the keyword to count as matched.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CategorySet(u32);

impl CategorySet {
    pub const EMPTY: CategorySet = CategorySet(0);
    pub const ALL: CategorySet = CategorySet((1 << Category::ALL.len()) - 1);

    /// The categories that end a word: end of line, space and ignored characters.
    pub const WORD_BOUNDARY: CategorySet =
        CategorySet::EMPTY.with(EndOfLine).with(Space).with(Ignored);

    pub const fn with(self, category: Category) -> CategorySet {
        CategorySet(self.0 | (1 << category as u32))
    }

    #[inline]
    pub const fn contains(&self, category: Category) -> bool {
        self.0 & (1 << category as u32) != 0
    }
}

impl FromIterator<Category> for CategorySet {
    fn from_iter<T: IntoIterator<Item = Category>>(iter: T) -> Self {
        iter.into_iter().fold(CategorySet::EMPTY, CategorySet::with)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialize_and_deserialize_category() {
        for category in Category::ALL {
            let u: u8 = category as u8;
            let recovered: Category = u.try_into().unwrap();
            assert_eq!(recovered, category);
        }
        assert_eq!(Category::try_from(17), Err(17));
    }

    #[test]
    fn defaults() {
        assert_eq!(Category::default_for('\\' as u32), Escape);
        assert_eq!(Category::default_for('q' as u32), Letter);
        assert_eq!(Category::default_for('Q' as u32), Letter);
        assert_eq!(Category::default_for('@' as u32), Other);
        assert_eq!(Category::default_for('\r' as u32), Other);
        assert_eq!(Category::default_for('é' as u32), Other);
    }

    #[test]
    fn category_set() {
        let set = CategorySet::WORD_BOUNDARY;
        assert!(set.contains(Space));
        assert!(set.contains(EndOfLine));
        assert!(set.contains(Ignored));
        assert!(!set.contains(Letter));
        assert!(CategorySet::ALL.contains(VerbatimDelimiter));
        assert!(!CategorySet::EMPTY.contains(Escape));
        let collected: CategorySet = [Space, Ignored, EndOfLine].into_iter().collect();
        assert_eq!(collected, set);
    }
}
