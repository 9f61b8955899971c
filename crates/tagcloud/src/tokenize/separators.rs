use std::collections::BTreeSet;

/// Characters treated as word boundaries by [`DefaultSeparators`].
///
/// Whitespace, common punctuation and the ASCII symbol row.  Digits and the
/// backslash are deliberately absent, so `"x\\y"` and `"42"` are words.
pub const SEPARATORS: &str = " \t,\n\r.<>/?;:\"'{}[]_-+=~`!@#$%^&*()|";

/// Decides which characters end a word.
pub trait Separators {
    /// Returns `true` if `ch` is a word boundary.
    fn is_separator(&self, ch: char) -> bool;
}

/// The fixed boundary set used by the command-line tool.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultSeparators;

impl Separators for DefaultSeparators {
    fn is_separator(&self, ch: char) -> bool {
        SEPARATORS.contains(ch)
    }
}

/// A boundary set built from an arbitrary collection of characters.
#[derive(Clone, Debug, Default)]
pub struct CharSet {
    chars: BTreeSet<char>,
}

impl CharSet {
    /// Build a set from `chars`.
    pub fn new(chars: impl IntoIterator<Item = char>) -> Self {
        Self {
            chars: chars.into_iter().collect(),
        }
    }

    /// Number of distinct separator characters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Returns `true` if the set has no characters (every line is one word).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

impl FromIterator<char> for CharSet {
    fn from_iter<T: IntoIterator<Item = char>>(iter: T) -> Self {
        Self::new(iter)
    }
}

impl Separators for CharSet {
    fn is_separator(&self, ch: char) -> bool {
        self.chars.contains(&ch)
    }
}

impl<F> Separators for F
where
    F: Fn(char) -> bool,
{
    fn is_separator(&self, ch: char) -> bool {
        self(ch)
    }
}
