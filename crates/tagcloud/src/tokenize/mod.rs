//! Splitting raw lines into lowercase words.

mod separators;

pub use separators::{CharSet, DefaultSeparators, SEPARATORS, Separators};

/// Iterate over the lowercase words of a single line.
///
/// A word is a maximal run of non-separator characters.  Empty runs (two
/// adjacent separators, or a separator at either end) are skipped.
pub fn words_in_line<'a, S>(line: &'a str, separators: &'a S) -> impl Iterator<Item = String> + 'a
where
    S: Separators + ?Sized,
{
    line.split(move |ch: char| separators.is_separator(ch))
        .filter(|run| !run.is_empty())
        .map(str::to_lowercase)
}

/// Lazily tokenize a sequence of lines.
///
/// Each line is split on its own; the end of a line always closes the word
/// in progress, so no word spans two lines.
pub fn tokenize<I, S>(lines: I, separators: &S) -> Words<'_, I::IntoIter, S>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
    S: Separators + ?Sized,
{
    Words {
        lines: lines.into_iter(),
        separators,
        pending: Vec::new().into_iter(),
    }
}

/// Iterator returned by [`tokenize`].
pub struct Words<'a, I, S: ?Sized> {
    lines: I,
    separators: &'a S,
    /// Words of the current line not yet yielded.
    pending: std::vec::IntoIter<String>,
}

impl<I, S> Iterator for Words<'_, I, S>
where
    I: Iterator,
    I::Item: AsRef<str>,
    S: Separators + ?Sized,
{
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            if let Some(word) = self.pending.next() {
                return Some(word);
            }
            let line = self.lines.next()?;
            self.pending = words_in_line(line.as_ref(), self.separators)
                .collect::<Vec<_>>()
                .into_iter();
        }
    }
}
