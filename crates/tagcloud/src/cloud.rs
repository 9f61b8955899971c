//! The full text → cloud pipeline.

use serde::Serialize;

use crate::count::FrequencyMap;
use crate::error::CloudError;
use crate::rank::select;
use crate::size::{SizeRange, SizedEntry, map_sizes};
use crate::tokenize::{Separators, tokenize};

/// Knobs for one pipeline run.
#[derive(Clone, Copy, Debug)]
pub struct CloudOptions {
    /// Number of words to show.  Negative values are rejected by [`select`].
    pub count: i64,
    /// Display-size range used for scaling.
    pub sizes: SizeRange,
}

impl CloudOptions {
    /// Options for `count` words with the default size range.
    #[must_use]
    pub fn with_count(count: i64) -> Self {
        Self {
            count,
            sizes: SizeRange::DEFAULT,
        }
    }
}

/// Everything a renderer needs: the sized words plus header information.
#[derive(Clone, Debug, Serialize)]
pub struct Cloud {
    /// Display label (usually the input file name).
    pub label: String,
    /// Number of words that was requested.
    pub requested: usize,
    /// Size range the entries were scaled into.
    pub size_range: SizeRange,
    /// Selected words in alphabetical order.
    #[serde(rename = "words")]
    pub entries: Vec<SizedEntry>,
}

impl Cloud {
    /// Rank and size the words of an already-built frequency map.
    pub fn from_frequencies(
        label: impl Into<String>,
        freq: &FrequencyMap,
        opts: &CloudOptions,
    ) -> Result<Self, CloudError> {
        let selected = select(freq, opts.count)?;
        let entries = map_sizes(&selected, opts.sizes);
        Ok(Self {
            label: label.into(),
            requested: selected.len(),
            size_range: opts.sizes,
            entries,
        })
    }
}

/// Summary figures for a run, reported with `--verbose`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CloudStats {
    /// Number of tokens read.
    pub tokens: usize,
    /// Number of distinct words.
    pub distinct: usize,
}

impl From<&FrequencyMap> for CloudStats {
    fn from(freq: &FrequencyMap) -> Self {
        Self {
            tokens: freq.total(),
            distinct: freq.len(),
        }
    }
}

/// Tokenize `lines`, count the words and build the cloud.
pub fn build_cloud<I, S>(
    label: impl Into<String>,
    lines: I,
    separators: &S,
    opts: &CloudOptions,
) -> Result<(Cloud, CloudStats), CloudError>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
    S: Separators + ?Sized,
{
    let freq: FrequencyMap = tokenize(lines, separators).collect();
    let cloud = Cloud::from_frequencies(label, &freq, opts)?;
    Ok((cloud, CloudStats::from(&freq)))
}
