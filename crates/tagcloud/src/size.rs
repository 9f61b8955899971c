//! Linear mapping from word counts to display sizes.

use serde::Serialize;

use crate::error::CloudError;
use crate::rank::WordEntry;

/// Inclusive range of display sizes handed out by [`map_sizes`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SizeRange {
    min: u32,
    max: u32,
}

impl SizeRange {
    /// The 11 – 48 range matching the `f11` … `f48` stylesheet classes.
    pub const DEFAULT: Self = Self { min: 11, max: 48 };

    /// Validate and build a range.
    pub fn new(min: u32, max: u32) -> Result<Self, CloudError> {
        if min > max {
            return Err(CloudError::InvalidSizeRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// Size of the least frequent selected word.
    #[must_use]
    pub const fn min(&self) -> u32 {
        self.min
    }

    /// Size of the most frequent selected word.
    #[must_use]
    pub const fn max(&self) -> u32 {
        self.max
    }

    /// Returns `true` if `size` lies inside the range.
    #[must_use]
    pub fn contains(&self, size: u32) -> bool {
        (self.min..=self.max).contains(&size)
    }
}

impl Default for SizeRange {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// A selected word together with its display size.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SizedEntry {
    /// The lowercase word.
    pub word: String,
    /// Number of occurrences in the input.
    pub count: usize,
    /// Display size within the configured [`SizeRange`].
    pub size: u32,
}

/// Assign a display size to every entry, keeping input order.
///
/// `size = floor((count - min_count) * scale) + range.min` where
/// `scale = (range.max - range.min) / (max_count - min_count)`.  When all
/// counts are equal there is nothing to scale and every entry gets
/// `range.min`.
#[must_use]
pub fn map_sizes(entries: &[WordEntry], range: SizeRange) -> Vec<SizedEntry> {
    let Some(min_count) = entries.iter().map(|e| e.count).min() else {
        return Vec::new();
    };
    let max_count = entries.iter().map(|e| e.count).max().unwrap_or(min_count);

    // floor(offset * scale) computed exactly as offset * span / spread.
    let spread = (max_count - min_count) as u128;
    let span = u128::from(range.max.saturating_sub(range.min));

    entries
        .iter()
        .map(|e| {
            let offset = if spread == 0 {
                0
            } else {
                ((e.count - min_count) as u128 * span / spread) as u32
            };
            SizedEntry {
                word: e.word.clone(),
                count: e.count,
                size: range.min + offset,
            }
        })
        .collect()
}
