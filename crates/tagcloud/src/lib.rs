//! tagcloud — render the most frequent words of a text as a sized tag cloud.
//!
//! The pipeline runs strictly left to right:
//!
//! ```text
//! lines ─▶ tokenize ─▶ FrequencyMap ─▶ rank::select ─▶ size::map_sizes ─▶ output
//! ```
//!
//! ```
//! use tagcloud::{CloudOptions, DefaultSeparators, build_cloud};
//!
//! let text = "the cat sat on the mat the cat ran";
//! let (cloud, _) = build_cloud("demo", text.lines(), &DefaultSeparators, &CloudOptions::with_count(2))
//!     .unwrap();
//! let words: Vec<_> = cloud.entries.iter().map(|e| (e.word.as_str(), e.size)).collect();
//! assert_eq!(words, [("cat", 11), ("the", 48)]);
//! ```

pub mod cloud;
pub mod count;
pub mod error;
pub mod output;
pub mod rank;
pub mod size;
pub mod source;
pub mod tokenize;

pub use cloud::{Cloud, CloudOptions, CloudStats, build_cloud};
pub use count::FrequencyMap;
pub use error::CloudError;
pub use rank::{WordEntry, select};
pub use size::{SizeRange, SizedEntry, map_sizes};
pub use tokenize::{CharSet, DefaultSeparators, Separators, tokenize};
