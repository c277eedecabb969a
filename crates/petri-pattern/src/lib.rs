//! Run-length encoded Life patterns.
//!
//! Patterns arrive as `{columns, rows, code}` descriptors where `code` is a
//! token stream of optional run counts followed by an action character:
//!
//! - `o` - run of live cells
//! - `b` - run of dead cells
//! - `$` - end of row (the count skips that many rows)
//! - `!` - end of pattern
//!
//! - [`decode`] - best-effort decoding, clips anything outside the matrix
//! - [`decode_strict`] - same grammar, rejects malformed input
//! - [`PatternCatalog`] - named patterns loaded from JSON
//! - [`presets`] - a handful of well known patterns
//!
//! # Example
//!
//! ```
//! use rhizome_petri_pattern::decode;
//!
//! let matrix = decode("3o$2b2o!", 4, 2);
//! assert_eq!(matrix.row(0), &[true, true, true, false]);
//! assert_eq!(matrix.row(1), &[false, false, true, true]);
//! ```

mod catalog;
mod decode;
mod error;
pub mod presets;

pub use catalog::{Pattern, PatternCatalog};
pub use decode::{MAX_PATTERN_SIDE, PatternMatrix, decode, decode_strict};
pub use error::{PatternError, PatternResult};
