//! Extensions for sequences and collections
//!
//! - [Keyed] builds maps from any [IntoIterator] by deriving a key per
//!   element, either keeping the last element per key or merging
//!   colliding elements with a resolution function.
//! - [Trimming] returns views without leading and/or trailing runs of
//!   elements satisfying a predicate, [Trim] removes such runs in place.
//!
//! All operations with a caller-supplied function come in a fallible
//! `try_` flavour that passes on the first error of that function.
//!
//! # Example
//!
//! ```rust
//! use seqext::{Keyed, Trim, Trimming};
//!
//! let map = [(1, 'a'), (2, 'b'), (1, 'c')].keyed_by(|p| p.0);
//! assert_eq!(map[&1], (1, 'c'));
//!
//! assert_eq!("  x  ".trimming_while(|c| c.is_whitespace()), "x");
//!
//! let mut v = vec![0, 1, 0];
//! v.trim_zeros();
//! assert_eq!(v, [1]);
//! ```
#![forbid(unsafe_code)]
extern crate num_traits;
#[macro_use]
extern crate log;

pub mod index;
pub mod keyed;
pub mod trim;
pub use self::index::Bidirectional;
pub use self::keyed::{Keyed, KeyedMap};
pub use self::trim::{DequeSlice, RemoveRange, Subsequence, Trim, Trimming};
mod util;
