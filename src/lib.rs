//! Helpers to compare two byte slices containing json with each other. The
//! matching behaviour is configurable, which is mostly useful for assertions
//! in tests where a haystack has to contain a needle but may carry additional
//! data not present in the needle.
//!
//! The default [`compare`] enforces strict equality; build a [`Comparator`]
//! with [`MatchMode::SUBTREE`] (or any other flag combination) for looser
//! matching:
//!
//! ```
//! use jsoncompare::{Comparator, MatchMode};
//!
//! let needle = br#"{"foo": [1, 2]}"#;
//! let haystack = br#"{"foo": ["1", "2"]}"#;
//!
//! let err = jsoncompare::compare(haystack, needle).unwrap_err();
//! assert_eq!(err.to_string(), "$.foo[0]: type mismatch, expected number, got string");
//!
//! let comparator = Comparator::new(MatchMode::SUBTREE);
//! assert!(comparator.compare(br#"{"foo": [2, 1, 3]}"#, br#"{"foo": [1, 2]}"#).is_ok());
//! ```

mod compare;
mod error;
mod path;

pub use compare::{compare, Comparator, MatchMode};
pub use error::CompareError;
pub use path::JsonPath;
