use serde_json::{Map, Value};
use tracing::debug;

use crate::error::CompareError;
use crate::path::JsonPath;

/// Flags configuring the matching behaviour of a [`Comparator`].
///
/// Flags combine with `|`, e.g. `MatchMode::MAP_LEN | MatchMode::SLICE_ORDER`.
/// Any combination is legal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchMode(u8);

impl MatchMode {
    /// Match that needle is present, ignoring any excess map entries and
    /// array elements in haystack. Array element order is ignored too.
    pub const SUBTREE: MatchMode = MatchMode(0);

    /// Maps in needle and haystack must have the same length.
    pub const MAP_LEN: MatchMode = MatchMode(1);

    /// Arrays in needle and haystack must have the same length.
    pub const SLICE_LEN: MatchMode = MatchMode(1 << 1);

    /// Array elements must appear in the same order in needle and haystack.
    pub const SLICE_ORDER: MatchMode = MatchMode(1 << 2);

    /// Map and array lengths must be identical in needle and haystack.
    pub const LEN_STRICT: MatchMode = MatchMode(Self::MAP_LEN.0 | Self::SLICE_LEN.0);

    /// Arrays must have the same length and the same order of elements.
    pub const SLICE_STRICT: MatchMode = MatchMode(Self::SLICE_LEN.0 | Self::SLICE_ORDER.0);

    /// Exact match of needle and haystack.
    pub const STRICT: MatchMode = MatchMode(Self::LEN_STRICT.0 | Self::SLICE_ORDER.0);

    /// Returns true if every flag in `other` is set in `self`.
    pub fn contains(self, other: MatchMode) -> bool {
        self.0 & other.0 == other.0
    }
}

impl std::ops::BitOr for MatchMode {
    type Output = MatchMode;

    fn bitor(self, rhs: MatchMode) -> MatchMode {
        MatchMode(self.0 | rhs.0)
    }
}

/// Compares json documents according to a [`MatchMode`].
///
/// A comparator is immutable once constructed and holds no per-call state,
/// so a single instance can be shared freely across threads.
///
/// # Examples
///
/// ```
/// use jsoncompare::{Comparator, MatchMode};
///
/// let comparator = Comparator::new(MatchMode::SUBTREE);
/// let haystack = br#"{"foo": [1, 2, 3], "bar": "baz"}"#;
/// let needle = br#"{"foo": [2, 1]}"#;
/// assert!(comparator.compare(haystack, needle).is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct Comparator {
    mode: MatchMode,
}

impl Comparator {
    /// Creates a new comparator with the given match mode.
    pub fn new(mode: MatchMode) -> Comparator {
        Comparator { mode }
    }

    /// Checks that haystack contains needle under the configured match mode.
    ///
    /// Both inputs are decoded as json; a decode failure is returned as-is
    /// without any path context. The first mismatch encountered during the
    /// traversal is returned immediately.
    pub fn compare(&self, haystack: &[u8], needle: &[u8]) -> Result<(), CompareError> {
        let needle: Value = serde_json::from_slice(needle)?;
        let haystack: Value = serde_json::from_slice(haystack)?;
        self.compare_values(&haystack, &needle)
    }

    /// Like [`compare`](Comparator::compare), but for already-decoded values.
    ///
    /// Needle map keys are visited in the lexicographic order of
    /// [`serde_json::Map`], so mismatch reports are deterministic for a
    /// given pair of inputs.
    pub fn compare_values(&self, haystack: &Value, needle: &Value) -> Result<(), CompareError> {
        debug!(mode = ?self.mode, "comparing haystack against needle");
        self.compare_value(haystack, needle, JsonPath::root())
    }

    fn compare_value(
        &self,
        haystack: &Value,
        needle: &Value,
        path: JsonPath,
    ) -> Result<(), CompareError> {
        match (haystack, needle) {
            (Value::Object(hval), Value::Object(nval)) => self.compare_map(hval, nval, path),
            (Value::Array(hval), Value::Array(nval)) => self.compare_slice(hval, nval, path),
            (Value::Null, Value::Null) => Ok(()),
            (Value::Bool(hval), Value::Bool(nval)) if hval == nval => Ok(()),
            // Json numbers compare numerically, so 2 equals 2.0.
            (Value::Number(hval), Value::Number(nval)) if hval.as_f64() == nval.as_f64() => Ok(()),
            (Value::String(hval), Value::String(nval)) if hval == nval => Ok(()),
            (Value::Bool(_), Value::Bool(_))
            | (Value::Number(_), Value::Number(_))
            | (Value::String(_), Value::String(_)) => {
                Err(CompareError::value_mismatch(path, haystack, needle))
            }
            _ => Err(CompareError::type_mismatch(path, haystack, needle)),
        }
    }

    fn compare_map(
        &self,
        haystack: &Map<String, Value>,
        needle: &Map<String, Value>,
        path: JsonPath,
    ) -> Result<(), CompareError> {
        let (hlen, nlen) = (haystack.len(), needle.len());
        if hlen < nlen || (self.mode.contains(MatchMode::MAP_LEN) && hlen != nlen) {
            return Err(CompareError::length_mismatch(path, hlen, nlen));
        }

        for (key, nval) in needle {
            match haystack.get(key) {
                Some(hval) => self.compare_value(hval, nval, path.with_key(key))?,
                None => return Err(CompareError::key_missing(path, key)),
            }
        }

        Ok(())
    }

    fn compare_slice(
        &self,
        haystack: &[Value],
        needle: &[Value],
        path: JsonPath,
    ) -> Result<(), CompareError> {
        let (hlen, nlen) = (haystack.len(), needle.len());
        if hlen < nlen || (self.mode.contains(MatchMode::SLICE_LEN) && hlen != nlen) {
            return Err(CompareError::length_mismatch(path, hlen, nlen));
        }

        if self.mode.contains(MatchMode::SLICE_ORDER) {
            for (i, nval) in needle.iter().enumerate() {
                self.compare_value(&haystack[i], nval, path.with_index(i))?;
            }
            return Ok(());
        }

        // Unordered containment. Each haystack element may satisfy at most
        // one needle element, so matched candidates are removed from the
        // pool. When a needle element matches nothing, the error from the
        // last candidate attempted is surfaced.
        let mut pool: Vec<&Value> = haystack.iter().collect();
        for (i, nval) in needle.iter().enumerate() {
            let item_path = path.with_index(i);
            let mut matched = None;
            let mut outcome = Ok(());

            for (j, hval) in pool.iter().enumerate() {
                outcome = self.compare_value(hval, nval, item_path.clone());
                if outcome.is_ok() {
                    matched = Some(j);
                    break;
                }
            }

            match matched {
                Some(j) => {
                    pool.remove(j);
                }
                None => outcome?,
            }
        }

        Ok(())
    }
}

/// The default comparator strictly compares needle and haystack for
/// equality.
impl Default for Comparator {
    fn default() -> Comparator {
        Comparator::new(MatchMode::STRICT)
    }
}

/// Checks that haystack contains needle using the default strict comparator.
///
/// Request a [`MatchMode::SUBTREE`] comparator explicitly for containment
/// semantics.
///
/// # Examples
///
/// ```
/// let haystack = br#"{"foo": "bar", "baz": 1}"#;
/// let needle = br#"{"foo": "bar"}"#;
///
/// let err = jsoncompare::compare(haystack, needle).unwrap_err();
/// assert_eq!(err.to_string(), "$: length mismatch, expected 1, got 2");
/// ```
pub fn compare(haystack: &[u8], needle: &[u8]) -> Result<(), CompareError> {
    Comparator::default().compare(haystack, needle)
}
