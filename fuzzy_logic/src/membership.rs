use std::fmt::Debug;
use std::hash::Hash;

use float_cmp::approx_eq;

/// Absolute tolerance used when comparing two membership degrees.
pub const TOLERANCE: f64 = 1e-11;

/// Anything a fuzzy set can be defined over.
pub trait Element: Eq + Hash + Clone + Debug {}

impl<T: Eq + Hash + Clone + Debug> Element for T {}

/// Key of a fuzzy relation: (domain element, codomain element).
pub type Pair<T> = (T, T);

/// Return true if `value` is a valid degree of membership, i.e. lies in [0, 1].
pub fn is_degree(value: f64) -> bool {
    (0f64..=1f64).contains(&value)
}

/// Compare two degrees of membership up to [`TOLERANCE`].
pub fn degree_eq(a: f64, b: f64) -> bool {
    approx_eq!(f64, a, b, epsilon = TOLERANCE)
}

/// Validate an entry before it goes into a collection.
///
/// Rejections are not errors: a warning naming the key is logged and the
/// caller simply skips the entry.
pub(crate) fn accept<K: Debug>(key: &K, value: f64, duplicate: bool) -> bool {
    if duplicate {
        log::warn!("Element {:?} is already present, skipping", key);
        return false;
    }
    if !is_degree(value) {
        log::warn!(
            "Degree {} of element {:?} is outside [0, 1], skipping",
            value,
            key
        );
        return false;
    }
    true
}
