use std::collections::{hash_map, HashMap};
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg};

use crate::{
    error::FuzzyError,
    implication::ImplicationType,
    membership::{accept, degree_eq, Element},
};

/// A discrete fuzzy set: a sparse mapping from elements to their degree of membership.
///
/// Elements that were never inserted are simply absent. Each operation below says
/// whether it reads an absent element as degree 0 or as "undefined".
#[derive(Clone, Debug)]
pub struct FuzzySet<T> {
    data: HashMap<T, f64>,
}

impl<T> Default for FuzzySet<T> {
    fn default() -> Self {
        FuzzySet {
            data: HashMap::new(),
        }
    }
}

impl<T: Element> FuzzySet<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `key` with degree `value`.
    ///
    /// Degrees outside [0, 1] and keys that are already present are rejected with a
    /// logged warning. Returns whether the entry was stored.
    pub fn insert(&mut self, key: T, value: f64) -> bool {
        if !accept(&key, value, self.data.contains_key(&key)) {
            return false;
        }
        self.data.insert(key, value);
        true
    }

    /// Return the degree of `key`, or an error if it is not in the set.
    pub fn at(&self, key: &T) -> Result<f64, FuzzyError> {
        self.get(key)
            .ok_or_else(|| FuzzyError::ElementNotFound(format!("{:?}", key)))
    }

    /// Return the degree of `key`, `None` when the element is absent.
    pub fn get(&self, key: &T) -> Option<f64> {
        self.data.get(key).copied()
    }

    /// Mutable access to the degree of `key`, inserting it with degree 0 if absent.
    ///
    /// The caller is responsible for keeping the written value inside [0, 1].
    pub fn degree_mut(&mut self, key: T) -> &mut f64 {
        self.data.entry(key).or_insert(0f64)
    }

    pub fn erase(&mut self, key: &T) {
        self.data.remove(key);
    }

    pub fn contains(&self, key: &T) -> bool {
        self.data.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &T> {
        self.data.keys()
    }

    pub fn as_map(&self) -> &HashMap<T, f64> {
        &self.data
    }

    /// Iterate over `(element, degree)` entries in no particular order.
    ///
    /// The entries are snapshotted into a buffer because the map's own iterator is
    /// not double-ended. Use [`FuzzySet::as_map`] to walk the entries without it.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self
                .data
                .iter()
                .map(|(k, v)| (k, *v))
                .collect::<Vec<_>>()
                .into_iter(),
        }
    }

    pub fn iter_mut(&mut self) -> hash_map::IterMut<'_, T, f64> {
        self.data.iter_mut()
    }

    /// Standard union (max). Elements missing on one side count as 0, so they keep
    /// the degree they have on the other side.
    pub fn unite(&mut self, other: &Self) -> &mut Self {
        for (k, v) in other.data.iter() {
            self.data
                .entry(k.clone())
                .and_modify(|x| *x = x.max(*v))
                .or_insert(*v);
        }
        self
    }

    /// Standard intersection (min). Elements missing on either side count as 0 and
    /// are dropped.
    pub fn intersect(&mut self, other: &Self) -> &mut Self {
        self.data.retain(|k, v| match other.data.get(k) {
            Some(o) => {
                *v = v.min(*o);
                true
            }
            None => false,
        });
        self
    }

    /// Standard complement (1 - x) over the stored elements only. Absent elements
    /// are not turned into degree 1.
    pub fn complement(&mut self) -> &mut Self {
        for v in self.data.values_mut() {
            *v = 1f64 - *v;
        }
        self
    }

    /// Pointwise implication `self -> other` over the union of both key sets.
    ///
    /// A consequent missing from `other` reads as 0. An antecedent missing from
    /// `self` is undefined and always yields 0, whatever the formula.
    pub fn implicate(&mut self, other: &Self, implication: ImplicationType) -> &mut Self {
        let missing = other
            .data
            .keys()
            .filter(|k| !self.data.contains_key(*k))
            .cloned()
            .collect::<Vec<T>>();

        for (k, a) in self.data.iter_mut() {
            let b = other.get(k).unwrap_or(0f64);
            *a = implication.apply(*a, b);
        }
        for k in missing {
            self.data.insert(k, 0f64);
        }
        self
    }

    pub fn union(&self, other: &Self) -> Self {
        let mut result = self.clone();
        result.unite(other);
        result
    }

    pub fn intersection(&self, other: &Self) -> Self {
        let mut result = self.clone();
        result.intersect(other);
        result
    }

    pub fn complementation(&self) -> Self {
        let mut result = self.clone();
        result.complement();
        result
    }

    pub fn implication(&self, other: &Self, implication: ImplicationType) -> Self {
        let mut result = self.clone();
        result.implicate(other, implication);
        result
    }
}

/// Two sets are equal when they hold the same elements with degrees that agree up
/// to [`crate::membership::TOLERANCE`].
impl<T: Element> PartialEq for FuzzySet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.data.len() == other.data.len()
            && self
                .data
                .iter()
                .all(|(k, v)| matches!(other.data.get(k), Some(o) if degree_eq(*v, *o)))
    }
}

impl<T: Element> FromIterator<(T, f64)> for FuzzySet<T> {
    fn from_iter<I: IntoIterator<Item = (T, f64)>>(iter: I) -> Self {
        let mut set = FuzzySet::new();
        set.extend(iter);
        set
    }
}

impl<T: Element> Extend<(T, f64)> for FuzzySet<T> {
    fn extend<I: IntoIterator<Item = (T, f64)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl<T: Element, const N: usize> From<[(T, f64); N]> for FuzzySet<T> {
    fn from(data: [(T, f64); N]) -> Self {
        data.into_iter().collect()
    }
}

impl<T: Element> From<Vec<(T, f64)>> for FuzzySet<T> {
    fn from(data: Vec<(T, f64)>) -> Self {
        data.into_iter().collect()
    }
}

impl<T: Element> From<HashMap<T, f64>> for FuzzySet<T> {
    fn from(data: HashMap<T, f64>) -> Self {
        data.into_iter().collect()
    }
}

/// Double-ended iterator over the entries of a [`FuzzySet`].
#[derive(Clone)]
pub struct Iter<'a, T> {
    inner: std::vec::IntoIter<(&'a T, f64)>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = (&'a T, f64);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T: Element> IntoIterator for &'a FuzzySet<T> {
    type Item = (&'a T, f64);
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Element> IntoIterator for FuzzySet<T> {
    type Item = (T, f64);
    type IntoIter = hash_map::IntoIter<T, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<T: Element> AddAssign<&FuzzySet<T>> for FuzzySet<T> {
    fn add_assign(&mut self, rhs: &FuzzySet<T>) {
        self.unite(rhs);
    }
}

impl<T: Element> MulAssign<&FuzzySet<T>> for FuzzySet<T> {
    fn mul_assign(&mut self, rhs: &FuzzySet<T>) {
        self.intersect(rhs);
    }
}

impl<T: Element> Add for &FuzzySet<T> {
    type Output = FuzzySet<T>;

    fn add(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

impl<T: Element> Mul for &FuzzySet<T> {
    type Output = FuzzySet<T>;

    fn mul(self, rhs: Self) -> Self::Output {
        self.intersection(rhs)
    }
}

impl<T: Element> Neg for FuzzySet<T> {
    type Output = FuzzySet<T>;

    fn neg(mut self) -> Self::Output {
        self.complement();
        self
    }
}

impl<T: Element> Neg for &FuzzySet<T> {
    type Output = FuzzySet<T>;

    fn neg(self) -> Self::Output {
        self.complementation()
    }
}
