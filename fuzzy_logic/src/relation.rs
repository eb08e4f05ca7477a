use std::collections::{HashMap, HashSet};

use itertools::iproduct;

use crate::{
    error::FuzzyError,
    implication::ImplicationType,
    membership::{accept, degree_eq, Element, Pair},
    set::FuzzySet,
};

/// A discrete fuzzy relation between a domain universe and a codomain universe.
#[derive(Clone, Debug)]
pub struct FuzzyRelation<T> {
    data: HashMap<Pair<T>, f64>,
}

impl<T> Default for FuzzyRelation<T> {
    fn default() -> Self {
        FuzzyRelation {
            data: HashMap::new(),
        }
    }
}

impl<T: Element> FuzzyRelation<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a relation from a dense matrix, `matrix[i][j]` being the degree of
    /// `(rows[i], columns[j])`.
    pub fn from_matrix(
        matrix: &[Vec<f64>],
        rows: &[T],
        columns: &[T],
    ) -> Result<Self, FuzzyError> {
        let ragged = matrix.iter().find(|r| r.len() != columns.len());
        if matrix.len() != rows.len() || ragged.is_some() {
            return Err(FuzzyError::DimensionMismatch {
                rows: matrix.len(),
                columns: ragged.or(matrix.first()).map_or(0, |r| r.len()),
                row_labels: rows.len(),
                column_labels: columns.len(),
            });
        }

        let mut relation = FuzzyRelation::new();
        for (x, row) in rows.iter().zip(matrix.iter()) {
            for (y, v) in columns.iter().zip(row.iter()) {
                relation.insert((x.clone(), y.clone()), *v);
            }
        }
        Ok(relation)
    }

    /// Build the relation `R(x, y) = min(left(x), right(y))` over the Cartesian
    /// product of both key sets.
    pub fn cartesian(left: &FuzzySet<T>, right: &FuzzySet<T>) -> Self {
        Self::cartesian_with(left, right, f64::min)
    }

    /// Build the relation `R(x, y) = rule(left(x), right(y))` over the Cartesian
    /// product of both key sets. Results are clamped to [0, 1], so every pair is kept.
    pub fn cartesian_with<F>(left: &FuzzySet<T>, right: &FuzzySet<T>, rule: F) -> Self
    where
        F: Fn(f64, f64) -> f64,
    {
        let data = iproduct!(left.as_map().iter(), right.as_map().iter())
            .map(|((x, a), (y, b))| ((x.clone(), y.clone()), rule(*a, *b).min(1f64).max(0f64)))
            .collect();
        FuzzyRelation { data }
    }

    /// Insert a pair with degree `value`; same rejection rules as [`FuzzySet::insert`].
    pub fn insert(&mut self, pair: Pair<T>, value: f64) -> bool {
        if !accept(&pair, value, self.data.contains_key(&pair)) {
            return false;
        }
        self.data.insert(pair, value);
        true
    }

    pub fn at(&self, pair: &Pair<T>) -> Result<f64, FuzzyError> {
        self.get(pair)
            .ok_or_else(|| FuzzyError::ElementNotFound(format!("{:?}", pair)))
    }

    pub fn get(&self, pair: &Pair<T>) -> Option<f64> {
        self.data.get(pair).copied()
    }

    pub fn erase(&mut self, pair: &Pair<T>) {
        self.data.remove(pair);
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Pair<T>, f64)> {
        self.data.iter().map(|(k, v)| (k, *v))
    }

    pub fn as_map(&self) -> &HashMap<Pair<T>, f64> {
        &self.data
    }

    /// Elements appearing as first component of some pair.
    pub fn domain(&self) -> HashSet<&T> {
        self.data.keys().map(|(x, _)| x).collect()
    }

    /// Elements appearing as second component of some pair.
    pub fn codomain(&self) -> HashSet<&T> {
        self.data.keys().map(|(_, y)| y).collect()
    }

    /// The inverse relation, `R⁻¹(y, x) = R(x, y)`.
    pub fn transpose(&self) -> Self {
        FuzzyRelation {
            data: self
                .data
                .iter()
                .map(|((x, y), v)| ((y.clone(), x.clone()), *v))
                .collect(),
        }
    }

    fn same_pairs(&self, other: &Self) -> bool {
        self.data.len() == other.data.len()
            && self.data.keys().all(|k| other.data.contains_key(k))
    }

    /// Pointwise max. Both relations must be defined over exactly the same pairs.
    pub fn unite(&mut self, other: &Self) -> Result<&mut Self, FuzzyError> {
        if !self.same_pairs(other) {
            return Err(FuzzyError::OrderMismatch);
        }
        for (k, v) in self.data.iter_mut() {
            if let Some(o) = other.data.get(k) {
                *v = v.max(*o);
            }
        }
        Ok(self)
    }

    /// Pointwise min. Both relations must be defined over exactly the same pairs.
    pub fn intersect(&mut self, other: &Self) -> Result<&mut Self, FuzzyError> {
        if !self.same_pairs(other) {
            return Err(FuzzyError::OrderMismatch);
        }
        for (k, v) in self.data.iter_mut() {
            if let Some(o) = other.data.get(k) {
                *v = v.min(*o);
            }
        }
        Ok(self)
    }

    /// `1 - x` over the stored pairs only.
    pub fn complement(&mut self) -> &mut Self {
        for v in self.data.values_mut() {
            *v = 1f64 - *v;
        }
        self
    }

    pub fn union(&self, other: &Self) -> Result<Self, FuzzyError> {
        let mut result = self.clone();
        result.unite(other)?;
        Ok(result)
    }

    pub fn intersection(&self, other: &Self) -> Result<Self, FuzzyError> {
        let mut result = self.clone();
        result.intersect(other)?;
        Ok(result)
    }

    pub fn complementation(&self) -> Self {
        let mut result = self.clone();
        result.complement();
        result
    }

    /// Max-min composition `self ∘ other`.
    ///
    /// The codomain of `self` must be exactly the domain of `other`.
    pub fn composition(&self, other: &Self) -> Result<Self, FuzzyError> {
        if self.codomain() != other.domain() {
            return Err(FuzzyError::NotComposable);
        }

        let mut successors: HashMap<&T, Vec<(&T, f64)>> = HashMap::new();
        for ((y, z), s) in other.data.iter() {
            successors.entry(y).or_default().push((z, *s));
        }

        let mut data: HashMap<Pair<T>, f64> = HashMap::new();
        for ((x, y), r) in self.data.iter() {
            for (z, s) in successors.get(y).into_iter().flatten() {
                let v = r.min(*s);
                data.entry((x.clone(), (*z).clone()))
                    .and_modify(|best| *best = best.max(v))
                    .or_insert(v);
            }
        }
        log::debug!(
            "Composed {} pairs with {} pairs into {} pairs",
            self.data.len(),
            other.data.len(),
            data.len()
        );

        Ok(FuzzyRelation { data })
    }
}

/// Two relations are equal when they hold the same pairs with degrees that agree up
/// to [`crate::membership::TOLERANCE`].
impl<T: Element> PartialEq for FuzzyRelation<T> {
    fn eq(&self, other: &Self) -> bool {
        self.data.len() == other.data.len()
            && self
                .data
                .iter()
                .all(|(k, v)| matches!(other.data.get(k), Some(o) if degree_eq(*v, *o)))
    }
}

impl<T: Element> FromIterator<(Pair<T>, f64)> for FuzzyRelation<T> {
    fn from_iter<I: IntoIterator<Item = (Pair<T>, f64)>>(iter: I) -> Self {
        let mut relation = FuzzyRelation::new();
        for (k, v) in iter {
            relation.insert(k, v);
        }
        relation
    }
}

impl<T: Element> From<HashMap<Pair<T>, f64>> for FuzzyRelation<T> {
    fn from(data: HashMap<Pair<T>, f64>) -> Self {
        data.into_iter().collect()
    }
}

impl<T: Element, const N: usize> From<[(Pair<T>, f64); N]> for FuzzyRelation<T> {
    fn from(data: [(Pair<T>, f64); N]) -> Self {
        data.into_iter().collect()
    }
}

/// Implication relation over the Cartesian product of `left` and `right`.
///
/// Unlike [`FuzzySet::implicate`], every pair has both degrees so no missing
/// antecedent is special-cased. `ZadehArithmetic` evaluates like `Minimum` here.
pub fn implication<T: Element>(
    left: &FuzzySet<T>,
    right: &FuzzySet<T>,
    kind: ImplicationType,
) -> FuzzyRelation<T> {
    let rule = match kind {
        ImplicationType::ZadehArithmetic => ImplicationType::Minimum,
        other => other,
    };
    FuzzyRelation::cartesian_with(left, right, |a, b| rule.apply(a, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sets() -> (FuzzySet<i32>, FuzzySet<i32>) {
        (
            FuzzySet::from([(1, 0.5), (2, 0.6)]),
            FuzzySet::from([(3, 0.7), (4, 0.8)]),
        )
    }

    fn r() -> FuzzyRelation<i32> {
        FuzzyRelation::from([((1, 3), 0.5), ((1, 4), 0.6), ((2, 3), 0.7), ((2, 4), 0.8)])
    }

    fn s() -> FuzzyRelation<i32> {
        FuzzyRelation::from([((3, 5), 0.9), ((3, 6), 0.8), ((4, 5), 0.7), ((4, 6), 0.6)])
    }

    #[test]
    fn test_from_matrix() {
        let relation = FuzzyRelation::from_matrix(
            &[vec![0.1, 0.2], vec![0.3, 0.4]],
            &["x1", "x2"],
            &["y1", "y2"],
        )
        .unwrap();

        assert_eq!(relation.len(), 4);
        assert_eq!(relation.at(&("x1", "y1")), Ok(0.1));
        assert_eq!(relation.at(&("x1", "y2")), Ok(0.2));
        assert_eq!(relation.at(&("x2", "y1")), Ok(0.3));
        assert_eq!(relation.at(&("x2", "y2")), Ok(0.4));
    }

    #[test]
    fn test_from_matrix_rectangular() {
        let relation =
            FuzzyRelation::from_matrix(&[vec![0.1, 0.2, 0.3]], &[1], &[4, 5, 6]).unwrap();
        assert_eq!(relation.get(&(1, 6)), Some(0.3));
        assert_eq!(relation.domain(), HashSet::from([&1]));
        assert_eq!(relation.codomain(), HashSet::from([&4, &5, &6]));
    }

    #[test]
    fn test_from_matrix_mismatch() {
        let err = FuzzyRelation::from_matrix(&[vec![0.1, 0.2], vec![0.3, 0.4]], &[1, 2, 3], &[4, 5]);
        assert_eq!(
            err,
            Err(FuzzyError::DimensionMismatch {
                rows: 2,
                columns: 2,
                row_labels: 3,
                column_labels: 2,
            })
        );

        let err = FuzzyRelation::from_matrix(&[vec![0.1, 0.2], vec![0.3]], &[1, 2], &[4, 5]);
        assert_eq!(
            err,
            Err(FuzzyError::DimensionMismatch {
                rows: 2,
                columns: 1,
                row_labels: 2,
                column_labels: 2,
            })
        );
    }

    #[test]
    fn test_from_map() {
        let data = HashMap::from([
            ((1, 3), 0.1),
            ((1, 4), 0.2),
            ((2, 3), 0.3),
            ((2, 4), 0.4),
        ]);
        let relation = FuzzyRelation::from(data.clone());
        assert_eq!(relation.as_map(), &data);
    }

    #[test]
    fn test_from_map_skips_invalid() {
        let relation = FuzzyRelation::from([((1, 2), 0.4), ((2, 1), 1.5)]);
        assert_eq!(relation.len(), 1);
        assert_eq!(relation.at(&(2, 1)), Err(FuzzyError::ElementNotFound("(2, 1)".into())));
    }

    #[test]
    fn test_cartesian() {
        let (a, b) = sets();
        let relation = FuzzyRelation::cartesian(&a, &b);

        assert_eq!(relation.len(), 4);
        assert_eq!(relation.get(&(1, 3)), Some(0.5));
        assert_eq!(relation.get(&(1, 4)), Some(0.5));
        assert_eq!(relation.get(&(2, 3)), Some(0.6));
        assert_eq!(relation.get(&(2, 4)), Some(0.6));
    }

    #[test]
    fn test_cartesian_with() {
        let (a, b) = sets();
        let relation = FuzzyRelation::cartesian_with(&a, &b, f64::max);
        assert_eq!(relation.get(&(1, 3)), Some(0.7));
        assert_eq!(relation.get(&(2, 4)), Some(0.8));
    }

    #[test]
    fn test_cartesian_with_clamps() {
        let (a, b) = sets();
        let sum = FuzzyRelation::cartesian_with(&a, &b, |x, y| x + y);
        assert_eq!(sum.len(), 4);
        assert_eq!(sum.get(&(1, 3)), Some(1.0));
        assert_eq!(sum.get(&(2, 4)), Some(1.0));

        let difference = FuzzyRelation::cartesian_with(&a, &b, |x, y| x - y);
        assert_eq!(difference.get(&(1, 4)), Some(0.0));

        let cartesian = FuzzyRelation::cartesian(&a, &b);
        assert_eq!(cartesian.union(&sum).unwrap(), sum);
        assert_eq!(cartesian.intersection(&difference).unwrap(), difference);
    }

    #[test]
    fn test_union_mismatch() {
        let (a, b) = sets();
        let left = FuzzyRelation::cartesian(&a, &b);
        let right = FuzzyRelation::cartesian(&b, &a);

        assert_eq!(left.union(&right), Err(FuzzyError::OrderMismatch));
        assert_eq!(left.intersection(&right), Err(FuzzyError::OrderMismatch));
    }

    #[test]
    fn test_union_intersection() {
        let (a, b) = sets();
        let left = FuzzyRelation::cartesian(&a, &b);
        let right = implication(&a, &b, ImplicationType::ZadehMaxMin);

        assert_eq!(left.union(&right).unwrap(), right);
        assert_eq!(left.intersection(&right).unwrap(), left);
    }

    #[test]
    fn test_complementation() {
        let (a, _) = sets();
        let relation = FuzzyRelation::cartesian(&a, &a);
        let complement = relation.complementation();

        assert_eq!(complement.len(), 4);
        assert_eq!(complement.get(&(1, 1)), Some(0.5));
        assert!(degree_eq(complement.at(&(2, 2)).unwrap(), 0.4));
        assert_eq!(complement.complementation(), relation);
    }

    #[test]
    fn test_composition() {
        let expected =
            FuzzyRelation::from([((1, 5), 0.6), ((1, 6), 0.6), ((2, 5), 0.7), ((2, 6), 0.7)]);
        let composed = r().composition(&s()).unwrap();

        assert_eq!(composed.len(), expected.len());
        assert_eq!(composed.as_map(), expected.as_map());
    }

    #[test]
    fn test_composition_not_composable() {
        let disjoint = FuzzyRelation::from([((7, 5), 0.9), ((8, 6), 0.8)]);
        assert_eq!(r().composition(&disjoint), Err(FuzzyError::NotComposable));

        // partial overlap is not enough either
        let partial = FuzzyRelation::from([((3, 5), 0.9)]);
        assert_eq!(r().composition(&partial), Err(FuzzyError::NotComposable));
    }

    #[test]
    fn test_composition_associative() {
        let t = FuzzyRelation::from([((5, 7), 0.3), ((6, 7), 0.9), ((6, 8), 0.5)]);
        let left = r().composition(&s()).unwrap().composition(&t).unwrap();
        let right = r().composition(&s().composition(&t).unwrap()).unwrap();
        assert_eq!(left, right);
    }

    #[test]
    fn test_transpose() {
        let transposed = r().transpose();
        assert_eq!(transposed.get(&(4, 1)), Some(0.6));
        assert_eq!(transposed.transpose(), r());
        let composed = s().transpose().composition(&r().transpose()).unwrap();
        assert_eq!(composed, r().composition(&s()).unwrap().transpose());
    }

    #[test]
    fn test_equality() {
        let (a, b) = sets();
        let c = FuzzySet::from([(5, 0.9), (6, 1.0)]);

        let first = FuzzyRelation::cartesian(&a, &b);
        let second = FuzzyRelation::cartesian(&a, &b);
        let third = FuzzyRelation::cartesian(&a, &c);

        assert!(first == second);
        assert!(second == first);
        assert!(first != third);
    }

    #[test]
    fn test_equality_tolerance() {
        let base = FuzzyRelation::from([((1, 2), 0.3)]);
        assert_eq!(base, FuzzyRelation::from([((1, 2), 0.3 + 5e-12)]));
        assert_ne!(base, FuzzyRelation::from([((1, 2), 0.3 + 5e-11)]));
        assert_ne!(base, FuzzyRelation::from([((2, 1), 0.3)]));
    }

    #[test]
    fn test_erase() {
        let mut relation = r();
        relation.erase(&(1, 3));
        relation.erase(&(9, 9));
        assert_eq!(relation.len(), 3);
        assert_eq!(relation.get(&(1, 3)), None);
    }

    #[test]
    fn test_implication_minimum() {
        let (a, b) = sets();
        let relation = implication(&a, &b, ImplicationType::Minimum);
        assert_eq!(
            relation,
            FuzzyRelation::from([((1, 3), 0.5), ((1, 4), 0.5), ((2, 3), 0.6), ((2, 4), 0.6)])
        );
    }

    #[test]
    fn test_implication_alg_product() {
        let (a, b) = sets();
        let relation = implication(&a, &b, ImplicationType::AlgebraicProduct);
        assert_eq!(
            relation,
            FuzzyRelation::from([((1, 3), 0.35), ((1, 4), 0.4), ((2, 3), 0.42), ((2, 4), 0.48)])
        );
    }

    #[test]
    fn test_implication_zadeh_max_min() {
        let (a, b) = sets();
        let relation = implication(&a, &b, ImplicationType::ZadehMaxMin);
        assert_eq!(
            relation,
            FuzzyRelation::from([((1, 3), 0.7), ((1, 4), 0.8), ((2, 3), 0.7), ((2, 4), 0.8)])
        );
    }

    #[test]
    fn test_implication_zadeh_arithmetic() {
        let (a, b) = sets();
        let relation = implication(&a, &b, ImplicationType::ZadehArithmetic);
        assert_eq!(
            relation,
            FuzzyRelation::from([((1, 3), 0.5), ((1, 4), 0.5), ((2, 3), 0.6), ((2, 4), 0.6)])
        );
    }
}
