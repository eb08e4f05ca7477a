//! Free-standing forms of the algebra, usable on sets and relations alike.

use crate::{error::FuzzyError, membership::Element, relation::FuzzyRelation, set::FuzzySet};

/// Union, intersection and complement shared by [`FuzzySet`] and [`FuzzyRelation`].
///
/// Relations only combine when defined over the same pairs, so their `Output` is a
/// `Result`.
pub trait Algebra: Sized {
    type Output;

    fn union(&self, other: &Self) -> Self::Output;
    fn intersection(&self, other: &Self) -> Self::Output;
    fn complementation(&self) -> Self;
}

impl<T: Element> Algebra for FuzzySet<T> {
    type Output = FuzzySet<T>;

    fn union(&self, other: &Self) -> Self::Output {
        FuzzySet::union(self, other)
    }

    fn intersection(&self, other: &Self) -> Self::Output {
        FuzzySet::intersection(self, other)
    }

    fn complementation(&self) -> Self {
        FuzzySet::complementation(self)
    }
}

impl<T: Element> Algebra for FuzzyRelation<T> {
    type Output = Result<FuzzyRelation<T>, FuzzyError>;

    fn union(&self, other: &Self) -> Self::Output {
        FuzzyRelation::union(self, other)
    }

    fn intersection(&self, other: &Self) -> Self::Output {
        FuzzyRelation::intersection(self, other)
    }

    fn complementation(&self) -> Self {
        FuzzyRelation::complementation(self)
    }
}

pub fn union<A: Algebra>(left: &A, right: &A) -> A::Output {
    left.union(right)
}

pub fn intersection<A: Algebra>(left: &A, right: &A) -> A::Output {
    left.intersection(right)
}

pub fn complementation<A: Algebra>(value: &A) -> A {
    value.complementation()
}

pub fn composition<T: Element>(
    left: &FuzzyRelation<T>,
    right: &FuzzyRelation<T>,
) -> Result<FuzzyRelation<T>, FuzzyError> {
    left.composition(right)
}
