//! Approximate reasoning with the compositional rule of inference.
//!
//! Both generalized modus ponens and generalized modus tollens go through the
//! Zadeh implication relation `R(x, y) = max(min(A(x), B(y)), 1 - A(x))` of the
//! rule "if A then B", then apply max-min composition in one direction or the other.

use crate::{membership::Element, relation::FuzzyRelation, set::FuzzySet};

/// Zadeh implication relation between `antecedent` and `consequent`.
pub(crate) fn implication_relation<T: Element>(
    antecedent: &FuzzySet<T>,
    consequent: &FuzzySet<T>,
) -> FuzzyRelation<T> {
    FuzzyRelation::cartesian_with(antecedent, consequent, |a, b| a.min(b).max(1f64 - a))
}

/// For every target `t`, `sup over s of min(premise(s), link(s, t))`, 0 when nothing links.
fn sup_min<'a, T, I, F>(targets: I, premise: &FuzzySet<T>, link: F) -> FuzzySet<T>
where
    T: Element + 'a,
    I: Iterator<Item = &'a T>,
    F: Fn(&T, &T) -> Option<f64>,
{
    targets
        .map(|t| {
            let degree = premise
                .as_map()
                .iter()
                .filter_map(|(s, p)| link(s, t).map(|r| p.min(r)))
                .fold(0f64, f64::max);
            (t.clone(), degree)
        })
        .collect()
}

impl<T: Element> FuzzySet<T> {
    /// Generalized modus ponens: given the rule "if `self` then `consequent`" and an
    /// observation `observed` over the antecedent universe, infer
    /// `B'(y) = max_x min(A'(x), R(x, y))` for every element `y` of `consequent`.
    pub fn generalized_modus_ponens(&self, consequent: &Self, observed: &Self) -> Self {
        let relation = implication_relation(self, consequent);
        log::debug!(
            "Modus ponens through a {}x{} implication relation",
            self.len(),
            consequent.len()
        );
        sup_min(consequent.keys(), observed, |x, y| {
            relation.get(&(x.clone(), y.clone()))
        })
    }

    /// Generalized modus tollens: given the rule "if `self` then `consequent`" and an
    /// observation `observed` over the consequent universe, infer
    /// `A'(x) = max_y min(B'(y), R(x, y))` for every element `x` of `self`.
    pub fn generalized_modus_tollens(&self, consequent: &Self, observed: &Self) -> Self {
        let relation = implication_relation(self, consequent);
        log::debug!(
            "Modus tollens through a {}x{} implication relation",
            self.len(),
            consequent.len()
        );
        sup_min(self.keys(), observed, |y, x| {
            relation.get(&(x.clone(), y.clone()))
        })
    }

    /// Image of this set through `relation` under max-min composition:
    /// `B(y) = max_x min(A(x), R(x, y))` for every `y` in the codomain of `relation`.
    pub fn compose(&self, relation: &FuzzyRelation<T>) -> Self {
        sup_min(relation.codomain().into_iter(), self, |x, y| {
            relation.get(&(x.clone(), y.clone()))
        })
    }
}
