use fuzzy_logic::{implication, Element, FuzzyRelation, FuzzySet};

use crate::{error::CustomError, settings::Settings};

/// A fuzzy rule "if `antecedent` then `consequent`".
#[derive(Clone, Debug)]
pub struct Rule<T> {
    pub antecedent: FuzzySet<T>,
    pub consequent: FuzzySet<T>,
}

impl<T: Element> PartialEq for Rule<T> {
    fn eq(&self, other: &Self) -> bool {
        self.antecedent == other.antecedent && self.consequent == other.consequent
    }
}

/// A rule base evaluated with the compositional rule of inference. The conclusions
/// of the individual rules are aggregated with the standard union.
pub struct FuzzyEngine<T> {
    settings: Settings,
    rules: Vec<Rule<T>>,
}

impl<T: Element> FuzzyEngine<T> {
    pub fn new(settings: Settings) -> Self {
        FuzzyEngine {
            settings,
            rules: vec![],
        }
    }

    pub fn add_rule(mut self, antecedent: FuzzySet<T>, consequent: FuzzySet<T>) -> Self {
        self.rules.push(Rule {
            antecedent,
            consequent,
        });
        self
    }

    pub fn rules(&self) -> &[Rule<T>] {
        &self.rules
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    fn rule(&self, index: usize) -> Result<&Rule<T>, CustomError> {
        self.rules.get(index).ok_or(CustomError::RuleNotFound(index))
    }

    /// Implication relation of rule `index`, built with the configured implication type.
    pub fn relation(&self, index: usize) -> Result<FuzzyRelation<T>, CustomError> {
        let rule = self.rule(index)?;
        Ok(implication(
            &rule.antecedent,
            &rule.consequent,
            self.settings.implication,
        ))
    }

    fn aggregate<F>(&self, conclude: F) -> Result<FuzzySet<T>, CustomError>
    where
        F: Fn(&Rule<T>) -> FuzzySet<T>,
    {
        self.rules
            .iter()
            .enumerate()
            .map(|(i, rule)| {
                let conclusion = conclude(rule);
                log::debug!("Rule {} concluded {:?}", i, conclusion);
                conclusion
            })
            .reduce(|mut acc, x| {
                acc.unite(&x);
                acc
            })
            .ok_or(CustomError::NoRules)
    }

    /// Forward reasoning: generalized modus ponens of every rule on `observation`.
    pub fn infer(&self, observation: &FuzzySet<T>) -> Result<FuzzySet<T>, CustomError> {
        log::info!("Inferring from {} rules", self.rules.len());
        self.aggregate(|rule| {
            rule.antecedent
                .generalized_modus_ponens(&rule.consequent, observation)
        })
    }

    /// Forward reasoning through the configured implication relation of every rule.
    pub fn infer_with_relations(
        &self,
        observation: &FuzzySet<T>,
    ) -> Result<FuzzySet<T>, CustomError> {
        log::info!(
            "Inferring from {} rules with {} implication",
            self.rules.len(),
            self.settings.implication
        );
        self.aggregate(|rule| {
            observation.compose(&implication(
                &rule.antecedent,
                &rule.consequent,
                self.settings.implication,
            ))
        })
    }

    /// Backward reasoning: generalized modus tollens of every rule on `conclusion`.
    pub fn explain(&self, conclusion: &FuzzySet<T>) -> Result<FuzzySet<T>, CustomError> {
        log::info!("Explaining from {} rules", self.rules.len());
        self.aggregate(|rule| {
            rule.antecedent
                .generalized_modus_tollens(&rule.consequent, conclusion)
        })
    }
}
