//! Rule-base inference on top of the [`fuzzy_logic`] algebra.
//!
//! ```
//! use fuzzy_algebra::{FuzzyEngine, FuzzySet, Settings};
//!
//! let engine = FuzzyEngine::new(Settings::default()).add_rule(
//!     FuzzySet::from([("x1", 0.5), ("x2", 1.0), ("x3", 0.6)]),
//!     FuzzySet::from([("y1", 1.0), ("y2", 0.4)]),
//! );
//! let observed = FuzzySet::from([("x1", 0.6), ("x2", 0.9), ("x3", 0.7)]);
//!
//! let inferred = engine.infer(&observed).unwrap();
//! assert_eq!(inferred, FuzzySet::from([("y1", 0.9), ("y2", 0.5)]));
//! ```

pub mod engine;
pub mod error;
pub mod settings;

pub use engine::{FuzzyEngine, Rule};
pub use error::CustomError;
pub use fuzzy_logic::{
    complementation, composition, implication, intersection, union, FuzzyError, FuzzyRelation,
    FuzzySet, ImplicationType,
};
pub use settings::Settings;
