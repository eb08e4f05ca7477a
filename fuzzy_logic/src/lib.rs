//! Discrete fuzzy sets and fuzzy relations.
//!
//! Sets and relations are sparse: only explicitly assigned elements (or pairs) are
//! stored, every degree lies in [0, 1], and every operation comes in a mutating form
//! (`unite`, `intersect`, `complement`, `implicate`) and a pure one (`union`,
//! `intersection`, `complementation`, `implication`).

pub mod error;
pub mod implication;
pub mod membership;
pub mod ops;
pub mod reasoning;
pub mod relation;
pub mod set;

pub use error::FuzzyError;
pub use implication::ImplicationType;
pub use membership::{Element, Pair, TOLERANCE};
pub use ops::{complementation, composition, intersection, union, Algebra};
pub use relation::{implication, FuzzyRelation};
pub use set::FuzzySet;
