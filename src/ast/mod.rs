//! Constraint AST node model.
//!
//! A closed set of tagged node shapes in five families. Nodes are plain
//! immutable data: building, serializing and printing them never runs a
//! constraint. The JSON form (a `kind` discriminant plus camelCase fields
//! per node) is the wire contract with the evaluation backend.
//!
//! | Family | Denotes | Root builder |
//! |--------|---------|--------------|
//! | [`Constraint`] | violations | [`crate::builder::Constraint`] |
//! | [`WindowsExpression`] | coalesced interval set | [`crate::builder::Windows`] |
//! | [`SpansExpression`] | uncoalesced interval set | [`crate::builder::Spans`] |
//! | [`RealProfileExpression`] | real-valued profile | [`crate::builder::Real`] |
//! | [`DiscreteProfileExpression`] | schema-valued profile | [`crate::builder::Discrete`] |

mod constraint;
mod pretty;
mod profile;
mod windows;

pub use constraint::Constraint;
pub use profile::{DiscreteProfileExpression, ProfileExpression, RealProfileExpression};
pub use windows::{SpansExpression, WindowsExpression};
