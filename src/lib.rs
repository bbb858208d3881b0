//! Constraint language for mission planning.
//!
//! Builds abstract syntax trees for temporal constraints over mission
//! resources and activities. Trees are constructed with fluent builders,
//! serialized to JSON and evaluated elsewhere, against a simulated plan.
//! Nothing in this crate evaluates a constraint.
//!
//! # Modules
//!
//! - **`builder`**: Fluent entry points: `Windows`, `Spans`, `Real`,
//!   `Discrete`, `ActivityInstance`, `Constraint`, and the alias `Session`
//! - **`ast`**: Tagged node model and its wire format
//! - **`interval`**: Reference interval algebra for windows and spans
//! - **`metadata`**: Mission-model contract (activity types, resources, parameters)
//! - **`validation`**: Scoping and mission-model checks on built trees
//! - **`document`**: Named, storable constraints
//!
//! # Example
//!
//! ```
//! use mission_constraints::builder::{Constraint, Real, Session, Windows};
//! use mission_constraints::ConstraintDocument;
//!
//! let session = Session::new();
//! let c = Constraint::for_each_activity(&session, "BiteBanana", |bite| {
//!     Windows::all([
//!         Real::resource("/fruit").greater_than(0.0),
//!         Real::resource("/fruit").rate().less_than_or_equal(0.0),
//!     ])
//!     .when(bite.window())
//!     .violations()
//! });
//!
//! let doc = ConstraintDocument::new("fruit while biting", c);
//! assert!(doc.validate(None).is_ok());
//! ```
//!
//! # Time
//!
//! Durations are signed microsecond counts ([`interval::Duration`]).

pub mod ast;
pub mod builder;
pub mod document;
pub mod error;
pub mod interval;
pub mod metadata;
pub mod validation;

pub use builder::{
    ActivityInstance, Constraint, Discrete, DiscreteOperand, DiscreteValue, Real, RealOperand,
    Session, SessionConfig, Spans, Windows,
};
pub use document::ConstraintDocument;
pub use error::{Error, Result};
