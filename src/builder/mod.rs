//! Fluent builders for constraint ASTs.
//!
//! Each builder wraps one AST node. Calling a method never changes an
//! existing node: it moves the node into a freshly built parent and returns
//! a builder for that parent, so trees are assembled bottom-up.
//!
//! # Entry Points
//!
//! - [`Constraint::for_each_activity`] / [`Constraint::forbidden_activity_overlap`]
//! - [`Windows::all`] / [`Windows::any`], then `.violations()`
//! - [`Real::resource`] / [`Real::value`], [`Discrete::resource`] / [`Discrete::value`]
//!
//! # Example
//!
//! ```
//! use mission_constraints::builder::{Constraint, Discrete, Real, Session, Windows};
//!
//! let session = Session::new();
//!
//! // No peeling while the fruit level is low, unless the flag is raised.
//! let c = Constraint::for_each_activity(&session, "PeelBanana", |peel| {
//!     Windows::any([
//!         Real::resource("/fruit").greater_than_or_equal(2.0),
//!         Discrete::<String>::resource("/flag").equal("A"),
//!     ])
//!     .when(peel.window())
//!     .violations()
//! });
//!
//! assert_eq!(c.node().bound_aliases(), vec!["activity alias 0"]);
//! ```

mod activity;
mod constraint;
mod discrete;
mod real;
mod session;
mod windows;

pub use activity::ActivityInstance;
pub use constraint::Constraint;
pub use discrete::{Discrete, DiscreteOperand, DiscreteValue};
pub use real::{Real, RealOperand};
pub use session::{Session, SessionConfig};
pub use windows::{Spans, Windows};
