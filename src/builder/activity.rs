//! Activity instance binding.

use crate::ast::WindowsExpression;
use crate::metadata::ActivityType;

use super::Windows;

/// An activity instance bound to an alias inside a `ForEachActivity`.
///
/// The window builders reference the alias, not a concrete instance: the
/// evaluator resolves it against the enclosing quantifier for every
/// instance of the type.
pub struct ActivityInstance<A: ActivityType> {
    activity_type: A,
    alias: String,
    /// Parameter accessors bound to this instance's alias.
    pub parameters: A::Parameters,
}

impl<A: ActivityType> ActivityInstance<A> {
    /// Binds `activity_type` to `alias`.
    pub fn new(activity_type: A, alias: impl Into<String>) -> Self {
        let alias = alias.into();
        let parameters = activity_type.bind_parameters(&alias);
        Self {
            activity_type,
            alias,
            parameters,
        }
    }

    /// The bound activity type.
    pub fn activity_type(&self) -> &A {
        &self.activity_type
    }

    /// The alias this instance is bound to.
    pub fn alias(&self) -> &str {
        &self.alias
    }

    /// A window for the duration of the activity.
    pub fn window(&self) -> Windows {
        Windows::from_node(WindowsExpression::ActivityWindow {
            alias: self.alias.clone(),
        })
    }

    /// An instantaneous window at the start of the activity.
    pub fn start(&self) -> Windows {
        Windows::from_node(WindowsExpression::StartOf {
            alias: self.alias.clone(),
        })
    }

    /// An instantaneous window at the end of the activity.
    pub fn end(&self) -> Windows {
        Windows::from_node(WindowsExpression::EndOf {
            alias: self.alias.clone(),
        })
    }
}
