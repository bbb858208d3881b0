//! Structural validation of constraint trees.
//!
//! Building never fails, so a tree can reference aliases outside their
//! quantifier or names the mission model does not declare. These checks
//! catch such problems before a document reaches the evaluator. Detects:
//! - Aliases used outside the `ForEachActivity` that binds them
//! - Aliases bound twice in one tree
//! - Equality between a real and a discrete profile
//! - NaN or infinite real literals, which JSON cannot carry
//! - With a [`MissionModel`]: unknown activity types, resources and
//!   parameters, and resources read through the wrong profile kind
//!
//! Negative durations are not rejected here; the evaluator reports them.

use std::collections::HashSet;
use thiserror::Error;
use tracing::{debug, warn};

use crate::ast::{
    Constraint, DiscreteProfileExpression, ProfileExpression, RealProfileExpression,
    SpansExpression, WindowsExpression,
};
use crate::metadata::{MissionModel, ResourceKind};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A node references an alias no enclosing quantifier binds.
    UnboundAlias,
    /// Two quantifiers bind the same alias.
    DuplicateAlias,
    /// An equality compares a real profile with a discrete one.
    MismatchedProfiles,
    /// The mission model has no such activity type.
    UnknownActivityType,
    /// The mission model has no such resource.
    UnknownResource,
    /// A resource or parameter is read through the wrong profile kind.
    ResourceKindMismatch,
    /// The activity type has no such parameter.
    UnknownParameter,
    /// A real literal is NaN or infinite.
    NonFiniteLiteral,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a constraint tree, optionally against a mission model.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with every detected issue.
pub fn validate_constraint(
    constraint: &Constraint,
    model: Option<&dyn MissionModel>,
) -> ValidationResult {
    let mut walker = Walker {
        model,
        scope: Vec::new(),
        bound: HashSet::new(),
        errors: Vec::new(),
    };
    walker.constraint(constraint);

    debug!(errors = walker.errors.len(), "validated constraint");
    if walker.errors.is_empty() {
        Ok(())
    } else {
        Err(walker.errors)
    }
}

struct Walker<'a> {
    model: Option<&'a dyn MissionModel>,
    /// (alias, activity type) of enclosing quantifiers, innermost last.
    scope: Vec<(&'a str, &'a str)>,
    bound: HashSet<&'a str>,
    errors: Vec<ValidationError>,
}

impl<'a> Walker<'a> {
    fn report(&mut self, kind: ValidationErrorKind, message: String) {
        warn!(kind = ?kind, "{}", message);
        self.errors.push(ValidationError::new(kind, message));
    }

    fn constraint(&mut self, node: &'a Constraint) {
        match node {
            Constraint::ViolationsOf { expression } => self.windows(expression),
            Constraint::ForEachActivity {
                activity_type,
                alias,
                expression,
            } => {
                if !self.bound.insert(alias.as_str()) {
                    self.report(
                        ValidationErrorKind::DuplicateAlias,
                        format!("Alias '{alias}' is bound more than once"),
                    );
                }
                if let Some(model) = self.model {
                    if !model.has_activity_type(activity_type) {
                        self.report(
                            ValidationErrorKind::UnknownActivityType,
                            format!("Unknown activity type '{activity_type}'"),
                        );
                    }
                }
                self.scope.push((alias.as_str(), activity_type.as_str()));
                self.constraint(expression);
                self.scope.pop();
            }
        }
    }

    fn windows(&mut self, node: &'a WindowsExpression) {
        match node {
            WindowsExpression::All { expressions } | WindowsExpression::Any { expressions } => {
                for e in expressions {
                    self.windows(e);
                }
            }
            WindowsExpression::Invert { expression } => self.windows(expression),
            WindowsExpression::LongerThan {
                window_expression, ..
            }
            | WindowsExpression::ShorterThan {
                window_expression, ..
            }
            | WindowsExpression::ShiftBy {
                window_expression, ..
            } => self.windows(window_expression),
            WindowsExpression::ActivityWindow { alias }
            | WindowsExpression::StartOf { alias }
            | WindowsExpression::EndOf { alias } => {
                self.resolve(alias);
            }
            WindowsExpression::FromSpans { spans_expression } => match spans_expression.as_ref() {
                SpansExpression::FromWindows { windows_expression } => {
                    self.windows(windows_expression)
                }
            },
            WindowsExpression::LessThan { left, right }
            | WindowsExpression::LessThanOrEqual { left, right }
            | WindowsExpression::GreaterThan { left, right }
            | WindowsExpression::GreaterThanOrEqual { left, right } => {
                self.real(left);
                self.real(right);
            }
            WindowsExpression::Equal { left, right }
            | WindowsExpression::NotEqual { left, right } => {
                if left.is_real() != right.is_real() {
                    self.report(
                        ValidationErrorKind::MismatchedProfiles,
                        "Equality compares a real profile with a discrete profile".to_string(),
                    );
                }
                self.profile(left);
                self.profile(right);
            }
            WindowsExpression::Changes { expression } => self.profile(expression),
            WindowsExpression::Transition { profile, .. } => self.discrete(profile),
        }
    }

    fn profile(&mut self, node: &'a ProfileExpression) {
        match node {
            ProfileExpression::Real(p) => self.real(p),
            ProfileExpression::Discrete(p) => self.discrete(p),
        }
    }

    fn real(&mut self, node: &'a RealProfileExpression) {
        match node {
            RealProfileExpression::Resource { name } => self.resource(name, ResourceKind::Real),
            RealProfileExpression::Value { value } => self.literal("value", *value),
            RealProfileExpression::Parameter { alias, name } => {
                self.parameter(alias, name, ResourceKind::Real)
            }
            RealProfileExpression::Rate { profile } => self.real(profile),
            RealProfileExpression::Times {
                multiplier,
                profile,
            } => {
                self.literal("multiplier", *multiplier);
                self.real(profile);
            }
            RealProfileExpression::Plus { left, right } => {
                self.real(left);
                self.real(right);
            }
        }
    }

    fn discrete(&mut self, node: &'a DiscreteProfileExpression) {
        match node {
            DiscreteProfileExpression::Resource { name } => {
                self.resource(name, ResourceKind::Discrete)
            }
            DiscreteProfileExpression::Value { .. } => {}
            DiscreteProfileExpression::Parameter { alias, name } => {
                self.parameter(alias, name, ResourceKind::Discrete)
            }
        }
    }

    fn literal(&mut self, what: &str, number: f64) {
        if !number.is_finite() {
            self.report(
                ValidationErrorKind::NonFiniteLiteral,
                format!("Real {what} {number} has no JSON encoding"),
            );
        }
    }

    /// Activity type bound to `alias` in the current scope.
    fn resolve(&mut self, alias: &str) -> Option<&'a str> {
        let found = self
            .scope
            .iter()
            .rev()
            .find(|(a, _)| *a == alias)
            .map(|&(_, t)| t);
        if found.is_none() {
            self.report(
                ValidationErrorKind::UnboundAlias,
                format!("Alias '{alias}' is not bound by an enclosing ForEachActivity"),
            );
        }
        found
    }

    fn resource(&mut self, name: &str, expected: ResourceKind) {
        let Some(model) = self.model else {
            return;
        };
        match model.resource_kind(name) {
            None => self.report(
                ValidationErrorKind::UnknownResource,
                format!("Unknown resource '{name}'"),
            ),
            Some(kind) if kind != expected => self.report(
                ValidationErrorKind::ResourceKindMismatch,
                format!("Resource '{name}' is {kind:?} but is read as {expected:?}"),
            ),
            Some(_) => {}
        }
    }

    fn parameter(&mut self, alias: &str, name: &str, expected: ResourceKind) {
        let Some(activity_type) = self.resolve(alias) else {
            return;
        };
        let Some(model) = self.model else {
            return;
        };
        match model.parameter_kind(activity_type, name) {
            None => self.report(
                ValidationErrorKind::UnknownParameter,
                format!("Activity type '{activity_type}' has no parameter '{name}'"),
            ),
            Some(kind) if kind != expected => self.report(
                ValidationErrorKind::ResourceKindMismatch,
                format!(
                    "Parameter '{name}' of '{activity_type}' is {kind:?} but is read as {expected:?}"
                ),
            ),
            Some(_) => {}
        }
    }
}
