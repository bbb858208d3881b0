//! Mission-model metadata contract.
//!
//! Activity type names, resource names and parameter schemas come from the
//! mission model and are generated outside this crate. The core depends on
//! them only through two capabilities:
//!
//! - [`ActivityType`]: names an activity type and binds its parameter
//!   accessors to an alias. Generated code implements it per activity type;
//!   plain strings implement it with the untyped [`ParameterAccessors`].
//! - [`MissionModel`]: answers existence and kind queries for validation.
//!   [`MissionModelSchema`] is a serde-loadable implementation.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::marker::PhantomData;

use crate::ast::{DiscreteProfileExpression, RealProfileExpression};
use crate::builder::{Discrete, DiscreteValue, Real};

/// An activity type token.
///
/// `bind_parameters` is called once per `ForEachActivity`, with the fresh
/// alias, to build the parameter accessors exposed on the bound
/// [`crate::builder::ActivityInstance`].
pub trait ActivityType {
    /// Parameter accessors bound to one alias.
    type Parameters;

    /// The type name as the evaluator knows it.
    fn name(&self) -> &str;

    /// Builds parameter accessors referencing `alias`.
    fn bind_parameters(&self, alias: &str) -> Self::Parameters;
}

/// An activity type known only by name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActivityTypeName(pub String);

impl ActivityTypeName {
    /// Creates a type token from a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

impl ActivityType for ActivityTypeName {
    type Parameters = ParameterAccessors;

    fn name(&self) -> &str {
        &self.0
    }

    fn bind_parameters(&self, alias: &str) -> ParameterAccessors {
        ParameterAccessors::new(alias)
    }
}

impl ActivityType for &str {
    type Parameters = ParameterAccessors;

    fn name(&self) -> &str {
        self
    }

    fn bind_parameters(&self, alias: &str) -> ParameterAccessors {
        ParameterAccessors::new(alias)
    }
}

impl ActivityType for String {
    type Parameters = ParameterAccessors;

    fn name(&self) -> &str {
        self
    }

    fn bind_parameters(&self, alias: &str) -> ParameterAccessors {
        ParameterAccessors::new(alias)
    }
}

/// Untyped parameter accessors: any parameter name, caller-chosen type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterAccessors {
    alias: String,
}

impl ParameterAccessors {
    /// Creates accessors for the activity bound to `alias`.
    pub fn new(alias: impl Into<String>) -> Self {
        Self {
            alias: alias.into(),
        }
    }

    /// The alias these accessors reference.
    pub fn alias(&self) -> &str {
        &self.alias
    }

    /// A real-valued parameter as a constant profile.
    pub fn real(&self, name: impl Into<String>) -> Real {
        Real::from_node(RealProfileExpression::Parameter {
            alias: self.alias.clone(),
            name: name.into(),
        })
    }

    /// A discrete parameter as a constant profile of schema `S`.
    pub fn discrete<S: DiscreteValue>(&self, name: impl Into<String>) -> Discrete<S> {
        Discrete::from_node(DiscreteProfileExpression::Parameter {
            alias: self.alias.clone(),
            name: name.into(),
        })
    }
}

/// A typed parameter accessor, for use in generated parameter structs.
///
/// ```
/// use mission_constraints::builder::Discrete;
/// use mission_constraints::metadata::DiscreteParameter;
///
/// let peel_direction: DiscreteParameter<String> =
///     DiscreteParameter::new("activity alias 0", "peelDirection");
/// let profile: Discrete<String> = peel_direction.profile();
/// # let _ = profile;
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscreteParameter<S> {
    alias: String,
    name: String,
    schema: PhantomData<fn() -> S>,
}

impl<S: DiscreteValue> DiscreteParameter<S> {
    /// Creates an accessor for parameter `name` of the activity bound to `alias`.
    pub fn new(alias: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            alias: alias.into(),
            name: name.into(),
            schema: PhantomData,
        }
    }

    /// The parameter as a constant discrete profile.
    pub fn profile(&self) -> Discrete<S> {
        ParameterAccessors::new(self.alias.clone()).discrete(self.name.clone())
    }
}

// ================================
// Validation-side metadata
// ================================

/// Kind of a resource or parameter profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    /// Read through `Real` nodes.
    Real,
    /// Read through `Discrete` nodes.
    Discrete,
}

/// Existence and kind queries against a mission model.
pub trait MissionModel {
    /// Whether the activity type exists.
    fn has_activity_type(&self, activity_type: &str) -> bool;

    /// Kind of the named resource, or `None` if it does not exist.
    fn resource_kind(&self, name: &str) -> Option<ResourceKind>;

    /// Kind of a parameter of an activity type, or `None` if either is unknown.
    fn parameter_kind(&self, activity_type: &str, parameter: &str) -> Option<ResourceKind>;
}

/// An activity type's declared parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityTypeSchema {
    /// Parameter name → kind.
    #[serde(default)]
    pub parameters: BTreeMap<String, ResourceKind>,
}

/// Mission-model metadata loaded from data.
///
/// # Examples
///
/// ```
/// use mission_constraints::metadata::{MissionModel, MissionModelSchema, ResourceKind};
///
/// let model: MissionModelSchema = serde_json::from_str(r#"{
///     "activityTypes": {"PeelBanana": {"parameters": {"peelDirection": "discrete"}}},
///     "resources": {"/fruit": "real", "/flag": "discrete"}
/// }"#).unwrap();
///
/// assert!(model.has_activity_type("PeelBanana"));
/// assert_eq!(model.resource_kind("/flag"), Some(ResourceKind::Discrete));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MissionModelSchema {
    /// Activity type name → schema.
    #[serde(default)]
    pub activity_types: BTreeMap<String, ActivityTypeSchema>,
    /// Resource name → kind.
    #[serde(default)]
    pub resources: BTreeMap<String, ResourceKind>,
}

impl MissionModelSchema {
    /// Creates an empty model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an activity type with no parameters.
    pub fn with_activity_type(mut self, name: impl Into<String>) -> Self {
        self.activity_types.entry(name.into()).or_default();
        self
    }

    /// Adds a parameter, creating the activity type if needed.
    pub fn with_parameter(
        mut self,
        activity_type: impl Into<String>,
        parameter: impl Into<String>,
        kind: ResourceKind,
    ) -> Self {
        self.activity_types
            .entry(activity_type.into())
            .or_default()
            .parameters
            .insert(parameter.into(), kind);
        self
    }

    /// Adds a resource.
    pub fn with_resource(mut self, name: impl Into<String>, kind: ResourceKind) -> Self {
        self.resources.insert(name.into(), kind);
        self
    }
}

impl MissionModel for MissionModelSchema {
    fn has_activity_type(&self, activity_type: &str) -> bool {
        self.activity_types.contains_key(activity_type)
    }

    fn resource_kind(&self, name: &str) -> Option<ResourceKind> {
        self.resources.get(name).copied()
    }

    fn parameter_kind(&self, activity_type: &str, parameter: &str) -> Option<ResourceKind> {
        self.activity_types
            .get(activity_type)
            .and_then(|t| t.parameters.get(parameter))
            .copied()
    }
}
