//! Storable constraint documents.
//!
//! A [`ConstraintDocument`] names a built constraint and carries it across
//! the wire to the evaluation backend as JSON.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::ast::Constraint;
use crate::error::{Error, Result};
use crate::metadata::MissionModel;
use crate::validation::validate_constraint;

/// A named constraint, as stored and exchanged.
///
/// # Examples
///
/// ```
/// use mission_constraints::builder::{Constraint, Session};
/// use mission_constraints::ConstraintDocument;
///
/// let session = Session::new();
/// let c = Constraint::forbidden_activity_overlap(&session, "PeelBanana", "BiteBanana");
/// let doc = ConstraintDocument::new("no peeling while biting", c)
///     .with_description("Peeling and biting never overlap");
///
/// let json = doc.to_json().unwrap();
/// assert_eq!(ConstraintDocument::from_json(&json).unwrap(), doc);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConstraintDocument {
    /// Document name.
    pub name: String,
    /// Optional free-text description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The constraint tree.
    pub constraint: Constraint,
}

impl ConstraintDocument {
    /// Creates a document from a name and a built constraint.
    pub fn new(name: impl Into<String>, constraint: impl Into<Constraint>) -> Self {
        Self {
            name: name.into(),
            description: None,
            constraint: constraint.into(),
        }
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Compact JSON encoding.
    pub fn to_json(&self) -> Result<String> {
        let json = serde_json::to_string(self)?;
        debug!(name = %self.name, bytes = json.len(), "encoded constraint document");
        Ok(json)
    }

    /// Indented JSON encoding.
    pub fn to_json_pretty(&self) -> Result<String> {
        let json = serde_json::to_string_pretty(self)?;
        debug!(name = %self.name, bytes = json.len(), "encoded constraint document");
        Ok(json)
    }

    /// Decodes a document. Unknown `kind` tags are rejected.
    pub fn from_json(json: &str) -> Result<Self> {
        let doc: Self = serde_json::from_str(json)?;
        debug!(name = %doc.name, "decoded constraint document");
        Ok(doc)
    }

    /// Runs the structural checks of [`crate::validation`], against `model`
    /// when given.
    pub fn validate(&self, model: Option<&dyn MissionModel>) -> Result<()> {
        validate_constraint(&self.constraint, model).map_err(|errors| Error::Invalid {
            name: self.name.clone(),
            errors,
        })
    }
}
