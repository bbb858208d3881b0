//! Constraint root nodes.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::WindowsExpression;

/// A top-level assertion: the only node the evaluator accepts as a named,
/// storable constraint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Constraint {
    /// Violated at every instant where `expression` does not hold.
    ViolationsOf { expression: WindowsExpression },

    /// `expression` must hold for every instance of `activity_type`, with
    /// the instance bound to `alias` while evaluating it.
    ForEachActivity {
        #[serde(rename = "activityType")]
        activity_type: String,
        alias: String,
        expression: Box<Constraint>,
    },
}

impl Constraint {
    /// Every resource name read anywhere in the tree, sorted.
    pub fn referenced_resources(&self) -> BTreeSet<String> {
        let mut names = BTreeSet::new();
        self.collect_resources(&mut names);
        names
    }

    /// Aliases bound by `ForEachActivity` nodes, outermost first.
    pub fn bound_aliases(&self) -> Vec<&str> {
        let mut aliases = Vec::new();
        let mut node = self;
        while let Self::ForEachActivity {
            alias, expression, ..
        } = node
        {
            aliases.push(alias.as_str());
            node = expression.as_ref();
        }
        aliases
    }

    /// The innermost window expression under any quantifiers.
    pub fn body(&self) -> &WindowsExpression {
        match self {
            Self::ViolationsOf { expression } => expression,
            Self::ForEachActivity { expression, .. } => expression.body(),
        }
    }

    fn collect_resources(&self, names: &mut BTreeSet<String>) {
        match self {
            Self::ViolationsOf { expression } => expression.collect_resources(names),
            Self::ForEachActivity { expression, .. } => expression.collect_resources(names),
        }
    }
}
