//! Constraint builder: the entry point of the DSL.

use crate::ast;
use crate::metadata::ActivityType;

use super::{ActivityInstance, Session, Windows};

/// Builds a top-level [`ast::Constraint`].
#[derive(Debug, Clone, PartialEq)]
pub struct Constraint {
    node: ast::Constraint,
}

impl Constraint {
    /// Wraps an existing node.
    pub fn from_node(node: ast::Constraint) -> Self {
        Self { node }
    }

    /// The node built so far.
    pub fn node(&self) -> &ast::Constraint {
        &self.node
    }

    /// Unwraps the node.
    pub fn into_node(self) -> ast::Constraint {
        self.node
    }

    /// Checks a constraint for every instance of an activity type.
    ///
    /// Allocates a fresh alias from `session`, binds an
    /// [`ActivityInstance`] to it and calls `expression` exactly once.
    /// Iterating over the actual instances is the evaluator's job.
    ///
    /// # Examples
    ///
    /// ```
    /// use mission_constraints::builder::{Constraint, Real, Session};
    ///
    /// let session = Session::new();
    /// let c = Constraint::for_each_activity(&session, "PeelBanana", |peel| {
    ///     Real::resource("/fruit").greater_than(2.0).when(peel.window()).violations()
    /// });
    /// # let _ = c;
    /// ```
    pub fn for_each_activity<A, F>(session: &Session, activity_type: A, expression: F) -> Self
    where
        A: ActivityType,
        F: FnOnce(ActivityInstance<A>) -> Constraint,
    {
        let alias = session.next_alias();
        let type_name = activity_type.name().to_string();
        let body = expression(ActivityInstance::new(activity_type, alias.clone()));
        Self::from_node(ast::Constraint::ForEachActivity {
            activity_type: type_name,
            alias,
            expression: Box::new(body.node),
        })
    }

    /// Forbids instances of two activity types from overlapping.
    ///
    /// Composed from two nested [`Constraint::for_each_activity`] calls:
    /// for every pair, the violations of `All(window1, window2).invert()`,
    /// i.e. a violation exactly while both instances hold.
    pub fn forbidden_activity_overlap<A, B>(
        session: &Session,
        activity_type1: A,
        activity_type2: B,
    ) -> Self
    where
        A: ActivityType,
        B: ActivityType,
    {
        Self::for_each_activity(session, activity_type1, |activity1| {
            Self::for_each_activity(session, activity_type2, |activity2| {
                Windows::all([activity1.window(), activity2.window()])
                    .invert()
                    .violations()
            })
        })
    }
}

impl From<Constraint> for ast::Constraint {
    fn from(c: Constraint) -> Self {
        c.node
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::WindowsExpression;

    #[test]
    fn test_for_each_activity_binds_alias() {
        let session = Session::new();
        let c = Constraint::for_each_activity(&session, "PeelBanana", |peel| {
            peel.start().violations()
        });
        assert_eq!(
            c.into_node(),
            ast::Constraint::ForEachActivity {
                activity_type: "PeelBanana".into(),
                alias: "activity alias 0".into(),
                expression: Box::new(ast::Constraint::ViolationsOf {
                    expression: WindowsExpression::StartOf {
                        alias: "activity alias 0".into()
                    },
                }),
            }
        );
    }

    #[test]
    fn test_callback_runs_once() {
        let session = Session::new();
        let mut calls = 0;
        let _ = Constraint::for_each_activity(&session, "BiteBanana", |b| {
            calls += 1;
            b.window().violations()
        });
        assert_eq!(calls, 1);
        assert_eq!(session.allocated(), 1);
    }

    #[test]
    fn test_nested_aliases_are_distinct() {
        let session = Session::new();
        let c = Constraint::for_each_activity(&session, "A", |_| {
            Constraint::for_each_activity(&session, "A", |inner| inner.window().violations())
        });
        let node = c.into_node();
        assert_eq!(
            node.bound_aliases(),
            vec!["activity alias 0", "activity alias 1"]
        );
    }

    #[test]
    fn test_separate_constraints_do_not_reuse_aliases() {
        let session = Session::new();
        let c1 = Constraint::for_each_activity(&session, "A", |a| a.window().violations());
        let c2 = Constraint::for_each_activity(&session, "A", |a| a.window().violations());
        assert_ne!(c1.node().bound_aliases(), c2.node().bound_aliases());
    }

    #[test]
    fn test_forbidden_overlap_shape() {
        let session = Session::new();
        let c = Constraint::forbidden_activity_overlap(&session, "PeelBanana", "BiteBanana");
        let expected = ast::Constraint::ForEachActivity {
            activity_type: "PeelBanana".into(),
            alias: "activity alias 0".into(),
            expression: Box::new(ast::Constraint::ForEachActivity {
                activity_type: "BiteBanana".into(),
                alias: "activity alias 1".into(),
                expression: Box::new(ast::Constraint::ViolationsOf {
                    expression: WindowsExpression::Invert {
                        expression: Box::new(WindowsExpression::All {
                            expressions: vec![
                                WindowsExpression::ActivityWindow {
                                    alias: "activity alias 0".into(),
                                },
                                WindowsExpression::ActivityWindow {
                                    alias: "activity alias 1".into(),
                                },
                            ],
                        }),
                    },
                }),
            }),
        };
        assert_eq!(c.into_node(), expected);
    }
}
