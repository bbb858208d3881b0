//! Indented S-expression rendering of AST nodes, for diagnostics.

use std::fmt;

use super::{
    Constraint, DiscreteProfileExpression, ProfileExpression, RealProfileExpression,
    SpansExpression, WindowsExpression,
};

const INDENT: &str = "  ";

trait PrettyPrint {
    /// Renders the node on a new line at `prefix` depth.
    fn pretty_print(&self, prefix: &str) -> String;
}

fn nested(prefix: &str) -> String {
    format!("{prefix}{INDENT}")
}

fn list<T: PrettyPrint>(prefix: &str, op: &str, items: &[T]) -> String {
    let inner = nested(prefix);
    let children: String = items.iter().map(|i| i.pretty_print(&inner)).collect();
    format!("\n{prefix}({op}{children})")
}

fn unary<T: PrettyPrint + ?Sized>(prefix: &str, op: &str, child: &T) -> String {
    format!("\n{prefix}({op}{})", child.pretty_print(&nested(prefix)))
}

fn binary<L: PrettyPrint, R: PrettyPrint>(prefix: &str, op: &str, left: &L, right: &R) -> String {
    let inner = nested(prefix);
    format!(
        "\n{prefix}({op}{}{})",
        left.pretty_print(&inner),
        right.pretty_print(&inner)
    )
}

impl PrettyPrint for Constraint {
    fn pretty_print(&self, prefix: &str) -> String {
        match self {
            Self::ViolationsOf { expression } => unary(prefix, "violations-of", expression),
            Self::ForEachActivity {
                activity_type,
                alias,
                expression,
            } => unary(
                prefix,
                &format!("for-each-activity {activity_type} {alias:?}"),
                expression.as_ref(),
            ),
        }
    }
}

impl PrettyPrint for WindowsExpression {
    fn pretty_print(&self, prefix: &str) -> String {
        match self {
            Self::All { expressions } => list(prefix, "and", expressions),
            Self::Any { expressions } => list(prefix, "or", expressions),
            Self::Invert { expression } => unary(prefix, "not", expression.as_ref()),
            Self::LongerThan {
                window_expression,
                duration,
            } => unary(
                prefix,
                &format!("longer-than {duration}"),
                window_expression.as_ref(),
            ),
            Self::ShorterThan {
                window_expression,
                duration,
            } => unary(
                prefix,
                &format!("shorter-than {duration}"),
                window_expression.as_ref(),
            ),
            Self::ShiftBy {
                window_expression,
                from_start,
                from_end,
            } => unary(
                prefix,
                &format!("shift-by {from_start} {from_end}"),
                window_expression.as_ref(),
            ),
            Self::ActivityWindow { alias } => format!("\n{prefix}(during {alias:?})"),
            Self::StartOf { alias } => format!("\n{prefix}(start-of {alias:?})"),
            Self::EndOf { alias } => format!("\n{prefix}(end-of {alias:?})"),
            Self::FromSpans { spans_expression } => {
                unary(prefix, "windows-of", spans_expression.as_ref())
            }
            Self::LessThan { left, right } => binary(prefix, "<", left, right),
            Self::LessThanOrEqual { left, right } => binary(prefix, "<=", left, right),
            Self::GreaterThan { left, right } => binary(prefix, ">", left, right),
            Self::GreaterThanOrEqual { left, right } => binary(prefix, ">=", left, right),
            Self::Equal { left, right } => binary(prefix, "=", left, right),
            Self::NotEqual { left, right } => binary(prefix, "!=", left, right),
            Self::Changes { expression } => unary(prefix, "changes", expression),
            Self::Transition { profile, from, to } => {
                unary(prefix, &format!("transition {from} {to}"), profile)
            }
        }
    }
}

impl PrettyPrint for SpansExpression {
    fn pretty_print(&self, prefix: &str) -> String {
        match self {
            Self::FromWindows { windows_expression } => {
                unary(prefix, "spans-of", windows_expression.as_ref())
            }
        }
    }
}

impl PrettyPrint for RealProfileExpression {
    fn pretty_print(&self, prefix: &str) -> String {
        match self {
            Self::Resource { name } => format!("\n{prefix}(resource {name})"),
            Self::Value { value } => format!("\n{prefix}(value {value})"),
            Self::Parameter { alias, name } => format!("\n{prefix}(parameter {alias:?} {name})"),
            Self::Rate { profile } => unary(prefix, "rate-of", profile.as_ref()),
            Self::Times {
                multiplier,
                profile,
            } => unary(prefix, &format!("* {multiplier}"), profile.as_ref()),
            Self::Plus { left, right } => binary(prefix, "+", left.as_ref(), right.as_ref()),
        }
    }
}

impl PrettyPrint for DiscreteProfileExpression {
    fn pretty_print(&self, prefix: &str) -> String {
        match self {
            Self::Resource { name } => format!("\n{prefix}(resource {name})"),
            Self::Value { value } => format!("\n{prefix}(value {value})"),
            Self::Parameter { alias, name } => format!("\n{prefix}(parameter {alias:?} {name})"),
        }
    }
}

impl PrettyPrint for ProfileExpression {
    fn pretty_print(&self, prefix: &str) -> String {
        match self {
            Self::Real(p) => p.pretty_print(prefix),
            Self::Discrete(p) => p.pretty_print(prefix),
        }
    }
}

macro_rules! display_via_pretty_print {
    ($($node:ty),*) => {
        $(
            impl fmt::Display for $node {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.pretty_print("").trim_start_matches('\n'))
                }
            }
        )*
    };
}

display_via_pretty_print!(
    Constraint,
    WindowsExpression,
    SpansExpression,
    RealProfileExpression,
    DiscreteProfileExpression,
    ProfileExpression
);
