//! Rule identifiers and arities.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UnknownRule;

/// Identifies one inference rule.
///
/// The textual form is kebab-case, e.g. `product-formation`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RuleId {
    EmptyContext,
    ContextExtension,
    GenericTypeFormation,
    UnitFormation,
    EmptyFormation,
    ProductFormation,
    SumFormation,
    FunctionFormation,
    Reiteration,
    UnitIntro,
    ProductIntro,
}

impl RuleId {
    pub const ALL: [RuleId; 11] = [
        RuleId::EmptyContext,
        RuleId::ContextExtension,
        RuleId::GenericTypeFormation,
        RuleId::UnitFormation,
        RuleId::EmptyFormation,
        RuleId::ProductFormation,
        RuleId::SumFormation,
        RuleId::FunctionFormation,
        RuleId::Reiteration,
        RuleId::UnitIntro,
        RuleId::ProductIntro,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            RuleId::EmptyContext => "empty-context",
            RuleId::ContextExtension => "context-extension",
            RuleId::GenericTypeFormation => "generic-type-formation",
            RuleId::UnitFormation => "unit-formation",
            RuleId::EmptyFormation => "empty-formation",
            RuleId::ProductFormation => "product-formation",
            RuleId::SumFormation => "sum-formation",
            RuleId::FunctionFormation => "function-formation",
            RuleId::Reiteration => "reiteration",
            RuleId::UnitIntro => "unit-intro",
            RuleId::ProductIntro => "product-intro",
        }
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RuleId {
    type Err = UnknownRule;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RuleId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| UnknownRule { name: s.to_string() })
    }
}

/// How many premises a rule accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Arity {
    Exact(usize),
    /// One or two premises; a single premise is used for both operands.
    UnaryOrBinary,
}

impl Arity {
    pub fn accepts(self, count: usize) -> bool {
        match self {
            Arity::Exact(n) => n == count,
            Arity::UnaryOrBinary => count == 1 || count == 2,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arity::Exact(n) => write!(f, "{n}"),
            Arity::UnaryOrBinary => f.write_str("1 or 2"),
        }
    }
}
