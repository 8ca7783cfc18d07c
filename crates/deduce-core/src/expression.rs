//! Type and term expressions.
//!
//! Expressions are immutable trees. Composite nodes share their operands
//! through [`Arc`], so cloning an expression never copies a subtree, and
//! equality is always structural.

use std::fmt;
use std::sync::{Arc, LazyLock};

use serde::{Deserialize, Serialize};

use crate::kind::ExpressionKind;

/// An expression of the calculus, either a type or a term.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Expression {
    /// A term variable bound by a context entry.
    Variable { name: Arc<str> },
    /// An abstract base type.
    BaseType { name: Arc<str> },
    /// The unit type, `1`.
    UnitType,
    /// The empty type, `0`.
    EmptyType,
    ProductType {
        first: Arc<Expression>,
        second: Arc<Expression>,
    },
    SumType {
        first: Arc<Expression>,
        second: Arc<Expression>,
    },
    FunctionType {
        domain: Arc<Expression>,
        codomain: Arc<Expression>,
    },
    /// A named constant term, such as the unit value `*`.
    ConcreteTerm { name: Arc<str> },
    PairTerm {
        first: Arc<Expression>,
        second: Arc<Expression>,
    },
}

static UNIT_VALUE: LazyLock<Expression> = LazyLock::new(|| Expression::ConcreteTerm {
    name: Arc::from("*"),
});

impl Expression {
    pub fn variable(name: impl Into<Arc<str>>) -> Self {
        Expression::Variable { name: name.into() }
    }

    pub fn base_type(name: impl Into<Arc<str>>) -> Self {
        Expression::BaseType { name: name.into() }
    }

    pub fn concrete(name: impl Into<Arc<str>>) -> Self {
        Expression::ConcreteTerm { name: name.into() }
    }

    /// The canonical unit value, `*`.
    ///
    /// Every call returns a handle to the same shared name.
    pub fn unit_value() -> Self {
        UNIT_VALUE.clone()
    }

    pub fn product(first: Expression, second: Expression) -> Self {
        Expression::ProductType {
            first: Arc::new(first),
            second: Arc::new(second),
        }
    }

    pub fn sum(first: Expression, second: Expression) -> Self {
        Expression::SumType {
            first: Arc::new(first),
            second: Arc::new(second),
        }
    }

    pub fn function(domain: Expression, codomain: Expression) -> Self {
        Expression::FunctionType {
            domain: Arc::new(domain),
            codomain: Arc::new(codomain),
        }
    }

    pub fn pair(first: Expression, second: Expression) -> Self {
        Expression::PairTerm {
            first: Arc::new(first),
            second: Arc::new(second),
        }
    }

    pub fn kind(&self) -> ExpressionKind {
        match self {
            Expression::Variable { .. } => ExpressionKind::Variable,
            Expression::BaseType { .. } => ExpressionKind::BaseType,
            Expression::UnitType => ExpressionKind::UnitType,
            Expression::EmptyType => ExpressionKind::EmptyType,
            Expression::ProductType { .. } => ExpressionKind::ProductType,
            Expression::SumType { .. } => ExpressionKind::SumType,
            Expression::FunctionType { .. } => ExpressionKind::FunctionType,
            Expression::ConcreteTerm { .. } => ExpressionKind::ConcreteTerm,
            Expression::PairTerm { .. } => ExpressionKind::PairTerm,
        }
    }

    pub fn is_type(&self) -> bool {
        self.kind().is_type()
    }

    pub fn is_term(&self) -> bool {
        self.kind().is_term()
    }

    /// The name of an atomic expression, if it has one.
    pub fn name(&self) -> Option<&str> {
        match self {
            Expression::Variable { name }
            | Expression::BaseType { name }
            | Expression::ConcreteTerm { name } => Some(name.as_ref()),
            _ => None,
        }
    }
}

/// Renders an operand, bracketing it when it is itself a binary type.
struct Operand<'a>(&'a Expression);

impl fmt::Display for Operand<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.kind().is_binary_type() {
            write!(f, "({})", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Variable { name }
            | Expression::BaseType { name }
            | Expression::ConcreteTerm { name } => f.write_str(name),
            Expression::UnitType => f.write_str("1"),
            Expression::EmptyType => f.write_str("0"),
            Expression::ProductType { first, second } => {
                write!(f, "{} x {}", Operand(first), Operand(second))
            }
            Expression::SumType { first, second } => {
                write!(f, "{} + {}", Operand(first), Operand(second))
            }
            Expression::FunctionType { domain, codomain } => {
                write!(f, "{} -> {}", Operand(domain), Operand(codomain))
            }
            Expression::PairTerm { first, second } => write!(f, "({first}, {second})"),
        }
    }
}
