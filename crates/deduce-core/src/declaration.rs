//! Declarations: the right-hand side of a judgement.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::expression::Expression;

/// A membership fact `t : A`.
///
/// Contexts are sequences of these.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Membership {
    term: Expression,
    #[serde(rename = "type")]
    ty: Expression,
}

impl Membership {
    pub fn new(term: Expression, ty: Expression) -> Self {
        Self { term, ty }
    }

    /// Build a membership whose type is taken from a type-forming declaration.
    ///
    /// Returns `None` if `declaration` is itself a membership. The result is
    /// equal to `Membership::new(term, ty)` for the wrapped type `ty`.
    pub fn of_declaration(term: Expression, declaration: &Declaration) -> Option<Self> {
        match declaration {
            Declaration::TypeForming { expression } => Some(Self::new(term, expression.clone())),
            Declaration::Membership(_) => None,
        }
    }

    pub fn term(&self) -> &Expression {
        &self.term
    }

    pub fn ty(&self) -> &Expression {
        &self.ty
    }
}

impl fmt::Display for Membership {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} : {}", self.term, self.ty)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Declaration {
    /// `A type`
    TypeForming { expression: Expression },
    /// `t : A`
    Membership(Membership),
}

impl Declaration {
    pub fn type_forming(expression: Expression) -> Self {
        Declaration::TypeForming { expression }
    }

    pub fn membership(term: Expression, ty: Expression) -> Self {
        Declaration::Membership(Membership::new(term, ty))
    }

    pub fn as_membership(&self) -> Option<&Membership> {
        match self {
            Declaration::Membership(membership) => Some(membership),
            Declaration::TypeForming { .. } => None,
        }
    }

    /// The type this declaration talks about.
    pub fn ty(&self) -> &Expression {
        match self {
            Declaration::TypeForming { expression } => expression,
            Declaration::Membership(membership) => membership.ty(),
        }
    }
}

impl From<Membership> for Declaration {
    fn from(membership: Membership) -> Self {
        Declaration::Membership(membership)
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Declaration::TypeForming { expression } => write!(f, "{expression} type"),
            Declaration::Membership(membership) => write!(f, "{membership}"),
        }
    }
}
