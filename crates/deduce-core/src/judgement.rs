//! Judgements: a context with an optional declaration.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::context::Context;
use crate::declaration::{Declaration, Membership};
use crate::expression::Expression;
use crate::kind::JudgementKind;

/// A derived fact of the calculus.
///
/// The judgement form is not stored; it follows from the declaration:
/// none makes a context judgement, a type-forming declaration makes a
/// type-formation judgement, and a membership makes a membership judgement.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Judgement {
    context: Context,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    declaration: Option<Declaration>,
}

impl Judgement {
    /// `Γ ctx`
    pub fn context_only(context: Context) -> Self {
        Self {
            context,
            declaration: None,
        }
    }

    pub fn new(context: Context, declaration: Declaration) -> Self {
        Self {
            context,
            declaration: Some(declaration),
        }
    }

    /// `Γ ⊢ A type`
    pub fn type_formation(context: Context, ty: Expression) -> Self {
        Self::new(context, Declaration::type_forming(ty))
    }

    /// `Γ ⊢ t : A`
    pub fn membership(context: Context, membership: Membership) -> Self {
        Self::new(context, Declaration::Membership(membership))
    }

    pub fn context(&self) -> &Context {
        &self.context
    }

    pub fn declaration(&self) -> Option<&Declaration> {
        self.declaration.as_ref()
    }

    pub fn kind(&self) -> JudgementKind {
        match &self.declaration {
            None => JudgementKind::Context,
            Some(Declaration::TypeForming { .. }) => JudgementKind::TypeFormation,
            Some(Declaration::Membership(_)) => JudgementKind::Membership,
        }
    }

    pub fn is_context_judgement(&self) -> bool {
        self.kind() == JudgementKind::Context
    }

    pub fn is_type_formation_judgement(&self) -> bool {
        self.kind() == JudgementKind::TypeFormation
    }

    pub fn is_membership_judgement(&self) -> bool {
        self.kind() == JudgementKind::Membership
    }

    /// The declared type of a type-formation judgement.
    pub fn formed_type(&self) -> Option<&Expression> {
        match &self.declaration {
            Some(Declaration::TypeForming { expression }) => Some(expression),
            _ => None,
        }
    }

    /// The declaration of a membership judgement.
    pub fn membership_declaration(&self) -> Option<&Membership> {
        self.declaration.as_ref().and_then(Declaration::as_membership)
    }
}

impl fmt::Display for Judgement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.declaration {
            None => write!(f, "{} ctx", self.context),
            Some(declaration) => write!(f, "{} ⊢ {declaration}", self.context),
        }
    }
}
