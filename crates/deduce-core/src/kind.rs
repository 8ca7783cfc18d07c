//! Tags distinguishing expression and judgement shapes.

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// The shape of an [`Expression`](crate::Expression).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExpressionKind {
    #[display("variable")]
    Variable,
    #[display("base type")]
    BaseType,
    #[display("unit type")]
    UnitType,
    #[display("empty type")]
    EmptyType,
    #[display("product type")]
    ProductType,
    #[display("sum type")]
    SumType,
    #[display("function type")]
    FunctionType,
    #[display("concrete term")]
    ConcreteTerm,
    #[display("pair term")]
    PairTerm,
}

impl ExpressionKind {
    /// Whether expressions of this kind denote types.
    pub const fn is_type(self) -> bool {
        matches!(
            self,
            ExpressionKind::BaseType
                | ExpressionKind::UnitType
                | ExpressionKind::EmptyType
                | ExpressionKind::ProductType
                | ExpressionKind::SumType
                | ExpressionKind::FunctionType
        )
    }

    /// Whether expressions of this kind denote terms.
    pub const fn is_term(self) -> bool {
        !self.is_type()
    }

    /// Binary type formers, whose rendering needs brackets when nested.
    pub const fn is_binary_type(self) -> bool {
        matches!(
            self,
            ExpressionKind::ProductType | ExpressionKind::SumType | ExpressionKind::FunctionType
        )
    }
}

/// The three judgement forms of the calculus.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JudgementKind {
    /// `Γ ctx`
    #[display("context judgement")]
    Context,
    /// `Γ ⊢ A type`
    #[display("type-formation judgement")]
    TypeFormation,
    /// `Γ ⊢ t : A`
    #[display("membership judgement")]
    Membership,
}
