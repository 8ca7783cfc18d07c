//! Data model of the deduce kernel.
//!
//! Everything here is an immutable value: expressions, declarations,
//! contexts, and judgements. The only mutable state is the [`NameSupply`]
//! that mints fresh variable and base-type names.

pub mod context;
pub mod declaration;
pub mod expression;
pub mod judgement;
pub mod kind;
pub mod names;

pub use context::Context;
pub use declaration::{Declaration, Membership};
pub use expression::Expression;
pub use judgement::Judgement;
pub use kind::{ExpressionKind, JudgementKind};
pub use names::NameSupply;
