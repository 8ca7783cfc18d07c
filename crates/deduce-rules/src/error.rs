//! Why a rule does not apply.

use deduce_core::{Judgement, JudgementKind};
use derive_more::{Display, Error};
use serde::Serialize;

use crate::rule::{Arity, RuleId};

/// The outcome of applying a rule.
pub type Application = Result<Judgement, Inapplicable>;

/// A rule's side conditions did not hold.
///
/// This is an ordinary answer, not a fault: it means "this rule does not
/// apply to these premises", and a caller is free to try another rule.
/// Premise positions are 1-based.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error, Serialize)]
#[serde(tag = "reason", rename_all = "kebab-case")]
pub enum Inapplicable {
    #[display("{rule} expects {expected} premise(s), got {found}")]
    ArityMismatch {
        rule: RuleId,
        expected: Arity,
        found: usize,
    },
    #[display("{rule} needs premise {position} to be a {expected}, got a {found}")]
    KindMismatch {
        rule: RuleId,
        position: usize,
        expected: JudgementKind,
        found: JudgementKind,
    },
    #[display("{rule} needs its premises to share one context")]
    ContextMismatch { rule: RuleId },
    #[display("{rule}: {detail}")]
    StructuralPrecondition { rule: RuleId, detail: String },
    #[display("{rule}: malformed input: {detail}")]
    MalformedInput { rule: RuleId, detail: String },
}

impl Inapplicable {
    /// The rule that refused to apply.
    pub fn rule(&self) -> RuleId {
        match self {
            Inapplicable::ArityMismatch { rule, .. }
            | Inapplicable::KindMismatch { rule, .. }
            | Inapplicable::ContextMismatch { rule }
            | Inapplicable::StructuralPrecondition { rule, .. }
            | Inapplicable::MalformedInput { rule, .. } => *rule,
        }
    }
}

/// A rule identifier that names no rule.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
#[display("unknown rule `{name}`")]
pub struct UnknownRule {
    pub name: String,
}
