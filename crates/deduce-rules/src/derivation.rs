//! Step-by-step derivations.
//!
//! A [`Derivation`] records each successful rule application as a numbered
//! step. Later steps refer to earlier conclusions by [`StepId`], which keeps
//! the whole proof tree addressable and printable. The derivation owns the
//! [`NameSupply`] its rules mint from, so two derivations never share names.

use std::fmt;

use deduce_core::{Judgement, NameSupply};
use serde::Serialize;

use crate::error::Inapplicable;
use crate::rule::RuleId;

/// The 1-based number of a step within its derivation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct StepId(usize);

impl StepId {
    /// Create a step id from its 1-based number.
    ///
    /// Returns `None` for 0.
    pub fn new(number: usize) -> Option<Self> {
        (number > 0).then_some(Self(number))
    }

    pub const fn number(self) -> usize {
        self.0
    }

    fn index(self) -> usize {
        self.0 - 1
    }
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One recorded rule application.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Step {
    pub id: StepId,
    pub rule: RuleId,
    pub premises: Vec<StepId>,
    pub conclusion: Judgement,
}

/// An append-only record of rule applications.
#[derive(Debug, Default, Serialize)]
pub struct Derivation {
    #[serde(skip)]
    names: NameSupply,
    steps: Vec<Step>,
}

impl Derivation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply `rule` to the conclusions of `premises` and record the result.
    ///
    /// On failure the derivation is left unchanged. Referring to a step that
    /// does not exist is reported as [`Inapplicable::MalformedInput`].
    pub fn apply(&mut self, rule: RuleId, premises: &[StepId]) -> Result<StepId, Inapplicable> {
        let conclusion = {
            let judgements = premises
                .iter()
                .map(|&id| {
                    self.conclusion(id).ok_or_else(|| Inapplicable::MalformedInput {
                        rule,
                        detail: format!("step {id} does not exist"),
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            rule.rule().apply(&self.names, &judgements)?
        };

        let id = StepId(self.steps.len() + 1);
        tracing::debug!(step = %id, %rule, %conclusion, "Recorded step");
        self.steps.push(Step {
            id,
            rule,
            premises: premises.to_vec(),
            conclusion,
        });
        Ok(id)
    }

    pub fn conclusion(&self, id: StepId) -> Option<&Judgement> {
        self.step(id).map(|step| &step.conclusion)
    }

    pub fn step(&self, id: StepId) -> Option<&Step> {
        self.steps.get(id.index())
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// The most recently recorded step.
    pub fn last(&self) -> Option<&Step> {
        self.steps.last()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}    [{}", self.id, self.conclusion, self.rule)?;
        for premise in &self.premises {
            write!(f, " {premise}")?;
        }
        f.write_str("]")
    }
}

impl fmt::Display for Derivation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for step in &self.steps {
            writeln!(f, "{step}")?;
        }
        Ok(())
    }
}
