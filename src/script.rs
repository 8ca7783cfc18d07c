//! Derivation scripts.
//!
//! A script is a list of rule applications, one per line:
//!
//! ```text
//! # blank lines and comments are ignored
//! empty-context
//! generic-type-formation 1
//! context-extension 2      # premises are earlier step numbers
//! ```
//!
//! Each non-blank line becomes the next numbered step, so the step number of
//! a line is its position among the non-blank lines. Scripts name rules and
//! steps only; there is no syntax for writing judgements directly.

use deduce_rules::{Derivation, Inapplicable, RuleId, StepId, UnknownRule};
use derive_more::{Display, Error};

/// One parsed line of a script.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Instruction {
    /// 1-based source line.
    pub line: usize,
    pub rule: RuleId,
    pub premises: Vec<StepId>,
}

#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum ScriptError {
    #[display("line {line}: {source}")]
    UnknownRule { line: usize, source: UnknownRule },
    #[display("line {line}: `{token}` is not a step number")]
    BadStep { line: usize, token: String },
    #[display("line {line}: {source}")]
    Inapplicable { line: usize, source: Inapplicable },
}

impl ScriptError {
    /// The 1-based source line the error refers to.
    pub fn line(&self) -> usize {
        match self {
            ScriptError::UnknownRule { line, .. }
            | ScriptError::BadStep { line, .. }
            | ScriptError::Inapplicable { line, .. } => *line,
        }
    }
}

/// Parse a script without applying any rule.
pub fn parse(source: &str) -> Result<Vec<Instruction>, ScriptError> {
    let mut instructions = Vec::new();
    for (index, raw) in source.lines().enumerate() {
        let line = index + 1;
        let text = raw.split_once('#').map_or(raw, |(code, _)| code);
        let mut tokens = text.split_whitespace();
        let Some(name) = tokens.next() else {
            continue;
        };

        let rule = name
            .parse::<RuleId>()
            .map_err(|source| ScriptError::UnknownRule { line, source })?;
        let premises = tokens
            .map(|token| {
                token
                    .parse::<usize>()
                    .ok()
                    .and_then(StepId::new)
                    .ok_or_else(|| ScriptError::BadStep {
                        line,
                        token: token.to_string(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        instructions.push(Instruction {
            line,
            rule,
            premises,
        });
    }
    Ok(instructions)
}

/// Parse and run a script, returning the finished derivation.
///
/// Stops at the first rule that does not apply.
pub fn run(source: &str) -> Result<Derivation, ScriptError> {
    let instructions = parse(source)?;
    let mut derivation = Derivation::new();
    for instruction in &instructions {
        derivation
            .apply(instruction.rule, &instruction.premises)
            .map_err(|source| ScriptError::Inapplicable {
                line: instruction.line,
                source,
            })?;
    }
    tracing::debug!(steps = derivation.len(), "Script finished");
    Ok(derivation)
}
