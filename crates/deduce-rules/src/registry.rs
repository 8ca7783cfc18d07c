//! Rule descriptors, grouped for discovery.

use deduce_core::{Judgement, NameSupply};
use serde::Serialize;

use crate::error::Application;
use crate::rule::{Arity, RuleId};
use crate::rules;

/// The signature shared by every rule function.
pub type RuleFn = fn(&NameSupply, &[&Judgement]) -> Application;

/// An inference rule together with its descriptive metadata.
#[derive(Debug, Serialize)]
pub struct Rule {
    pub id: RuleId,
    pub name: &'static str,
    pub description: &'static str,
    pub arity: Arity,
    #[serde(skip)]
    apply: RuleFn,
}

impl Rule {
    /// Apply this rule to `premises`, minting fresh names from `names`.
    pub fn apply(&self, names: &NameSupply, premises: &[&Judgement]) -> Application {
        let result = (self.apply)(names, premises);
        match &result {
            Ok(conclusion) => tracing::trace!(
                rule = %self.id,
                premises = premises.len(),
                %conclusion,
                "Rule applied"
            ),
            Err(reason) => tracing::trace!(
                rule = %self.id,
                premises = premises.len(),
                %reason,
                "Rule does not apply"
            ),
        }
        result
    }
}

impl RuleId {
    /// The descriptor of this rule.
    pub fn rule(self) -> &'static Rule {
        match self {
            RuleId::EmptyContext => &EMPTY_CONTEXT,
            RuleId::ContextExtension => &CONTEXT_EXTENSION,
            RuleId::GenericTypeFormation => &GENERIC_TYPE_FORMATION,
            RuleId::UnitFormation => &UNIT_FORMATION,
            RuleId::EmptyFormation => &EMPTY_FORMATION,
            RuleId::ProductFormation => &PRODUCT_FORMATION,
            RuleId::SumFormation => &SUM_FORMATION,
            RuleId::FunctionFormation => &FUNCTION_FORMATION,
            RuleId::Reiteration => &REITERATION,
            RuleId::UnitIntro => &UNIT_INTRO,
            RuleId::ProductIntro => &PRODUCT_INTRO,
        }
    }
}

pub static EMPTY_CONTEXT: Rule = Rule {
    id: RuleId::EmptyContext,
    name: "Empty Context",
    description: "The empty context is well-formed.",
    arity: Arity::Exact(0),
    apply: rules::empty_context,
};

pub static CONTEXT_EXTENSION: Rule = Rule {
    id: RuleId::ContextExtension,
    name: "Context Extension",
    description: "Extend the context of a type-formation judgement with a fresh variable of that type.",
    arity: Arity::Exact(1),
    apply: rules::context_extension,
};

pub static GENERIC_TYPE_FORMATION: Rule = Rule {
    id: RuleId::GenericTypeFormation,
    name: "Generic Type",
    description: "Form a fresh abstract base type in a well-formed context.",
    arity: Arity::Exact(1),
    apply: rules::generic_type_formation,
};

pub static UNIT_FORMATION: Rule = Rule {
    id: RuleId::UnitFormation,
    name: "Unit Type",
    description: "Form the unit type 1 in a well-formed context.",
    arity: Arity::Exact(1),
    apply: rules::unit_formation,
};

pub static EMPTY_FORMATION: Rule = Rule {
    id: RuleId::EmptyFormation,
    name: "Empty Type",
    description: "Form the empty type 0 in a well-formed context.",
    arity: Arity::Exact(1),
    apply: rules::empty_formation,
};

pub static PRODUCT_FORMATION: Rule = Rule {
    id: RuleId::ProductFormation,
    name: "Product Type",
    description: "Get a product type from two type-formation judgements with the same context.",
    arity: Arity::UnaryOrBinary,
    apply: rules::product_formation,
};

pub static SUM_FORMATION: Rule = Rule {
    id: RuleId::SumFormation,
    name: "Sum Type",
    description: "Get a sum type from two type-formation judgements with the same context.",
    arity: Arity::UnaryOrBinary,
    apply: rules::sum_formation,
};

pub static FUNCTION_FORMATION: Rule = Rule {
    id: RuleId::FunctionFormation,
    name: "Function Type",
    description: "Get a function type from two type-formation judgements with the same context.",
    arity: Arity::UnaryOrBinary,
    apply: rules::function_formation,
};

pub static REITERATION: Rule = Rule {
    id: RuleId::Reiteration,
    name: "Reiteration",
    description: "Reiterate the single hypothesis of the middle context inside the surrounding contexts.",
    arity: Arity::Exact(3),
    apply: rules::reiteration,
};

pub static UNIT_INTRO: Rule = Rule {
    id: RuleId::UnitIntro,
    name: "Unit Intro",
    description: "The canonical value * inhabits the unit type in any well-formed context.",
    arity: Arity::Exact(1),
    apply: rules::unit_intro,
};

pub static PRODUCT_INTRO: Rule = Rule {
    id: RuleId::ProductIntro,
    name: "Product Intro",
    description: "Pair two terms with the same context into a term of their product type.",
    arity: Arity::UnaryOrBinary,
    apply: rules::product_intro,
};

/// A named collection of rules.
#[derive(Debug, Serialize)]
pub struct RuleGroup {
    pub name: &'static str,
    pub rules: &'static [&'static Rule],
}

pub static CONTEXT_RULES: [&Rule; 2] = [&EMPTY_CONTEXT, &CONTEXT_EXTENSION];

pub static TYPE_FORMATION_RULES: [&Rule; 6] = [
    &GENERIC_TYPE_FORMATION,
    &UNIT_FORMATION,
    &EMPTY_FORMATION,
    &PRODUCT_FORMATION,
    &SUM_FORMATION,
    &FUNCTION_FORMATION,
];

pub static TERM_CONSTRUCTION_RULES: [&Rule; 3] = [&REITERATION, &UNIT_INTRO, &PRODUCT_INTRO];

pub static RULE_GROUPS: [RuleGroup; 3] = [
    RuleGroup {
        name: "context",
        rules: &CONTEXT_RULES,
    },
    RuleGroup {
        name: "type formation",
        rules: &TYPE_FORMATION_RULES,
    },
    RuleGroup {
        name: "term construction",
        rules: &TERM_CONSTRUCTION_RULES,
    },
];
