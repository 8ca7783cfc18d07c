//! Inference rules of the deduce kernel.
//!
//! Every rule consumes previously derived [`Judgement`]s and either returns a
//! new judgement, valid by construction, or reports why it does not apply.
//! Rules never search and never mutate their premises.
//!
//! ```
//! use deduce_core::NameSupply;
//! use deduce_rules::rules::{context_extension, empty_context, generic_type_formation};
//!
//! let names = NameSupply::new();
//! let c0 = empty_context(&names, &[]).unwrap();
//! let t1 = generic_type_formation(&names, &[&c0]).unwrap();
//! let c1 = context_extension(&names, &[&t1]).unwrap();
//! assert_eq!(c1.to_string(), "v_1 : T1 ctx");
//! ```

pub mod derivation;
mod engine;
pub mod error;
pub mod registry;
pub mod rule;
pub mod rules;

pub use deduce_core::Judgement;
pub use derivation::{Derivation, Step, StepId};
pub use engine::combine_types;
pub use error::{Application, Inapplicable, UnknownRule};
pub use registry::{RULE_GROUPS, Rule, RuleGroup};
pub use rule::{Arity, RuleId};
