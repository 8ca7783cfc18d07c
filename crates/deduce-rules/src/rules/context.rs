//! Context-formation rules.

use deduce_core::{Context, Judgement, Membership, NameSupply};

use crate::engine::{exact, type_premise};
use crate::error::Application;
use crate::rule::RuleId;

/// `· ctx`
pub fn empty_context(_names: &NameSupply, premises: &[&Judgement]) -> Application {
    exact::<0>(RuleId::EmptyContext, premises)?;
    Ok(Judgement::context_only(Context::empty()))
}

/// From `Γ ⊢ A type`, conclude `Γ, x : A ctx` for a fresh variable `x`.
pub fn context_extension(names: &NameSupply, premises: &[&Judgement]) -> Application {
    let rule = RuleId::ContextExtension;
    let [premise] = exact::<1>(rule, premises)?;
    let ty = type_premise(rule, 1, premise)?;

    let entry = Membership::new(names.make_variable(), ty.clone());
    Ok(Judgement::context_only(premise.context().add(entry)))
}

#[cfg(test)]
mod tests {
    use deduce_core::{Expression, JudgementKind};

    use super::*;
    use crate::error::Inapplicable;
    use crate::rule::Arity;

    #[test]
    fn test_empty_context_takes_no_premises() {
        let names = NameSupply::new();
        let c0 = empty_context(&names, &[]).unwrap();
        assert!(c0.is_context_judgement());
        assert!(c0.context().is_empty());

        assert_eq!(
            empty_context(&names, &[&c0]),
            Err(Inapplicable::ArityMismatch {
                rule: RuleId::EmptyContext,
                expected: Arity::Exact(0),
                found: 1,
            })
        );
    }

    #[test]
    fn test_extension_binds_fresh_variable() {
        let names = NameSupply::new();
        let tf = Judgement::type_formation(Context::empty(), Expression::base_type("T1"));

        let c1 = context_extension(&names, &[&tf]).unwrap();
        let c2 = context_extension(&names, &[&tf]).unwrap();

        assert_eq!(c1.context().len(), 1);
        assert_eq!(
            c1.context().entries()[0],
            Membership::new(Expression::variable("v_1"), Expression::base_type("T1"))
        );
        assert_eq!(c2.context().entries()[0].term(), &Expression::variable("v_2"));
    }

    #[test]
    fn test_extension_rejects_context_judgement() {
        let names = NameSupply::new();
        let c0 = Judgement::context_only(Context::empty());
        assert_eq!(
            context_extension(&names, &[&c0]),
            Err(Inapplicable::KindMismatch {
                rule: RuleId::ContextExtension,
                position: 1,
                expected: JudgementKind::TypeFormation,
                found: JudgementKind::Context,
            })
        );
        // Nothing was minted by the rejected call.
        assert_eq!(names.make_variable(), Expression::variable("v_1"));
    }

    #[test]
    fn test_extension_arity() {
        let names = NameSupply::new();
        let err = context_extension(&names, &[]).unwrap_err();
        assert!(matches!(err, Inapplicable::ArityMismatch { found: 0, .. }));
    }
}
