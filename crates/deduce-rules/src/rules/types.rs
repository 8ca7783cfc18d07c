//! Type-formation rules.

use deduce_core::{Expression, Judgement, NameSupply};

use crate::engine::{combine_types, context_premise, exact};
use crate::error::Application;
use crate::rule::RuleId;

/// From `Γ ctx`, conclude `Γ ⊢ T type` for a fresh base type `T`.
pub fn generic_type_formation(names: &NameSupply, premises: &[&Judgement]) -> Application {
    let rule = RuleId::GenericTypeFormation;
    let [premise] = exact::<1>(rule, premises)?;
    let context = context_premise(rule, 1, premise)?;
    Ok(Judgement::type_formation(context.clone(), names.make_base_type()))
}

/// From `Γ ctx`, conclude `Γ ⊢ 1 type`.
pub fn unit_formation(_names: &NameSupply, premises: &[&Judgement]) -> Application {
    let rule = RuleId::UnitFormation;
    let [premise] = exact::<1>(rule, premises)?;
    let context = context_premise(rule, 1, premise)?;
    Ok(Judgement::type_formation(context.clone(), Expression::UnitType))
}

/// From `Γ ctx`, conclude `Γ ⊢ 0 type`.
pub fn empty_formation(_names: &NameSupply, premises: &[&Judgement]) -> Application {
    let rule = RuleId::EmptyFormation;
    let [premise] = exact::<1>(rule, premises)?;
    let context = context_premise(rule, 1, premise)?;
    Ok(Judgement::type_formation(context.clone(), Expression::EmptyType))
}

/// From `Γ ⊢ A type` and `Γ ⊢ B type`, conclude `Γ ⊢ A x B type`.
pub fn product_formation(_names: &NameSupply, premises: &[&Judgement]) -> Application {
    combine_types(RuleId::ProductFormation, premises, Expression::product)
}

/// From `Γ ⊢ A type` and `Γ ⊢ B type`, conclude `Γ ⊢ A + B type`.
pub fn sum_formation(_names: &NameSupply, premises: &[&Judgement]) -> Application {
    combine_types(RuleId::SumFormation, premises, Expression::sum)
}

/// From `Γ ⊢ A type` and `Γ ⊢ B type`, conclude `Γ ⊢ A -> B type`.
pub fn function_formation(_names: &NameSupply, premises: &[&Judgement]) -> Application {
    combine_types(RuleId::FunctionFormation, premises, Expression::function)
}

#[cfg(test)]
mod tests {
    use deduce_core::{Context, JudgementKind, Membership};

    use super::*;
    use crate::error::Inapplicable;

    fn gamma() -> Context {
        Context::empty().add(Membership::new(
            Expression::variable("v_1"),
            Expression::base_type("T1"),
        ))
    }

    #[test]
    fn test_generic_types_are_fresh() {
        let names = NameSupply::new();
        let c = Judgement::context_only(gamma());
        let a = generic_type_formation(&names, &[&c]).unwrap();
        let b = generic_type_formation(&names, &[&c]).unwrap();

        assert_eq!(a.context(), &gamma());
        assert_eq!(a.formed_type(), Some(&Expression::base_type("T1")));
        assert_eq!(b.formed_type(), Some(&Expression::base_type("T2")));
    }

    #[test]
    fn test_canonical_types_are_shared() {
        let names = NameSupply::new();
        let c = Judgement::context_only(gamma());
        let empty = Judgement::context_only(Context::empty());

        let u1 = unit_formation(&names, &[&c]).unwrap();
        let u2 = unit_formation(&names, &[&empty]).unwrap();
        assert_eq!(u1.formed_type(), u2.formed_type());
        assert_eq!(u1.to_string(), "v_1 : T1 ⊢ 1 type");

        let e = empty_formation(&names, &[&c]).unwrap();
        assert_eq!(e.formed_type(), Some(&Expression::EmptyType));
        // Neither rule mints a base type.
        assert_eq!(names.make_base_type(), Expression::base_type("T1"));
    }

    #[test]
    fn test_formation_needs_a_bare_context_judgement() {
        let names = NameSupply::new();
        let tf = Judgement::type_formation(gamma(), Expression::UnitType);
        for rule in [generic_type_formation, unit_formation, empty_formation] {
            let err = rule(&names, &[&tf]).unwrap_err();
            assert!(
                matches!(
                    err,
                    Inapplicable::KindMismatch {
                        expected: JudgementKind::Context,
                        found: JudgementKind::TypeFormation,
                        ..
                    }
                ),
                "{err:?}"
            );
        }
    }

    #[test]
    fn test_binary_formers() {
        let names = NameSupply::new();
        let a = Judgement::type_formation(gamma(), Expression::base_type("T1"));
        let b = Judgement::type_formation(gamma(), Expression::UnitType);

        let prod = product_formation(&names, &[&a, &b]).unwrap();
        let sum = sum_formation(&names, &[&a, &b]).unwrap();
        let func = function_formation(&names, &[&a, &b]).unwrap();

        assert_eq!(prod.to_string(), "v_1 : T1 ⊢ T1 x 1 type");
        assert_eq!(sum.to_string(), "v_1 : T1 ⊢ T1 + 1 type");
        assert_eq!(func.to_string(), "v_1 : T1 ⊢ T1 -> 1 type");
    }

    #[test]
    fn test_single_premise_matches_doubled_premise() {
        let names = NameSupply::new();
        let a = Judgement::type_formation(gamma(), Expression::base_type("T1"));
        for rule in [product_formation, sum_formation, function_formation] {
            assert_eq!(rule(&names, &[&a]), rule(&names, &[&a, &a]));
        }
    }

    #[test]
    fn test_binary_formers_reject_mismatched_contexts() {
        let names = NameSupply::new();
        let a = Judgement::type_formation(gamma(), Expression::base_type("T1"));
        let b = Judgement::type_formation(Context::empty(), Expression::base_type("T1"));
        let c = Judgement::type_formation(
            Context::empty().add(Membership::new(
                Expression::variable("v_1"),
                Expression::base_type("T2"),
            )),
            Expression::base_type("T1"),
        );

        assert_eq!(
            product_formation(&names, &[&a, &b]),
            Err(Inapplicable::ContextMismatch {
                rule: RuleId::ProductFormation
            })
        );
        assert_eq!(
            sum_formation(&names, &[&a, &c]),
            Err(Inapplicable::ContextMismatch {
                rule: RuleId::SumFormation
            })
        );
    }

    #[test]
    fn test_binary_formers_reject_non_type_premises() {
        let names = NameSupply::new();
        let a = Judgement::type_formation(gamma(), Expression::base_type("T1"));
        let c = Judgement::context_only(gamma());
        let err = function_formation(&names, &[&a, &c]).unwrap_err();
        assert_eq!(
            err,
            Inapplicable::KindMismatch {
                rule: RuleId::FunctionFormation,
                position: 2,
                expected: JudgementKind::TypeFormation,
                found: JudgementKind::Context,
            }
        );
        assert!(matches!(
            product_formation(&names, &[&a, &a, &a]),
            Err(Inapplicable::ArityMismatch { found: 3, .. })
        ));
    }
}
