//! Term-construction rules.

use deduce_core::{Expression, Judgement, Membership, NameSupply};

use crate::engine::{context_premise, exact, membership_premise, shared_context, unary_or_binary};
use crate::error::{Application, Inapplicable};
use crate::rule::RuleId;

/// From `Γ ctx`, `x : A ctx`, and `Δ ctx`, conclude `Γ, x : A, Δ ⊢ x : A`.
///
/// The middle premise isolates the hypothesis being reiterated, so its
/// context must hold exactly one declaration.
pub fn reiteration(_names: &NameSupply, premises: &[&Judgement]) -> Application {
    let rule = RuleId::Reiteration;
    let [gamma, singleton, delta] = exact::<3>(rule, premises)?;
    let gamma = context_premise(rule, 1, gamma)?;
    let singleton = context_premise(rule, 2, singleton)?;
    let delta = context_premise(rule, 3, delta)?;

    let [hypothesis] = singleton.entries() else {
        return Err(Inapplicable::StructuralPrecondition {
            rule,
            detail: format!(
                "premise 2 must hold exactly one declaration, it holds {}",
                singleton.len()
            ),
        });
    };

    let context = gamma.concat(singleton).concat(delta);
    Ok(Judgement::membership(context, hypothesis.clone()))
}

/// From `Γ ctx`, conclude `Γ ⊢ * : 1`.
pub fn unit_intro(_names: &NameSupply, premises: &[&Judgement]) -> Application {
    let rule = RuleId::UnitIntro;
    let [premise] = exact::<1>(rule, premises)?;
    let context = context_premise(rule, 1, premise)?;
    Ok(Judgement::membership(
        context.clone(),
        Membership::new(Expression::unit_value(), Expression::UnitType),
    ))
}

/// From `Γ ⊢ a : A` and `Γ ⊢ b : B`, conclude `Γ ⊢ (a, b) : A x B`.
///
/// A single premise is paired with itself.
pub fn product_intro(_names: &NameSupply, premises: &[&Judgement]) -> Application {
    let rule = RuleId::ProductIntro;
    let (left, right) = unary_or_binary(rule, premises)?;
    let first = membership_premise(rule, 1, left)?;
    let second = membership_premise(rule, 2, right)?;
    let context = shared_context(rule, left, right)?;

    let term = Expression::pair(first.term().clone(), second.term().clone());
    let ty = Expression::product(first.ty().clone(), second.ty().clone());
    Ok(Judgement::membership(context.clone(), Membership::new(term, ty)))
}
