//! Side-condition checks shared by every rule.

use deduce_core::{Context, Declaration, Expression, Judgement, JudgementKind, Membership};

use crate::error::{Application, Inapplicable};
use crate::rule::{Arity, RuleId};

/// Require exactly `N` premises.
pub(crate) fn exact<'a, const N: usize>(
    rule: RuleId,
    premises: &[&'a Judgement],
) -> Result<[&'a Judgement; N], Inapplicable> {
    <[&Judgement; N]>::try_from(premises).map_err(|_| Inapplicable::ArityMismatch {
        rule,
        expected: Arity::Exact(N),
        found: premises.len(),
    })
}

/// Require one or two premises. A lone premise stands for both operands.
pub(crate) fn unary_or_binary<'a>(
    rule: RuleId,
    premises: &[&'a Judgement],
) -> Result<(&'a Judgement, &'a Judgement), Inapplicable> {
    match *premises {
        [only] => Ok((only, only)),
        [first, second] => Ok((first, second)),
        _ => Err(Inapplicable::ArityMismatch {
            rule,
            expected: Arity::UnaryOrBinary,
            found: premises.len(),
        }),
    }
}

fn kind_mismatch(
    rule: RuleId,
    position: usize,
    expected: JudgementKind,
    premise: &Judgement,
) -> Inapplicable {
    Inapplicable::KindMismatch {
        rule,
        position,
        expected,
        found: premise.kind(),
    }
}

fn malformed(rule: RuleId, position: usize, detail: impl std::fmt::Display) -> Inapplicable {
    Inapplicable::MalformedInput {
        rule,
        detail: format!("premise {position}: {detail}"),
    }
}

fn check_membership(rule: RuleId, position: usize, membership: &Membership) -> Result<(), Inapplicable> {
    if !membership.term().is_term() {
        return Err(malformed(
            rule,
            position,
            format_args!("`{}` is a {}, not a term", membership.term(), membership.term().kind()),
        ));
    }
    check_type(rule, position, membership.ty())
}

fn check_type(rule: RuleId, position: usize, ty: &Expression) -> Result<(), Inapplicable> {
    if ty.is_type() {
        Ok(())
    } else {
        Err(malformed(
            rule,
            position,
            format_args!("`{ty}` is a {}, not a type", ty.kind()),
        ))
    }
}

/// Judgements built through the public constructors can pair terms and types
/// arbitrarily; rule outputs never do. Reject the ones no rule could produce.
fn check_well_formed(rule: RuleId, position: usize, premise: &Judgement) -> Result<(), Inapplicable> {
    for entry in premise.context().entries() {
        check_membership(rule, position, entry)?;
    }
    match premise.declaration() {
        None => Ok(()),
        Some(Declaration::TypeForming { expression }) => check_type(rule, position, expression),
        Some(Declaration::Membership(membership)) => check_membership(rule, position, membership),
    }
}

/// A context-judgement premise, yielding its context.
pub(crate) fn context_premise<'a>(
    rule: RuleId,
    position: usize,
    premise: &'a Judgement,
) -> Result<&'a Context, Inapplicable> {
    if !premise.is_context_judgement() {
        return Err(kind_mismatch(rule, position, JudgementKind::Context, premise));
    }
    check_well_formed(rule, position, premise)?;
    Ok(premise.context())
}

/// A type-formation premise, yielding the type it forms.
pub(crate) fn type_premise<'a>(
    rule: RuleId,
    position: usize,
    premise: &'a Judgement,
) -> Result<&'a Expression, Inapplicable> {
    let Some(ty) = premise.formed_type() else {
        return Err(kind_mismatch(rule, position, JudgementKind::TypeFormation, premise));
    };
    check_well_formed(rule, position, premise)?;
    Ok(ty)
}

/// A membership premise, yielding its declaration.
pub(crate) fn membership_premise<'a>(
    rule: RuleId,
    position: usize,
    premise: &'a Judgement,
) -> Result<&'a Membership, Inapplicable> {
    let Some(membership) = premise.membership_declaration() else {
        return Err(kind_mismatch(rule, position, JudgementKind::Membership, premise));
    };
    check_well_formed(rule, position, premise)?;
    Ok(membership)
}

/// The context two premises share.
pub(crate) fn shared_context<'a>(
    rule: RuleId,
    first: &'a Judgement,
    second: &Judgement,
) -> Result<&'a Context, Inapplicable> {
    if first.context() == second.context() {
        Ok(first.context())
    } else {
        Err(Inapplicable::ContextMismatch { rule })
    }
}

/// Form a combined type from one or two type-formation judgements.
///
/// Both premises must be type-formation judgements over structurally equal
/// contexts. The result declares `combine(A, B)` over that context. A single
/// premise is combined with itself.
pub fn combine_types(
    rule: RuleId,
    premises: &[&Judgement],
    combine: fn(Expression, Expression) -> Expression,
) -> Application {
    let (left, right) = unary_or_binary(rule, premises)?;
    let first = type_premise(rule, 1, left)?;
    let second = type_premise(rule, 2, right)?;
    let context = shared_context(rule, left, right)?;
    Ok(Judgement::type_formation(
        context.clone(),
        combine(first.clone(), second.clone()),
    ))
}
