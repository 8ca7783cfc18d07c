//! A built-in derivation that uses every rule at least once.

use deduce_rules::Derivation;

use crate::script::{self, ScriptError};

pub const DEMO_SCRIPT: &str = "\
# Contexts
empty-context                # 1
generic-type-formation 1     # 2
context-extension 2          # 3

# Types over v_1 : T1
unit-formation 3             # 4
empty-formation 3            # 5
sum-formation 4 5            # 6
function-formation 4         # 7
product-formation 6 7        # 8
context-extension 8          # 9

# Terms
reiteration 1 3 1            # 10
unit-intro 3                 # 11
product-intro 10 11          # 12
";

/// Run [`DEMO_SCRIPT`].
pub fn derivation() -> Result<Derivation, ScriptError> {
    script::run(DEMO_SCRIPT)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use deduce_rules::RuleId;

    use super::*;

    #[test]
    fn test_demo_uses_every_rule() {
        let derivation = derivation().unwrap();
        let used: HashSet<RuleId> = derivation.steps().iter().map(|step| step.rule).collect();
        assert_eq!(used, RuleId::ALL.into_iter().collect());
    }

    #[test]
    fn test_demo_derivation() {
        insta::assert_snapshot!(derivation().unwrap().to_string().trim_end(), @r"
        1. · ctx    [empty-context]
        2. · ⊢ T1 type    [generic-type-formation 1]
        3. v_1 : T1 ctx    [context-extension 2]
        4. v_1 : T1 ⊢ 1 type    [unit-formation 3]
        5. v_1 : T1 ⊢ 0 type    [empty-formation 3]
        6. v_1 : T1 ⊢ 1 + 0 type    [sum-formation 4 5]
        7. v_1 : T1 ⊢ 1 -> 1 type    [function-formation 4]
        8. v_1 : T1 ⊢ (1 + 0) x (1 -> 1) type    [product-formation 6 7]
        9. v_1 : T1, v_2 : (1 + 0) x (1 -> 1) ctx    [context-extension 8]
        10. v_1 : T1 ⊢ v_1 : T1    [reiteration 1 3 1]
        11. v_1 : T1 ⊢ * : 1    [unit-intro 3]
        12. v_1 : T1 ⊢ (v_1, *) : T1 x 1    [product-intro 10 11]
        ");
    }
}
