//! Human-readable rule listing.

use std::fmt::Write as _;

use deduce_rules::RULE_GROUPS;

/// Render every rule group, one rule per line.
pub fn rules_text() -> String {
    let mut out = String::new();
    for (i, group) in RULE_GROUPS.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let _ = writeln!(out, "{} rules:", group.name);
        for rule in group.rules {
            let _ = writeln!(
                out,
                "  {:<24} [{}] {}: {}",
                rule.id.as_str(),
                rule.arity,
                rule.name,
                rule.description
            );
        }
    }
    out
}
