//! End-to-end tests for the `deduce` binary.

mod common;

use common::{deduce, run_script, stderr, stdout};

#[test]
fn test_rules_lists_all_groups() {
    let output = deduce(&["rules"]);
    assert!(output.status.success());

    let text = stdout(&output);
    for id in [
        "empty-context",
        "context-extension",
        "generic-type-formation",
        "unit-formation",
        "empty-formation",
        "product-formation",
        "sum-formation",
        "function-formation",
        "reiteration",
        "unit-intro",
        "product-intro",
    ] {
        assert!(text.contains(id), "missing {id} in:\n{text}");
    }
}

#[test]
fn test_rules_json() {
    let output = deduce(&["rules", "--json"]);
    assert!(output.status.success());

    let groups: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    let names: Vec<&str> = groups
        .as_array()
        .unwrap()
        .iter()
        .map(|g| g["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["context", "type formation", "term construction"]);
    assert_eq!(groups[2]["rules"][2]["arity"], "unary-or-binary");
}

#[test]
fn test_demo_runs() {
    let output = deduce(&["demo"]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert_eq!(text.lines().count(), 12);
    assert!(text.ends_with("12. v_1 : T1 ⊢ (v_1, *) : T1 x 1    [product-intro 10 11]\n"));
}

#[test]
fn test_run_script_file() {
    let output = run_script(
        "empty-context\ngeneric-type-formation 1\ncontext-extension 2\nunit-intro 3\n",
        &[],
    );
    assert!(output.status.success(), "{}", stderr(&output));
    insta::assert_snapshot!(stdout(&output).trim_end(), @r"
    1. · ctx    [empty-context]
    2. · ⊢ T1 type    [generic-type-formation 1]
    3. v_1 : T1 ctx    [context-extension 2]
    4. v_1 : T1 ⊢ * : 1    [unit-intro 3]
    ");
}

#[test]
fn test_run_script_json() {
    let output = run_script("empty-context\nunit-formation 1\n", &["--json"]);
    assert!(output.status.success(), "{}", stderr(&output));

    let derivation: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    let steps = derivation["steps"].as_array().unwrap();
    assert_eq!(steps.len(), 2);
    assert_eq!(steps[1]["rule"], "unit-formation");
    assert_eq!(steps[1]["premises"], serde_json::json!([1]));
    assert_eq!(
        steps[1]["conclusion"],
        serde_json::json!({
            "context": [],
            "declaration": {
                "kind": "type-forming",
                "expression": { "kind": "unit-type" }
            }
        })
    );
}

#[test]
fn test_run_reports_failures() {
    let output = run_script("empty-context\nreiteration 1 1 1\n", &[]);
    assert!(!output.status.success());
    assert!(stdout(&output).is_empty());
    assert!(
        stderr(&output).contains(
            "line 2: reiteration: premise 2 must hold exactly one declaration, it holds 0"
        ),
        "{}",
        stderr(&output)
    );
}

#[test]
fn test_run_missing_file() {
    let output = deduce(&["run", "does/not/exist.ded"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Error reading does/not/exist.ded"));
}
