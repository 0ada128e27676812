//! Reference values for `ease_in_out_back`.
//!
//! The fixture was captured from the JavaScript easing equations running on
//! IEEE-754 doubles. Inputs include out-of-range times and custom overshoots.

use backease::ease_in_out_back;
use serde::Deserialize;

const FIXTURE: &str = include_str!("fixtures/ease_in_out_back.json");

#[derive(Debug, Deserialize)]
struct FixtureSet {
    metadata: FixtureMetadata,
    tests: Vec<TestFixture>,
}

#[derive(Debug, Deserialize)]
struct FixtureMetadata {
    #[serde(rename = "crate")]
    crate_name: String,
    reference: String,
}

#[derive(Debug, Deserialize)]
struct TestFixture {
    name: String,
    input: Input,
    expected_output: f64,
    #[serde(default)]
    #[allow(dead_code)]
    notes: Option<String>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
struct Input {
    t: f64,
    b: f64,
    c: f64,
    d: f64,
    #[serde(default)]
    s: Option<f64>,
}

fn load() -> FixtureSet {
    serde_json::from_str(FIXTURE).expect("fixture should be valid JSON")
}

#[test]
fn fixture_metadata() {
    let set = load();
    assert_eq!(set.metadata.crate_name, "backease");
    assert!(set.metadata.reference.contains("easeInOutBack"));
    assert!(!set.tests.is_empty());
}

#[test]
fn matches_reference_values() {
    let set = load();
    let mut failures = Vec::new();

    for case in &set.tests {
        let Input { t, b, c, d, s } = case.input;
        let got = ease_in_out_back(t, b, c, d, s);
        let tol = 1e-12 * case.expected_output.abs().max(1.0);
        if (got - case.expected_output).abs() > tol {
            failures.push(format!(
                "{}: got {got}, expected {}",
                case.name, case.expected_output
            ));
        }
    }

    assert!(failures.is_empty(), "mismatches:\n{}", failures.join("\n"));
}

#[test]
fn reference_covers_both_phases() {
    let set = load();
    let backtrack = set.tests.iter().any(|case| {
        let Input { t, d, .. } = case.input;
        t > 0.0 && t < d / 2.0 && case.expected_output < case.input.b
    });
    let overshoot = set.tests.iter().any(|case| {
        let Input { t, b, c, d, .. } = case.input;
        t > d / 2.0 && t < d && case.expected_output > b + c
    });
    assert!(backtrack, "fixture should include a backtrack sample");
    assert!(overshoot, "fixture should include an overshoot sample");
}
