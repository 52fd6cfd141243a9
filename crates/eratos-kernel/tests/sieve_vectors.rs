//! Integration tests: run the sieve against recorded vectors.
//!
//! Each fixture in tests/fixtures/ has:
//! - case.json: the bound, an optional step budget, and the value-1 mode
//! - expect.json: cursor, primes, family tags, and full statistics
//!
//! A `null` step budget means run to completion.

use eratos_kernel::{SieveConfig, SieveEngine};
use serde_json::{Map, Value, json};
use std::path::PathBuf;

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn observe(engine: &SieveEngine) -> Value {
    let table = engine.table();
    let primes: Vec<u64> = table.primes().collect();

    let mut families = Map::new();
    for &p in &primes {
        let entry = table.get(p).expect("prime should have an entry");
        if !entry.families().is_empty() {
            families.insert(p.to_string(), json!(entry.families()));
        }
    }

    json!({
        "steps": engine.steps_taken(),
        "cursor": engine.cursor(),
        "primes": primes,
        "families": families,
        "stats": engine.summarize(),
    })
}

fn run_fixture(name: &str) {
    let dir = fixtures_dir().join(name);

    let case_path = dir.join("case.json");
    let expect_path = dir.join("expect.json");

    let case_str = std::fs::read_to_string(&case_path)
        .unwrap_or_else(|e| panic!("failed to read {}: {e}", case_path.display()));
    let expect_str = std::fs::read_to_string(&expect_path)
        .unwrap_or_else(|e| panic!("failed to read {}: {e}", expect_path.display()));

    let case: Value = serde_json::from_str(&case_str)
        .unwrap_or_else(|e| panic!("failed to parse {}: {e}", case_path.display()));
    let expected: Value = serde_json::from_str(&expect_str)
        .unwrap_or_else(|e| panic!("failed to parse {}: {e}", expect_path.display()));

    let config = SieveConfig {
        bound: case["bound"].as_i64().expect("missing bound field"),
        one_is_prime: case["oneIsPrime"].as_bool().unwrap_or(false),
        ..SieveConfig::default()
    };
    let mut engine = SieveEngine::with_config(&config).expect("fixture bound should be valid");

    match case["steps"].as_u64() {
        Some(steps) => {
            for _ in 0..steps {
                engine.step();
            }
        }
        None => {
            engine.run_to_completion();
        }
    }

    let observed = observe(&engine);
    assert_eq!(
        observed,
        expected,
        "\n\nFixture: {name}\n\nGot:\n{}\n\nExpected:\n{}\n",
        serde_json::to_string_pretty(&observed).unwrap(),
        serde_json::to_string_pretty(&expected).unwrap(),
    );
}

#[test]
fn ten_complete() {
    run_fixture("ten_complete");
}

#[test]
fn ten_sentinel_one() {
    run_fixture("ten_sentinel_one");
}

#[test]
fn thirty_partial() {
    run_fixture("thirty_partial");
}

#[test]
fn hundred_complete() {
    run_fixture("hundred_complete");
}
