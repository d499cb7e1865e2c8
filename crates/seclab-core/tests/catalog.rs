#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use serde_json::json;
use seclab_core::{LabError, RiskLevel, ScenarioCatalog, SimulationResult};

const SAMPLE: &str = r#"[
  {"id": "sc-1", "name": "DDoS Drill", "type": "security", "metrics": {"rps": 1000}},
  {
    "id": "sc-2", "name": "Disk Pressure", "type": "reliability",
    "metrics": {"disk_pct": 97, "nodes": ["a", "b"]}, "owner": "sre"
  },
  {"id": "sc-1", "name": "Shadowed", "type": "reliability", "metrics": {}}
]"#;

#[test]
fn keeps_source_order() {
    let cat = ScenarioCatalog::load_from_str(SAMPLE).expect("must parse");
    let ids: Vec<_> = cat.all().iter().map(|s| s.name.as_str()).collect();
    assert_eq!(ids, ["DDoS Drill", "Disk Pressure", "Shadowed"]);
    assert_eq!(cat.len(), 3);
}

#[test]
fn lookup_returns_first_match() {
    let cat = ScenarioCatalog::load_from_str(SAMPLE).unwrap();
    assert_eq!(cat.find("sc-1").unwrap().name, "DDoS Drill");
    assert!(cat.find("SC-1").is_none());

    let err = cat.get("nope").expect_err("must miss");
    assert!(matches!(err, LabError::ScenarioNotFound(ref id) if id == "nope"));
    assert_eq!(err.client_code().as_str(), "NOT_FOUND");
}

#[test]
fn records_are_kept_verbatim() {
    let cat = ScenarioCatalog::load_from_str(SAMPLE).unwrap();
    let v = serde_json::to_value(&cat.records()[1]).unwrap();
    assert_eq!(
        v,
        json!({
            "id": "sc-2",
            "name": "Disk Pressure",
            "type": "reliability",
            "metrics": {"disk_pct": 97, "nodes": ["a", "b"]},
            "owner": "sre"
        })
    );
}

#[test]
fn record_key_order_is_preserved() {
    let src = r#"[{"owner":"sre","id":"a","metrics":{"z":1,"a":2},"type":"security","name":"n"}]"#;
    let cat = ScenarioCatalog::load_from_str(src).unwrap();
    assert_eq!(serde_json::to_string(cat.records()).unwrap(), src);
    assert_eq!(cat.get("a").unwrap().name, "n");
}

#[test]
fn malformed_file_is_rejected() {
    let err = ScenarioCatalog::load_from_str(r#"[{"id": "x", "name": "no type"}]"#)
        .expect_err("missing fields must fail");
    assert_eq!(err.client_code().as_str(), "INTERNAL");

    let err = ScenarioCatalog::load_from_str("{}").expect_err("object is not an array");
    assert_eq!(err.client_code().as_str(), "INTERNAL");
}

#[test]
fn missing_file_is_an_error() {
    let err = ScenarioCatalog::load_from_file("does/not/exist.json").expect_err("must fail");
    assert!(matches!(err, LabError::Internal(_)));
}

#[test]
fn risk_level_follows_type() {
    let cat = ScenarioCatalog::load_from_str(SAMPLE).unwrap();
    assert_eq!(cat.all()[0].risk_level(), RiskLevel::High);
    assert_eq!(cat.all()[1].risk_level(), RiskLevel::Medium);
    assert_eq!(RiskLevel::for_kind("Security"), RiskLevel::Medium);
}

#[test]
fn simulation_result_shape() {
    let cat = ScenarioCatalog::load_from_str(SAMPLE).unwrap();
    let res = SimulationResult::new(cat.get("sc-1").unwrap(), "sim_test".into(), 1.5);
    let v = serde_json::to_value(&res).unwrap();
    assert_eq!(
        v,
        json!({
            "scenario": "DDoS Drill",
            "type": "security",
            "metrics": {"rps": 1000},
            "simulation_id": "sim_test",
            "timestamp": 1.5,
            "analysis": {
                "risk_level": "high",
                "recommendations": ["Increase monitoring", "Review logs", "Check resource usage"]
            }
        })
    );
}
