use serde_json::{json, Value};
use stepgraph::core::{ingest, Aggregation, Aggregator, Normalizer, ReportLoader};
use stepgraph::types::{Report, StepId};

fn step(name: &str, location: &str) -> Value {
    json!({ "keyword": "Given ", "name": name, "match": { "location": location } })
}

fn report(scenarios: Vec<Vec<Value>>) -> Report {
    let elements: Vec<Value> = scenarios
        .into_iter()
        .map(|steps| json!({ "name": "scenario", "steps": steps }))
        .collect();
    Report::from_value(json!([{ "name": "feature", "elements": elements }]))
}

fn id(location: &str) -> StepId {
    StepId::from(location)
}

fn edge_count(aggregation: &Aggregation, from: &str, to: &str) -> Option<u64> {
    aggregation
        .edges
        .iter()
        .find(|edge| edge.from == id(from) && edge.to == id(to))
        .map(|edge| edge.count)
}

#[test]
fn test_identical_scenarios_share_edges() {
    let scenario = vec![step("a", "s.js:1"), step("b", "s.js:2"), step("c", "s.js:3")];
    let aggregation = ingest(&report(vec![scenario.clone(), scenario]));

    assert_eq!(aggregation.edges.len(), 2);
    assert_eq!(edge_count(&aggregation, "s.js:1", "s.js:2").unwrap(), 2);
    assert_eq!(edge_count(&aggregation, "s.js:2", "s.js:3").unwrap(), 2);
}

#[test]
fn test_hook_breaks_the_chain() {
    let hook = json!({ "keyword": "Before", "match": { "location": "hooks.js:1" } });
    let aggregation = ingest(&report(vec![vec![step("a", "s.js:1"), hook, step("b", "s.js:2")]]));

    assert!(aggregation.is_empty());
    assert_eq!(aggregation.anomalies, 0);
}

#[test]
fn test_undefined_step_breaks_the_chain() {
    let undefined = json!({ "keyword": "When ", "name": "something new" });
    let aggregation = ingest(&report(vec![vec![
        step("a", "s.js:1"),
        step("b", "s.js:2"),
        undefined,
        step("c", "s.js:3"),
        step("d", "s.js:4"),
    ]]));

    let pairs: Vec<(StepId, StepId)> = aggregation
        .edges
        .iter()
        .map(|edge| (edge.from.clone(), edge.to.clone()))
        .collect();
    assert_eq!(
        pairs,
        vec![(id("s.js:1"), id("s.js:2")), (id("s.js:3"), id("s.js:4"))]
    );
}

#[test]
fn test_direction_matters() {
    let aggregation = ingest(&report(vec![
        vec![step("a", "s.js:1"), step("b", "s.js:2")],
        vec![step("b", "s.js:2"), step("a", "s.js:1")],
    ]));

    assert_eq!(aggregation.edges.len(), 2);
    assert!(edge_count(&aggregation, "s.js:2", "s.js:1").is_some());
}

#[test]
fn test_every_edge_endpoint_has_a_record() {
    let report = ReportLoader::load("tests/fixtures/cucumber.json".as_ref()).unwrap();
    let aggregation = ingest(&report);

    for edge in &aggregation.edges {
        for endpoint in [&edge.from, &edge.to] {
            let record = aggregation.records.get(endpoint).unwrap();
            assert!(record.occurrence_count >= 1);
        }
    }
}

#[test]
fn test_fixture_counts() {
    let report = ReportLoader::load("tests/fixtures/cucumber.json".as_ref()).unwrap();
    let aggregation = ingest(&report);

    let pin = aggregation.records.get(&id("steps.js:5")).unwrap();
    assert_eq!(pin.occurrence_count, 4);
    assert_eq!(
        pin.raw_texts,
        vec!["I enter pin 1234", "I enter pin 1234", "I enter pin 77", "I enter pin 5"]
    );
    assert_eq!(pin.label, "I enter pin #");

    let alerts = aggregation.records.get(&id("steps.js:9")).unwrap();
    assert_eq!(alerts.label, "I see # alerts");
    assert_eq!(aggregation.anomalies, 1);
    assert!(aggregation.records.get(&id("hooks.js:3")).is_none());
}

#[test]
fn test_ingestion_is_deterministic() {
    let report = ReportLoader::load("tests/fixtures/cucumber.json".as_ref()).unwrap();
    let first: Aggregation = ingest(&report);
    let second: Aggregation = ingest(&report);

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn test_aggregator_accumulates_across_reports() {
    let mut aggregator = Aggregator::new(Normalizer::default());
    let single = report(vec![vec![step("open 1 tab", "s.js:1"), step("close it", "s.js:2")]]);

    assert_eq!(aggregator.ingest(&single), 1);
    assert_eq!(aggregator.ingest(&single), 1);

    let aggregation = aggregator.finish();
    assert_eq!(aggregation.edges[0].count, 2);
    assert_eq!(aggregation.records[&id("s.js:1")].label, "open # tab");
}

#[test]
fn test_malformed_shapes_are_skipped() {
    let aggregation = ingest(&Report::from_value(json!([
        { "name": "no elements" },
        { "name": "null elements", "elements": null },
        { "name": "bad steps", "elements": [{ "name": "x", "steps": "nope" }] },
        { "name": "ok", "elements": [{ "steps": [step("a", "s.js:1"), 42, step("b", "s.js:2")] }] }
    ])));

    assert!(aggregation.is_empty());
}
