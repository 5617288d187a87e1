use insta::assert_snapshot;
use serde_json::json;
use stepgraph::core::dot::aggregation_to_dot;
use stepgraph::core::{ingest, Aggregation, ReportLoader};

fn fixture() -> Aggregation {
    let report = ReportLoader::load("tests/fixtures/cucumber.json".as_ref()).unwrap();
    ingest(&report)
}

#[test]
fn payload_pretty_snapshot() {
    let payload = fixture().payload();

    assert_snapshot!(serde_json::to_string_pretty(&payload).unwrap(), @r#"
    {
      "nodes": [
        {
          "id": "steps.js:1",
          "label": "I open ??? page",
          "weight": 2
        },
        {
          "id": "steps.js:5",
          "label": "I enter pin #",
          "weight": 4
        },
        {
          "id": "steps.js:9",
          "label": "I see # alerts",
          "weight": 2
        }
      ],
      "links": [
        {
          "source": "steps.js:1",
          "target": "steps.js:5",
          "weight": 2
        },
        {
          "source": "steps.js:5",
          "target": "steps.js:9",
          "weight": 2
        }
      ]
    }
    "#);
}

#[test]
fn inspect_dump_matches_tables() {
    let dump = serde_json::to_value(fixture()).unwrap();

    assert_eq!(
        dump,
        json!({
            "steps": {
                "steps.js:1": {
                    "count": 2,
                    "raws": ["I open \"home\" page", "I open \"settings\" page"],
                    "normalized": "I open ??? page"
                },
                "steps.js:5": {
                    "count": 4,
                    "raws": ["I enter pin 1234", "I enter pin 1234", "I enter pin 77", "I enter pin 5"],
                    "normalized": "I enter pin #"
                },
                "steps.js:9": {
                    "count": 2,
                    "raws": ["I see 3 alerts", "Done"],
                    "normalized": "I see # alerts"
                }
            },
            "relationships": [
                { "from": "steps.js:1", "to": "steps.js:5", "count": 2 },
                { "from": "steps.js:5", "to": "steps.js:9", "count": 2 }
            ],
            "anomalies": 1
        })
    );
}

#[test]
fn dot_lists_labels_and_counts() {
    let dot = aggregation_to_dot(&fixture());

    assert!(dot.starts_with("digraph {"));
    assert!(dot.contains("I open ??? page"));
    assert!(dot.contains("I enter pin #"));
    assert_eq!(dot.matches("->").count(), 2);
    assert!(dot.contains(r#"label = "2""#));
}

#[test]
fn empty_report_gives_empty_payload() {
    let report = ReportLoader::parse(br#"{"not": "an array"}"#).unwrap();
    let payload = ingest(&report).payload();

    assert!(payload.is_empty());
    assert_snapshot!(serde_json::to_string(&payload).unwrap(), @r#"{"nodes":[],"links":[]}"#);
}
