//! Folds a cucumber report into step records and counted step-to-step transitions.
use crate::core::normalizer::{Normalization, Normalizer};
use indexmap::IndexMap;
use serde::Serialize;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use stepgraph_types::{Report, Scenario, Step, StepId};

/// Accumulated state for one step definition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StepRecord {
    #[serde(rename = "count")]
    pub occurrence_count: u64,
    /// Every literal text seen for the step, in the order seen.
    #[serde(rename = "raws")]
    pub raw_texts: Vec<String>,
    #[serde(rename = "normalized")]
    pub label: String,
}

impl StepRecord {
    fn observe(&mut self, id: &StepId, text: &str, normalizer: &Normalizer) -> bool {
        self.occurrence_count += 1;
        self.raw_texts.push(text.to_string());

        let outcome = normalizer.evaluate(&self.label, text);
        let anomaly = outcome.is_anomaly();
        if let Normalization::Retained { candidate } = &outcome {
            tracing::debug!(
                step = %id,
                candidate = %candidate,
                current = %self.label,
                "difference after normalization; keeping the more descriptive label"
            );
        }
        self.label = outcome.into_label(&self.label);
        anomaly
    }
}

/// A directed transition between two step definitions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Edge {
    pub from: StepId,
    pub to: StepId,
    pub count: u64,
}

/// Owned result of an aggregation run.
///
/// Records are in first-seen order and edges in first-created order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Aggregation {
    #[serde(rename = "steps")]
    pub records: IndexMap<StepId, StepRecord>,
    #[serde(rename = "relationships")]
    pub edges: Vec<Edge>,
    /// Number of times a normalized text was dropped for being shorter than the label.
    pub anomalies: usize,
}

impl Aggregation {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty() && self.edges.is_empty()
    }
}

/// Caller-owned accumulator for step records and transitions.
///
/// One instance may ingest several reports; the tables keep growing until
/// [`Aggregator::finish`] hands them over.
#[derive(Debug, Default)]
pub struct Aggregator {
    normalizer: Normalizer,
    records: IndexMap<StepId, StepRecord>,
    edges: Vec<Edge>,
    edge_index: HashMap<(StepId, StepId), usize>,
    anomalies: usize,
}

impl Aggregator {
    pub fn new(normalizer: Normalizer) -> Self {
        Self {
            normalizer,
            ..Self::default()
        }
    }

    /// Walk features, scenarios and steps in report order and record every usable
    /// consecutive step pair. Returns the number of transitions recorded.
    pub fn ingest(&mut self, report: &Report) -> usize {
        let mut recorded = 0;
        for feature in &report.features {
            let Some(scenarios) = &feature.elements else {
                continue;
            };
            let feature_name = feature.name.as_deref().unwrap_or_default();
            for scenario in scenarios {
                recorded += self.ingest_scenario(feature_name, scenario);
            }
        }
        tracing::debug!(
            features = report.features.len(),
            transitions = recorded,
            steps = self.records.len(),
            "ingested report"
        );
        recorded
    }

    fn ingest_scenario(&mut self, feature_name: &str, scenario: &Scenario) -> usize {
        let Some(steps) = &scenario.steps else {
            return 0;
        };

        let mut recorded = 0;
        for (index, pair) in steps.windows(2).enumerate() {
            match (usable(&pair[0]), usable(&pair[1])) {
                (Some((from, from_text)), Some((to, to_text))) => {
                    self.record_transition(from, from_text, to, to_text);
                    recorded += 1;
                }
                _ => tracing::trace!(
                    feature = feature_name,
                    scenario = scenario.name.as_deref().unwrap_or_default(),
                    step = index + 1,
                    "skipping step pair with a hook or undefined step"
                ),
            }
        }
        recorded
    }

    /// Record one observed transition: both step records, then the edge.
    pub fn record_transition(&mut self, from: &StepId, from_text: &str, to: &StepId, to_text: &str) {
        self.observe(from, from_text);
        self.observe(to, to_text);

        match self.edge_index.entry((from.clone(), to.clone())) {
            Entry::Occupied(slot) => self.edges[*slot.get()].count += 1,
            Entry::Vacant(slot) => {
                slot.insert(self.edges.len());
                self.edges.push(Edge {
                    from: from.clone(),
                    to: to.clone(),
                    count: 1,
                });
            }
        }
    }

    fn observe(&mut self, id: &StepId, text: &str) {
        let record = self.records.entry(id.clone()).or_default();
        if record.observe(id, text, &self.normalizer) {
            self.anomalies += 1;
        }
    }

    pub fn finish(self) -> Aggregation {
        Aggregation {
            records: self.records,
            edges: self.edges,
            anomalies: self.anomalies,
        }
    }
}

fn usable(step: &Step) -> Option<(&StepId, &str)> {
    Some((step.identity()?, step.text()?))
}

/// Aggregate a single report with the default normalizer.
pub fn ingest(report: &Report) -> Aggregation {
    let mut aggregator = Aggregator::default();
    aggregator.ingest(report);
    aggregator.finish()
}
