//! Cucumber JSON report model.
//!
//! Every field is optional and read leniently: a field holding a value of the wrong
//! shape is treated as if it were missing, so a partially malformed report still
//! yields whatever can be used from it.
use crate::lenient;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// Opaque identity of a step definition, taken from `match.location`.
///
/// Scalar locations (strings, numbers, booleans) are kept in their textual form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct StepId(String);

impl StepId {
    pub fn new(value: impl Into<String>) -> Self {
        StepId(value.into())
    }
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for StepId {
    fn from(value: &str) -> Self {
        StepId::new(value)
    }
}

impl From<String> for StepId {
    fn from(value: String) -> Self {
        StepId(value)
    }
}

impl<'de> Deserialize<'de> for StepId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::String(location) => Ok(StepId(location)),
            Value::Number(number) => Ok(StepId(number.to_string())),
            Value::Bool(flag) => Ok(StepId(flag.to_string())),
            Value::Null => Err(D::Error::custom("step location is null")),
            Value::Array(_) | Value::Object(_) => {
                Err(D::Error::custom("step location must be a scalar"))
            }
        }
    }
}

/// A full report: the ordered list of features.
///
/// A top-level value that is not an array deserializes to an empty report.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Report {
    pub features: Vec<Feature>,
}

impl Report {
    /// Build a report from an already parsed JSON document.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Array(items) => Report {
                features: lenient::items_of(items),
            },
            _ => Report::default(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Total number of scenarios across all features, counting only those present.
    pub fn scenario_count(&self) -> usize {
        self.features
            .iter()
            .filter_map(|feature| feature.elements.as_ref())
            .map(Vec::len)
            .sum()
    }
}

impl<'de> Deserialize<'de> for Report {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Report::from_value(Value::deserialize(deserializer)?))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Feature {
    #[serde(default, deserialize_with = "lenient::optional")]
    pub name: Option<String>,
    /// Scenarios (and backgrounds) of the feature.
    #[serde(default, deserialize_with = "lenient::optional_seq")]
    pub elements: Option<Vec<Scenario>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Scenario {
    #[serde(default, deserialize_with = "lenient::optional")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional_seq")]
    pub steps: Option<Vec<Step>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Step {
    #[serde(default, deserialize_with = "lenient::optional")]
    pub name: Option<String>,
    #[serde(default, rename = "match", deserialize_with = "lenient::optional")]
    pub step_match: Option<StepMatch>,
}

impl Step {
    /// Literal step text. Hooks carry no name (or an empty one) and yield `None`.
    pub fn text(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.is_empty())
    }

    /// Resolved step definition identity; `None` for undefined steps.
    pub fn identity(&self) -> Option<&StepId> {
        self.step_match.as_ref()?.location.as_ref()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct StepMatch {
    #[serde(default, deserialize_with = "lenient::optional")]
    pub location: Option<StepId>,
}
