//! Shared data types for stepgraph: the cucumber report model read from disk and the
//! graph payload handed to the force-graph viewer.
pub mod payload;
pub mod report;

mod lenient;

pub use payload::{GraphLink, GraphNode, GraphPayload};
pub use report::{Feature, Report, Scenario, Step, StepId, StepMatch};
