use crate::{
    cli::args::{DotArgs, InputArgs, InspectArgs, PayloadArgs, RenderArgs},
    core::{dot::aggregation_to_dot, render::render_page, Aggregation, Aggregator, ReportLoader, StepgraphConfig},
    utils::{to_json_bytes, write_file, write_output},
    Result,
};
use std::path::PathBuf;

/// Reports named on the command line, or the configured default.
fn resolve_inputs(input: &InputArgs, config: &StepgraphConfig) -> Vec<PathBuf> {
    if input.inputs.is_empty() {
        vec![config.report.input.clone()]
    } else {
        input.inputs.clone()
    }
}

/// Load every report in order into one aggregator.
fn aggregate(input: &InputArgs, config: &StepgraphConfig) -> Result<Aggregation> {
    let mut aggregator = Aggregator::new(config.normalize.normalizer());
    let mut transitions = 0;

    for path in resolve_inputs(input, config) {
        tracing::debug!(path = %path.display(), "loading report");
        let report = ReportLoader::load(&path)?;
        if report.is_empty() {
            tracing::warn!(path = %path.display(), "report contains no features");
        }
        transitions += aggregator.ingest(&report);
    }

    let aggregation = aggregator.finish();
    if aggregation.is_empty() {
        tracing::warn!("no step transitions found; every scenario was empty or broken by hooks and undefined steps");
    }
    tracing::info!(
        steps = aggregation.records.len(),
        relationships = aggregation.edges.len(),
        transitions,
        anomalies = aggregation.anomalies,
        "aggregated step transitions"
    );
    Ok(aggregation)
}

pub fn render(args: RenderArgs, config: &StepgraphConfig) -> Result<()> {
    let aggregation = aggregate(&args.input, config)?;

    let mut page = config.page.clone();
    if let Some(title) = args.title {
        page.title = title;
    }
    let payload = aggregation.payload();
    if payload.is_empty() {
        tracing::warn!("the page will not draw any nodes");
    }
    let html = render_page(&payload, &page)?;

    let output = args.output.unwrap_or_else(|| config.report.output.clone());
    write_file(&output, html.as_bytes())?;
    tracing::info!(path = %output.display(), bytes = html.len(), "wrote page");

    println!("DONE, view {}", output.display());
    Ok(())
}

pub fn payload(args: PayloadArgs, config: &StepgraphConfig) -> Result<()> {
    let aggregation = aggregate(&args.input, config)?;
    let bytes = to_json_bytes(&aggregation.payload(), args.pretty)?;
    write_output(args.output.as_deref(), &bytes)?;
    Ok(())
}

pub fn dot(args: DotArgs, config: &StepgraphConfig) -> Result<()> {
    let aggregation = aggregate(&args.input, config)?;
    let dot = aggregation_to_dot(&aggregation);
    write_output(args.output.as_deref(), dot.trim_end().as_bytes())?;
    Ok(())
}

pub fn inspect(args: InspectArgs, config: &StepgraphConfig) -> Result<()> {
    let aggregation = aggregate(&args.input, config)?;
    if aggregation.anomalies > 0 {
        tracing::warn!(
            anomalies = aggregation.anomalies,
            "some step texts normalized shorter than the stored label and were dropped"
        );
    }
    let bytes = to_json_bytes(&aggregation, args.pretty)?;
    write_output(args.output.as_deref(), &bytes)?;
    Ok(())
}
