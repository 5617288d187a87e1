use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// Cucumber JSON report(s) to aggregate (default: report.input, data/cucumber.json)
    #[arg(value_name = "REPORT")]
    pub inputs: Vec<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct RenderArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Page to write (default: report.output, output.html)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Page title (default: page.title)
    #[arg(long, value_name = "TEXT")]
    pub title: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct PayloadArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Write the payload to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Indent the JSON output
    #[arg(long)]
    pub pretty: bool,
}

#[derive(Args, Debug, Clone)]
pub struct DotArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Write the digraph to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct InspectArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Write the dump to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Indent the JSON output
    #[arg(long)]
    pub pretty: bool,
}
