pub mod args;
pub mod commands;

pub use args::{DotArgs, InputArgs, InspectArgs, PayloadArgs, RenderArgs};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{name} {version}\n\
{about-with-newline}\n\
USAGE:\n    {usage}\n\
\nOPTIONS:\n{options}\n\
COMMANDS:\n{subcommands}\n";

#[derive(Parser, Debug)]
#[command(name = "stepgraph")]
#[command(version = crate::VERSION)]
#[command(about = "Step transition graphs from cucumber JSON reports")]
#[command(help_template = HELP_TEMPLATE)]
#[command(
    after_long_help = "Steps are grouped by their step definition location. Each node is labelled with the step text, quoted values replaced by ??? and numbers by #."
)]
pub struct Args {
    /// Configuration file (default: ./stepgraph.toml when present)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG is set
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    #[command(
        about = "Write the interactive force-graph page",
        long_about = "Render aggregates the reports and writes a self-contained HTML page that draws the step graph with d3.",
        after_help = "Example:\n    stepgraph render reports/cucumber.json -o steps.html"
    )]
    Render(RenderArgs),
    #[command(
        about = "Emit the graph payload as JSON",
        long_about = "Payload prints the {nodes, links} document the page is built from.",
        after_help = "Example:\n    stepgraph payload reports/*.json --pretty"
    )]
    Payload(PayloadArgs),
    #[command(
        about = "Emit the graph as Graphviz DOT",
        after_help = "Example:\n    stepgraph dot reports/cucumber.json | dot -Tsvg > steps.svg"
    )]
    Dot(DotArgs),
    #[command(
        about = "Dump step records and relationships",
        long_about = "Inspect prints every step definition with its raw texts and normalized label, every relationship with its count, and how many texts were dropped by the normalizer.",
        after_help = "Example:\n    stepgraph inspect reports/cucumber.json --pretty"
    )]
    Inspect(InspectArgs),
}

pub fn run(args: Args) -> crate::Result<()> {
    let config = crate::core::ConfigLoader::load(args.config.as_deref())?;
    match args.command {
        Command::Render(render_args) => commands::render(render_args, &config),
        Command::Payload(payload_args) => commands::payload(payload_args, &config),
        Command::Dot(dot_args) => commands::dot(dot_args, &config),
        Command::Inspect(inspect_args) => commands::inspect(inspect_args, &config),
    }
}
