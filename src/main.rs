use clap::Parser;
use stepgraph::core::AppError;
use stepgraph::{cli, logging, Result};

fn main() -> Result<()> {
    let args = cli::Args::parse();
    let _logging = logging::init(&args)?;
    let command = command_name(&args.command);

    cli::run(args).inspect_err(|err| match err.downcast_ref::<AppError>() {
        Some(app_error) => tracing::error!(
            command,
            code = %app_error.code,
            occurred_at = %app_error.occurred_at,
            message = %app_error.message,
            "command failed"
        ),
        None => tracing::error!(command, error = %err, "command failed"),
    })
}

fn command_name(command: &cli::Command) -> &'static str {
    match command {
        cli::Command::Render(_) => "render",
        cli::Command::Payload(_) => "payload",
        cli::Command::Dot(_) => "dot",
        cli::Command::Inspect(_) => "inspect",
    }
}
