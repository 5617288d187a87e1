use crate::cli::Command;

/// Execution contexts that influence how logging is routed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExecutionContext {
    /// The command writes its result to a file; stdout is free for diagnostics.
    FileOutput,
    /// The command streams its result to stdout, which must carry nothing else.
    StdoutStream,
}

impl ExecutionContext {
    /// Returns `true` when console logs must stay off stdout.
    pub fn reserves_stdout(self) -> bool {
        matches!(self, ExecutionContext::StdoutStream)
    }
}

/// Derive the active execution context from a parsed CLI command.
pub fn detect_context(command: &Command) -> ExecutionContext {
    let streams = match command {
        Command::Render(_) => false,
        Command::Payload(args) => args.output.is_none(),
        Command::Dot(args) => args.output.is_none(),
        Command::Inspect(args) => args.output.is_none(),
    };

    if streams {
        ExecutionContext::StdoutStream
    } else {
        ExecutionContext::FileOutput
    }
}
