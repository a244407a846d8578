use clap::ValueEnum;

/// Shared output mode across all commands.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON.
    Json,
    /// Single-line JSON.
    Raw,
}

/// Global flags that command handlers need. Logging flags are consumed in `main`.
#[derive(Clone, Debug)]
pub struct GlobalFlags {
    pub format: OutputFormat,
}
