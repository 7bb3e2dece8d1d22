use clap::ValueEnum;
use iconrename_core::OutputFormat as CoreOutputFormat;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One `Renamed: <old> → <new>` line per applied rename
    Summary,
    /// A single JSON document describing the whole run
    Json,
}

impl From<OutputFormat> for CoreOutputFormat {
    fn from(arg: OutputFormat) -> Self {
        match arg {
            OutputFormat::Summary => Self::Summary,
            OutputFormat::Json => Self::Json,
        }
    }
}
