pub mod output;

pub use output::{
    create_writer, ComparisonReport, JsonWriter, MarkdownWriter, OutputFormat, OutputWriter,
    TerminalWriter,
};
