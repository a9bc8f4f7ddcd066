mod markdown;
mod summary;

pub use markdown::{
    parse_markdown, render_markdown, single_line, ParsedReport, ReportParseError, ReportSection,
};
pub use summary::{write_summary_csv, SummaryRow};
