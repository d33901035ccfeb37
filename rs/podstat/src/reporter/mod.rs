mod error;
#[cfg(test)]
mod mock;
mod reporter;
mod source;

pub use error::ReporterError;
pub use reporter::{is_running_on_node, normalize_namespaces, ReportRow, ReportSummary, Reporter};
pub use source::PodSource;
