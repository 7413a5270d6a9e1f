pub mod marker_scanner;
pub mod run_splitter;
pub mod footnote_collector;

pub use marker_scanner::{scan_markers, MarkerScan, MarkerOccurrence};
pub use run_splitter::{split_runs, clamped_footnote, SplitError};
pub use footnote_collector::FootnoteCollector;
