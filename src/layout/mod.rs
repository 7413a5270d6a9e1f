pub mod error;
pub mod cover;
pub mod abstracts;
pub mod body;
pub mod references;
pub mod assembler;
pub mod diagnostics;
pub mod stats;

pub use error::{AssemblyError, AssemblyResult};
pub use cover::build_cover;
pub use abstracts::{build_abstract, build_abstract_cn, build_abstract_en, AbstractLanguage};
pub use body::{build_body, build_chapters, build_footnotes};
pub use references::build_references;
pub use assembler::assemble;
pub use diagnostics::{diagnose, FootnoteIssue};
pub use stats::DocumentStats;
