pub mod paper;
pub mod styled;
pub mod conf;

pub use paper::{Paper, Chapter, Footnote};
pub use styled::{
    Alignment, RunStyle, RunContent, StyledRun, Spacing, Indent, BlockStyle, StyledBlock,
    PageMargins, Document
};
pub use conf::{Conf, LayoutProfile, Margins, FontSet, FontSizes, Labels};
