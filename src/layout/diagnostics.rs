use std::fmt;

use crate::models::Paper;
use crate::parser::scan_markers;

/// 标记与脚注数量不一致的问题
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FootnoteIssue {
    /// 标记多于脚注，多出的标记沿用最后一条脚注
    Clamped {
        chapter: usize,
        markers: usize,
        footnotes: usize,
    },
    /// 有标记但没有任何脚注，组装会失败
    MissingFootnotes { chapter: usize, markers: usize },
    /// 脚注多于标记，多出的脚注不会出现在文档中
    Unused {
        chapter: usize,
        markers: usize,
        footnotes: usize,
    },
}

impl FootnoteIssue {
    /// 是否会导致组装失败
    pub fn is_fatal(&self) -> bool {
        matches!(self, FootnoteIssue::MissingFootnotes { .. })
    }
}

impl fmt::Display for FootnoteIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FootnoteIssue::Clamped { chapter, markers, footnotes } => write!(
                f,
                "第 {} 章：{} 个标记，{} 条脚注，多出的标记沿用最后一条脚注",
                chapter, markers, footnotes
            ),
            FootnoteIssue::MissingFootnotes { chapter, markers } => {
                write!(f, "第 {} 章：{} 个标记，但没有脚注", chapter, markers)
            }
            FootnoteIssue::Unused { chapter, markers, footnotes } => write!(
                f,
                "第 {} 章：{} 个标记，{} 条脚注，有脚注未被引用",
                chapter, markers, footnotes
            ),
        }
    }
}

/// 逐章检查标记数与脚注数，章节序号从 1 开始
pub fn diagnose(paper: &Paper) -> Vec<FootnoteIssue> {
    paper
        .chapters
        .iter()
        .enumerate()
        .filter_map(|(i, chapter)| {
            let chapter_no = i + 1;
            let markers = scan_markers(&chapter.content).count();
            let footnotes = chapter.footnotes.len();
            if markers > 0 && footnotes == 0 {
                Some(FootnoteIssue::MissingFootnotes { chapter: chapter_no, markers })
            } else if markers > footnotes {
                Some(FootnoteIssue::Clamped { chapter: chapter_no, markers, footnotes })
            } else if footnotes > markers {
                Some(FootnoteIssue::Unused { chapter: chapter_no, markers, footnotes })
            } else {
                None
            }
        })
        .collect()
}
