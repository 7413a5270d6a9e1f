use unicode_segmentation::UnicodeSegmentation;

use crate::models::Paper;
use crate::parser::scan_markers;
use crate::utils::CircledMarker;

/// 文档统计
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentStats {
    pub chapters: usize,
    pub footnotes: usize,
    pub references: usize,
    /// 正文字数：按字素簇计，不含空白和脚注标记
    pub body_characters: usize,
}

impl DocumentStats {
    pub fn from_paper(paper: &Paper) -> Self {
        let mut stats = DocumentStats {
            chapters: paper.chapters.len(),
            references: paper.references.len(),
            ..Default::default()
        };

        for chapter in &paper.chapters {
            stats.footnotes += scan_markers(&chapter.content).count();
            stats.body_characters += chapter
                .content
                .graphemes(true)
                .filter(|g| !g.trim().is_empty() && !is_marker(g))
                .count();
        }

        stats
    }
}

fn is_marker(grapheme: &str) -> bool {
    let mut chars = grapheme.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => CircledMarker::from_char(c).is_some(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Chapter;

    #[test]
    fn counts_body_without_markers_and_spaces() {
        let paper = Paper {
            chapters: vec![
                Chapter::new("1", "明代 漕运①", &["n"]),
                Chapter::new("2", "e\u{301}②x", &["m"]),
            ],
            references: vec!["r".to_string()],
            ..Paper::default()
        };
        let stats = DocumentStats::from_paper(&paper);
        assert_eq!(stats.chapters, 2);
        assert_eq!(stats.footnotes, 2);
        assert_eq!(stats.references, 1);
        assert_eq!(stats.body_characters, 4 + 2);
    }
}
