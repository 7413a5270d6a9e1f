use log::{debug, warn};

use super::error::{AssemblyError, AssemblyResult};
use crate::models::{BlockStyle, Indent, LayoutProfile, Paper, RunStyle, Spacing, StyledBlock, StyledRun};
use crate::parser::{clamped_footnote, scan_markers, split_runs, FootnoteCollector, SplitError};
use crate::utils::convert_inches_to_twip;

/// 正文：各章标题与内容，之后是汇总的脚注
pub fn build_body(paper: &Paper, profile: &LayoutProfile) -> AssemblyResult<Vec<StyledBlock>> {
    let mut collector = FootnoteCollector::new();
    let mut blocks = build_chapters(paper, profile, &mut collector)?;
    blocks.extend(build_footnotes(collector, profile));
    Ok(blocks)
}

/// 按章节顺序生成标题与内容段落，脚注编号写入 `collector`
pub fn build_chapters(
    paper: &Paper,
    profile: &LayoutProfile,
    collector: &mut FootnoteCollector,
) -> AssemblyResult<Vec<StyledBlock>> {
    let first_line = convert_inches_to_twip(profile.first_line_indent);
    let title_style = RunStyle::new(&profile.fonts.song, profile.sizes.chapter_title).bold();
    let content_style = RunStyle::new(&profile.fonts.song, profile.sizes.body);
    let mut blocks = Vec::with_capacity(paper.chapters.len() * 2);

    for (index, chapter) in paper.chapters.iter().enumerate() {
        blocks.push(StyledBlock::single(
            &chapter.title,
            title_style.clone(),
            BlockStyle::new()
                .spacing(Spacing::new().before(360).after(240))
                .indent(Indent::new().first_line(first_line)),
        ));

        let markers = scan_markers(&chapter.content);
        let marker_count = markers.clone().count();
        if marker_count > chapter.footnotes.len() && !chapter.footnotes.is_empty() {
            warn!(
                "【build_chapters】第 {} 章《{}》有 {} 个标记但只有 {} 条脚注，多出的标记沿用最后一条脚注",
                index + 1,
                chapter.title,
                marker_count,
                chapter.footnotes.len()
            );
        }

        let runs = split_runs(
            &chapter.content,
            markers,
            &content_style,
            clamped_footnote(&chapter.footnotes),
            collector,
        )
        .map_err(|err| match err {
            SplitError::Unresolved { .. } => AssemblyError::MalformedFootnoteIndex {
                chapter: index + 1,
                title: chapter.title.clone(),
                markers: marker_count,
            },
            other => AssemblyError::InvalidMarker {
                chapter: index + 1,
                reason: other.to_string(),
            },
        })?;

        debug!(
            "【build_chapters】第 {} 章生成 {} 个运行，累计脚注 {} 条",
            index + 1,
            runs.len(),
            collector.len()
        );

        blocks.push(StyledBlock::new(
            runs,
            BlockStyle::new()
                .spacing(Spacing::new().line(profile.body_line))
                .indent(Indent::new().first_line(first_line)),
        ));
    }

    Ok(blocks)
}

/// 脚注部分；没有收集到脚注时为空
pub fn build_footnotes(collector: FootnoteCollector, profile: &LayoutProfile) -> Vec<StyledBlock> {
    let entries = collector.into_entries();
    if entries.is_empty() {
        return Vec::new();
    }

    let note_style = RunStyle::new(&profile.fonts.kai, profile.sizes.footnote);
    let mut blocks = Vec::with_capacity(entries.len() + 1);

    blocks.push(StyledBlock::single(
        &profile.labels.footnotes,
        RunStyle::new(&profile.fonts.hei, profile.sizes.section_header).bold(),
        BlockStyle::new().spacing(Spacing::new().before(480).after(240)),
    ));

    for (i, text) in entries.iter().enumerate() {
        blocks.push(StyledBlock::new(
            vec![
                StyledRun::text(&format!("[{}] ", i + 1), note_style.clone()),
                StyledRun::text(text, note_style.clone()),
            ],
            BlockStyle::new()
                .spacing(Spacing::new().line(profile.footnote_line).after(120))
                .indent(Indent::new().left(convert_inches_to_twip(profile.footnote_indent))),
        ));
    }

    blocks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Chapter;

    fn profile() -> LayoutProfile {
        let mut profile = LayoutProfile::default();
        profile.labels.footnotes = "Footnotes".to_string();
        profile
    }

    fn run_texts(block: &StyledBlock) -> Vec<&str> {
        block.runs.iter().map(StyledRun::as_str).collect()
    }

    #[test]
    fn two_chapter_scenario() {
        let paper = Paper {
            chapters: vec![
                Chapter::new("一、引言", "A①B", &["note1"]),
                Chapter::new("二、结论", "C", &[]),
            ],
            ..Paper::default()
        };
        let blocks = build_body(&paper, &profile()).unwrap();
        assert_eq!(blocks.len(), 6);

        assert_eq!(blocks[0].text(), "一、引言");
        assert!(blocks[0].runs[0].style.bold);
        assert_eq!(run_texts(&blocks[1]), vec!["A", "[1]", "B"]);
        assert!(blocks[1].runs[1].style.superscript);
        assert_eq!(blocks[2].text(), "二、结论");
        assert_eq!(run_texts(&blocks[3]), vec!["C"]);
        assert_eq!(blocks[4].text(), "Footnotes");
        assert!(blocks[4].runs[0].style.bold);
        assert_eq!(blocks[5].text(), "[1] note1");
    }

    #[test]
    fn numbering_is_global_across_chapters() {
        let paper = Paper {
            chapters: vec![
                Chapter::new("1", "a①b②", &["x", "y"]),
                Chapter::new("2", "③c", &["z"]),
                Chapter::new("3", "d①e①f①", &["p", "q", "r"]),
            ],
            ..Paper::default()
        };
        let blocks = build_body(&paper, &profile()).unwrap();
        let refs: Vec<String> = blocks
            .iter()
            .flat_map(|b| b.runs.iter())
            .filter(|r| r.style.superscript)
            .map(|r| r.as_str().to_string())
            .collect();
        assert_eq!(refs, vec!["[1]", "[2]", "[3]", "[4]", "[5]", "[6]"]);

        let notes: Vec<String> = blocks[7..].iter().map(StyledBlock::text).collect();
        assert_eq!(
            notes,
            vec!["[1] x", "[2] y", "[3] z", "[4] p", "[5] q", "[6] r"]
        );
    }

    #[test]
    fn clamped_markers_repeat_last_footnote() {
        let paper = Paper {
            chapters: vec![Chapter::new("1", "①②③", &["only"])],
            ..Paper::default()
        };
        let blocks = build_body(&paper, &profile()).unwrap();
        let notes: Vec<String> = blocks[3..].iter().map(StyledBlock::text).collect();
        assert_eq!(notes, vec!["[1] only", "[2] only", "[3] only"]);
    }

    #[test]
    fn markers_without_footnotes_fail_fast() {
        let paper = Paper {
            chapters: vec![
                Chapter::new("1", "ok", &[]),
                Chapter::new("第二章", "x①y②", &[]),
            ],
            ..Paper::default()
        };
        let err = build_body(&paper, &profile()).unwrap_err();
        assert_eq!(
            err,
            AssemblyError::MalformedFootnoteIndex {
                chapter: 2,
                title: "第二章".to_string(),
                markers: 2,
            }
        );
    }

    #[test]
    fn empty_chapters_yield_nothing() {
        let blocks = build_body(&Paper::default(), &profile()).unwrap();
        assert!(blocks.is_empty());
    }

    #[test]
    fn footnote_block_omitted_without_markers() {
        let paper = Paper {
            chapters: vec![Chapter::new("1", "无标记", &["unused"])],
            ..Paper::default()
        };
        let blocks = build_body(&paper, &profile()).unwrap();
        assert_eq!(blocks.len(), 2);
    }

    #[test]
    fn collector_threads_through_chapters() {
        let paper = Paper {
            chapters: vec![Chapter::new("1", "a①", &["n"])],
            ..Paper::default()
        };
        let mut collector = FootnoteCollector::new();
        collector.collect("earlier");
        let blocks = build_chapters(&paper, &profile(), &mut collector).unwrap();
        assert_eq!(blocks[1].runs[1].as_str(), "[2]");
        assert_eq!(collector.entries(), ["earlier", "n"]);
    }
}
