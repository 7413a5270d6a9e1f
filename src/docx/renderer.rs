//! 样式化块树 → docx 适配器文档

use crate::docx::adapter::docx::{
    Document as DocxDocument, Footer, PageNumberRun, Paragraph, ParagraphIndent,
    ParagraphSpacing, TextRun,
};
use crate::docx::adapter::{AlignmentType, PageMargin, RunProps};
use crate::models::{Alignment, Document, RunContent, RunStyle, StyledBlock};

/// 渲染整份文档，`title`/`creator` 写入文档属性
pub fn render(document: &Document, title: &str, creator: &str) -> DocxDocument {
    let margins = document.margins();
    let mut footer = Footer::new();
    footer.add_paragraph(render_block(document.footer()));

    let mut docx = DocxDocument::new();
    docx.set_core_properties(title, creator)
        .page_margin(PageMargin::new(
            margins.top,
            margins.right,
            margins.bottom,
            margins.left,
        ))
        .footer(footer);

    for block in document.blocks() {
        docx.add_paragraph(render_block(block));
    }

    docx
}

/// 渲染单个段落
pub fn render_block(block: &StyledBlock) -> Paragraph {
    let style = &block.style;
    let mut paragraph = Paragraph::new();

    if let Some(alignment) = style.alignment {
        paragraph.align(to_alignment(alignment));
    }

    paragraph.spacing(ParagraphSpacing {
        before: style.spacing.before,
        after: style.spacing.after,
        line: style.spacing.line,
    });

    paragraph.indent(ParagraphIndent {
        left: style.indent.left,
        right: style.indent.right,
        first_line: style.indent.first_line,
        hanging: style.indent.hanging,
    });

    for run in &block.runs {
        let props = to_props(&run.style);
        match &run.content {
            RunContent::Text(text) => {
                paragraph.add_text_run(TextRun::with_props(text, props));
            }
            RunContent::PageNumber => {
                paragraph.add_page_number_run(PageNumberRun::with_props(props));
            }
        }
    }

    paragraph
}

fn to_alignment(alignment: Alignment) -> AlignmentType {
    match alignment {
        Alignment::Left => AlignmentType::Left,
        Alignment::Center => AlignmentType::Center,
        Alignment::Right => AlignmentType::Right,
        Alignment::Justify => AlignmentType::Justify,
    }
}

fn to_props(style: &RunStyle) -> RunProps {
    let mut props = RunProps::new().font(&style.font).size(style.size);
    if style.bold {
        props = props.bold();
    }
    if style.superscript {
        props = props.superscript();
    }
    props
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::docx::adapter::docx::RunType;
    use crate::models::{BlockStyle, Indent, Spacing, StyledRun};

    #[test]
    fn block_maps_to_paragraph() {
        let block = StyledBlock::new(
            vec![
                StyledRun::text("A", RunStyle::new("宋体", 12.0)),
                StyledRun::text("[1]", RunStyle::new("宋体", 12.0).superscript()),
            ],
            BlockStyle::new()
                .align(Alignment::Justify)
                .spacing(Spacing::new().line(360))
                .indent(Indent::new().left(288).hanging(288)),
        );

        let paragraph = render_block(&block);
        assert_eq!(paragraph.alignment, Some(AlignmentType::Justify));
        assert_eq!(paragraph.spacing.as_ref().and_then(|s| s.line), Some(360));
        assert_eq!(paragraph.indent.as_ref().and_then(|i| i.hanging), Some(288));
        assert_eq!(paragraph.runs.len(), 2);
        match &paragraph.runs[1] {
            RunType::Text(run) => {
                assert_eq!(run.text, "[1]");
                assert_eq!(run.props.superscript, Some(true));
                assert_eq!(run.props.size, Some(12.0));
            }
            other => panic!("unexpected run {:?}", other),
        }
    }

    #[test]
    fn page_number_run_is_kept() {
        let block = StyledBlock::new(
            vec![StyledRun::page_number(RunStyle::new("宋体", 10.5))],
            BlockStyle::new().align(Alignment::Center),
        );
        let paragraph = render_block(&block);
        assert!(matches!(paragraph.runs[0], RunType::PageNumber(_)));
    }
}
