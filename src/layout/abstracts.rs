use crate::models::{
    Alignment, BlockStyle, Indent, LayoutProfile, Paper, RunStyle, Spacing, StyledBlock, StyledRun,
};
use crate::utils::convert_inches_to_twip;

/// 摘要语言
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbstractLanguage {
    Chinese,
    English,
}

/// 摘要部分：标签、正文、关键词三段
///
/// 中英文结构和字号一致，只有字体和标签不同
pub fn build_abstract(
    paper: &Paper,
    profile: &LayoutProfile,
    language: AbstractLanguage,
) -> Vec<StyledBlock> {
    let fonts = &profile.fonts;
    let labels = &profile.labels;
    let (label_font, text_font, label, text, keywords_label, keywords) = match language {
        AbstractLanguage::Chinese => (
            &fonts.hei,
            &fonts.fangsong,
            &labels.abstract_cn,
            &paper.abstract_cn,
            &labels.keywords_cn,
            &paper.keywords_cn,
        ),
        AbstractLanguage::English => (
            &fonts.latin,
            &fonts.latin,
            &labels.abstract_en,
            &paper.abstract_en,
            &labels.keywords_en,
            &paper.keywords_en,
        ),
    };

    let size = profile.sizes.abstract_text;
    let side = convert_inches_to_twip(profile.abstract_indent);
    let indent = Indent::new().left(side).right(side);
    let label_style = RunStyle::new(label_font, size).bold();
    let text_style = RunStyle::new(text_font, size);

    let label_block = StyledBlock::single(
        label,
        label_style.clone(),
        BlockStyle::new()
            .spacing(Spacing::new().before(240).after(120))
            .indent(indent),
    );

    let text_block = StyledBlock::single(
        text,
        text_style.clone(),
        BlockStyle::new()
            .align(Alignment::Justify)
            .spacing(Spacing::new().line(profile.body_line).after(120))
            .indent(indent.first_line(convert_inches_to_twip(profile.first_line_indent))),
    );

    let keywords_block = StyledBlock::new(
        vec![
            StyledRun::text(keywords_label, label_style),
            StyledRun::text(
                &format!(" {}", keywords.join(labels.keyword_separator.as_str())),
                text_style,
            ),
        ],
        BlockStyle::new()
            .spacing(Spacing::new().before(120).after(240))
            .indent(indent),
    );

    vec![label_block, text_block, keywords_block]
}

pub fn build_abstract_cn(paper: &Paper, profile: &LayoutProfile) -> Vec<StyledBlock> {
    build_abstract(paper, profile, AbstractLanguage::Chinese)
}

pub fn build_abstract_en(paper: &Paper, profile: &LayoutProfile) -> Vec<StyledBlock> {
    build_abstract(paper, profile, AbstractLanguage::English)
}
