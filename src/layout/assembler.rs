use log::{debug, info};

use super::abstracts::{build_abstract_cn, build_abstract_en};
use super::body::build_body;
use super::cover::build_cover;
use super::error::AssemblyResult;
use super::references::build_references;
use crate::models::{
    Alignment, BlockStyle, Document, LayoutProfile, PageMargins, Paper, RunStyle, StyledBlock,
    StyledRun,
};
use crate::utils::convert_inches_to_twip;

/// 组装整份文档
///
/// 顺序固定：封面、中文摘要、英文摘要、正文（含脚注）、参考文献。
/// 不插入分页符，分页交给渲染端
pub fn assemble(paper: &Paper, profile: &LayoutProfile) -> AssemblyResult<Document> {
    let cover = build_cover(paper, profile);
    let abstract_cn = build_abstract_cn(paper, profile);
    let abstract_en = build_abstract_en(paper, profile);
    let body = build_body(paper, profile)?;
    let references = build_references(&paper.references, profile);

    debug!(
        "【assemble】封面 {} 段，中文摘要 {} 段，英文摘要 {} 段，正文 {} 段，参考文献 {} 段",
        cover.len(),
        abstract_cn.len(),
        abstract_en.len(),
        body.len(),
        references.len()
    );

    let blocks: Vec<StyledBlock> = [cover, abstract_cn, abstract_en, body, references]
        .into_iter()
        .flatten()
        .collect();

    info!("【assemble】《{}》组装完成，共 {} 段", paper.title, blocks.len());

    Ok(Document::new(page_margins(profile), page_footer(profile), blocks))
}

fn page_margins(profile: &LayoutProfile) -> PageMargins {
    let margins = &profile.margins;
    PageMargins {
        top: convert_inches_to_twip(margins.top),
        bottom: convert_inches_to_twip(margins.bottom),
        left: convert_inches_to_twip(margins.left),
        right: convert_inches_to_twip(margins.right),
    }
}

/// 居中的页码页脚
fn page_footer(profile: &LayoutProfile) -> StyledBlock {
    StyledBlock::new(
        vec![StyledRun::page_number(RunStyle::new(
            &profile.fonts.song,
            profile.sizes.footer,
        ))],
        BlockStyle::new().align(Alignment::Center),
    )
}
