use crate::models::{Alignment, BlockStyle, LayoutProfile, Paper, RunStyle, Spacing, StyledBlock};
use crate::utils::convert_inches_to_twip;

/// 封面：标题（一号宋体加粗居中）和作者（小二仿宋居中）
pub fn build_cover(paper: &Paper, profile: &LayoutProfile) -> Vec<StyledBlock> {
    let gap = convert_inches_to_twip(profile.cover_gap);

    let title = StyledBlock::single(
        &paper.title,
        RunStyle::new(&profile.fonts.song, profile.sizes.title).bold(),
        BlockStyle::new()
            .align(Alignment::Center)
            .spacing(Spacing::new().before(convert_inches_to_twip(profile.cover_top)).after(gap)),
    );

    let author = StyledBlock::single(
        &paper.author,
        RunStyle::new(&profile.fonts.fangsong, profile.sizes.author),
        BlockStyle::new()
            .align(Alignment::Center)
            .spacing(Spacing::new().after(gap)),
    );

    vec![title, author]
}
