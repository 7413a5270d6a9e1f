use crate::models::{BlockStyle, Indent, LayoutProfile, RunStyle, Spacing, StyledBlock};
use crate::utils::convert_inches_to_twip;

/// 参考文献：标题之后每条一段，编号从 1 开始，悬挂缩进
///
/// 列表为空时仍输出标题
pub fn build_references(references: &[String], profile: &LayoutProfile) -> Vec<StyledBlock> {
    let hanging = convert_inches_to_twip(profile.reference_hanging);
    let entry_style = RunStyle::new(&profile.fonts.song, profile.sizes.body);
    let mut blocks = Vec::with_capacity(references.len() + 1);

    blocks.push(StyledBlock::single(
        &profile.labels.references,
        RunStyle::new(&profile.fonts.hei, profile.sizes.section_header).bold(),
        BlockStyle::new().spacing(Spacing::new().before(480).after(240)),
    ));

    for (i, reference) in references.iter().enumerate() {
        blocks.push(StyledBlock::single(
            &format!("[{}] {}", i + 1, reference),
            entry_style.clone(),
            BlockStyle::new()
                .spacing(Spacing::new().line(profile.body_line).after(120))
                .indent(Indent::new().left(hanging).hanging(hanging)),
        ));
    }

    blocks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> LayoutProfile {
        let mut profile = LayoutProfile::default();
        profile.labels.references = "References".to_string();
        profile
    }

    #[test]
    fn entries_are_numbered_in_order() {
        let refs = vec!["Ref A".to_string(), "Ref B".to_string()];
        let blocks = build_references(&refs, &profile());
        let texts: Vec<String> = blocks.iter().map(StyledBlock::text).collect();
        assert_eq!(texts, vec!["References", "[1] Ref A", "[2] Ref B"]);
        assert!(blocks[0].runs[0].style.bold);
        assert_eq!(blocks[1].style.indent.hanging, Some(288));
        assert_eq!(blocks[1].style.indent.left, Some(288));
    }

    #[test]
    fn empty_list_keeps_header() {
        let blocks = build_references(&[], &profile());
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].text(), "References");
    }
}
