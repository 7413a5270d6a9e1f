use std::str::CharIndices;

use crate::utils::CircledMarker;

/// 一个脚注标记及其在正文中的字节偏移
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerOccurrence {
    pub marker: CircledMarker,
    pub offset: usize,
}

impl MarkerOccurrence {
    /// 标记之后第一个字节的偏移
    pub fn end(&self) -> usize {
        self.offset + self.marker.symbol().len_utf8()
    }
}

/// 惰性扫描器，按从左到右的顺序产出标记
///
/// 克隆后可从当前位置重新遍历
#[derive(Debug, Clone)]
pub struct MarkerScan<'a> {
    chars: CharIndices<'a>,
}

impl<'a> Iterator for MarkerScan<'a> {
    type Item = MarkerOccurrence;

    fn next(&mut self) -> Option<Self::Item> {
        self.chars.by_ref().find_map(|(offset, c)| {
            CircledMarker::from_char(c).map(|marker| MarkerOccurrence { marker, offset })
        })
    }
}

/// 扫描正文中的脚注标记
pub fn scan_markers(text: &str) -> MarkerScan<'_> {
    MarkerScan {
        chars: text.char_indices(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_has_no_markers() {
        assert_eq!(scan_markers("").count(), 0);
        assert_eq!(scan_markers("没有脚注的正文").count(), 0);
    }

    #[test]
    fn finds_markers_in_order_with_byte_offsets() {
        let text = "甲①乙⑳丙";
        let found: Vec<_> = scan_markers(text).collect();
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].marker, CircledMarker::One);
        assert_eq!(found[0].offset, "甲".len());
        assert_eq!(&text[found[0].offset..found[0].end()], "①");
        assert_eq!(found[1].marker, CircledMarker::Twenty);
        assert_eq!(&text[found[1].offset..found[1].end()], "⑳");
    }

    #[test]
    fn marker_value_does_not_matter() {
        let ordinals: Vec<u8> = scan_markers("a③b①c③").map(|m| m.marker.ordinal()).collect();
        assert_eq!(ordinals, vec![3, 1, 3]);
    }

    #[test]
    fn lookalike_characters_are_text() {
        assert_eq!(scan_markers("㉑❶⓵⑴").count(), 0);
        assert_eq!(scan_markers("㉑①").count(), 1);
    }

    #[test]
    fn scan_is_restartable() {
        let scan = scan_markers("①②③");
        let again = scan.clone();
        assert_eq!(scan.count(), 3);
        assert_eq!(again.count(), 3);
    }
}
