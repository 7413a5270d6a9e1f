use std::collections::HashMap;
use lazy_static::lazy_static;

/// 脚注标记字母表：带圈数字 ①…⑳
///
/// 这是一个封闭集合，㉑、❶、⓵ 等外形相近的字符都不算标记
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CircledMarker {
    One = 1,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Eleven,
    Twelve,
    Thirteen,
    Fourteen,
    Fifteen,
    Sixteen,
    Seventeen,
    Eighteen,
    Nineteen,
    Twenty,
}

const SYMBOLS: [char; 20] = [
    '①', '②', '③', '④', '⑤', '⑥', '⑦', '⑧', '⑨', '⑩',
    '⑪', '⑫', '⑬', '⑭', '⑮', '⑯', '⑰', '⑱', '⑲', '⑳',
];

impl CircledMarker {
    pub const ALL: [CircledMarker; 20] = [
        CircledMarker::One,
        CircledMarker::Two,
        CircledMarker::Three,
        CircledMarker::Four,
        CircledMarker::Five,
        CircledMarker::Six,
        CircledMarker::Seven,
        CircledMarker::Eight,
        CircledMarker::Nine,
        CircledMarker::Ten,
        CircledMarker::Eleven,
        CircledMarker::Twelve,
        CircledMarker::Thirteen,
        CircledMarker::Fourteen,
        CircledMarker::Fifteen,
        CircledMarker::Sixteen,
        CircledMarker::Seventeen,
        CircledMarker::Eighteen,
        CircledMarker::Nineteen,
        CircledMarker::Twenty,
    ];

    /// 序号 1–20
    pub fn ordinal(self) -> u8 {
        self as u8
    }

    /// 对应的字符
    pub fn symbol(self) -> char {
        SYMBOLS[self.ordinal() as usize - 1]
    }

    /// 查表判断字符是否为标记
    pub fn from_char(c: char) -> Option<CircledMarker> {
        MARKER_TABLE.get(&c).copied()
    }
}

lazy_static! {
    static ref MARKER_TABLE: HashMap<char, CircledMarker> = CircledMarker::ALL
        .iter()
        .map(|marker| (marker.symbol(), *marker))
        .collect();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_covers_whole_alphabet() {
        for (i, marker) in CircledMarker::ALL.iter().enumerate() {
            assert_eq!(marker.ordinal() as usize, i + 1);
            assert_eq!(CircledMarker::from_char(marker.symbol()), Some(*marker));
        }
        assert_eq!(CircledMarker::from_char('①'), Some(CircledMarker::One));
        assert_eq!(CircledMarker::from_char('⑳'), Some(CircledMarker::Twenty));
    }

    #[test]
    fn lookalikes_are_not_markers() {
        for c in ['㉑', '❶', '⓵', '⑴', '⒈', '1', 'O'] {
            assert_eq!(CircledMarker::from_char(c), None, "{} 不应被识别", c);
        }
    }
}
