use serde::{Deserialize, Serialize};

/// 页面边距（英寸）
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Margins {
    pub top: f32,
    pub bottom: f32,
    pub left: f32,
    pub right: f32,
}

impl Default for Margins {
    fn default() -> Self {
        // 3.3cm / 2.7cm / 2.4cm / 2.3cm
        Margins {
            top: 1.3,
            bottom: 1.06,
            left: 0.94,
            right: 0.91,
        }
    }
}

/// 字体配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FontSet {
    /// 封面标题、正文、章节标题、参考文献
    pub song: String,
    /// 作者、中文摘要正文
    pub fangsong: String,
    /// 中文摘要标签、脚注/参考文献标题
    pub hei: String,
    /// 脚注正文
    pub kai: String,
    /// 英文摘要
    pub latin: String,
}

impl Default for FontSet {
    fn default() -> Self {
        FontSet {
            song: "宋体".to_string(),
            fangsong: "仿宋".to_string(),
            hei: "黑体".to_string(),
            kai: "楷体".to_string(),
            latin: "Arial".to_string(),
        }
    }
}

/// 字号配置（磅）
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FontSizes {
    /// 一号
    pub title: f32,
    /// 小二
    pub author: f32,
    /// 小四
    pub abstract_text: f32,
    /// 三号
    pub chapter_title: f32,
    /// 小四
    pub body: f32,
    /// 四号
    pub section_header: f32,
    /// 五号
    pub footnote: f32,
    pub footer: f32,
}

impl Default for FontSizes {
    fn default() -> Self {
        FontSizes {
            title: 26.0,
            author: 18.0,
            abstract_text: 12.0,
            chapter_title: 16.0,
            body: 12.0,
            section_header: 14.0,
            footnote: 10.5,
            footer: 10.5,
        }
    }
}

/// 各部分标签文字
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Labels {
    pub abstract_cn: String,
    pub keywords_cn: String,
    pub abstract_en: String,
    pub keywords_en: String,
    pub footnotes: String,
    pub references: String,
    /// 关键词分隔符
    pub keyword_separator: String,
}

impl Default for Labels {
    fn default() -> Self {
        Labels {
            abstract_cn: "摘要:".to_string(),
            keywords_cn: "关键词:".to_string(),
            abstract_en: "Abstract:".to_string(),
            keywords_en: "Keywords:".to_string(),
            footnotes: "脚注".to_string(),
            references: "参考文献".to_string(),
            keyword_separator: "; ".to_string(),
        }
    }
}

/// 版式配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LayoutProfile {
    pub margins: Margins,
    pub fonts: FontSet,
    pub sizes: FontSizes,
    pub labels: Labels,
    /// 正文行距（twip），17.9pt 约 360
    pub body_line: i32,
    /// 脚注行距（twip），14.5pt 约 290
    pub footnote_line: i32,
    /// 封面标题段前（英寸）
    pub cover_top: f32,
    /// 封面各段段后（英寸）
    pub cover_gap: f32,
    /// 摘要左右缩进（英寸）
    pub abstract_indent: f32,
    /// 首行缩进（英寸）
    pub first_line_indent: f32,
    /// 脚注左缩进（英寸）
    pub footnote_indent: f32,
    /// 参考文献悬挂缩进（英寸）
    pub reference_hanging: f32,
}

impl Default for LayoutProfile {
    fn default() -> Self {
        LayoutProfile {
            margins: Margins::default(),
            fonts: FontSet::default(),
            sizes: FontSizes::default(),
            labels: Labels::default(),
            body_line: 360,
            footnote_line: 290,
            cover_top: 2.0,
            cover_gap: 1.0,
            abstract_indent: 0.5,
            first_line_indent: 0.25,
            footnote_indent: 0.1,
            reference_hanging: 0.2,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Conf {
    /// 版式
    pub profile: LayoutProfile,
    /// 是否在 settings.xml 中写入圈码脚注编号（每页重新编号）
    pub circled_footnote_numbering: bool,
    /// JSON 解析失败时是否尝试修复未转义的引号
    pub repair_json_quotes: bool,
}

impl Default for Conf {
    fn default() -> Self {
        Conf {
            profile: LayoutProfile::default(),
            circled_footnote_numbering: true,
            repair_json_quotes: true,
        }
    }
}

impl Conf {
    /// 从 JSON 文本读取配置，缺省字段取默认值
    pub fn from_json_str(text: &str) -> serde_json::Result<Conf> {
        serde_json::from_str(text)
    }
}
