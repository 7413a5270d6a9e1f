use serde::{Deserialize, Serialize};

/// 论文记录
///
/// 由外部加载器从 JSON 读入，组装流程只读不写
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Paper {
    pub title: String,
    pub author: String,
    #[serde(default)]
    pub abstract_cn: String,
    #[serde(default)]
    pub abstract_en: String,
    #[serde(default)]
    pub keywords_cn: Vec<String>,
    #[serde(default)]
    pub keywords_en: Vec<String>,
    #[serde(default)]
    pub chapters: Vec<Chapter>,
    #[serde(default)]
    pub references: Vec<String>,
}

/// 章节
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Chapter {
    pub title: String,
    /// 正文，可能包含 ①…⑳ 形式的脚注标记
    pub content: String,
    #[serde(default)]
    pub footnotes: Vec<Footnote>,
}

/// 脚注
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Footnote {
    pub text: String,
}

impl Footnote {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
        }
    }
}

impl Chapter {
    pub fn new(title: &str, content: &str, footnotes: &[&str]) -> Self {
        Chapter {
            title: title.to_string(),
            content: content.to_string(),
            footnotes: footnotes.iter().map(|t| Footnote::new(t)).collect(),
        }
    }
}
