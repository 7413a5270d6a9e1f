//! 论文 JSON 与配置文件读取

use std::fs;
use std::path::Path;

use log::warn;

use crate::docx::DocxResult;
use crate::models::{Conf, Paper};
use crate::utils::fix_json_quotes;

/// 解析论文 JSON
///
/// `repair_quotes` 为真且首次解析失败时，修复字符串内未转义的引号后再试一次；
/// 仍失败则返回首次的错误
pub fn parse_paper(text: &str, repair_quotes: bool) -> DocxResult<Paper> {
    match serde_json::from_str(text) {
        Ok(paper) => Ok(paper),
        Err(err) if repair_quotes => {
            warn!("【parse_paper】JSON 解析失败（{}），尝试修复引号", err);
            serde_json::from_str(&fix_json_quotes(text)).map_err(|_| err.into())
        }
        Err(err) => Err(err.into()),
    }
}

/// 读取论文文件
pub fn load_paper<P: AsRef<Path>>(path: P, config: &Conf) -> DocxResult<Paper> {
    let text = fs::read_to_string(path)?;
    parse_paper(&text, config.repair_json_quotes)
}

/// 读取配置文件，缺省字段取默认值
pub fn load_conf<P: AsRef<Path>>(path: P) -> DocxResult<Conf> {
    let text = fs::read_to_string(path)?;
    Ok(Conf::from_json_str(&text)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::docx::DocxError;

    const BROKEN: &str = r#"{"title": "论"变法"", "author": "李四", "chapters": [{"title": "一", "content": "他说"是"①", "footnotes": [{"text": "注"}]}]}"#;

    #[test]
    fn missing_optional_fields_default_to_empty() {
        let paper = parse_paper(r#"{"title": "t", "author": "a", "chapters": [{"title": "c", "content": "x"}]}"#, false).unwrap();
        assert!(paper.references.is_empty());
        assert!(paper.keywords_cn.is_empty());
        assert!(paper.chapters[0].footnotes.is_empty());
    }

    #[test]
    fn repairs_flattened_quotes() {
        let paper = parse_paper(BROKEN, true).unwrap();
        assert_eq!(paper.title, "论\"变法\"");
        assert_eq!(paper.chapters[0].content, "他说\"是\"①");
    }

    #[test]
    fn repair_can_be_disabled() {
        assert!(matches!(parse_paper(BROKEN, false), Err(DocxError::JsonError(_))));
    }

    #[test]
    fn unrepairable_json_reports_error() {
        assert!(matches!(parse_paper("{\"title\": ", true), Err(DocxError::JsonError(_))));
    }
}
