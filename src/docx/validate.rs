//! 成品检查
//!
//! 打开生成的 docx，核对页边距与脚注编号设置

use std::fmt;
use std::io::{Cursor, Read};

use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;
use zip::result::ZipError;
use zip::ZipArchive;

use super::footnote_settings::{NUM_FMT, NUM_RESTART, SETTINGS_PATH};
use super::DocxResult;
use crate::models::Conf;
use crate::utils::convert_inches_to_twip;

const DOCUMENT_PATH: &str = "word/document.xml";

/// 允许的页边距误差（twips）
pub const TWIP_TOLERANCE: i32 = 20;

/// 单项检查结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub name: String,
    pub passed: bool,
    pub detail: String,
}

impl CheckResult {
    fn new(name: &str, passed: bool, detail: String) -> Self {
        Self {
            name: name.to_string(),
            passed,
            detail,
        }
    }
}

impl fmt::Display for CheckResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.passed { "PASS" } else { "FAIL" };
        write!(f, "[{}] {}", status, self.name)?;
        if !self.detail.is_empty() {
            write!(f, "  {}", self.detail)?;
        }
        Ok(())
    }
}

/// 检查 docx 字节
///
/// 页边距按 `config.profile.margins` 核对；开启带圈脚注编号时再核对 settings.xml
pub fn validate_docx(docx: &[u8], config: &Conf) -> DocxResult<Vec<CheckResult>> {
    let mut archive = ZipArchive::new(Cursor::new(docx))?;
    let mut results = Vec::new();

    let document = read_entry(&mut archive, DOCUMENT_PATH)?;
    check_margins(document.as_deref(), config, &mut results)?;

    if config.circled_footnote_numbering {
        let settings = read_entry(&mut archive, SETTINGS_PATH)?;
        check_footnote_settings(settings.as_deref(), &mut results)?;
    }

    Ok(results)
}

fn read_entry(archive: &mut ZipArchive<Cursor<&[u8]>>, path: &str) -> DocxResult<Option<String>> {
    let mut entry = match archive.by_name(path) {
        Ok(entry) => entry,
        Err(ZipError::FileNotFound) => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    let mut data = Vec::new();
    entry.read_to_end(&mut data)?;
    Ok(Some(String::from_utf8(data)?))
}

/// 找到第一个名为 `name` 的元素，取出各属性的原始值
fn find_attributes(xml: &str, name: &[u8]) -> DocxResult<Option<Vec<(String, String)>>> {
    let mut reader = Reader::from_str(xml);

    loop {
        match reader.read_event()? {
            Event::Start(e) | Event::Empty(e) if e.name().as_ref() == name => {
                return Ok(Some(attributes_of(&e)?));
            }
            Event::Eof => return Ok(None),
            _ => {}
        }
    }
}

/// 在第一个名为 `parent` 的元素内找子元素 `child` 的 `w:val`
fn find_child_val(xml: &str, parent: &[u8], child: &[u8]) -> DocxResult<Option<String>> {
    let mut reader = Reader::from_str(xml);
    let mut inside = false;

    loop {
        match reader.read_event()? {
            Event::Start(e) if e.name().as_ref() == parent => inside = true,
            Event::End(e) if inside && e.name().as_ref() == parent => return Ok(None),
            Event::Start(e) | Event::Empty(e) if inside && e.name().as_ref() == child => {
                let val = attributes_of(&e)?
                    .into_iter()
                    .find(|(key, _)| key == "w:val")
                    .map(|(_, value)| value);
                return Ok(val);
            }
            Event::Eof => return Ok(None),
            _ => {}
        }
    }
}

fn attributes_of(e: &BytesStart<'_>) -> DocxResult<Vec<(String, String)>> {
    let mut attributes = Vec::new();
    for attribute in e.attributes() {
        let attribute = attribute.map_err(quick_xml::Error::from)?;
        let key = String::from_utf8(attribute.key.as_ref().to_vec())?;
        let value = String::from_utf8(attribute.value.into_owned())?;
        attributes.push((key, value));
    }
    Ok(attributes)
}

fn check_margins(document: Option<&str>, config: &Conf, results: &mut Vec<CheckResult>) -> DocxResult<()> {
    let margins = &config.profile.margins;
    let expected = [
        ("margins/top", "w:top", margins.top),
        ("margins/bottom", "w:bottom", margins.bottom),
        ("margins/left", "w:left", margins.left),
        ("margins/right", "w:right", margins.right),
    ];

    let page_margin = match document {
        Some(xml) => find_attributes(xml, b"w:pgMar")?,
        None => None,
    };

    for (name, key, inches) in expected {
        let expected_twip = convert_inches_to_twip(inches);
        let actual = page_margin
            .as_ref()
            .and_then(|attrs| attrs.iter().find(|(k, _)| k == key))
            .and_then(|(_, v)| v.parse::<i32>().ok());

        let result = match actual {
            Some(actual) => CheckResult::new(
                name,
                (actual - expected_twip).abs() <= TWIP_TOLERANCE,
                format!("actual={} expected={} tol={}", actual, expected_twip, TWIP_TOLERANCE),
            ),
            None => CheckResult::new(name, false, format!("缺少 {}", key)),
        };
        results.push(result);
    }

    Ok(())
}

fn check_footnote_settings(settings: Option<&str>, results: &mut Vec<CheckResult>) -> DocxResult<()> {
    let checks = [
        ("footnote/numRestart", b"w:numRestart".as_slice(), NUM_RESTART),
        ("footnote/numFmt", b"w:numFmt".as_slice(), NUM_FMT),
    ];

    for (name, child, expected) in checks {
        let actual = match settings {
            Some(xml) => find_child_val(xml, b"w:footnotePr", child)?,
            None => None,
        };
        let passed = actual.as_deref() == Some(expected);
        let detail = format!("actual={} expected={}", actual.as_deref().unwrap_or("无"), expected);
        results.push(CheckResult::new(name, passed, detail));
    }

    Ok(())
}
