//! 脚注编号设置
//!
//! 打包后改写 `word/settings.xml`：脚注每页重新编号，编号格式为带圈数字

use std::io::{Cursor, Read, Write};

use log::debug;
use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;
use quick_xml::writer::Writer;
use zip::write::FileOptions;
use zip::{ZipArchive, ZipWriter};

use super::DocxResult;

pub(crate) const SETTINGS_PATH: &str = "word/settings.xml";

const SETTINGS: &[u8] = b"w:settings";
const FOOTNOTE_PR: &str = "w:footnotePr";
pub(crate) const NUM_FMT: &str = "decimalEnclosedCircle";
pub(crate) const NUM_RESTART: &str = "eachPage";

/// 一个子元素的全部事件，连同它在 footnotePr 中应处的位置
type Child = (u8, Vec<Event<'static>>);

/// CT_FtnDocProps 的子元素顺序：pos, numFmt, numStart, numRestart, 其后是 footnote
fn child_rank(name: &[u8]) -> u8 {
    match name {
        b"w:pos" => 0,
        b"w:numFmt" => 1,
        b"w:numStart" => 2,
        b"w:numRestart" => 3,
        _ => 4,
    }
}

fn val_element(name: &'static str, value: &'static str) -> Event<'static> {
    Event::Empty(BytesStart::new(name).with_attributes([("w:val", value)]))
}

/// 改写 settings.xml 文本
///
/// 根元素下已有 `<w:footnotePr>`（含自闭合形式）时保留其属性和其他子元素，
/// 替换 numFmt / numRestart 并按 schema 顺序重排；没有时追加到根元素末尾
pub fn rewrite_settings_xml(xml: &str) -> DocxResult<String> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(false);
    let mut writer = Writer::new(Cursor::new(Vec::new()));
    let mut depth = 0usize;
    let mut written = false;

    loop {
        match reader.read_event()? {
            Event::Start(e) if depth == 1 && !written && e.name().as_ref() == FOOTNOTE_PR.as_bytes() => {
                let children = read_children(&mut reader)?;
                write_footnote_pr(&mut writer, e.into_owned(), children)?;
                written = true;
            }
            Event::Empty(e) if depth == 1 && !written && e.name().as_ref() == FOOTNOTE_PR.as_bytes() => {
                write_footnote_pr(&mut writer, e.into_owned(), Vec::new())?;
                written = true;
            }
            Event::Empty(e) if depth == 0 && !written && e.name().as_ref() == SETTINGS => {
                let end = e.to_end().into_owned();
                writer.write_event(Event::Start(e))?;
                write_footnote_pr(&mut writer, BytesStart::new(FOOTNOTE_PR), Vec::new())?;
                writer.write_event(Event::End(end))?;
                written = true;
            }
            Event::Start(e) => {
                depth += 1;
                writer.write_event(Event::Start(e))?;
            }
            Event::End(e) => {
                depth = depth.saturating_sub(1);
                if depth == 0 && !written && e.name().as_ref() == SETTINGS {
                    write_footnote_pr(&mut writer, BytesStart::new(FOOTNOTE_PR), Vec::new())?;
                    written = true;
                }
                writer.write_event(Event::End(e))?;
            }
            Event::Eof => break,
            event => writer.write_event(event)?,
        }
    }

    if !written {
        debug!("【rewrite_settings_xml】未找到 w:settings 根元素，保持原样");
    }

    Ok(String::from_utf8(writer.into_inner().into_inner())?)
}

/// 读取 footnotePr 的直接子元素，直到它的结束标签
///
/// 子元素之间的空白文本不保留
fn read_children(reader: &mut Reader<&[u8]>) -> DocxResult<Vec<Child>> {
    let mut children: Vec<Child> = Vec::new();
    let mut depth = 0usize;

    loop {
        let event = reader.read_event()?.into_owned();
        match &event {
            Event::Eof => break,
            Event::End(_) if depth == 0 => break,
            Event::Start(e) | Event::Empty(e) if depth == 0 => {
                children.push((child_rank(e.name().as_ref()), Vec::new()));
            }
            _ if depth == 0 => continue,
            _ => {}
        }

        match &event {
            Event::Start(_) => depth += 1,
            Event::End(_) => depth -= 1,
            _ => {}
        }
        if let Some((_, events)) = children.last_mut() {
            events.push(event);
        }
    }

    Ok(children)
}

fn write_footnote_pr(
    writer: &mut Writer<Cursor<Vec<u8>>>,
    start: BytesStart<'static>,
    children: Vec<Child>,
) -> DocxResult<()> {
    let mut children: Vec<Child> = children
        .into_iter()
        .filter(|(rank, _)| *rank != 1 && *rank != 3)
        .collect();
    children.push((1, vec![val_element("w:numFmt", NUM_FMT)]));
    children.push((3, vec![val_element("w:numRestart", NUM_RESTART)]));
    children.sort_by_key(|(rank, _)| *rank);

    let end = start.to_end().into_owned();
    writer.write_event(Event::Start(start))?;
    for event in children.into_iter().flat_map(|(_, events)| events) {
        writer.write_event(event)?;
    }
    writer.write_event(Event::End(end))?;
    Ok(())
}

/// 对打包好的 docx 注入脚注设置，其他条目原样复制
///
/// settings.xml 不是合法 UTF-8 或不是合法 XML 时返回错误
pub fn inject_footnote_properties(docx: &[u8]) -> DocxResult<Vec<u8>> {
    let mut archive = ZipArchive::new(Cursor::new(docx))?;
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let mut touched = false;

    for i in 0..archive.len() {
        let mut entry = archive.by_index(i)?;
        let name = entry.name().to_string();
        let mut data = Vec::new();
        entry.read_to_end(&mut data)?;

        if name == SETTINGS_PATH {
            let xml = String::from_utf8(data)?;
            data = rewrite_settings_xml(&xml)?.into_bytes();
            touched = true;
        }

        writer.start_file(name, FileOptions::default())?;
        writer.write_all(&data)?;
    }

    debug!(
        "【inject_footnote_properties】{}",
        if touched { "已写入脚注编号设置" } else { "未找到 settings.xml，保持原样" }
    );

    Ok(writer.finish()?.into_inner())
}
