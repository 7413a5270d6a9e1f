use thiserror::Error;

use super::footnote_collector::FootnoteCollector;
use super::marker_scanner::MarkerOccurrence;
use crate::models::{Footnote, RunStyle, StyledRun};

/// 切分失败的原因
///
/// `index` 为章节内的标记序号，从 0 开始；`offset` 为字节偏移
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SplitError {
    /// 标记找不到可用的脚注正文
    #[error("第 {index} 个脚注标记（字节偏移 {offset}）没有对应的脚注")]
    Unresolved { index: usize, offset: usize },

    /// 偏移处不是该标记字符（越界、落在多字节字符内部或指向其他文本）
    #[error("第 {index} 个脚注标记的偏移 {offset} 处不是标记字符")]
    Misplaced { index: usize, offset: usize },

    /// 偏移小于上一个标记的结尾
    #[error("第 {index} 个脚注标记的偏移 {offset} 早于上一个标记的结尾 {previous_end}")]
    OutOfOrder {
        index: usize,
        offset: usize,
        previous_end: usize,
    },
}

/// 按脚注标记切分正文
///
/// 普通文本保持原样并使用 `base_style`；每个标记替换为 `[n]` 上标运行，
/// `n` 取自收集器的全局编号，与带圈数字本身无关。
/// `footnote_for(i)` 提供第 i 个标记的脚注正文。
/// 标记须按偏移递增且确实指向对应字符，否则返回 [`SplitError`]
pub fn split_runs<'f, I, F>(
    text: &str,
    markers: I,
    base_style: &RunStyle,
    mut footnote_for: F,
    collector: &mut FootnoteCollector,
) -> Result<Vec<StyledRun>, SplitError>
where
    I: IntoIterator<Item = MarkerOccurrence>,
    F: FnMut(usize) -> Option<&'f str>,
{
    let mut runs = Vec::new();
    let mut last = 0;
    let mut seen = 0;

    for (index, occurrence) in markers.into_iter().enumerate() {
        seen += 1;
        let offset = occurrence.offset;

        if offset < last {
            return Err(SplitError::OutOfOrder {
                index,
                offset,
                previous_end: last,
            });
        }

        let at_marker = text
            .get(offset..)
            .map_or(false, |rest| rest.starts_with(occurrence.marker.symbol()));
        if !at_marker {
            return Err(SplitError::Misplaced { index, offset });
        }

        if offset > last {
            runs.push(StyledRun::text(&text[last..offset], base_style.clone()));
        }

        let body = footnote_for(index).ok_or(SplitError::Unresolved { index, offset })?;
        let number = collector.collect(body);
        runs.push(StyledRun::text(
            &format!("[{}]", number),
            base_style.clone().superscript(),
        ));

        last = occurrence.end();
    }

    if seen == 0 {
        return Ok(vec![StyledRun::text(text, base_style.clone())]);
    }

    if last < text.len() {
        runs.push(StyledRun::text(&text[last..], base_style.clone()));
    }

    Ok(runs)
}

/// 第 i 个标记取第 i 条脚注；标记多于脚注时沿用最后一条
pub fn clamped_footnote<'a>(footnotes: &'a [Footnote]) -> impl FnMut(usize) -> Option<&'a str> + 'a {
    move |index| {
        let last = footnotes.len().checked_sub(1)?;
        footnotes.get(index.min(last)).map(|f| f.text.as_str())
    }
}
