//! Docx 命名空间
//!
//! 段落、运行、页脚与文档本身

use super::*;
use log::{debug, trace};
use std::io::Cursor;

/// 段落间距
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParagraphSpacing {
    pub before: Option<i32>,
    pub after: Option<i32>,
    pub line: Option<i32>,
}

impl ParagraphSpacing {
    /// 创建新的段落间距
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置段前间距（twips）
    pub fn before(mut self, before: i32) -> Self {
        self.before = Some(before);
        self
    }

    /// 设置段后间距（twips）
    pub fn after(mut self, after: i32) -> Self {
        self.after = Some(after);
        self
    }

    /// 设置行间距（twips）
    pub fn line(mut self, line: i32) -> Self {
        self.line = Some(line);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.before.is_none() && self.after.is_none() && self.line.is_none()
    }

    /// 转换为 docx-rs 的 LineSpacing
    pub fn to_docx_line_spacing(&self) -> docx_rs::LineSpacing {
        let mut spacing = docx_rs::LineSpacing::new();

        if let Some(before) = self.before {
            trace!("【适配器日志】设置段前间距: {} twips", before);
            spacing = spacing.before(before.max(0) as u32);
        }

        if let Some(after) = self.after {
            trace!("【适配器日志】设置段后间距: {} twips", after);
            spacing = spacing.after(after.max(0) as u32);
        }

        if let Some(line) = self.line {
            trace!(
                "【适配器日志】设置行距: {} twips ({:.1}倍单倍行距)",
                line,
                line as f32 / 240.0
            );
            spacing = spacing.line(line);
        }

        spacing
    }
}

/// 段落缩进
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParagraphIndent {
    pub left: Option<i32>,
    pub right: Option<i32>,
    pub first_line: Option<i32>,
    pub hanging: Option<i32>,
}

impl ParagraphIndent {
    /// 创建新的段落缩进
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.left.is_none()
            && self.right.is_none()
            && self.first_line.is_none()
            && self.hanging.is_none()
    }

    /// 首行缩进与悬挂缩进互斥，同时设置时悬挂缩进优先
    fn special(&self) -> Option<docx_rs::SpecialIndentType> {
        match (self.hanging, self.first_line) {
            (Some(hanging), _) => Some(docx_rs::SpecialIndentType::Hanging(hanging)),
            (None, Some(first_line)) => Some(docx_rs::SpecialIndentType::FirstLine(first_line)),
            (None, None) => None,
        }
    }
}

/// 页脚
#[derive(Debug, Clone, Default)]
pub struct Footer {
    pub children: Vec<Paragraph>,
}

impl Footer {
    /// 创建新的页脚
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_paragraph(&mut self, paragraph: Paragraph) -> &mut Self {
        self.children.push(paragraph);
        self
    }

    fn to_docx_footer(&self) -> docx_rs::Footer {
        self.children
            .iter()
            .fold(docx_rs::Footer::new(), |footer, paragraph| {
                footer.add_paragraph(paragraph.to_docx_paragraph())
            })
    }
}

/// 文档选项
#[derive(Debug, Clone, Default)]
pub struct DocumentOptions {
    pub title: String,
    pub creator: String,
    pub margin: Option<PageMargin>,
    pub footer: Option<Footer>,
    pub children: Vec<Paragraph>,
}

/// 文档
#[derive(Debug, Clone, Default)]
pub struct Document {
    pub options: DocumentOptions,
}

impl Document {
    /// 创建新的文档
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置文档属性
    pub fn set_core_properties(&mut self, title: &str, creator: &str) -> &mut Self {
        self.options.title = title.to_string();
        self.options.creator = creator.to_string();
        self
    }

    /// 设置页面边距
    pub fn page_margin(&mut self, margin: PageMargin) -> &mut Self {
        self.options.margin = Some(margin);
        self
    }

    /// 设置页脚
    pub fn footer(&mut self, footer: Footer) -> &mut Self {
        self.options.footer = Some(footer);
        self
    }

    /// 添加段落
    pub fn add_paragraph(&mut self, paragraph: Paragraph) -> &mut Self {
        self.options.children.push(paragraph);
        self
    }

    /// 创建 docx-rs 文档
    pub fn create_document(&self) -> docx_rs::Docx {
        let mut docx = docx_rs::Docx::new();

        if !self.options.title.is_empty() {
            docx = docx.custom_property("title", &self.options.title);
        }
        if !self.options.creator.is_empty() {
            docx = docx.custom_property("creator", &self.options.creator);
        }

        if let Some(margin) = &self.options.margin {
            docx = docx.page_margin(margin.to_docx_margin());
            debug!(
                "【create_document】已应用页面边距: top={}, right={}, bottom={}, left={}",
                margin.top, margin.right, margin.bottom, margin.left
            );
        }

        if let Some(footer) = &self.options.footer {
            docx = docx.footer(footer.to_docx_footer());
            debug!(
                "【create_document】已设置页脚，包含 {} 个段落",
                footer.children.len()
            );
        }

        for paragraph in &self.options.children {
            docx = docx.add_paragraph(paragraph.to_docx_paragraph());
        }

        debug!(
            "【create_document】共写入 {} 个段落",
            self.options.children.len()
        );

        docx
    }

    /// 打包为 docx 字节
    pub fn to_bytes(&self) -> DocxAdapterResult<Vec<u8>> {
        let mut cursor = Cursor::new(Vec::new());
        self.create_document()
            .build()
            .pack(&mut cursor)
            .map_err(|e| DocxAdapterError::PackError(e.to_string()))?;
        Ok(cursor.into_inner())
    }

    /// 获取 Base64 编码的文档
    pub fn to_base64(&self) -> DocxAdapterResult<String> {
        Ok(base64::encode(self.to_bytes()?))
    }
}

/// 段落
#[derive(Debug, Clone, Default)]
pub struct Paragraph {
    pub runs: Vec<RunType>,
    pub alignment: Option<AlignmentType>,
    pub indent: Option<ParagraphIndent>,
    pub spacing: Option<ParagraphSpacing>,
}

impl Paragraph {
    /// 创建新的段落
    pub fn new() -> Self {
        Self::default()
    }

    /// 添加文本运行
    pub fn add_text_run(&mut self, run: TextRun) -> &mut Self {
        self.runs.push(RunType::Text(run));
        self
    }

    /// 添加页码运行
    pub fn add_page_number_run(&mut self, run: PageNumberRun) -> &mut Self {
        self.runs.push(RunType::PageNumber(run));
        self
    }

    /// 设置对齐方式
    pub fn align(&mut self, alignment: AlignmentType) -> &mut Self {
        self.alignment = Some(alignment);
        self
    }

    /// 设置缩进
    pub fn indent(&mut self, indent: ParagraphIndent) -> &mut Self {
        self.indent = Some(indent);
        self
    }

    /// 设置间距
    pub fn spacing(&mut self, spacing: ParagraphSpacing) -> &mut Self {
        self.spacing = Some(spacing);
        self
    }

    /// 转换为 docx-rs 的段落
    pub fn to_docx_paragraph(&self) -> docx_rs::Paragraph {
        let mut paragraph = docx_rs::Paragraph::new();

        if let Some(alignment) = &self.alignment {
            paragraph = paragraph.align(alignment.to_docx_alignment());
        }

        if let Some(indent) = &self.indent {
            if !indent.is_empty() {
                paragraph = paragraph.indent(indent.left, indent.special(), indent.right, None);
            }
        }

        for run in &self.runs {
            paragraph = paragraph.add_run(run.to_docx_run());
        }

        if let Some(spacing) = &self.spacing {
            if !spacing.is_empty() {
                paragraph = paragraph.line_spacing(spacing.to_docx_line_spacing());
            }
        }

        paragraph
    }
}

/// 运行特性
pub trait RunTrait {
    fn to_docx_run(&self) -> docx_rs::Run;
}

/// 运行类型枚举
#[derive(Debug, Clone)]
pub enum RunType {
    Text(TextRun),
    PageNumber(PageNumberRun),
}

impl RunTrait for RunType {
    fn to_docx_run(&self) -> docx_rs::Run {
        match self {
            RunType::Text(run) => run.to_docx_run(),
            RunType::PageNumber(run) => run.to_docx_run(),
        }
    }
}

/// 文本运行
#[derive(Debug, Clone)]
pub struct TextRun {
    pub text: String,
    pub props: RunProps,
}

impl TextRun {
    /// 使用指定的属性创建新的文本运行
    pub fn with_props(text: &str, props: RunProps) -> Self {
        Self {
            text: text.to_string(),
            props,
        }
    }
}

impl RunTrait for TextRun {
    fn to_docx_run(&self) -> docx_rs::Run {
        self.props.apply(docx_rs::Run::new().add_text(&self.text))
    }
}

/// 页码运行
#[derive(Debug, Clone, Default)]
pub struct PageNumberRun {
    pub props: RunProps,
}

impl PageNumberRun {
    /// 创建新的页码运行
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_props(props: RunProps) -> Self {
        Self { props }
    }
}

impl RunTrait for PageNumberRun {
    fn to_docx_run(&self) -> docx_rs::Run {
        // 简单的 PAGE 字段
        let run = docx_rs::Run::new()
            .add_field_char(docx_rs::FieldCharType::Begin, false)
            .add_instr_text(docx_rs::InstrText::PAGE(docx_rs::InstrPAGE::new()))
            .add_field_char(docx_rs::FieldCharType::End, false);
        self.props.apply(run)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hanging_wins_over_first_line() {
        let indent = ParagraphIndent {
            first_line: Some(360),
            hanging: Some(288),
            ..ParagraphIndent::default()
        };
        assert!(matches!(
            indent.special(),
            Some(docx_rs::SpecialIndentType::Hanging(288))
        ));
        assert!(ParagraphIndent::new().special().is_none());
    }

    #[test]
    fn packs_into_zip_bytes() {
        let mut paragraph = Paragraph::new();
        paragraph
            .align(AlignmentType::Center)
            .add_text_run(TextRun::with_props("标题", RunProps::new().font("宋体").size(26.0).bold()));

        let mut footer = Footer::new();
        let mut page = Paragraph::new();
        page.add_page_number_run(PageNumberRun::new());
        footer.add_paragraph(page);

        let mut document = Document::new();
        document
            .set_core_properties("标题", "作者")
            .page_margin(PageMargin::new(1872, 1310, 1526, 1354))
            .footer(footer)
            .add_paragraph(paragraph);

        let bytes = document.to_bytes().unwrap();
        assert_eq!(&bytes[..2], b"PK");
        assert!(!document.to_base64().unwrap().is_empty());
    }
}
