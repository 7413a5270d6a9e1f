//! 样式化块树
//!
//! 组装流程的唯一产物。长度单位统一为 twip，字号单位为磅

/// 段落对齐方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Center,
    Right,
    Justify,
}

/// 文本运行样式
#[derive(Debug, Clone, PartialEq)]
pub struct RunStyle {
    pub font: String,
    /// 字号（磅）
    pub size: f32,
    pub bold: bool,
    pub superscript: bool,
}

impl RunStyle {
    pub fn new(font: &str, size: f32) -> Self {
        Self {
            font: font.to_string(),
            size,
            bold: false,
            superscript: false,
        }
    }

    /// 设置粗体
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// 设置上标
    pub fn superscript(mut self) -> Self {
        self.superscript = true;
        self
    }
}

/// 运行内容
#[derive(Debug, Clone, PartialEq)]
pub enum RunContent {
    Text(String),
    /// 当前页码域，由渲染器写成 PAGE 字段
    PageNumber,
}

/// 一段样式统一的文本
#[derive(Debug, Clone, PartialEq)]
pub struct StyledRun {
    pub content: RunContent,
    pub style: RunStyle,
}

impl StyledRun {
    pub fn text(text: &str, style: RunStyle) -> Self {
        Self {
            content: RunContent::Text(text.to_string()),
            style,
        }
    }

    pub fn page_number(style: RunStyle) -> Self {
        Self {
            content: RunContent::PageNumber,
            style,
        }
    }

    /// 可见文本，页码域返回空串
    pub fn as_str(&self) -> &str {
        match &self.content {
            RunContent::Text(text) => text,
            RunContent::PageNumber => "",
        }
    }
}

/// 段落间距（twip）
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Spacing {
    pub before: Option<i32>,
    pub after: Option<i32>,
    pub line: Option<i32>,
}

impl Spacing {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn before(mut self, before: i32) -> Self {
        self.before = Some(before);
        self
    }

    pub fn after(mut self, after: i32) -> Self {
        self.after = Some(after);
        self
    }

    pub fn line(mut self, line: i32) -> Self {
        self.line = Some(line);
        self
    }
}

/// 段落缩进（twip）
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Indent {
    pub left: Option<i32>,
    pub right: Option<i32>,
    pub first_line: Option<i32>,
    pub hanging: Option<i32>,
}

impl Indent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn left(mut self, left: i32) -> Self {
        self.left = Some(left);
        self
    }

    pub fn right(mut self, right: i32) -> Self {
        self.right = Some(right);
        self
    }

    pub fn first_line(mut self, first_line: i32) -> Self {
        self.first_line = Some(first_line);
        self
    }

    pub fn hanging(mut self, hanging: i32) -> Self {
        self.hanging = Some(hanging);
        self
    }
}

/// 段落级样式
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BlockStyle {
    pub alignment: Option<Alignment>,
    pub spacing: Spacing,
    pub indent: Indent,
}

impl BlockStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn align(mut self, alignment: Alignment) -> Self {
        self.alignment = Some(alignment);
        self
    }

    pub fn spacing(mut self, spacing: Spacing) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn indent(mut self, indent: Indent) -> Self {
        self.indent = indent;
        self
    }
}

/// 一个段落
#[derive(Debug, Clone, PartialEq)]
pub struct StyledBlock {
    pub runs: Vec<StyledRun>,
    pub style: BlockStyle,
}

impl StyledBlock {
    pub fn new(runs: Vec<StyledRun>, style: BlockStyle) -> Self {
        Self { runs, style }
    }

    /// 单个文本运行构成的段落
    pub fn single(text: &str, run_style: RunStyle, style: BlockStyle) -> Self {
        Self::new(vec![StyledRun::text(text, run_style)], style)
    }

    /// 拼接所有运行的可见文本
    pub fn text(&self) -> String {
        self.runs.iter().map(StyledRun::as_str).collect()
    }
}

/// 页边距（twip）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageMargins {
    pub top: i32,
    pub bottom: i32,
    pub left: i32,
    pub right: i32,
}

/// 组装完成的文档
///
/// 只能由组装器构造，之后只读
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    margins: PageMargins,
    footer: StyledBlock,
    blocks: Vec<StyledBlock>,
}

impl Document {
    pub(crate) fn new(margins: PageMargins, footer: StyledBlock, blocks: Vec<StyledBlock>) -> Self {
        Self {
            margins,
            footer,
            blocks,
        }
    }

    pub fn margins(&self) -> &PageMargins {
        &self.margins
    }

    pub fn footer(&self) -> &StyledBlock {
        &self.footer
    }

    pub fn blocks(&self) -> &[StyledBlock] {
        &self.blocks
    }
}
