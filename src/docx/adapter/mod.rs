//! Docx 适配器模块
//!
//! 在 docx-rs 之上提供按段落、运行逐步构建文档的接口

use thiserror::Error;

use crate::utils::convert_point_to_half_point;

/// 对齐方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlignmentType {
    /// 左对齐
    Left,
    /// 居中对齐
    Center,
    /// 右对齐
    Right,
    /// 两端对齐
    Justify,
}

impl AlignmentType {
    /// 转换为 docx-rs 的 AlignmentType
    pub fn to_docx_alignment(&self) -> docx_rs::AlignmentType {
        match self {
            AlignmentType::Left => docx_rs::AlignmentType::Left,
            AlignmentType::Center => docx_rs::AlignmentType::Center,
            AlignmentType::Right => docx_rs::AlignmentType::Right,
            AlignmentType::Justify => docx_rs::AlignmentType::Justified,
        }
    }
}

/// DOCX适配器错误
#[derive(Error, Debug)]
pub enum DocxAdapterError {
    #[error("DOCX打包错误: {0}")]
    PackError(String),
}

/// DOCX适配器结果
pub type DocxAdapterResult<T> = Result<T, DocxAdapterError>;

/// 运行属性
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunProps {
    /// 字号（磅）
    pub size: Option<f32>,
    pub font: Option<String>,
    pub bold: Option<bool>,
    pub superscript: Option<bool>,
}

impl RunProps {
    /// 创建新的运行属性
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置字体大小（磅）
    pub fn size(mut self, size: f32) -> Self {
        self.size = Some(size);
        self
    }

    /// 设置字体
    pub fn font(mut self, font: &str) -> Self {
        self.font = Some(font.to_string());
        self
    }

    /// 设置粗体
    pub fn bold(mut self) -> Self {
        self.bold = Some(true);
        self
    }

    /// 设置上标
    pub fn superscript(mut self) -> Self {
        self.superscript = Some(true);
        self
    }

    /// 把属性写到 docx-rs 的运行上
    ///
    /// 字号按半磅传入，12 磅对应 24
    pub fn apply(&self, mut run: docx_rs::Run) -> docx_rs::Run {
        if let Some(size) = self.size {
            run = run.size(convert_point_to_half_point(size));
        }

        if let Some(font) = &self.font {
            let run_fonts = docx_rs::RunFonts::new()
                .east_asia(font)
                .ascii(font)
                .hi_ansi(font);
            run = run.fonts(run_fonts);
        }

        if let Some(true) = self.bold {
            run = run.bold();
        }

        if let Some(true) = self.superscript {
            run.run_property = run
                .run_property
                .vert_align(docx_rs::VertAlignType::SuperScript);
        }

        run
    }
}

/// 页面边距（twip）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageMargin {
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
    pub left: i32,
}

impl PageMargin {
    /// 创建新的页面边距
    pub fn new(top: i32, right: i32, bottom: i32, left: i32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// 转换为 docx-rs 的 PageMargin
    pub fn to_docx_margin(&self) -> docx_rs::PageMargin {
        docx_rs::PageMargin::new()
            .top(self.top)
            .right(self.right)
            .bottom(self.bottom)
            .left(self.left)
    }
}

/// 导出 docx 子模块
pub mod docx;
