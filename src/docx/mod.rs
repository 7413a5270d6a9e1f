pub mod adapter;
pub mod renderer;
pub mod footnote_settings;
pub mod validate;

use log::info;
use thiserror::Error;

use crate::layout::{assemble, AssemblyError};
use crate::models::{Conf, Document, Paper};

pub use adapter::{AlignmentType, DocxAdapterError, DocxAdapterResult, PageMargin, RunProps};
pub use adapter::docx::{
    Document as DocxDocument, Footer, PageNumberRun, Paragraph, ParagraphIndent, ParagraphSpacing,
    RunTrait, RunType, TextRun,
};
pub use renderer::{render, render_block};
pub use footnote_settings::{inject_footnote_properties, rewrite_settings_xml};
pub use validate::{validate_docx, CheckResult};

/// DOCX导出错误类型
#[derive(Error, Debug)]
pub enum DocxError {
    #[error("IO错误: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON解析错误: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("ZIP错误: {0}")]
    ZipError(#[from] zip::result::ZipError),

    #[error("XML错误: {0}")]
    XmlError(#[from] quick_xml::Error),

    #[error("UTF-8解码错误: {0}")]
    Utf8Error(#[from] std::string::FromUtf8Error),

    #[error("适配器错误: {0}")]
    AdapterError(#[from] DocxAdapterError),

    #[error("文档组装错误: {0}")]
    AssemblyError(#[from] AssemblyError),
}

/// DOCX导出结果
pub type DocxResult<T> = Result<T, DocxError>;

/// 将组装好的文档打包为 docx 字节
pub fn document_to_docx_bytes(document: &Document, paper: &Paper, config: &Conf) -> DocxResult<Vec<u8>> {
    let bytes = render(document, &paper.title, &paper.author).to_bytes()?;

    if config.circled_footnote_numbering {
        inject_footnote_properties(&bytes)
    } else {
        Ok(bytes)
    }
}

/// 组装并打包论文
pub fn generate_docx(paper: &Paper, config: &Conf) -> DocxResult<Vec<u8>> {
    let document = assemble(paper, &config.profile)?;
    let bytes = document_to_docx_bytes(&document, paper, config)?;
    info!("【generate_docx】生成 docx {} 字节", bytes.len());
    Ok(bytes)
}
