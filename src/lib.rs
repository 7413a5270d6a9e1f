pub mod models;
pub mod utils;
pub mod parser;
pub mod layout;
pub mod docx;
pub mod loader;
pub mod api;

pub use models::{
    Paper,
    Chapter,
    Footnote,
    Document,
    StyledBlock,
    StyledRun,
    RunStyle,
    BlockStyle,
    Conf,
    LayoutProfile
};

pub use parser::{
    scan_markers,
    split_runs,
    FootnoteCollector,
    MarkerOccurrence
};

pub use layout::{
    assemble,
    diagnose,
    AssemblyError,
    AssemblyResult,
    DocumentStats,
    FootnoteIssue
};

pub use docx::{
    DocxError,
    DocxResult,
    CheckResult,
    generate_docx,
    validate_docx
};

pub use loader::{load_paper, load_conf, parse_paper};

pub use api::{
    ExportResult,
    export_to_docx,
    export_to_docx_base64,
    export_file,
    validate_file
};

/// 组装论文文档
///
/// # Arguments
///
/// * `paper` - 论文记录
/// * `config` - 配置对象
///
/// # Returns
///
/// 样式化块树，交给 docx 渲染器输出
pub fn build(paper: &Paper, config: &Conf) -> AssemblyResult<Document> {
    assemble(paper, &config.profile)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() {
        let config = Conf::default();
        let paper = Paper {
            title: "题目".to_string(),
            author: "作者".to_string(),
            chapters: vec![Chapter::new("一", "正文①", &["注"])],
            ..Paper::default()
        };
        let result = build(&paper, &config).unwrap();
        assert!(!result.blocks().is_empty());
    }
}
