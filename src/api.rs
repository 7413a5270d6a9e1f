//! 异步导出接口
//!
//! 组装本身是同步的，这里只负责文件读写和结果包装

use chrono::{DateTime, Local};
use log::{error, info};

use crate::docx::{generate_docx, validate_docx, CheckResult, DocxResult};
use crate::layout::DocumentStats;
use crate::loader::parse_paper;
use crate::models::{Conf, Paper};

/// 导出结果
#[derive(Debug, Clone)]
pub struct ExportResult {
    pub success: bool,
    pub message: String,
    pub file_path: Option<String>,
    /// Base64 编码的文档，仅 `export_to_docx_base64` 填写
    pub data: Option<String>,
    pub stats: Option<DocumentStats>,
    pub generated_at: DateTime<Local>,
}

impl ExportResult {
    fn ok(message: &str, file_path: Option<String>, data: Option<String>, stats: DocumentStats) -> Self {
        Self {
            success: true,
            message: message.to_string(),
            file_path,
            data,
            stats: Some(stats),
            generated_at: Local::now(),
        }
    }

    fn failed(message: String) -> Self {
        error!("【export】{}", message);
        Self {
            success: false,
            message,
            file_path: None,
            data: None,
            stats: None,
            generated_at: Local::now(),
        }
    }
}

/// 导出DOCX文档
pub async fn export_to_docx(paper: &Paper, output_path: &str, config: Option<Conf>) -> ExportResult {
    let conf = config.unwrap_or_default();

    match write_docx(paper, output_path, &conf).await {
        Ok(_) => {
            info!("【export_to_docx】已生成: {}", output_path);
            ExportResult::ok(
                "DOCX文档导出成功",
                Some(output_path.to_string()),
                None,
                DocumentStats::from_paper(paper),
            )
        }
        Err(e) => ExportResult::failed(format!("导出失败: {}", e)),
    }
}

/// 获取DOCX文档的Base64编码
pub async fn export_to_docx_base64(paper: &Paper, config: Option<Conf>) -> ExportResult {
    let conf = config.unwrap_or_default();

    match generate_docx(paper, &conf) {
        Ok(bytes) => ExportResult::ok(
            "DOCX Base64编码生成成功",
            None,
            Some(base64::encode(&bytes)),
            DocumentStats::from_paper(paper),
        ),
        Err(e) => ExportResult::failed(format!("生成失败: {}", e)),
    }
}

/// 读取论文 JSON 文件并导出
pub async fn export_file(input_path: &str, output_path: &str, config: Option<Conf>) -> ExportResult {
    let conf = config.unwrap_or_default();

    let text = match tokio::fs::read_to_string(input_path).await {
        Ok(text) => text,
        Err(e) => return ExportResult::failed(format!("读取文件失败: {}", e)),
    };

    match parse_paper(&text, conf.repair_json_quotes) {
        Ok(paper) => export_to_docx(&paper, output_path, Some(conf)).await,
        Err(e) => ExportResult::failed(format!("解析失败: {}", e)),
    }
}

/// 检查已生成的 docx 文件
pub async fn validate_file(docx_path: &str, config: &Conf) -> DocxResult<Vec<CheckResult>> {
    let bytes = tokio::fs::read(docx_path).await?;
    let results = validate_docx(&bytes, config)?;
    let failed = results.iter().filter(|r| !r.passed).count();
    info!("【validate_file】{} 项检查，{} 项未通过", results.len(), failed);
    Ok(results)
}

async fn write_docx(paper: &Paper, output_path: &str, conf: &Conf) -> DocxResult<()> {
    let bytes = generate_docx(paper, conf)?;
    tokio::fs::write(output_path, bytes).await?;
    Ok(())
}
