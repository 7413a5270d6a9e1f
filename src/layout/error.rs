use thiserror::Error;

/// 文档组装错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssemblyError {
    /// 章节正文含有脚注标记，但脚注列表为空，无法回退到“最后一条脚注”
    #[error("第 {chapter} 章《{title}》含有 {markers} 个脚注标记，但没有任何脚注")]
    MalformedFootnoteIndex {
        /// 章节序号，从 1 开始
        chapter: usize,
        title: String,
        markers: usize,
    },

    /// 标记位置与正文不符
    #[error("第 {chapter} 章的脚注标记位置无效: {reason}")]
    InvalidMarker { chapter: usize, reason: String },
}

/// 文档组装结果
pub type AssemblyResult<T> = Result<T, AssemblyError>;
