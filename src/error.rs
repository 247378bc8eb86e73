use std::path::PathBuf;
use thiserror::Error;

/// 解析错误类型
///
/// 正文分类本身是全覆盖的，不会失败；错误只来自读取输入和标题页格式不合法。
#[derive(Error, Debug)]
pub enum FountainError {
    #[error("IO错误: 无法读取 {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("标题页第{line}行是缩进的续行，但前面没有打开的键: {text:?}")]
    OrphanContinuation { line: usize, text: String },

    #[error("标题页第{line}行缺少冒号: {text:?}")]
    MalformedHeaderLine { line: usize, text: String },

    #[error("无效的配置: {0}")]
    Config(String),
}

/// 解析结果
pub type FountainResult<T> = Result<T, FountainError>;
