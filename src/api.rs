//! 对外 API
//!
//! 供宿主应用（例如通过 FFI 或脚本桥接）直接调用的简化接口

use std::path::Path;
use log::warn;
use crate::error::FountainResult;
use crate::models::{Conf, Document};
use crate::parser::FountainParser;

/// 解析Fountain文本，返回JSON格式结果
///
/// 解析失败时返回 `"{}"`，错误写入日志
pub fn parse_fountain_text(text: &str, config: Option<Conf>) -> String {
    let parser = FountainParser::with_conf(config.unwrap_or_default());
    match parser.parse(text) {
        Ok(doc) => serde_json::to_string(&doc).unwrap_or_else(|_| "{}".to_string()),
        Err(e) => {
            warn!("解析失败: {}", e);
            "{}".to_string()
        }
    }
}

/// 读取并解析Fountain文件
pub fn parse_fountain_file(path: impl AsRef<Path>, config: Option<Conf>) -> FountainResult<Document> {
    FountainParser::with_conf(config.unwrap_or_default()).parse_file(path)
}
