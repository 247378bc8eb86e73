use std::fs;
use std::path::Path;
use log::debug;
use crate::error::{FountainError, FountainResult};
use crate::models::{Conf, Document};
use crate::parser::body_parser::BodyParser;
use crate::parser::header_parser::{has_header_block, HeaderParser};
use crate::utils::is_blank_line;

/// 统一换行符：`\r\n` 和单独的 `\r` 都换成 `\n`
pub fn normalize_line_endings(script: &str) -> String {
    script.replace("\r\n", "\n").replace('\r', "\n")
}

/// Fountain 解析器
///
/// 只保存配置，每次 `parse` 都使用独立的解析状态，可在多线程间共享。
#[derive(Debug, Clone, Default)]
pub struct FountainParser {
    conf: Conf,
}

impl FountainParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_conf(conf: Conf) -> Self {
        FountainParser { conf }
    }

    pub fn conf(&self) -> &Conf {
        &self.conf
    }

    /// 解析Fountain格式文本
    ///
    /// # Arguments
    ///
    /// * `script` - Fountain格式的剧本文本
    ///
    /// # Returns
    ///
    /// 解析结果；只有标题页格式不合法时才会返回错误
    pub fn parse(&self, script: &str) -> FountainResult<Document> {
        let normalized = normalize_line_endings(script);
        let contents = normalized.trim();

        let mut doc = Document::new();
        if contents.is_empty() {
            return Ok(doc);
        }

        let lines: Vec<&str> = contents.split('\n').collect();

        // 标题页到第一个空行为止，没有空行时全文都是标题页
        let body_start = if has_header_block(contents, self.conf.header_probe_len) {
            let split = lines
                .iter()
                .position(|line| is_blank_line(line))
                .unwrap_or(lines.len());
            doc.metadata = HeaderParser::new(&self.conf).parse(&lines[..split])?;
            (split + 1).min(lines.len())
        } else {
            0
        };

        BodyParser::new(&self.conf).parse_into(&lines[body_start..], body_start, &mut doc);

        debug!(
            "解析完成: {}行, {}个元素, 标题页键 {:?}",
            lines.len(),
            doc.elements.len(),
            doc.metadata.keys().collect::<Vec<_>>()
        );
        Ok(doc)
    }

    /// 读取文件并解析，文件句柄在读取后立即释放
    pub fn parse_file(&self, path: impl AsRef<Path>) -> FountainResult<Document> {
        let path = path.as_ref();
        let script = fs::read_to_string(path).map_err(|source| FountainError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.parse(&script)
    }
}
