use std::collections::HashMap;
use log::warn;
use crate::error::{FountainError, FountainResult};
use crate::models::Conf;

/// 判断文本开头是否存在标题页
///
/// 这是启发式判断而非语法：前 `probe_len` 个字符中出现冒号即认为有标题页。
/// 误判（例如正文第一行恰好含冒号）属于预期行为。
pub fn has_header_block(contents: &str, probe_len: usize) -> bool {
    contents.chars().take(probe_len).any(|c| c == ':')
}

/// 标题页解析器
pub struct HeaderParser<'c> {
    conf: &'c Conf,
}

impl<'c> HeaderParser<'c> {
    pub fn new(conf: &'c Conf) -> Self {
        HeaderParser { conf }
    }

    /// 解析标题页各行
    ///
    /// - 以空白开头的行是续行，追加到当前打开的键
    /// - 以冒号结尾的行打开一个新键，值列表为空
    /// - 其余行按第一个冒号拆成 `key: value`，同时把它设为当前打开的键
    pub fn parse(&self, lines: &[&str]) -> FountainResult<HashMap<String, Vec<String>>> {
        let mut metadata: HashMap<String, Vec<String>> = HashMap::new();
        let mut open_key: Option<String> = None;

        for (number, raw) in lines.iter().enumerate() {
            let line = raw.trim_end();
            if line.is_empty() {
                continue;
            }

            if line.starts_with(char::is_whitespace) {
                match open_key.as_ref().and_then(|key| metadata.get_mut(key)) {
                    Some(values) => values.push(line.trim().to_string()),
                    None => self.reject(FountainError::OrphanContinuation {
                        line: number,
                        text: line.to_string(),
                    })?,
                }
            } else if let Some(key) = line.strip_suffix(':') {
                let key = key.trim().to_lowercase();
                metadata.insert(key.clone(), Vec::new());
                open_key = Some(key);
            } else if let Some((key, value)) = line.split_once(':') {
                let key = key.trim().to_lowercase();
                metadata.insert(key.clone(), vec![value.trim().to_string()]);
                open_key = Some(key);
            } else {
                self.reject(FountainError::MalformedHeaderLine {
                    line: number,
                    text: line.to_string(),
                })?;
            }
        }

        Ok(metadata)
    }

    // 宽松模式下跳过错误行
    fn reject(&self, err: FountainError) -> FountainResult<()> {
        if self.conf.lenient_header {
            warn!("跳过标题页行: {}", err);
            Ok(())
        } else {
            Err(err)
        }
    }
}
