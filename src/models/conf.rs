use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Conf {
    /// 判定是否存在标题页时检查的前导字符数
    pub header_probe_len: usize,
    /// 标题页出现孤立续行或缺少冒号的行时，是否跳过而不是报错
    pub lenient_header: bool,
    /// 额外的固定转场词，需完全匹配
    pub extra_transitions: Vec<String>,
    /// 文末未闭合的 /* 注释块是否仍输出为 boneyard
    pub flush_unterminated_boneyard: bool,
}

impl Default for Conf {
    fn default() -> Self {
        Conf {
            header_probe_len: 20,
            lenient_header: false,
            extra_transitions: Vec::new(),
            flush_unterminated_boneyard: true,
        }
    }
}

impl Conf {
    /// 从 JSON 文本读取配置，缺省字段取默认值
    pub fn from_json(text: &str) -> crate::FountainResult<Self> {
        serde_json::from_str(text).map_err(|e| crate::FountainError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let conf = Conf::from_json(r#"{ "lenient_header": true }"#).unwrap();
        assert!(conf.lenient_header);
        assert_eq!(conf.header_probe_len, 20);
        assert!(conf.flush_unterminated_boneyard);
    }

    #[test]
    fn bad_json_is_config_error() {
        let err = Conf::from_json("{ nope").unwrap_err();
        assert!(matches!(err, crate::FountainError::Config(_)));
    }
}
