pub mod error;
pub mod models;
pub mod utils;
pub mod parser;
pub mod api;

pub use error::{FountainError, FountainResult};

pub use models::{
    Element,
    ElementKind,
    Document,
    ScreenplayProperties,
    Conf
};

pub use parser::{
    FountainParser,
    HeaderParser,
    BodyParser,
    Rule
};

pub use api::{
    parse_fountain_text,
    parse_fountain_file
};

/// 解析Fountain格式文本
///
/// # Arguments
///
/// * `script` - Fountain格式的剧本文本
/// * `config` - 配置对象
///
/// # Returns
///
/// 解析结果对象
pub fn parse(script: &str, config: &Conf) -> FountainResult<Document> {
    FountainParser::with_conf(config.clone()).parse(script)
}
