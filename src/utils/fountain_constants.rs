use lazy_static::lazy_static;
use regex::Regex;

pub struct FountainConstants;

impl FountainConstants {
    /// 固定转场词，需完全匹配
    pub const COMMON_TRANSITIONS: [&'static str; 3] = ["FADE OUT.", "CUT TO BLACK.", "FADE TO BLACK."];

    pub const BONEYARD_BEGIN: &'static str = "/*";
    pub const BONEYARD_END: &'static str = "*/";
    pub const NOTE_BEGIN: &'static str = "[[";
    pub const NOTE_END: &'static str = "]]";
    pub const PAGE_BREAK: &'static str = "===";
    pub const ARROW_TRANSITION_SUFFIX: &'static str = " TO:";
    pub const DUAL_DIALOGUE_MARK: char = '^';
}

lazy_static! {
    // 场景标题前缀，大小写不敏感，后接空格或句点
    pub static ref SCENE_HEADING_PREFIX: Regex =
        Regex::new(r"(?i)^(?:int\./ext|int/ext|int|ext|est|i/e)[. ]").unwrap();
}
