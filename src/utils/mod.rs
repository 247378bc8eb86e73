pub mod fountain_constants;

pub use fountain_constants::{FountainConstants, SCENE_HEADING_PREFIX};

/// 空行：空字符串或只含空白
pub fn is_blank_line(text: &str) -> bool {
    text.trim().is_empty()
}

/// 拆分结尾的 #..# 场景编号
///
/// 以 `#` 结尾且至少包含两个 `#` 时，编号从倒数第二个 `#` 开始。
/// 返回 (标题文本, 场景编号)，没有编号时编号为空字符串。
pub fn split_scene_number(text: &str) -> (&str, &str) {
    let text = text.trim();
    if let Some(body) = text.strip_suffix('#') {
        if let Some(start) = body.rfind('#') {
            let number = text[start..].trim_matches(|c: char| c == '#' || c.is_whitespace());
            return (text[..start].trim(), number);
        }
    }
    (text, "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_trailing_scene_number() {
        assert_eq!(split_scene_number("HOUSE #1A#"), ("HOUSE", "1A"));
        assert_eq!(split_scene_number("INT. HOUSE - DAY # 12 #"), ("INT. HOUSE - DAY", "12"));
    }

    #[test]
    fn single_hash_is_not_a_scene_number() {
        assert_eq!(split_scene_number("HOUSE #"), ("HOUSE #", ""));
        assert_eq!(split_scene_number("HOUSE"), ("HOUSE", ""));
        assert_eq!(split_scene_number(""), ("", ""));
    }

    #[test]
    fn scene_prefix_matches_case_insensitively() {
        for line in ["INT. HOUSE", "ext park", "EST. CITY", "I/E CAR", "int/ext. DOOR", "INT./EXT. GATE"] {
            assert!(SCENE_HEADING_PREFIX.is_match(line), "{}", line);
        }
        for line in ["INTERIOR", "EXTRA CHEESE", "I/EX", "INT"] {
            assert!(!SCENE_HEADING_PREFIX.is_match(line), "{}", line);
        }
    }
}
