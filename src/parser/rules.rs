//! 正文分类规则表
//!
//! 每一行按 [`Rule::ORDER`] 的顺序依次匹配，第一个命中的规则决定该行的去向。
//! 顺序本身就是语法的一部分：例如 `===` 必须先于 `=` 概要判断，
//! 强制场景标题必须先于自然场景标题判断。

use crate::models::Conf;
use crate::parser::state::ParserState;
use crate::utils::{is_blank_line, FountainConstants, SCENE_HEADING_PREFIX};

/// 当前行及其前瞻信息
#[derive(Debug, Clone, Copy)]
pub struct LineContext<'a> {
    /// 在规范化文本中的行号
    pub number: usize,
    pub raw: &'a str,
    /// 去掉首尾空白
    pub full: &'a str,
    /// 下一行原文
    pub next: Option<&'a str>,
}

impl<'a> LineContext<'a> {
    pub fn new(number: usize, raw: &'a str, next: Option<&'a str>) -> Self {
        LineContext { number, raw, full: raw.trim(), next }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    Blank,
    BoneyardOpen,
    BoneyardClose,
    BoneyardBody,
    PageBreak,
    Synopsis,
    Comment,
    SectionHeading,
    ForcedSceneHeading,
    SceneHeading,
    ArrowTransition,
    FixedTransition,
    CenteredOrTransition,
    Character,
    DialogueContent,
    Continuation,
    Action,
}

impl Rule {
    pub const ORDER: [Rule; 17] = [
        Rule::Blank,
        Rule::BoneyardOpen,
        Rule::BoneyardClose,
        Rule::BoneyardBody,
        Rule::PageBreak,
        Rule::Synopsis,
        Rule::Comment,
        Rule::SectionHeading,
        Rule::ForcedSceneHeading,
        Rule::SceneHeading,
        Rule::ArrowTransition,
        Rule::FixedTransition,
        Rule::CenteredOrTransition,
        Rule::Character,
        Rule::DialogueContent,
        Rule::Continuation,
        Rule::Action,
    ];

    /// 单条规则的判定条件，不考虑优先级
    ///
    /// `has_elements` 表示是否已经产生过元素。
    pub fn matches(self, ctx: &LineContext, state: &ParserState, conf: &Conf, has_elements: bool) -> bool {
        let full = ctx.full;
        match self {
            Rule::Blank => !state.in_boneyard() && full.is_empty(),
            Rule::BoneyardOpen => !state.in_boneyard() && full.starts_with(FountainConstants::BONEYARD_BEGIN),
            Rule::BoneyardClose => state.in_boneyard() && full.ends_with(FountainConstants::BONEYARD_END),
            Rule::BoneyardBody => state.in_boneyard(),
            Rule::PageBreak => full.starts_with(FountainConstants::PAGE_BREAK),
            Rule::Synopsis => full.starts_with('='),
            Rule::Comment => {
                state.after_blank()
                    && full.starts_with(FountainConstants::NOTE_BEGIN)
                    && full.ends_with(FountainConstants::NOTE_END)
            }
            Rule::SectionHeading => full.starts_with('#'),
            Rule::ForcedSceneHeading => {
                // 排除省略号 "..."
                let mut chars = full.chars();
                chars.next() == Some('.') && matches!(chars.next(), Some(c) if c != '.')
            }
            Rule::SceneHeading => SCENE_HEADING_PREFIX.is_match(full),
            Rule::ArrowTransition => full.ends_with(FountainConstants::ARROW_TRANSITION_SUFFIX),
            Rule::FixedTransition => {
                FountainConstants::COMMON_TRANSITIONS.iter().any(|t| *t == full)
                    || conf.extra_transitions.iter().any(|t| t == full)
            }
            Rule::CenteredOrTransition => full.starts_with('>'),
            Rule::Character => state.after_blank() && ctx.next.map_or(false, |next| !is_blank_line(next)),
            Rule::DialogueContent => state.in_dialogue,
            Rule::Continuation => !state.after_blank() && has_elements,
            Rule::Action => true,
        }
    }

    /// 按优先级找到第一条命中的规则
    pub fn classify(ctx: &LineContext, state: &ParserState, conf: &Conf, has_elements: bool) -> Rule {
        Rule::ORDER
            .iter()
            .copied()
            .find(|rule| rule.matches(ctx, state, conf, has_elements))
            .unwrap_or(Rule::Action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(raw: &str) -> LineContext<'_> {
        LineContext::new(0, raw, None)
    }

    fn after_blank() -> ParserState {
        ParserState { newlines_before: 1, ..ParserState::new() }
    }

    fn classify(raw: &str, state: &ParserState) -> Rule {
        Rule::classify(&ctx(raw), state, &Conf::default(), true)
    }

    #[test]
    fn order_ends_with_total_fallback() {
        assert_eq!(Rule::ORDER.len(), 17);
        assert_eq!(Rule::ORDER[0], Rule::Blank);
        assert_eq!(Rule::ORDER[16], Rule::Action);
        let state = ParserState::new();
        assert!(Rule::Action.matches(&ctx("anything"), &state, &Conf::default(), false));
    }

    #[test]
    fn blank_only_outside_boneyard() {
        assert_eq!(classify("   ", &ParserState::new()), Rule::Blank);
        let mut state = ParserState::new();
        state.open_boneyard(0, "");
        assert_eq!(classify("   ", &state), Rule::BoneyardBody);
    }

    #[test]
    fn boneyard_rules_depend_on_open_block() {
        let closed = ParserState::new();
        assert_eq!(classify("/* note */", &closed), Rule::BoneyardOpen);
        assert_eq!(classify("/* note", &closed), Rule::BoneyardOpen);
        // 未打开注释块时，单独的 */ 行只是普通文本
        assert_eq!(classify("done */", &closed), Rule::Continuation);

        let mut open = ParserState::new();
        open.open_boneyard(0, "note");
        assert_eq!(classify("more */", &open), Rule::BoneyardClose);
        assert_eq!(classify("INT. HOUSE", &open), Rule::BoneyardBody);
        assert_eq!(classify("/* nested", &open), Rule::BoneyardBody);
    }

    #[test]
    fn page_break_precedes_synopsis() {
        let state = ParserState::new();
        assert_eq!(classify("===", &state), Rule::PageBreak);
        assert_eq!(classify("=====", &state), Rule::PageBreak);
        assert_eq!(classify("= He finds the key.", &state), Rule::Synopsis);
        assert_eq!(classify("  ==", &state), Rule::Synopsis);
    }

    #[test]
    fn note_needs_preceding_blank() {
        assert_eq!(classify("[[ check this ]]", &after_blank()), Rule::Comment);
        assert_eq!(classify("[[ check this ]]", &ParserState::new()), Rule::Continuation);
    }

    #[test]
    fn forced_scene_heading_skips_ellipsis() {
        let state = ParserState::new();
        assert_eq!(classify(".SNIPER SCOPE POV", &state), Rule::ForcedSceneHeading);
        assert_eq!(classify("...and then", &state), Rule::Continuation);
        assert_eq!(classify(".", &state), Rule::Continuation);
    }

    #[test]
    fn natural_scene_heading_and_transitions() {
        let state = ParserState::new();
        assert_eq!(classify("int. kitchen - night", &state), Rule::SceneHeading);
        assert_eq!(classify("CUT TO:", &state), Rule::ArrowTransition);
        assert_eq!(classify("FADE TO BLACK.", &state), Rule::FixedTransition);
        assert_eq!(classify("fade to black.", &state), Rule::Continuation);
        assert_eq!(classify("> THE END <", &state), Rule::CenteredOrTransition);
    }

    #[test]
    fn extra_transitions_extend_the_fixed_set() {
        let conf = Conf { extra_transitions: vec!["SMASH CUT.".to_string()], ..Conf::default() };
        let state = ParserState::new();
        assert_eq!(Rule::classify(&ctx("SMASH CUT."), &state, &conf, true), Rule::FixedTransition);
        assert_eq!(classify("SMASH CUT.", &state), Rule::Continuation);
    }

    #[test]
    fn character_needs_blank_before_and_text_after() {
        let state = after_blank();
        let conf = Conf::default();
        let with_dialogue = LineContext::new(3, "JOHN", Some("Hello."));
        assert_eq!(Rule::classify(&with_dialogue, &state, &conf, true), Rule::Character);

        let followed_by_blank = LineContext::new(3, "JOHN", Some("   "));
        assert_eq!(Rule::classify(&followed_by_blank, &state, &conf, true), Rule::Action);

        let last_line = LineContext::new(3, "JOHN", None);
        assert_eq!(Rule::classify(&last_line, &state, &conf, true), Rule::Action);
    }

    #[test]
    fn dialogue_content_before_continuation() {
        let state = ParserState { in_dialogue: true, ..ParserState::new() };
        assert_eq!(classify("(beat)", &state), Rule::DialogueContent);
        assert_eq!(classify("Go on.", &state), Rule::DialogueContent);
    }

    #[test]
    fn first_line_without_blank_is_action() {
        let state = ParserState::new();
        assert_eq!(Rule::classify(&ctx("Rain."), &state, &Conf::default(), false), Rule::Action);
    }
}
