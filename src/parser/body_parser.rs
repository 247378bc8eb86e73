use log::{trace, warn};
use crate::models::{Conf, Document, Element, ElementKind};
use crate::parser::rules::{LineContext, Rule};
use crate::parser::state::ParserState;
use crate::utils::{split_scene_number, FountainConstants};

/// 正文解析器
///
/// 单遍扫描，每行恰好归入一条规则：要么产生新元素，要么追加到最后一个元素。
/// 所有判断都基于 `starts_with`/`strip_prefix` 等不会越界的操作，
/// 空行或只剩标记符的行不会导致 panic，只会产生空文本元素。
pub struct BodyParser<'c> {
    conf: &'c Conf,
    state: ParserState,
}

impl<'c> BodyParser<'c> {
    pub fn new(conf: &'c Conf) -> Self {
        BodyParser {
            conf,
            state: ParserState::new(),
        }
    }

    /// 解析正文行，`first_line` 为第一行在规范化文本中的行号
    pub fn parse(mut self, lines: &[&str], first_line: usize) -> Vec<Element> {
        let mut doc = Document::new();
        self.parse_into(lines, first_line, &mut doc);
        doc.elements
    }

    /// 解析正文行并追加到 `doc.elements`
    pub fn parse_into(&mut self, lines: &[&str], first_line: usize, doc: &mut Document) {
        self.state = ParserState::new();

        for (i, raw) in lines.iter().enumerate() {
            let ctx = LineContext::new(first_line + i, raw, lines.get(i + 1).copied());
            let rule = Rule::classify(&ctx, &self.state, self.conf, !doc.elements.is_empty());
            trace!("第{}行 {:?}: {:?}", ctx.number, rule, ctx.full);

            self.apply(rule, &ctx, doc);
            if rule != Rule::Blank {
                self.state.newlines_before = 0;
            }
        }

        self.finish(doc);
    }

    fn apply(&mut self, rule: Rule, ctx: &LineContext, doc: &mut Document) {
        let full = ctx.full;
        let line = ctx.number;

        match rule {
            Rule::Blank => self.state.blank_line(),
            Rule::BoneyardOpen => {
                let rest = full.strip_prefix(FountainConstants::BONEYARD_BEGIN).unwrap_or(full);
                match rest.strip_suffix(FountainConstants::BONEYARD_END) {
                    // 同一行内闭合
                    Some(text) => doc.push(Element::new(ElementKind::Boneyard, text.trim(), line)),
                    None => self.state.open_boneyard(line, rest.trim()),
                }
            }
            Rule::BoneyardClose => {
                let text = full.strip_suffix(FountainConstants::BONEYARD_END).unwrap_or(full).trim();
                if !text.is_empty() {
                    self.state.push_boneyard(text);
                }
                if let Some((start, text)) = self.state.close_boneyard() {
                    doc.push(Element::new(ElementKind::Boneyard, text, start));
                }
            }
            Rule::BoneyardBody => self.state.push_boneyard(full),
            Rule::PageBreak => doc.push(Element::new(ElementKind::PageBreak, full, line)),
            Rule::Synopsis => {
                let text = full.strip_prefix('=').unwrap_or(full).trim();
                doc.push(Element::new(ElementKind::Synopsis, text, line));
            }
            Rule::Comment => {
                let text = full.trim_matches(|c: char| matches!(c, '[' | ']' | ' ' | '\t'));
                doc.push(Element::new(ElementKind::Comment, text, line));
            }
            Rule::SectionHeading => {
                let depth = full.chars().take_while(|c| *c == '#').count();
                // '#' 为单字节，depth 即字节偏移
                doc.push(Element::section(full[depth..].trim(), depth, line));
            }
            Rule::ForcedSceneHeading => {
                let (text, number) = split_scene_number(full.strip_prefix('.').unwrap_or(full));
                doc.push(Element::scene_heading(text, number, line));
            }
            Rule::SceneHeading => {
                let (text, number) = split_scene_number(full);
                doc.push(Element::scene_heading(text, number, line));
            }
            Rule::ArrowTransition | Rule::FixedTransition => {
                doc.push(Element::new(ElementKind::Transition, full, line));
            }
            Rule::CenteredOrTransition => {
                let rest = full.strip_prefix('>').unwrap_or(full);
                // 结尾的 '<' 可省略
                let text = rest.strip_suffix('<').unwrap_or(rest).trim();
                if text.is_empty() {
                    doc.push(Element::new(ElementKind::Transition, rest.trim(), line));
                } else {
                    doc.push(Element::centered(text, line));
                }
            }
            Rule::Character => {
                let character = match full.strip_suffix(FountainConstants::DUAL_DIALOGUE_MARK) {
                    Some(name) => {
                        if doc.mark_last_character_dual().is_none() {
                            trace!("第{}行双对话前没有角色", line);
                        }
                        let name = name.trim_end_matches(FountainConstants::DUAL_DIALOGUE_MARK).trim();
                        let mut element = Element::new(ElementKind::Character, name, line);
                        element.is_dual_dialogue = true;
                        element
                    }
                    None => Element::new(ElementKind::Character, full, line),
                };
                doc.push(character);
                // 双对话角色也有意进入对白块：其后的行按对白处理，不并入角色名
                self.state.in_dialogue = true;
            }
            Rule::DialogueContent => {
                if !self.state.after_blank() && full.starts_with('(') {
                    doc.push(Element::new(ElementKind::Parenthetical, full, line));
                } else if doc.last_kind() == Some(ElementKind::Dialogue) {
                    if let Some(last) = doc.last_mut() {
                        last.append_line(full);
                    }
                } else {
                    doc.push(Element::new(ElementKind::Dialogue, full, line));
                }
            }
            Rule::Continuation => {
                if let Some(last) = doc.last_mut() {
                    last.append_line(full);
                }
            }
            Rule::Action => doc.push(Element::new(ElementKind::Action, full, line)),
        }
    }

    // 文末仍未闭合的注释块
    fn finish(&mut self, doc: &mut Document) {
        if let Some((start, text)) = self.state.close_boneyard() {
            if self.conf.flush_unterminated_boneyard {
                warn!("第{}行开始的注释块没有闭合，已按注释输出", start);
                doc.push(Element::new(ElementKind::Boneyard, text, start));
            } else {
                warn!("第{}行开始的注释块没有闭合，已丢弃", start);
            }
        }
    }
}
