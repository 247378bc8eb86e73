use serde::{Deserialize, Serialize};
use std::fmt;

/// 元素类型（封闭集合）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    Boneyard,
    PageBreak,
    Synopsis,
    Comment,
    SectionHeading,
    SceneHeading,
    Transition,
    Action,
    Character,
    Parenthetical,
    Dialogue,
}

impl ElementKind {
    /// 显示名称，例如 "Scene Heading"
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementKind::Boneyard => "Boneyard",
            ElementKind::PageBreak => "Page Break",
            ElementKind::Synopsis => "Synopsis",
            ElementKind::Comment => "Comment",
            ElementKind::SectionHeading => "Section Heading",
            ElementKind::SceneHeading => "Scene Heading",
            ElementKind::Transition => "Transition",
            ElementKind::Action => "Action",
            ElementKind::Character => "Character",
            ElementKind::Parenthetical => "Parenthetical",
            ElementKind::Dialogue => "Dialogue",
        }
    }

    /// 是否为可表演内容（场景标题、动作、角色、对白、括号注释、转场）
    pub fn is_performable(&self) -> bool {
        matches!(
            self,
            ElementKind::SceneHeading
                | ElementKind::Transition
                | ElementKind::Action
                | ElementKind::Character
                | ElementKind::Parenthetical
                | ElementKind::Dialogue
        )
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    pub kind: ElementKind,       // 元素类型
    pub text: String,            // 文本内容，多行用 \n 连接
    pub section_depth: usize,    // 章节层级，仅 section_heading 有效
    pub scene_number: String,    // 场景编号，仅带 #..# 标注的场景标题有效
    pub is_centered: bool,       // 是否居中，仅 action 有效
    pub is_dual_dialogue: bool,  // 是否为双对话
    pub line: usize,             // 起始行号（从0开始）
}

impl Element {
    pub fn new(kind: ElementKind, text: impl Into<String>, line: usize) -> Self {
        Element {
            kind,
            text: text.into(),
            section_depth: 0,
            scene_number: String::new(),
            is_centered: false,
            is_dual_dialogue: false,
            line,
        }
    }

    pub fn section(text: impl Into<String>, depth: usize, line: usize) -> Self {
        Element {
            section_depth: depth,
            ..Element::new(ElementKind::SectionHeading, text, line)
        }
    }

    pub fn scene_heading(text: impl Into<String>, scene_number: impl Into<String>, line: usize) -> Self {
        Element {
            scene_number: scene_number.into(),
            ..Element::new(ElementKind::SceneHeading, text, line)
        }
    }

    pub fn centered(text: impl Into<String>, line: usize) -> Self {
        Element {
            is_centered: true,
            ..Element::new(ElementKind::Action, text, line)
        }
    }

    /// 追加续行，用换行符连接
    pub fn append_line(&mut self, text: &str) {
        self.text.push('\n');
        self.text.push_str(text);
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.text)
    }
}
