use std::collections::HashMap;
use serde::{Deserialize, Serialize};
use crate::models::{Document, ElementKind};

/// 剧本统计信息，从解析结果中派生
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenplayProperties {
    pub scene_names: Vec<String>,
    pub scene_lines: Vec<usize>,
    /// 角色名 -> 该角色每次出场的元素下标
    pub characters: HashMap<String, Vec<usize>>,
    pub first_scene_line: Option<usize>,
    /// 动作文本总字符数
    pub length_action: usize,
    /// 对白文本总字符数
    pub length_dialogue: usize,
    /// 可表演元素数量，不含注释、概要、章节等
    pub performable_count: usize,
}

impl ScreenplayProperties {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_document(doc: &Document) -> Self {
        let mut props = ScreenplayProperties::new();
        for (index, element) in doc.elements.iter().enumerate() {
            if element.kind.is_performable() {
                props.performable_count += 1;
            }
            match element.kind {
                ElementKind::SceneHeading => {
                    if props.first_scene_line.is_none() {
                        props.first_scene_line = Some(element.line);
                    }
                    props.scene_names.push(element.text.clone());
                    props.scene_lines.push(element.line);
                }
                ElementKind::Character => {
                    props.characters
                        .entry(element.text.clone())
                        .or_default()
                        .push(index);
                }
                ElementKind::Action => {
                    props.length_action += element.text.chars().filter(|c| *c != '\n').count();
                }
                ElementKind::Dialogue => {
                    props.length_dialogue += element.text.chars().filter(|c| *c != '\n').count();
                }
                _ => {}
            }
        }
        props
    }
}
