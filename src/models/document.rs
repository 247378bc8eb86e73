use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use crate::models::element::{Element, ElementKind};

/// 解析结果：标题页元数据 + 正文元素序列
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// 小写键 -> 有序的值列表
    pub metadata: HashMap<String, Vec<String>>,
    /// 按源文本顺序排列的元素
    pub elements: Vec<Element>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// 取元数据，键不区分大小写
    pub fn metadata_value(&self, key: &str) -> Option<&[String]> {
        self.metadata.get(&key.to_lowercase()).map(|v| v.as_slice())
    }

    /// 标题，多行时用换行连接
    pub fn title(&self) -> Option<String> {
        self.metadata_value("title").map(|v| v.join("\n"))
    }

    pub fn elements_of(&self, kind: ElementKind) -> impl Iterator<Item = &Element> {
        self.elements.iter().filter(move |e| e.kind == kind)
    }

    pub fn scene_headings(&self) -> impl Iterator<Item = &Element> {
        self.elements_of(ElementKind::SceneHeading)
    }

    pub(crate) fn push(&mut self, element: Element) {
        self.elements.push(element);
    }

    pub(crate) fn last_mut(&mut self) -> Option<&mut Element> {
        self.elements.last_mut()
    }

    pub(crate) fn last_kind(&self) -> Option<ElementKind> {
        self.elements.last().map(|e| e.kind)
    }

    /// 向前查找最近的角色元素并标记为双对话，找到第一个即停止
    ///
    /// 返回被标记元素的下标
    pub(crate) fn mark_last_character_dual(&mut self) -> Option<usize> {
        let index = self
            .elements
            .iter()
            .rposition(|e| e.kind == ElementKind::Character)?;
        self.elements[index].is_dual_dialogue = true;
        Some(index)
    }
}
