/// 未闭合的 /* 注释块
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenBoneyard {
    /// 起始行号
    pub line: usize,
    pub lines: Vec<String>,
}

/// 正文解析状态，逐行传递
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParserState {
    pub boneyard: Option<OpenBoneyard>,
    /// 角色行之后、空行之前
    pub in_dialogue: bool,
    /// 当前行之前连续空行数
    pub newlines_before: usize,
}

impl ParserState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn in_boneyard(&self) -> bool {
        self.boneyard.is_some()
    }

    pub fn after_blank(&self) -> bool {
        self.newlines_before > 0
    }

    pub fn blank_line(&mut self) {
        self.newlines_before += 1;
        self.in_dialogue = false;
    }

    /// 打开注释块，首行内容为空时不累积
    pub fn open_boneyard(&mut self, line: usize, first: &str) {
        let mut lines = Vec::new();
        if !first.is_empty() {
            lines.push(first.to_string());
        }
        self.boneyard = Some(OpenBoneyard { line, lines });
    }

    pub fn push_boneyard(&mut self, text: &str) {
        if let Some(open) = self.boneyard.as_mut() {
            open.lines.push(text.to_string());
        }
    }

    /// 关闭注释块，返回 (起始行号, 用换行连接的内容)
    pub fn close_boneyard(&mut self) -> Option<(usize, String)> {
        self.boneyard.take().map(|open| (open.line, open.lines.join("\n")))
    }
}
