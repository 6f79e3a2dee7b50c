use std::fmt;

/// 文本源中的一行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// 行号（从1开始，仅用于日志）
    pub number: usize,
    pub content: String,
}

impl Line {
    pub fn new(number: usize, content: impl Into<String>) -> Self {
        Self {
            number,
            content: content.into(),
        }
    }

    /// 把整段文本按行切分，行号从1开始
    pub fn split_text(text: &str) -> Vec<Line> {
        text.lines()
            .enumerate()
            .map(|(idx, l)| Line::new(idx + 1, l))
            .collect()
    }
}

/// 选项标签，固定为 A-D
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionLabel {
    A,
    B,
    C,
    D,
}

impl OptionLabel {
    pub const ALL: [OptionLabel; 4] = [OptionLabel::A, OptionLabel::B, OptionLabel::C, OptionLabel::D];

    /// 从选项字母解析（不区分大小写）
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_lowercase() {
            'a' => Some(OptionLabel::A),
            'b' => Some(OptionLabel::B),
            'c' => Some(OptionLabel::C),
            'd' => Some(OptionLabel::D),
            _ => None,
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for OptionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OptionLabel::A => "A",
            OptionLabel::B => "B",
            OptionLabel::C => "C",
            OptionLabel::D => "D",
        };
        f.write_str(s)
    }
}

/// 一道选择题
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionRecord {
    /// 主题（通常是来源文档名），由调用方提供
    pub topic: Option<String>,
    pub question: String,
    /// 按 A-D 顺序存放，未出现的选项为空字符串
    pub options: [String; 4],
    pub answer: Option<String>,
}

impl QuestionRecord {
    pub fn option(&self, label: OptionLabel) -> &str {
        &self.options[label.index()]
    }

    /// 附加主题
    pub fn with_topic(mut self, topic: impl Into<String>) -> Self {
        self.topic = Some(topic.into());
        self
    }
}
