//! 题目组装器 - 流程层
//!
//! 把按顺序到来的行组装成 `QuestionRecord`：
//! 1. 每行先经 `classify_line` 分类
//! 2. 题目起始行或输入结束时 flush 当前题目
//! 3. 题干为空的题目直接丢弃
//!
//! 组装器只持有本次解析的 `ParserState`，不同调用之间没有共享状态。

use tracing::{debug, trace};

use crate::models::{Line, OptionLabel, ParsePolicy, QuestionRecord, QuestionStyle};
use crate::services::line_classifier::{classify_line, LineKind};

/// 接续行当前写入的位置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cursor {
    #[default]
    Question,
    Option(OptionLabel),
}

/// 正在组装的题目
#[derive(Debug, Default)]
pub struct ParserState {
    /// 自上次 flush 以来是否见过题目起始行
    started: bool,
    question: String,
    options: [String; 4],
    answer: Option<String>,
    cursor: Cursor,
}

impl ParserState {
    fn begin(&mut self, text: &str) {
        *self = ParserState {
            started: true,
            ..Default::default()
        };
        append_joined(&mut self.question, text);
    }

    /// 当前是否有题目正在组装
    ///
    /// `N.` 格式以题干非空为准，`N. ` 后没有题干时后续文本不会被吸收；
    /// 题号单独成行时题干必然在后续行，见过起始行即算
    fn in_progress(&self, style: QuestionStyle) -> bool {
        match style {
            QuestionStyle::Numbered => !self.question.trim().is_empty(),
            QuestionStyle::LoneNumber => self.started,
        }
    }

    fn absorb(&mut self, text: &str) {
        match self.cursor {
            Cursor::Question => append_joined(&mut self.question, text),
            Cursor::Option(label) => append_joined(&mut self.options[label.index()], text),
        }
    }

    /// 取出已完成的题目并重置；题干为空时返回 None
    fn take_record(&mut self) -> Option<QuestionRecord> {
        let state = std::mem::take(self);
        let question = state.question.trim();
        if question.is_empty() {
            return None;
        }

        Some(QuestionRecord {
            topic: None,
            question: question.to_string(),
            options: state.options.map(|o| o.trim().to_string()),
            answer: state.answer,
        })
    }
}

fn append_joined(dst: &mut String, text: &str) {
    if text.is_empty() {
        return;
    }
    if !dst.is_empty() {
        dst.push(' ');
    }
    dst.push_str(text);
}

/// 题目组装器
pub struct RecordAssembler {
    policy: ParsePolicy,
    state: ParserState,
    records: Vec<QuestionRecord>,
}

impl RecordAssembler {
    pub fn new(policy: ParsePolicy) -> Self {
        Self {
            policy,
            state: ParserState::default(),
            records: Vec::new(),
        }
    }

    /// 处理一行
    pub fn push_line(&mut self, line: &Line) {
        let style = self.policy.question_style;
        let kind = classify_line(&line.content, style);
        trace!("第 {} 行: {:?}", line.number, kind);

        match kind {
            LineKind::Blank => {}
            LineKind::QuestionStart { number, text } => {
                self.flush();
                debug!("第 {} 行: 第 {} 题开始", line.number, number);
                self.state.begin(text);
            }
            LineKind::Answer(value) => {
                if !self.state.in_progress(style) {
                    debug!("第 {} 行: 题目外的答案行，忽略", line.number);
                    return;
                }
                // 多个答案行时后者覆盖前者
                self.state.answer = Some(value.to_string());
                self.state.cursor = Cursor::Question;
                if self.policy.answer_closes_record {
                    self.flush();
                }
            }
            LineKind::Option { label, text } => {
                if !self.state.in_progress(style) {
                    debug!("第 {} 行: 题目外的选项行，忽略", line.number);
                    return;
                }
                self.state.options[label.index()] = text.to_string();
                self.state.cursor = if self.policy.option_continuation {
                    Cursor::Option(label)
                } else {
                    Cursor::Question
                };
            }
            LineKind::Other(text) => {
                if self.state.in_progress(style) {
                    self.state.absorb(text);
                } else {
                    trace!("第 {} 行: 题目外的文本，忽略", line.number);
                }
            }
        }
    }

    fn flush(&mut self) {
        if let Some(record) = self.state.take_record() {
            self.records.push(record);
        }
    }

    /// 输入结束，flush 最后一题并返回所有题目
    pub fn finish(mut self) -> Vec<QuestionRecord> {
        self.flush();
        self.records
    }
}

/// 解析行序列
pub fn parse_lines(lines: &[Line], policy: ParsePolicy) -> Vec<QuestionRecord> {
    let mut assembler = RecordAssembler::new(policy);
    for line in lines {
        assembler.push_line(line);
    }
    assembler.finish()
}

/// 解析整段文本
pub fn parse_text(text: &str, policy: ParsePolicy) -> Vec<QuestionRecord> {
    parse_lines(&Line::split_text(text), policy)
}
