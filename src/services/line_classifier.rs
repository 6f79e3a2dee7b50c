//! 行分类服务 - 业务能力层
//!
//! 只负责"这一行是什么"，不关心题目如何组装

use regex::Regex;
use std::sync::LazyLock;

use crate::models::{OptionLabel, QuestionStyle};

static NUMBERED_START_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(\d+)\.\s*(.*)$").expect("题号正则无效"));
static LONE_NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(\d+)\s*$").expect("题号正则无效"));
static ANSWER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^answer:\s*(.*)$").expect("答案正则无效"));
static OPTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\s*([a-d])\)\s*(.*)$").expect("选项正则无效"));

/// 行类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// 空行
    Blank,
    /// 新题目开始，`text` 是题号之后的题干（可能为空）
    QuestionStart { number: &'a str, text: &'a str },
    /// `Answer: x` 行，值已去除首尾空白
    Answer(&'a str),
    /// `a) 选项` 行
    Option { label: OptionLabel, text: &'a str },
    /// 其他文本，是否作为接续行由组装器决定
    Other(&'a str),
}

/// 对单行分类
///
/// 优先级：空行 > 题目起始 > 答案 > 选项 > 其他，先匹配者生效
pub fn classify_line(raw: &str, style: QuestionStyle) -> LineKind<'_> {
    let line = raw.trim();

    if line.is_empty() {
        return LineKind::Blank;
    }

    if let Some(kind) = match_question_start(line, style) {
        return kind;
    }

    if let Some(caps) = ANSWER_RE.captures(line) {
        let value = caps.get(1).map_or("", |m| m.as_str()).trim();
        return LineKind::Answer(value);
    }

    if let Some(caps) = OPTION_RE.captures(line) {
        let label = caps
            .get(1)
            .and_then(|m| m.as_str().chars().next())
            .and_then(OptionLabel::from_letter);
        if let Some(label) = label {
            let text = caps.get(2).map_or("", |m| m.as_str()).trim();
            return LineKind::Option { label, text };
        }
    }

    LineKind::Other(line)
}

fn match_question_start(line: &str, style: QuestionStyle) -> Option<LineKind<'_>> {
    match style {
        QuestionStyle::Numbered => {
            let caps = NUMBERED_START_RE.captures(line)?;
            Some(LineKind::QuestionStart {
                number: caps.get(1)?.as_str(),
                text: caps.get(2).map_or("", |m| m.as_str()).trim(),
            })
        }
        QuestionStyle::LoneNumber => {
            let caps = LONE_NUMBER_RE.captures(line)?;
            Some(LineKind::QuestionStart {
                number: caps.get(1)?.as_str(),
                text: "",
            })
        }
    }
}
