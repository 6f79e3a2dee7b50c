use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// 题目起始行的识别方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionStyle {
    /// `12. 题干` 形式，题号与题干在同一行
    #[default]
    Numbered,
    /// 题号单独成行，题干在后续行
    LoneNumber,
}

impl QuestionStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            QuestionStyle::Numbered => "numbered",
            QuestionStyle::LoneNumber => "lone-number",
        }
    }
}

impl fmt::Display for QuestionStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuestionStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "numbered" => Ok(QuestionStyle::Numbered),
            "lone-number" | "lone_number" => Ok(QuestionStyle::LoneNumber),
            other => Err(format!("未知的题号格式: {}", other)),
        }
    }
}

/// 解析策略
///
/// 同一个状态机，通过策略切换不同来源文档的格式差异。
/// 默认值：题号与题干同行，选项不接续，答案行不结束题目。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct ParsePolicy {
    /// 题目起始行的识别方式
    pub question_style: QuestionStyle,
    /// 选项行之后的普通行是否接续到该选项
    pub option_continuation: bool,
    /// 答案行是否立即结束当前题目
    pub answer_closes_record: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_style_from_str() {
        assert_eq!("numbered".parse::<QuestionStyle>(), Ok(QuestionStyle::Numbered));
        assert_eq!(" Lone-Number ".parse::<QuestionStyle>(), Ok(QuestionStyle::LoneNumber));
        assert!("roman".parse::<QuestionStyle>().is_err());
    }

    #[test]
    fn test_default_policy() {
        let policy = ParsePolicy::default();
        assert_eq!(policy.question_style, QuestionStyle::Numbered);
        assert!(!policy.option_continuation);
        assert!(!policy.answer_closes_record);
    }
}
