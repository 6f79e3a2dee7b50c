//! CSV 写入服务 - 业务能力层
//!
//! 只负责"把题目写成表格"能力，不关心题目从哪里来

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::error::{AppError, AppResult, FileError, OutputError};
use crate::models::{OptionLabel, QuestionRecord};

const COLUMNS: [&str; 6] = ["Question", "Option A", "Option B", "Option C", "Option D", "Answer"];
const TOPIC_COLUMN: &str = "Topic";

/// 表格列模式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableLayout {
    /// 单文件模式，不带 Topic 列
    Plain,
    /// 批量/合并模式，首列为 Topic
    WithTopic,
}

/// CSV 写入服务
pub struct CsvWriter {
    output_dir: PathBuf,
}

impl CsvWriter {
    /// 创建写入服务，文件写入 `output_dir`
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// 确保输出目录存在
    pub fn ensure_dir(&self) -> AppResult<()> {
        std::fs::create_dir_all(&self.output_dir).map_err(|source| {
            AppError::File(FileError::CreateDirFailed {
                path: self.output_dir.display().to_string(),
                source,
            })
        })
    }

    /// 写入一张表，返回文件路径
    pub fn write(
        &self,
        file_name: &str,
        records: &[QuestionRecord],
        layout: TableLayout,
    ) -> AppResult<PathBuf> {
        self.ensure_dir()?;
        let path = self.output_dir.join(file_name);
        let path_display = path.display().to_string();

        debug!("写入 {} 条记录到 {}", records.len(), path_display);

        let file = std::fs::File::create(&path).map_err(|source| {
            AppError::File(FileError::WriteFailed {
                path: path_display.clone(),
                source,
            })
        })?;
        write_records(file, records, layout).map_err(|e| match e {
            WriteError::Csv(source) => AppError::csv_write_failed(path_display.clone(), source),
            WriteError::Io(source) => AppError::Output(OutputError::FlushFailed {
                path: path_display.clone(),
                source,
            }),
        })?;

        Ok(path)
    }
}

/// 表格写入过程中的底层错误
#[derive(Debug, Error)]
pub enum WriteError {
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// 把题目写入任意输出流
///
/// 逗号、引号、换行按标准 CSV 规则加引号转义；无答案写空单元格
pub fn write_records<W: io::Write>(
    out: W,
    records: &[QuestionRecord],
    layout: TableLayout,
) -> Result<(), WriteError> {
    let mut writer = csv::Writer::from_writer(out);

    let mut header: Vec<&str> = Vec::with_capacity(COLUMNS.len() + 1);
    if layout == TableLayout::WithTopic {
        header.push(TOPIC_COLUMN);
    }
    header.extend(COLUMNS);
    writer.write_record(&header)?;

    for record in records {
        let mut row: Vec<&str> = Vec::with_capacity(header.len());
        if layout == TableLayout::WithTopic {
            row.push(record.topic.as_deref().unwrap_or(""));
        }
        row.push(&record.question);
        row.extend(OptionLabel::ALL.iter().map(|&label| record.option(label)));
        row.push(record.answer.as_deref().unwrap_or(""));
        writer.write_record(&row)?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> QuestionRecord {
        QuestionRecord {
            topic: None,
            question: "What is 2+2?".to_string(),
            options: ["3", "4", "5", "6"].map(String::from),
            answer: Some("b".to_string()),
        }
    }

    fn render(records: &[QuestionRecord], layout: TableLayout) -> String {
        let mut buf = Vec::new();
        write_records(&mut buf, records, layout).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_plain_layout() {
        let out = render(&[sample()], TableLayout::Plain);
        assert_eq!(
            out,
            "Question,Option A,Option B,Option C,Option D,Answer\nWhat is 2+2?,3,4,5,6,b\n"
        );
    }

    #[test]
    fn test_topic_layout_and_missing_answer() {
        let mut record = sample().with_topic("arithmetic");
        record.answer = None;
        let out = render(&[record], TableLayout::WithTopic);
        assert_eq!(
            out,
            "Topic,Question,Option A,Option B,Option C,Option D,Answer\narithmetic,What is 2+2?,3,4,5,6,\n"
        );
    }

    #[test]
    fn test_quoting() {
        let mut record = sample();
        record.question = "Pick one, \"carefully\"\nplease".to_string();
        let out = render(&[record], TableLayout::Plain);
        assert!(out.contains("\"Pick one, \"\"carefully\"\"\nplease\",3,4,5,6,b"));
    }

    #[test]
    fn test_empty_table_has_header() {
        let out = render(&[], TableLayout::WithTopic);
        assert_eq!(out, "Topic,Question,Option A,Option B,Option C,Option D,Answer\n");
    }

    #[test]
    fn test_write_creates_directory() {
        let dir = std::env::temp_dir()
            .join(format!("mcq_csv_writer_{}", std::process::id()))
            .join("nested");
        let writer = CsvWriter::new(&dir);

        let path = writer.write("out.csv", &[sample()], TableLayout::Plain).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("Question,"));

        std::fs::remove_dir_all(dir.parent().unwrap()).unwrap();
    }
}
