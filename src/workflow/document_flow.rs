//! 文档处理流程 - 流程层
//!
//! 核心职责：定义"一份文档"的完整处理流程
//!
//! 流程顺序：
//! 1. 提取文本 → 行序列
//! 2. 行序列 → 题目列表
//! 3. 题目列表 → CSV

use std::path::PathBuf;

use tracing::{debug, info};

use crate::error::{AppResult, DocumentError};
use crate::infrastructure::text_source;
use crate::models::{ParsePolicy, QuestionRecord};
use crate::services::{CsvWriter, TableLayout};
use crate::utils::logging::truncate_text;
use crate::workflow::document_ctx::DocumentCtx;
use crate::workflow::record_assembler::parse_lines;

/// 单份文档的处理结果
#[derive(Debug, Clone)]
pub struct DocumentReport {
    /// 解析出的题目（批量模式下已附加主题）
    pub records: Vec<QuestionRecord>,
    /// 写出的 CSV 文件
    pub csv_path: PathBuf,
}

/// 文档处理流程
///
/// - 编排提取、解析、写出三个步骤
/// - 空文档、无题目文档返回 `DocumentError`，由调用方决定是否致命
pub struct DocumentFlow {
    policy: ParsePolicy,
    writer: CsvWriter,
    layout: TableLayout,
}

impl DocumentFlow {
    /// 创建新的文档处理流程
    pub fn new(policy: ParsePolicy, writer: CsvWriter, layout: TableLayout) -> Self {
        Self {
            policy,
            writer,
            layout,
        }
    }

    pub fn writer(&self) -> &CsvWriter {
        &self.writer
    }

    pub async fn run(&self, ctx: &DocumentCtx) -> AppResult<DocumentReport> {
        let path_display = ctx.path.display().to_string();

        info!("{} 📄 正在提取文本: {}", ctx, path_display);
        let lines = text_source::extract_lines(&ctx.path).await?;
        if lines.is_empty() {
            return Err(DocumentError::NoText { path: path_display }.into());
        }

        info!("{} 🔍 正在解析题目 ({} 行)...", ctx, lines.len());
        let mut records = parse_lines(&lines, self.policy);
        if records.is_empty() {
            return Err(DocumentError::NoQuestions { path: path_display }.into());
        }

        if let Some(first) = records.first() {
            debug!("{} 第一题: {}", ctx, truncate_text(&first.question, 60));
        }

        if self.layout == TableLayout::WithTopic {
            records = records
                .into_iter()
                .map(|r| r.with_topic(ctx.topic.clone()))
                .collect();
        }

        let csv_path = self
            .writer
            .write(&ctx.csv_file_name(), &records, self.layout)?;
        info!(
            "{} ✓ 保存 {} 道题目到 {}",
            ctx,
            records.len(),
            csv_path.display()
        );

        Ok(DocumentReport { records, csv_path })
    }
}
