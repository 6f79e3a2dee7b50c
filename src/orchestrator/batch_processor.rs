//! 文档处理器 - 编排层
//!
//! ## 职责
//!
//! 本模块是整个应用的入口，决定单文件模式还是批量模式。
//!
//! ## 核心功能
//!
//! 1. **模式选择**：输入是文件走单文件模式，是文件夹走批量模式
//! 2. **并发控制**：批量模式使用 Semaphore 限制同时处理的文档数量
//! 3. **顺序保证**：按文件夹顺序收集结果，合并表格中的题目顺序与来源一致
//! 4. **跳过策略**：批量模式下空文档/无题目文档只记录警告
//! 5. **全局统计**：汇总所有文档的处理结果

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::sync::Semaphore;
use tracing::{error, info, warn};

use crate::config::Config;
use crate::error::AppResult;
use crate::infrastructure::text_source;
use crate::models::QuestionRecord;
use crate::services::{CsvWriter, TableLayout};
use crate::utils::logging::{log_documents_found, log_startup, print_final_stats};
use crate::workflow::{DocumentCtx, DocumentFlow};

/// 应用主结构
pub struct App {
    config: Config,
}

/// 一次运行的统计
#[derive(Debug, Default)]
pub struct RunSummary {
    /// 成功写出的文档数
    pub written: usize,
    /// 跳过的文档数
    pub skipped: usize,
    /// 失败的文档数
    pub failed: usize,
    /// 题目总数
    pub total_records: usize,
    /// 每份文档的 CSV 文件
    pub outputs: Vec<PathBuf>,
    /// 合并表格（仅批量模式）
    pub combined: Option<PathBuf>,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// 运行应用主逻辑
    pub async fn run(&self, input: &Path) -> AppResult<RunSummary> {
        text_source::ensure_exists(input).await?;

        log_startup(input, &self.config);

        let summary = if input.is_dir() {
            self.process_folder(input).await?
        } else {
            self.process_single(input).await?
        };

        print_final_stats(
            summary.written,
            summary.skipped,
            summary.failed,
            summary.total_records,
        );

        Ok(summary)
    }

    /// 单文件模式：没有文本或没有题目都是致命错误
    pub async fn process_single(&self, path: &Path) -> AppResult<RunSummary> {
        let flow = DocumentFlow::new(
            self.config.policy,
            CsvWriter::new(&self.config.output_dir),
            TableLayout::Plain,
        );
        let ctx = DocumentCtx::new(path.to_path_buf(), 1);

        let report = flow.run(&ctx).await?;

        Ok(RunSummary {
            written: 1,
            total_records: report.records.len(),
            outputs: vec![report.csv_path],
            ..Default::default()
        })
    }

    /// 批量模式：每份文档一张表，另外写一张合并表格
    pub async fn process_folder(&self, folder: &Path) -> AppResult<RunSummary> {
        info!("\n📁 正在扫描文件夹 {} ...", folder.display());
        let documents = text_source::list_documents(folder).await?;

        let max_concurrent = self.config.max_concurrent_documents.max(1);
        log_documents_found(documents.len(), max_concurrent);

        let mut summary = RunSummary::default();
        let (documents, conflicts) =
            split_output_conflicts(documents, &self.config.combined_file_name);
        for ctx in &conflicts {
            warn!(
                "{} ⚠️ 输出文件 {} 与其他文档或合并表格重名，跳过",
                ctx,
                ctx.csv_file_name()
            );
            summary.skipped += 1;
        }

        let writer = CsvWriter::new(&self.config.output_dir);
        writer.ensure_dir()?;

        let flow = Arc::new(DocumentFlow::new(
            self.config.policy,
            writer,
            TableLayout::WithTopic,
        ));
        let semaphore = Arc::new(Semaphore::new(max_concurrent));

        let mut handles = Vec::with_capacity(documents.len());
        for ctx in documents {
            let flow = Arc::clone(&flow);
            let semaphore = Arc::clone(&semaphore);

            let handle = tokio::spawn(async move {
                let _permit = semaphore.acquire_owned().await;
                let result = flow.run(&ctx).await;
                (ctx, result)
            });
            handles.push(handle);
        }

        // 按文件夹顺序等待，保证合并表格的顺序
        let mut combined: Vec<QuestionRecord> = Vec::new();

        for handle in handles {
            match handle.await {
                Ok((_, Ok(report))) => {
                    summary.written += 1;
                    summary.total_records += report.records.len();
                    summary.outputs.push(report.csv_path);
                    combined.extend(report.records);
                }
                Ok((ctx, Err(e))) if e.is_skippable() => {
                    warn!("{} ⚠️ {}，跳过", ctx, e);
                    summary.skipped += 1;
                }
                Ok((ctx, Err(e))) => {
                    error!("{} ❌ 处理失败: {}", ctx, e);
                    summary.failed += 1;
                }
                Err(e) => {
                    error!("文档任务执行失败: {}", e);
                    summary.failed += 1;
                }
            }
        }

        let combined_path = flow.writer().write(
            &self.config.combined_file_name,
            &combined,
            TableLayout::WithTopic,
        )?;
        info!(
            "💾 合并表格已保存: {} ({} 道题目)",
            combined_path.display(),
            combined.len()
        );
        summary.combined = Some(combined_path);

        Ok(summary)
    }
}

/// 按输出文件名分流：与先出现的文档或合并表格重名的文档不处理
///
/// 并发任务各自写自己的 CSV，重名会互相覆盖；比较时忽略大小写
fn split_output_conflicts(
    documents: Vec<PathBuf>,
    combined_file_name: &str,
) -> (Vec<DocumentCtx>, Vec<DocumentCtx>) {
    let mut taken: HashSet<String> = HashSet::new();
    taken.insert(combined_file_name.to_lowercase());

    let mut kept = Vec::with_capacity(documents.len());
    let mut conflicts = Vec::new();
    for (idx, path) in documents.into_iter().enumerate() {
        let ctx = DocumentCtx::new(path, idx + 1);
        if taken.insert(ctx.csv_file_name().to_lowercase()) {
            kept.push(ctx);
        } else {
            conflicts.push(ctx);
        }
    }
    (kept, conflicts)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn topics(ctxs: &[DocumentCtx]) -> Vec<(usize, &str)> {
        ctxs.iter()
            .map(|c| (c.document_index, c.topic.as_str()))
            .collect()
    }

    #[test]
    fn test_shared_stem_keeps_first_document() {
        let docs = vec![
            PathBuf::from("in/a.pdf"),
            PathBuf::from("in/a.txt"),
            PathBuf::from("in/b.txt"),
        ];
        let (kept, conflicts) = split_output_conflicts(docs, "all_topics.csv");

        assert_eq!(topics(&kept), vec![(1, "a"), (3, "b")]);
        assert_eq!(topics(&conflicts), vec![(2, "a")]);
        assert_eq!(conflicts[0].path, PathBuf::from("in/a.txt"));
    }

    #[test]
    fn test_combined_name_is_reserved() {
        let docs = vec![PathBuf::from("in/All_Topics.txt"), PathBuf::from("in/rust.pdf")];
        let (kept, conflicts) = split_output_conflicts(docs, "all_topics.csv");

        assert_eq!(topics(&kept), vec![(2, "rust")]);
        assert_eq!(topics(&conflicts), vec![(1, "All_Topics")]);
    }
}
