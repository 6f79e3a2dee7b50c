//! 日志工具模块
//!
//! 提供日志格式化和输出的辅助函数

use std::path::Path;
use tracing::info;

use crate::config::Config;

/// 记录程序启动信息
pub fn log_startup(input: &Path, config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 选择题提取");
    info!("📂 输入: {}", input.display());
    info!("📁 输出目录: {}", config.output_dir);
    info!(
        "🧩 解析策略: 题号={} 选项接续={} 答案结束题目={}",
        config.policy.question_style,
        config.policy.option_continuation,
        config.policy.answer_closes_record
    );
    info!("{}", "=".repeat(60));
}

/// 记录文档扫描结果
///
/// # 参数
/// - `total`: 文档总数
/// - `max_concurrent`: 最大并发数
pub fn log_documents_found(total: usize, max_concurrent: usize) {
    info!("✓ 找到 {} 个待处理的文档", total);
    info!("📋 最多同时处理 {} 个文档\n", max_concurrent);
}

/// 打印最终统计信息
///
/// # 参数
/// - `written`: 成功写出的文档数
/// - `skipped`: 跳过的文档数（无文本或无题目）
/// - `failed`: 失败的文档数
/// - `total_records`: 题目总数
pub fn print_final_stats(written: usize, skipped: usize, failed: usize, total_records: usize) {
    info!("\n{}", "=".repeat(60));
    info!("📊 全部处理完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("✅ 成功: {}/{}", written, written + skipped + failed);
    info!("⏭️ 跳过: {}", skipped);
    info!("❌ 失败: {}", failed);
    info!("📝 题目总数: {}", total_records);
    info!("{}", "=".repeat(60));
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
