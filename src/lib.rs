//! # MCQ Extract
//!
//! 把文档中提取出的选择题文本转换成 CSV 表格
//!
//! ## 架构设计
//!
//! 本系统沿用四层架构：
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 唯一接触文件和 PDF 的地方，只暴露能力
//! - `text_source` - 文档 → 行序列
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，不关心流程
//! - `line_classifier` - 单行分类（题目起始 / 选项 / 答案 / 空行 / 其他）
//! - `CsvWriter` - 写 CSV 能力
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义"一份文档"的完整处理流程
//! - `RecordAssembler` - 状态机，把行序列组装成题目
//! - `DocumentCtx` - 上下文封装（路径 + 主题 + 索引）
//! - `DocumentFlow` - 流程编排（提取 → 解析 → 写出）
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/batch_processor` - 单文件 / 批量模式，管理并发和合并表格
//!
//! ## 模块结构

pub mod cli;
pub mod config;
pub mod error;
pub mod infrastructure;
pub mod logger;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{Line, OptionLabel, ParsePolicy, QuestionRecord, QuestionStyle};
pub use orchestrator::{App, RunSummary};
pub use workflow::{parse_lines, parse_text, DocumentCtx, DocumentFlow, RecordAssembler};
