//! 编排层（Orchestration Layer）
//!
//! ## 层次关系
//!
//! ```text
//! batch_processor (处理 Vec<文档>)
//!     ↓
//! workflow::DocumentFlow (处理单份文档)
//!     ↓
//! workflow::record_assembler (行序列 → 题目)
//!     ↓
//! services (能力层：classify / csv)
//!     ↓
//! infrastructure (基础设施：text_source)
//! ```
//!
//! 编排层只做调度和统计，不做具体解析判断。

pub mod batch_processor;

pub use batch_processor::{App, RunSummary};
