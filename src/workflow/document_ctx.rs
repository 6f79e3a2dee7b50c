//! 文档处理上下文
//!
//! 封装"我正在处理哪份文档"这一信息

use std::fmt::Display;
use std::path::PathBuf;

use crate::infrastructure::text_source::topic_name;

/// 文档处理上下文
#[derive(Debug, Clone)]
pub struct DocumentCtx {
    /// 文档路径
    pub path: PathBuf,

    /// 主题名（文件名去掉扩展名）
    pub topic: String,

    /// 文档索引（从1开始，仅用于日志显示）
    pub document_index: usize,
}

impl DocumentCtx {
    /// 创建新的文档上下文，主题取自文件名
    pub fn new(path: PathBuf, document_index: usize) -> Self {
        let topic = topic_name(&path);
        Self {
            path,
            topic,
            document_index,
        }
    }

    /// 该文档对应的 CSV 文件名
    pub fn csv_file_name(&self) -> String {
        format!("{}.csv", self.topic)
    }
}

impl Display for DocumentCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[文档 #{} {}]", self.document_index, self.topic)
    }
}
