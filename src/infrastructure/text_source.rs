//! 文本源 - 基础设施层
//!
//! 唯一接触文件系统和 PDF 的地方，只暴露"给我一份文档的行序列"能力

use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::{debug, info};

use crate::error::{AppError, AppResult, ExtractError, FileError};
use crate::models::Line;

/// 文档类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    PlainText,
}

impl DocumentKind {
    /// 根据扩展名判断文档类型（不区分大小写）
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "pdf" => Some(DocumentKind::Pdf),
            "txt" => Some(DocumentKind::PlainText),
            _ => None,
        }
    }
}

const FALLBACK_TOPIC: &str = "untitled";

/// 从文件名得到主题名（去掉扩展名）
///
/// 没有文件名的路径（如 `..`）使用 `untitled`，保证不会写出 `.csv`
pub fn topic_name(path: &Path) -> String {
    path.file_stem()
        .or_else(|| path.file_name())
        .map(|s| s.to_string_lossy().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| FALLBACK_TOPIC.to_string())
}

/// 确认路径存在；无法判断（权限等）时按读取失败上报
pub async fn ensure_exists(path: &Path) -> AppResult<()> {
    match fs::try_exists(path).await {
        Ok(true) => Ok(()),
        Ok(false) => Err(AppError::not_found(path.display().to_string())),
        Err(e) => Err(AppError::file_read_failed(path.display().to_string(), e)),
    }
}

/// 提取文档文本并切分成行
///
/// 文本只有空白时返回空列表，不视为错误
pub async fn extract_lines(path: &Path) -> AppResult<Vec<Line>> {
    let text = extract_text(path).await?;
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }
    Ok(Line::split_text(&text))
}

/// 提取文档的全部文本
pub async fn extract_text(path: &Path) -> AppResult<String> {
    ensure_exists(path).await?;

    let kind = DocumentKind::from_path(path).ok_or_else(|| {
        AppError::File(FileError::UnsupportedType {
            path: path.display().to_string(),
        })
    })?;

    debug!("提取文本: {} ({:?})", path.display(), kind);

    match kind {
        DocumentKind::PlainText => fs::read_to_string(path)
            .await
            .map_err(|e| AppError::file_read_failed(path.display().to_string(), e)),
        DocumentKind::Pdf => {
            let owned = path.to_path_buf();
            // pdf-extract 是同步解析，放到阻塞线程池
            tokio::task::spawn_blocking(move || extract_pdf_text(&owned))
                .await
                .map_err(|e| {
                    AppError::Extract(ExtractError::TaskFailed {
                        path: path.display().to_string(),
                        message: e.to_string(),
                    })
                })?
        }
    }
}

fn extract_pdf_text(path: &Path) -> AppResult<String> {
    pdf_extract::extract_text(path).map_err(|e| {
        AppError::Extract(ExtractError::PdfFailed {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    })
}

/// 列出文件夹中所有支持的文档，按文件名排序
pub async fn list_documents(folder: &Path) -> AppResult<Vec<PathBuf>> {
    ensure_exists(folder).await?;

    let mut documents = Vec::new();
    let mut entries = fs::read_dir(folder)
        .await
        .map_err(|e| AppError::file_read_failed(folder.display().to_string(), e))?;

    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| AppError::file_read_failed(folder.display().to_string(), e))?
    {
        let path = entry.path();
        if path.is_file() && DocumentKind::from_path(&path).is_some() {
            documents.push(path);
        }
    }

    documents.sort();
    info!("在 {} 中找到 {} 个文档", folder.display(), documents.len());
    Ok(documents)
}
