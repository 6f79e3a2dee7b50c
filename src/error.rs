use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 文件操作错误
    #[error("文件错误: {0}")]
    File(#[from] FileError),
    /// 文本提取错误
    #[error("提取错误: {0}")]
    Extract(#[from] ExtractError),
    /// 表格输出错误
    #[error("输出错误: {0}")]
    Output(#[from] OutputError),
    /// 单个文档的业务错误
    #[error("文档错误: {0}")]
    Document(#[from] DocumentError),
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
}

/// 文件操作错误
#[derive(Debug, Error)]
pub enum FileError {
    /// 路径不存在
    #[error("路径不存在: {path}")]
    NotFound { path: String },
    /// 读取文件失败
    #[error("读取文件失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// 写入文件失败
    #[error("写入文件失败 ({path}): {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// 创建目录失败
    #[error("创建目录失败 ({path}): {source}")]
    CreateDirFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// 不支持的文档类型
    #[error("不支持的文档类型: {path}")]
    UnsupportedType { path: String },
}

/// 文本提取错误
#[derive(Debug, Error)]
pub enum ExtractError {
    /// PDF 解析失败
    #[error("PDF 文本提取失败 ({path}): {message}")]
    PdfFailed { path: String, message: String },
    /// 后台提取任务异常退出
    #[error("提取任务执行失败 ({path}): {message}")]
    TaskFailed { path: String, message: String },
}

/// 表格输出错误
#[derive(Debug, Error)]
pub enum OutputError {
    /// CSV 写入失败
    #[error("写入 CSV 失败 ({path}): {source}")]
    CsvWriteFailed {
        path: String,
        #[source]
        source: csv::Error,
    },
    /// 刷新文件失败
    #[error("刷新输出文件失败 ({path}): {source}")]
    FlushFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// 单个文档的业务错误（批量模式下可跳过）
#[derive(Debug, Error)]
pub enum DocumentError {
    /// 没有提取到任何文本
    #[error("未从 {path} 提取到文本")]
    NoText { path: String },
    /// 没有解析出任何题目
    #[error("未在 {path} 中找到题目")]
    NoQuestions { path: String },
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 环境变量解析失败
    #[error("环境变量 {var_name} 解析失败: 值 '{value}' 无法转换为 {expected_type}")]
    EnvVarParseFailed {
        var_name: String,
        value: String,
        expected_type: String,
    },
    /// 配置文件解析失败
    #[error("配置文件解析失败 ({path}): {source}")]
    TomlParseFailed {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建路径不存在错误
    pub fn not_found(path: impl Into<String>) -> Self {
        AppError::File(FileError::NotFound { path: path.into() })
    }

    /// 创建文件读取错误
    pub fn file_read_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::File(FileError::ReadFailed {
            path: path.into(),
            source,
        })
    }

    /// 创建CSV写入错误
    pub fn csv_write_failed(path: impl Into<String>, source: csv::Error) -> Self {
        AppError::Output(OutputError::CsvWriteFailed {
            path: path.into(),
            source,
        })
    }

    /// 批量模式下可以跳过的错误
    ///
    /// 空文档和无题目文档只在单文件模式下是致命的
    pub fn is_skippable(&self) -> bool {
        matches!(self, AppError::Document(_))
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_errors_are_skippable() {
        let err: AppError = DocumentError::NoText {
            path: "a.pdf".to_string(),
        }
        .into();
        assert!(err.is_skippable());
        assert!(!AppError::not_found("missing").is_skippable());
    }

    #[test]
    fn test_display_includes_path() {
        let err = AppError::not_found("SanfoundryFiles/");
        assert!(err.to_string().contains("SanfoundryFiles/"));
    }
}
