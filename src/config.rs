use crate::error::{AppError, AppResult, ConfigError};
use crate::models::{ParsePolicy, QuestionStyle};
use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;

/// 程序配置文件
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// CSV 输出目录
    pub output_dir: String,
    /// 合并表格的文件名
    pub combined_file_name: String,
    /// 同时处理的文档数量
    pub max_concurrent_documents: usize,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 解析策略
    pub policy: ParsePolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: "Processed_CSVs".to_string(),
            combined_file_name: "all_topics.csv".to_string(),
            max_concurrent_documents: 4,
            verbose_logging: false,
            policy: ParsePolicy::default(),
        }
    }
}

impl Config {
    /// 从 TOML 文件加载配置，缺失的字段使用默认值
    pub fn from_toml_file(path: &Path) -> AppResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| AppError::file_read_failed(path.display().to_string(), e))?;
        toml::from_str(&content).map_err(|source| {
            AppError::Config(ConfigError::TomlParseFailed {
                path: path.display().to_string(),
                source,
            })
        })
    }

    /// 从环境变量加载配置
    pub fn from_env() -> AppResult<Self> {
        Self::default().with_env()
    }

    /// 加载配置：默认值 < TOML 文件 < 环境变量
    pub fn load(config_file: Option<&Path>) -> AppResult<Self> {
        let base = match config_file {
            Some(path) => Self::from_toml_file(path)?,
            None => Self::default(),
        };
        base.with_env()
    }

    /// 用环境变量覆盖已有配置
    pub fn with_env(mut self) -> AppResult<Self> {
        if let Ok(v) = std::env::var("MCQ_OUTPUT_DIR") {
            self.output_dir = v;
        }
        if let Ok(v) = std::env::var("MCQ_COMBINED_NAME") {
            self.combined_file_name = v;
        }
        if let Some(v) = env_parse::<usize>("MCQ_MAX_CONCURRENT", "usize")? {
            self.max_concurrent_documents = v;
        }
        if let Some(v) = env_parse::<bool>("VERBOSE_LOGGING", "bool")? {
            self.verbose_logging = v;
        }
        if let Some(v) = env_parse::<QuestionStyle>("MCQ_QUESTION_STYLE", "QuestionStyle")? {
            self.policy.question_style = v;
        }
        if let Some(v) = env_parse::<bool>("MCQ_OPTION_CONTINUATION", "bool")? {
            self.policy.option_continuation = v;
        }
        if let Some(v) = env_parse::<bool>("MCQ_ANSWER_CLOSES_RECORD", "bool")? {
            self.policy.answer_closes_record = v;
        }
        Ok(self)
    }
}

fn env_parse<T: FromStr>(var_name: &str, expected_type: &str) -> AppResult<Option<T>> {
    match std::env::var(var_name) {
        Ok(value) => value.parse::<T>().map(Some).map_err(|_| {
            AppError::Config(ConfigError::EnvVarParseFailed {
                var_name: var_name.to_string(),
                value,
                expected_type: expected_type.to_string(),
            })
        }),
        Err(_) => Ok(None),
    }
}
