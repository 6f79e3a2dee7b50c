use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::config::Config;
use crate::models::QuestionStyle;

/// 命令行参数
#[derive(Debug, Parser)]
#[command(
    name = "mcq_extract",
    about = "Convert multiple-choice questions in PDF/text documents into CSV tables"
)]
pub struct Cli {
    /// Document (single-file mode) or folder of documents (batch mode)
    pub input: PathBuf,

    /// Output directory for CSV tables
    #[arg(short, long)]
    pub output_dir: Option<String>,

    /// File name of the combined table in batch mode
    #[arg(long)]
    pub combined_name: Option<String>,

    /// TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// How question-start lines are recognised
    #[arg(long, value_enum)]
    pub question_style: Option<QuestionStyle>,

    /// Append lines following an option to that option (`--option-continuation false` to disable)
    #[arg(long, action = ArgAction::Set, num_args = 0..=1, default_missing_value = "true")]
    pub option_continuation: Option<bool>,

    /// Close the current question as soon as its answer line is read (`false` to disable)
    #[arg(long, action = ArgAction::Set, num_args = 0..=1, default_missing_value = "true")]
    pub answer_closes_record: Option<bool>,

    /// Max documents processed at the same time in batch mode
    #[arg(long)]
    pub max_concurrent: Option<usize>,

    /// Debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// 命令行参数覆盖配置，只覆盖显式给出的项
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(dir) = &self.output_dir {
            config.output_dir = dir.clone();
        }
        if let Some(name) = &self.combined_name {
            config.combined_file_name = name.clone();
        }
        if let Some(style) = self.question_style {
            config.policy.question_style = style;
        }
        if let Some(v) = self.option_continuation {
            config.policy.option_continuation = v;
        }
        if let Some(v) = self.answer_closes_record {
            config.policy.answer_closes_record = v;
        }
        if let Some(n) = self.max_concurrent {
            config.max_concurrent_documents = n;
        }
        if self.verbose {
            config.verbose_logging = true;
        }
        config
    }
}
