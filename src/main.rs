use anyhow::Result;
use clap::Parser;
use mcq_extract::cli::Cli;
use mcq_extract::{logger, App, Config};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 加载配置：默认值 < TOML < 环境变量 < 命令行
    let config = cli.apply(Config::load(cli.config.as_deref())?);

    // 初始化日志
    logger::init(config.verbose_logging);

    // 运行应用
    let summary = App::new(config).run(&cli.input).await?;

    if let Some(combined) = &summary.combined {
        println!("Combined table: {}", combined.display());
    }
    println!("Processing completed: {} question(s) written.", summary.total_records);

    Ok(())
}
