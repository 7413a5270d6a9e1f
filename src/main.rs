use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::warn;
use paper_docx::{diagnose, export_to_docx, load_conf, load_paper, validate_file, Conf};

#[derive(Parser)]
#[command(name = "paper-docx")]
#[command(version)]
#[command(about = "将论文 JSON 排版为 DOCX", long_about = None)]
struct Cli {
    /// 论文 JSON 文件
    #[arg(long, value_name = "JSON")]
    input: PathBuf,

    /// 输出的 DOCX 文件
    #[arg(long, value_name = "DOCX")]
    output: PathBuf,

    /// 版式配置 JSON
    #[arg(long, value_name = "JSON")]
    config: Option<PathBuf>,

    /// 不写入带圈脚注编号设置
    #[arg(long)]
    no_circled_footnotes: bool,

    /// 生成后检查页边距与脚注编号设置
    #[arg(long)]
    check: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let mut conf = match &cli.config {
        Some(path) => match load_conf(path) {
            Ok(conf) => conf,
            Err(e) => {
                eprintln!("读取配置失败: {}", e);
                return ExitCode::FAILURE;
            }
        },
        None => Conf::default(),
    };
    if cli.no_circled_footnotes {
        conf.circled_footnote_numbering = false;
    }

    let paper = match load_paper(&cli.input, &conf) {
        Ok(paper) => paper,
        Err(e) => {
            eprintln!("读取论文失败: {}", e);
            return ExitCode::FAILURE;
        }
    };

    for issue in diagnose(&paper) {
        warn!("{}", issue);
    }

    let output = cli.output.to_string_lossy().to_string();
    let result = export_to_docx(&paper, &output, Some(conf.clone())).await;
    if !result.success {
        eprintln!("{}", result.message);
        return ExitCode::FAILURE;
    }

    println!("已生成: {}", output);
    if let Some(stats) = result.stats {
        println!("章节数量: {}", stats.chapters);
        println!("脚注数量: {}", stats.footnotes);
        println!("参考文献数量: {}", stats.references);
        println!("正文字数: {}", stats.body_characters);
    }

    if cli.check {
        match validate_file(&output, &conf).await {
            Ok(results) => {
                for result in &results {
                    println!("  {}", result);
                }
                if results.iter().any(|r| !r.passed) {
                    return ExitCode::FAILURE;
                }
            }
            Err(e) => {
                eprintln!("检查失败: {}", e);
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}
