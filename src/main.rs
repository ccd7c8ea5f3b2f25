use clap::Parser;
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use section_splitter_lib::db;
use section_splitter_lib::{OutputFormat, Result, Settings, SplitterError, TextFileParser};

/// 将分隔符切分的 TXT 文件转换为 chapter / title / content 表格
#[derive(Parser, Debug)]
#[command(name = "section-splitter", version, about)]
struct Cli {
    /// 要解析的 .txt 文件
    file: PathBuf,

    /// 分段分隔符（默认 "----"）
    #[arg(short, long)]
    delimiter: Option<String>,

    /// 输出格式：json、columns、tsv
    #[arg(short, long)]
    format: Option<OutputFormat>,

    /// 输出文件，缺省时写到标准输出
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// 同时写入 SQLite 数据库
    #[arg(long)]
    sqlite: Option<PathBuf>,

    /// 额外的配置文件
    #[arg(long)]
    config: Option<PathBuf>,

    /// 日志详细程度（-v info，-vv debug）
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    /// 命令行参数覆盖配置文件和环境变量
    fn apply(&self, mut settings: Settings) -> Settings {
        if let Some(delimiter) = &self.delimiter {
            settings.delimiter = delimiter.clone();
        }
        if let Some(format) = self.format {
            settings.format = format;
        }
        if let Some(sqlite) = &self.sqlite {
            settings.sqlite_path = Some(sqlite.clone());
        }
        settings
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let settings = cli.apply(Settings::load(cli.config.as_deref())?);
    tracing::debug!(?settings, "Settings loaded");

    let pipeline = TextFileParser::from_settings(&settings);
    let result = pipeline.parse_file(&cli.file)?;

    if let Some(db_path) = &settings.sqlite_path {
        let mut conn = db::init_db(db_path)?;
        let written = db::save_result_set(&mut conn, &cli.file.display().to_string(), &result)?;
        tracing::info!(db = %db_path.display(), rows = written, "Saved records to SQLite");
    }

    let rendered = settings.format.render(&result)?;
    match &cli.output {
        Some(path) => {
            fs::write(path, rendered)?;
            tracing::info!(output = %path.display(), "Wrote output");
        }
        None => println!("{}", rendered.trim_end_matches('\n')),
    }

    Ok(())
}

/// 错误提示：区分输入文件问题与其他错误
fn error_message(err: &SplitterError) -> String {
    if err.is_io_failure() {
        format!("读取输入文件失败: {}", err)
    } else {
        format!("错误: {}", err)
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{}", error_message(&e));
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_flags_override_settings() {
        let cli = Cli::try_parse_from([
            "section-splitter",
            "book.txt",
            "-d",
            "***",
            "-f",
            "columns",
            "--sqlite",
            "out.db",
        ])
        .unwrap();

        let loaded = Settings {
            delimiter: "===".to_string(),
            format: OutputFormat::Tsv,
            sqlite_path: Some(PathBuf::from("old.db")),
        };
        let settings = cli.apply(loaded);

        assert_eq!(settings.delimiter, "***");
        assert_eq!(settings.format, OutputFormat::Columns);
        assert_eq!(settings.sqlite_path, Some(PathBuf::from("out.db")));
    }

    #[test]
    fn test_cli_without_flags_keeps_settings() {
        let cli = Cli::try_parse_from(["section-splitter", "book.txt"]).unwrap();

        let loaded = Settings {
            delimiter: "===".to_string(),
            format: OutputFormat::Tsv,
            sqlite_path: None,
        };
        let settings = cli.apply(loaded.clone());
        assert_eq!(settings, loaded);
    }

    #[test]
    fn test_error_message_classification() {
        let missing = SplitterError::from(std::io::Error::new(std::io::ErrorKind::NotFound, "missing"));
        assert!(error_message(&missing).starts_with("读取输入文件失败"));

        let invalid = SplitterError::InvalidArgument("分隔符不能为空".to_string());
        assert_eq!(error_message(&invalid), "错误: 无效参数: 分隔符不能为空");
    }
}
