use config::{Config, Environment, File};
use dotenvy::dotenv;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::parser::DEFAULT_DELIMITER;
use crate::table::OutputFormat;

/// 默认配置文件名（不含扩展名），位于当前工作目录
pub const CONFIG_FILE_NAME: &str = "section_splitter";
/// 环境变量前缀，例如 `SECTION_SPLITTER_DELIMITER`
pub const ENV_PREFIX: &str = "SECTION_SPLITTER";

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Settings {
    /// 分段分隔符；显式配置为空字符串时不会回退到默认值
    pub delimiter: String,
    pub format: OutputFormat,
    /// 同时写入的 SQLite 数据库路径
    #[serde(default)]
    pub sqlite_path: Option<PathBuf>,
}

impl Settings {
    /// 加载配置
    ///
    /// 优先级从低到高：默认值、工作目录下的 `section_splitter.toml`、
    /// `explicit_file`、`SECTION_SPLITTER_*` 环境变量
    pub fn load(explicit_file: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        let mut builder = Config::builder()
            .set_default("delimiter", DEFAULT_DELIMITER)?
            .set_default("format", "json")?
            .add_source(File::with_name(CONFIG_FILE_NAME).required(false));

        if let Some(path) = explicit_file {
            builder = builder.add_source(File::from(path).required(true));
        }

        let config = builder
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER.to_string(),
            format: OutputFormat::Json,
            sqlite_path: None,
        }
    }
}
