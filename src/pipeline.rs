use std::path::Path;

use crate::config::Settings;
use crate::error::Result;
use crate::parser::{ResultSet, SectionParser, TxtReader, DEFAULT_DELIMITER};

/// 文本文件解析管道
///
/// 读取 TXT 文件并按分隔符拆分为章节记录
#[derive(Debug, Clone)]
pub struct TextFileParser {
    reader: TxtReader,
    parser: SectionParser,
    delimiter: String,
}

impl TextFileParser {
    /// 创建解析管道
    ///
    /// # 参数
    /// - `delimiter`: 分段分隔符，为空时解析阶段返回 `InvalidArgument`
    pub fn new(delimiter: impl Into<String>) -> Self {
        Self {
            reader: TxtReader::new(),
            parser: SectionParser::new(),
            delimiter: delimiter.into(),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.delimiter.clone())
    }

    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    /// 解析文件
    ///
    /// 读取与解码错误原样向上返回
    pub fn parse_file(&self, file_path: &Path) -> Result<ResultSet> {
        let document = self.reader.read(file_path)?;
        tracing::debug!(path = %file_path.display(), bytes = document.len(), "File loaded");

        let result = self.parse_text(&document)?;
        tracing::info!(
            path = %file_path.display(),
            records = result.len(),
            "Parsed text file"
        );
        Ok(result)
    }

    /// 解析已读取的文本
    pub fn parse_text(&self, document: &str) -> Result<ResultSet> {
        self.parser.parse(document, &self.delimiter)
    }
}

impl Default for TextFileParser {
    fn default() -> Self {
        Self::new(DEFAULT_DELIMITER)
    }
}
