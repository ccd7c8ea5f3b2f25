use super::*;
use crate::error::{Result, SplitterError};

/// 分段解析器
///
/// 按分隔符切分文档，并从每个分段中提取标题和正文。
/// 不持有任何状态，可在多个线程间共享。
#[derive(Debug, Clone, Copy, Default)]
pub struct SectionParser;

impl SectionParser {
    /// 创建新的分段解析器实例
    pub fn new() -> Self {
        Self
    }

    /// 解析文档
    ///
    /// 章节编号取分段在原始切分结果中的位置，被跳过的空白分段同样占用编号。
    ///
    /// # 参数
    /// - `document`: 文档全文，可以为空
    /// - `delimiter`: 分隔符，必须非空
    ///
    /// # 返回
    /// 按文档顺序排列的结果集；分隔符为空时返回 `InvalidArgument`
    pub fn parse(&self, document: &str, delimiter: &str) -> Result<ResultSet> {
        if delimiter.is_empty() {
            return Err(SplitterError::InvalidArgument("分隔符不能为空".to_string()));
        }

        let records = document
            .split(delimiter)
            .enumerate()
            .filter_map(|(i, section)| self.parse_section(i + 1, section))
            .collect();

        Ok(ResultSet::new(records))
    }

    /// 解析输入结构体
    pub fn parse_input(&self, input: &ParseInput) -> Result<ResultSet> {
        self.parse(&input.document, &input.delimiter)
    }

    /// 解析单个分段
    ///
    /// 空白分段返回 None
    fn parse_section(&self, position: usize, section: &str) -> Option<Record> {
        let trimmed = section.trim();
        if trimmed.is_empty() {
            return None;
        }

        let lines: Vec<&str> = trimmed.lines().collect();

        let title = lines
            .iter()
            .map(|line| line.trim())
            .find(|line| !line.is_empty())
            .unwrap_or("")
            .to_string();

        // 正文总是从第 1 行之后开始，与标题所在行无关
        let content = lines
            .iter()
            .skip(1)
            .map(|line| line.trim())
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join("\n");

        Some(Record::new(position, title, content))
    }
}

/// 使用默认解析器解析文档
pub fn parse(document: &str, delimiter: &str) -> Result<ResultSet> {
    SectionParser::new().parse(document, delimiter)
}
