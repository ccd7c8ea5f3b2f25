use serde::{Serialize, Deserialize};

// 子模块声明
pub mod section_parser;
pub mod txt_reader;


pub use section_parser::{parse, SectionParser};
pub use txt_reader::TxtReader;

/// 默认分隔符
pub const DEFAULT_DELIMITER: &str = "----";

/// 表格列名，所有表格输出均按此顺序
pub const COLUMNS: [&str; 3] = ["chapter", "title", "content"];

/// 章节记录
///
/// 解析输出的基本单元，创建后不再修改
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// 章节标签，形如 "Chapter 3"
    pub chapter: String,
    /// 章节标题：分段内第一个非空行
    pub title: String,
    /// 章节正文：其余非空行，逐行去除首尾空白后以换行连接
    pub content: String,
}

impl Record {
    /// 根据分段位置创建记录
    ///
    /// # 参数
    /// - `position`: 分段在原始切分结果中的位置（从 1 开始）
    /// - `title`: 标题
    /// - `content`: 正文
    pub fn new(position: usize, title: String, content: String) -> Self {
        Self {
            chapter: format!("Chapter {}", position),
            title,
            content,
        }
    }
}

/// 解析结果集
///
/// 记录顺序与分段在文档中的顺序一致，不做去重
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultSet {
    records: Vec<Record>,
}

impl ResultSet {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }
}

impl IntoIterator for ResultSet {
    type Item = Record;
    type IntoIter = std::vec::IntoIter<Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// 解析输入
///
/// 一次解析所需的全部输入：文档全文与分隔符
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseInput {
    /// 文档全文
    pub document: String,
    /// 分段分隔符（字面量匹配）
    pub delimiter: String,
}

impl ParseInput {
    /// 使用默认分隔符创建输入
    pub fn new(document: impl Into<String>) -> Self {
        Self {
            document: document.into(),
            delimiter: DEFAULT_DELIMITER.to_string(),
        }
    }

    /// 指定分隔符
    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }
}
