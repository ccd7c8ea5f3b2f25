// 将分隔符切分的纯文本文件转换为 chapter / title / content 表格

pub mod config;
pub mod db;
pub mod error;
pub mod parser;
pub mod pipeline;
pub mod table;

pub use crate::config::Settings;
pub use crate::error::{Result, SplitterError};
pub use crate::parser::{parse, ParseInput, Record, ResultSet, SectionParser, TxtReader, COLUMNS, DEFAULT_DELIMITER};
pub use crate::pipeline::TextFileParser;
pub use crate::table::OutputFormat;
