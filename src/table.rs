use serde::{Serialize, Deserialize};
use serde_json::{json, Map, Value};
use std::str::FromStr;

use crate::error::{Result, SplitterError};
use crate::parser::{ResultSet, COLUMNS};

/// 表格输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// 记录数组 `[{chapter, title, content}, ...]`
    #[default]
    Json,
    /// 按列组织 `{chapter: [...], title: [...], content: [...]}`
    Columns,
    /// 制表符分隔，首行为列名
    Tsv,
}

impl OutputFormat {
    /// 将结果集渲染为该格式的文本
    pub fn render(&self, result: &ResultSet) -> Result<String> {
        match self {
            OutputFormat::Json => to_json_records(result),
            OutputFormat::Columns => to_json_columns(result),
            OutputFormat::Tsv => Ok(to_tsv(result)),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = SplitterError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "columns" => Ok(OutputFormat::Columns),
            "tsv" => Ok(OutputFormat::Tsv),
            other => Err(SplitterError::InvalidArgument(format!("未知的输出格式: {}", other))),
        }
    }
}

/// 记录数组形式的 JSON
pub fn to_json_records(result: &ResultSet) -> Result<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

/// 按列组织的 JSON
///
/// 各列长度相同，顺序与结果集一致
pub fn to_json_columns(result: &ResultSet) -> Result<String> {
    let value = columns_value(result);
    Ok(serde_json::to_string_pretty(&value)?)
}

fn columns_value(result: &ResultSet) -> Value {
    let chapters: Vec<&str> = result.iter().map(|r| r.chapter.as_str()).collect();
    let titles: Vec<&str> = result.iter().map(|r| r.title.as_str()).collect();
    let contents: Vec<&str> = result.iter().map(|r| r.content.as_str()).collect();

    let mut map = Map::new();
    for (name, column) in COLUMNS.iter().zip([chapters, titles, contents]) {
        map.insert(name.to_string(), json!(column));
    }
    Value::Object(map)
}

/// 制表符分隔文本
///
/// 字段内的反斜杠、制表符和换行会被转义，保证一条记录占一行
pub fn to_tsv(result: &ResultSet) -> String {
    let mut out = COLUMNS.join("\t");
    out.push('\n');

    for record in result {
        let fields = [&record.chapter, &record.title, &record.content];
        let row: Vec<String> = fields.iter().map(|f| escape_tsv_field(f)).collect();
        out.push_str(&row.join("\t"));
        out.push('\n');
    }

    out
}

fn escape_tsv_field(field: &str) -> String {
    let mut escaped = String::with_capacity(field.len());
    for ch in field.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '\t' => escaped.push_str("\\t"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
