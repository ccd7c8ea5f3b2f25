use encoding_rs::*;
use std::fs;
use std::path::Path;
use crate::error::{Result, SplitterError};

/// TXT 读取器
///
/// 读取纯文本文件的全部内容。按 BOM 识别编码，默认 UTF-8；
/// 无法解码时直接报错，不做替换字符处理。
#[derive(Clone, Debug, Default)]
pub struct TxtReader;

impl TxtReader {
    /// 创建新的 TXT 读取器实例
    pub fn new() -> Self {
        Self
    }

    /// 获取支持的文件扩展名列表
    pub fn supported_extensions(&self) -> Vec<&str> {
        vec!["txt"]
    }

    /// 检查文件扩展名
    ///
    /// # 参数
    /// - `file_path`: 文件路径
    ///
    /// # 返回
    /// 扩展名为 txt（不区分大小写）时返回 Ok(())
    pub fn check_extension(&self, file_path: &Path) -> Result<()> {
        let ext = file_path
            .extension()
            .and_then(|s| s.to_str())
            .ok_or_else(|| {
                SplitterError::UnsupportedFormat(format!("无法识别文件扩展名: {}", file_path.display()))
            })?
            .to_lowercase();

        if self.supported_extensions().contains(&ext.as_str()) {
            Ok(())
        } else {
            Err(SplitterError::UnsupportedFormat(ext))
        }
    }

    /// 检测文件编码
    ///
    /// # 参数
    /// - `bytes`: 文件字节数据
    ///
    /// # 返回
    /// 检测到的编码及 BOM 长度
    fn detect_encoding(&self, bytes: &[u8]) -> (&'static Encoding, usize) {
        // 检查 BOM (Byte Order Mark)，否则按 UTF-8 处理
        Encoding::for_bom(bytes).unwrap_or((UTF_8, 0))
    }

    /// 将字节解码为字符串
    ///
    /// 出现非法字节序列时返回 `Decode` 错误。
    /// 解码后 `\r\n` 与单独的 `\r` 统一为 `\n`
    pub fn decode(&self, bytes: &[u8]) -> Result<String> {
        let (encoding, bom_length) = self.detect_encoding(bytes);

        let text = encoding
            .decode_without_bom_handling_and_without_replacement(&bytes[bom_length..])
            .ok_or_else(|| SplitterError::Decode(format!("文件不是有效的 {} 文本", encoding.name())))?;

        Ok(normalize_newlines(&text))
    }

    /// 读取文件全文
    ///
    /// # 参数
    /// - `file_path`: 要读取的文件路径
    ///
    /// # 返回
    /// 文件文本；扩展名不符、读取失败或解码失败时返回错误
    pub fn read(&self, file_path: &Path) -> Result<String> {
        self.check_extension(file_path)?;

        let bytes = fs::read(file_path)?;
        self.decode(&bytes)
    }
}

/// 统一换行符
fn normalize_newlines(text: &str) -> String {
    if !text.contains('\r') {
        return text.to_string();
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}
