use thiserror::Error;

#[derive(Error, Debug)]
pub enum SplitterError {
    #[error("无效参数: {0}")]
    InvalidArgument(String),
    #[error("IO错误: {0}")]
    Io(#[from] std::io::Error),
    #[error("解码失败: {0}")]
    Decode(String),
    #[error("不支持的文件格式: {0}")]
    UnsupportedFormat(String),
    #[error("数据库错误: {0}")]
    Database(#[from] rusqlite::Error),
    #[error("序列化失败: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("配置错误: {0}")]
    Config(#[from] ::config::ConfigError),
}

impl SplitterError {
    /// 是否属于文件读取阶段的错误（缺失、不可读、无法解码、格式不符）
    pub fn is_io_failure(&self) -> bool {
        matches!(
            self,
            SplitterError::Io(_) | SplitterError::Decode(_) | SplitterError::UnsupportedFormat(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, SplitterError>;
