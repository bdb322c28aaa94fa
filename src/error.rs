//! # 错误类型
//!
//! 提取器在边界上只暴露两类错误：文件不存在，以及其余所有加载/解码失败。

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    /// 给定路径不存在。
    #[error("Image file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// 图像无法读取或解码 (格式损坏、不受支持等)。
    #[error("Error extracting data from {}", .path.display())]
    DecodeFailure {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

impl ExtractError {
    /// 打开文件或探测格式时的 I/O 错误。
    pub(crate) fn from_io(path: PathBuf, source: std::io::Error) -> Self {
        Self::from_image(path, image::ImageError::IoError(source))
    }

    /// 根据 `image` 的错误判断属于哪一类。
    pub(crate) fn from_image(path: PathBuf, source: image::ImageError) -> Self {
        match &source {
            image::ImageError::IoError(e) if e.kind() == std::io::ErrorKind::NotFound => {
                ExtractError::FileNotFound(path)
            }
            _ => ExtractError::DecodeFailure { path, source },
        }
    }
}
