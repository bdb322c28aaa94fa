//! # lsb_extract 库
//!
//! 本库包含从图像颜色通道最低有效位中提取隐藏文本的核心逻辑。

pub mod cli;
pub mod constants;
pub mod error;
pub mod handler;
pub mod steganography;
