//! # 命令行接口模块
//!
//! 使用 `clap` 定义程序的命令行结构。命令行是本工具唯一的配置入口。

use crate::steganography::Channel;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// 从图像颜色通道的最低有效位 (LSB) 中提取隐藏文本。
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    long_about = "从图像颜色通道的最低有效位 (LSB) 中提取隐藏文本。\n默认依次扫描 red、green、blue 三个通道，并输出所有非空结果。"
)]
pub struct Cli {
    #[command(flatten)]
    pub extract: ExtractArgs,

    /// 提高日志详细程度 (-v, -vv, -vvv)。日志输出到标准错误。
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// 提取所需的参数。
#[derive(Parser, Debug, Clone)]
pub struct ExtractArgs {
    /// 含有隐藏数据的图像文件路径 (如 PNG, BMP)。
    pub image: PathBuf,

    /// 通道名称：red、green 或 blue。无法识别的名称按 red 处理。
    pub channel: Option<String>,

    /// 只扫描指定的通道，而不是全部三个通道。
    #[arg(long)]
    pub only: bool,
}

impl ExtractArgs {
    /// 用户请求的通道，未提供时为红色通道。
    pub fn requested_channel(&self) -> Channel {
        self.channel
            .as_deref()
            .map(Channel::from_name)
            .unwrap_or_default()
    }

    /// 本次运行要扫描的通道列表。
    pub fn channels(&self) -> Vec<Channel> {
        if self.only {
            vec![self.requested_channel()]
        } else {
            Channel::ALL.to_vec()
        }
    }
}
