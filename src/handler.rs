//! # 命令处理逻辑模块
//!
//! 负责协调一次提取：确定要扫描的通道、调用提取核心、过滤空结果，
//! 并把报告写到标准输出。

use crate::cli::ExtractArgs;
use crate::constants::DIVIDER_WIDTH;
use crate::steganography::{Channel, scan_channels};
use anyhow::Result;
use log::{debug, info};
use std::io::{self, Write};
use std::path::Path;

/// 处理一次提取。
///
/// 所有通道的结果都在输出之前收集完毕，因此提取失败时不会打印任何部分报告。
///
/// # Errors
///
/// * 图像文件不存在或无法解码 (见 [`crate::error::ExtractError`])。
/// * 无法写入标准输出。
pub fn handle_extract(args: ExtractArgs) -> Result<()> {
    let found = find_messages(&args)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out, &args.image, &found)?;
    out.flush()?;
    Ok(())
}

/// 扫描参数指定的通道，只保留去除首尾空白后非空的结果。
///
/// 返回的文本保持原样，不做修剪。
pub fn find_messages(args: &ExtractArgs) -> Result<Vec<(Channel, String)>> {
    let channels = args.channels();
    debug!(
        "Scanning {} for channels: {:?} (requested: {})",
        args.image.display(),
        channels,
        args.requested_channel()
    );

    let found: Vec<(Channel, String)> = scan_channels(&args.image, &channels)?
        .into_iter()
        .filter(|(_, message)| !message.trim().is_empty())
        .collect();

    info!(
        "{} of {} channels carried a message",
        found.len(),
        channels.len()
    );
    Ok(found)
}

/// 按固定格式渲染报告。
pub fn write_report<W: Write>(
    out: &mut W,
    image: &Path,
    found: &[(Channel, String)],
) -> io::Result<()> {
    let banner = "=".repeat(DIVIDER_WIDTH);
    let rule = "-".repeat(DIVIDER_WIDTH);

    writeln!(out, "{banner}")?;
    writeln!(out, "STEGANOGRAPHY EXTRACTION: {}", image.display())?;
    writeln!(out, "{banner}")?;

    for (channel, message) in found {
        writeln!(out)?;
        writeln!(out, "[{} CHANNEL]", channel.label())?;
        writeln!(out, "{rule}")?;
        writeln!(out, "{message}")?;
    }

    writeln!(out, "{banner}")
}
