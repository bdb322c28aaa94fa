//! # LSB 提取核心
//!
//! 按行优先顺序遍历像素，取所选通道的最低有效位组成比特流，
//! 再按 8 位一组解码为文本，直到遇到终止条件。

use crate::constants::{
    BITS_PER_CHAR, EOF_MARKER, LINE_FEED, NULL_TERMINATOR, PRINTABLE, SUBSTANTIAL_MESSAGE_LEN,
};
use crate::error::ExtractError;
use image::{DynamicImage, ImageReader, Rgba, RgbaImage};
use log::{debug, info, trace};
use std::fmt;
use std::path::Path;

/// 承载隐藏数据的颜色通道。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Channel {
    #[default]
    Red,
    Green,
    Blue,
}

impl Channel {
    /// 默认的扫描顺序。
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    /// 按名称精确匹配 (区分大小写)，其余任何名称一律视为红色通道。
    pub fn from_name(name: &str) -> Self {
        match name {
            "green" => Channel::Green,
            "blue" => Channel::Blue,
            _ => Channel::Red,
        }
    }

    /// 该通道在 RGBA 像素中的下标。
    pub fn index(self) -> usize {
        match self {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
        }
    }

    /// 报告标题中使用的大写名称。
    pub fn label(self) -> String {
        self.as_str().to_ascii_uppercase()
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 按行优先顺序 (先行后列) 收集所选通道的最低有效位，每个像素一位，取值为 0 或 1。
pub fn collect_bits(img: &RgbaImage, channel: Channel) -> Vec<u8> {
    let idx = channel.index();
    img.pixels().map(|pixel| pixel.0[idx] & 1).collect()
}

/// 把比特流解码为文本。
///
/// 比特流按 8 位一组切分，末尾不足 8 位的部分被丢弃。每一组按高位在前解释为字符码：
///
/// * `0` 立即停止；
/// * 当前组与下一组恰好构成 [`EOF_MARKER`] 时停止，且不追加当前字符；
/// * 可打印 ASCII 追加为字符，换行符追加为 `\n`；
/// * 其他字符码：若已解码内容超过 [`SUBSTANTIAL_MESSAGE_LEN`] 则停止，否则跳过。
pub fn decode_message(bits: &[u8]) -> String {
    let codes: Vec<u8> = bits
        .chunks_exact(BITS_PER_CHAR)
        .map(|group| group.iter().fold(0u8, |acc, &bit| (acc << 1) | (bit & 1)))
        .collect();

    let [marker_hi, marker_lo] = EOF_MARKER.to_be_bytes();
    let mut message = String::with_capacity(codes.len());

    for (i, &code) in codes.iter().enumerate() {
        if code == NULL_TERMINATOR {
            trace!("Null terminator at character {i}");
            break;
        }

        if code == marker_hi && codes.get(i + 1) == Some(&marker_lo) {
            trace!("EOF marker at character {i}");
            break;
        }

        if PRINTABLE.contains(&code) {
            message.push(char::from(code));
        } else if code == LINE_FEED {
            message.push('\n');
        } else if message.len() > SUBSTANTIAL_MESSAGE_LEN {
            trace!("Non-printable code {code} after {} characters", message.len());
            break;
        }
    }

    message
}

/// 从已加载的图像中提取指定通道的隐藏文本。
pub fn extract_from_image(img: &RgbaImage, channel: Channel) -> String {
    let bits = collect_bits(img, channel);
    debug!(
        "Collected {} bits from the {channel} channel ({} full characters)",
        bits.len(),
        bits.len() / BITS_PER_CHAR
    );

    let message = decode_message(&bits);
    info!("Decoded {} characters from the {channel} channel", message.len());
    message
}

/// 统一转换为 8 位 RGBA。
///
/// 16 位样本只保留高字节 (`v >> 8`)，而不是按比例四舍五入，
/// 这样最低有效位取自原始样本的高字节。
pub fn to_rgba8_truncating(img: DynamicImage) -> RgbaImage {
    match img {
        DynamicImage::ImageLuma16(_)
        | DynamicImage::ImageLumaA16(_)
        | DynamicImage::ImageRgb16(_)
        | DynamicImage::ImageRgba16(_) => {
            let wide = img.to_rgba16();
            RgbaImage::from_fn(wide.width(), wide.height(), |x, y| {
                Rgba(wide.get_pixel(x, y).0.map(|v| (v >> 8) as u8))
            })
        }
        other => other.to_rgba8(),
    }
}

/// 加载图像并统一转换为 RGBA。
///
/// 图像格式根据文件内容识别，与扩展名无关。
pub fn load_rgba(path: &Path) -> Result<RgbaImage, ExtractError> {
    let reader = ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|e| ExtractError::from_io(path.to_path_buf(), e))?;

    let img = reader
        .decode()
        .map_err(|e| ExtractError::from_image(path.to_path_buf(), e))?;
    let img = to_rgba8_truncating(img);

    debug!(
        "Loaded {} ({}x{})",
        path.display(),
        img.width(),
        img.height()
    );
    Ok(img)
}

/// 从图像文件中提取指定通道的隐藏文本。
///
/// # Errors
///
/// * 路径不存在时返回 [`ExtractError::FileNotFound`]。
/// * 其余任何加载或解码失败返回 [`ExtractError::DecodeFailure`]。
pub fn extract_lsb_data(path: &Path, channel: Channel) -> Result<String, ExtractError> {
    let img = load_rgba(path)?;
    Ok(extract_from_image(&img, channel))
}

/// 只加载一次图像，依次提取多个通道，按给定顺序返回 `(通道, 文本)`。
pub fn scan_channels(
    path: &Path,
    channels: &[Channel],
) -> Result<Vec<(Channel, String)>, ExtractError> {
    let img = load_rgba(path)?;
    Ok(channels
        .iter()
        .map(|&channel| (channel, extract_from_image(&img, channel)))
        .collect())
}
