/// 每个字符由 8 个连续的最低有效位组成 (高位在前)。
pub const BITS_PER_CHAR: usize = 8;

/// 显式的消息结束标记，对应比特模式 `1111111111111110`。
/// 它横跨两个字符组，因此按 `(高字节, 低字节)` 比较。
pub const EOF_MARKER: u16 = 0xFFFE;

/// 空字符，遇到即停止解码。
pub const NULL_TERMINATOR: u8 = 0;

/// 换行符的字符码。
pub const LINE_FEED: u8 = 10;

/// 可打印 ASCII 字符的范围。
pub const PRINTABLE: std::ops::RangeInclusive<u8> = 32..=126;

/// 已解码消息超过这个长度后，再遇到不可打印字符即视为消息结束。
/// 在此之前的不可打印字符会被静默跳过。
pub const SUBSTANTIAL_MESSAGE_LEN: usize = 10;

/// 报告中分隔线的宽度。
pub const DIVIDER_WIDTH: usize = 60;
