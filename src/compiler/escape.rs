//! Rust字符串字面量转义

/// 字段的转义约定
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EscapeMode {
    /// 反斜杠 + 双引号
    Full,
    /// 仅反斜杠
    BackslashOnly,
}

/// 转义字符串，使其可直接放入 `"..."` 字面量
/// 两步全局替换，顺序固定：先反斜杠，再双引号
pub fn escape(value: &str, mode: EscapeMode) -> String {
    let escaped = value.replace('\\', "\\\\");
    match mode {
        EscapeMode::Full => escaped.replace('"', "\\\""),
        EscapeMode::BackslashOnly => escaped,
    }
}
