//! 标点转换类型定义

/// 一次检测命中
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Detection {
    /// 命中条目在映射表中的下标
    pub table_index: usize,
    /// 该字符在文本中首次出现的位置（UTF-8 字节偏移）
    pub byte_offset: usize,
}

/// 转换结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionResult {
    /// 转换后的文本
    pub text: String,
    /// 是否有改动
    pub changed: bool,
    /// 主替换次数
    pub substitutions: usize,
    /// 修正表改写的片段数
    pub fixups: usize,
}

impl ConversionResult {
    /// 创建无修改的结果
    pub fn unchanged(text: String) -> Self {
        Self {
            text,
            changed: false,
            substitutions: 0,
            fixups: 0,
        }
    }
}
